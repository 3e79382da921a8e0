//! Implied-volatility root finding.
//!
//! This module provides the two-phase solver that inverts the generalised
//! Black-Scholes value with respect to volatility:
//!
//! - [`ImpliedVolSolver`]: Newton-Raphson on the analytic vega, falling back
//!   to a regula-falsi bracketed search
//! - [`SolverConfig`]: convergence precision and iteration budget
//!
//! ## Configuration
//!
//! [`SolverConfig`] defaults:
//! - `precision`: 1e-5 (absolute price residual)
//! - `max_steps`: 100 (per phase)

pub mod config;
pub mod implied_vol;

pub use config::SolverConfig;
pub use implied_vol::{equity_implied_vol, fx_implied_vol, implied_vol, ImpliedVolSolver};
