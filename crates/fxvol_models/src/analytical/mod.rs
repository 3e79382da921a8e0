//! Analytical pricing formulas for European options.
//!
//! This module provides the generalised Black-Scholes closed form (cost of
//! carry formulation) with analytical Greeks, covering:
//! - Garman-Kohlhagen FX options (`carry = rd - rf`)
//! - Black-Scholes equity options (`carry = rate`)

pub mod generalised_bs;

pub use generalised_bs::{
    equity_option_price, fx_option_price, price, GeneralisedBlackScholes, PricingResult,
};
