//! # fxvol_models: Garman-Kohlhagen Pricing and Implied Volatility
//!
//! Model layer of the workspace. This crate provides:
//! - Instrument definitions: `OptionKind`, `OptionSpec` (`instruments`)
//! - The generalised Black-Scholes pricing engine with analytical Greeks
//!   (`analytical`)
//! - The two-phase implied-volatility solver (`solver`)
//!
//! ## Design Principles
//!
//! - **Pure evaluation**: a [`PricingResult`] is a pure function of its
//!   [`OptionSpec`] — no caching, no shared state, trivially parallel across
//!   calls
//! - **Injected limits**: admissible input bands are a single immutable
//!   [`DomainLimits`](fxvol_core::types::DomainLimits) value handed to both
//!   the engine and the solver, never a process-wide global
//! - **Generic over `T: Float`** for the same reasons as the foundation crate
//!
//! ## Usage Examples
//!
//! ```rust
//! use fxvol_models::analytical::fx_option_price;
//! use fxvol_models::solver::fx_implied_vol;
//! use fxvol_models::instruments::OptionKind;
//!
//! // Price a USD/DEM-style put: spot 1.56, strike 1.60, six months,
//! // 6% domestic, 8% foreign, 12% volatility.
//! let result =
//!     fx_option_price(OptionKind::Put, 1.56_f64, 1.60, 0.5, 0.06, 0.08, 0.12).unwrap();
//! assert!((result.value - 0.082981).abs() < 1e-6);
//!
//! // Recover the volatility from the price.
//! let vol = fx_implied_vol(OptionKind::Put, 1.56, 1.60, 0.5, 0.06, 0.08, result.value)
//!     .unwrap();
//! assert!((vol - 0.12).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod solver;

pub use analytical::{GeneralisedBlackScholes, PricingResult};
pub use instruments::{OptionKind, OptionSpec};
pub use solver::{ImpliedVolSolver, SolverConfig};
