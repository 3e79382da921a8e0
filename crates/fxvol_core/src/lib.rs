//! # fxvol_core: Numerical Foundation for FX Option Pricing
//!
//! ## Foundation Layer Role
//!
//! fxvol_core is the bottom layer of the two-crate workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Admissible input bands for pricing and solving (`types::limits`)
//! - Error types: `DomainError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependency on the model crate, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use fxvol_core::math::distributions::{norm_cdf, norm_pdf};
//! use fxvol_core::types::DomainLimits;
//!
//! let limits: DomainLimits<f64> = DomainLimits::default();
//! assert!(limits.check_volatility(0.25).is_ok());
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
//! assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{DomainError, DomainLimits, SolverError};
