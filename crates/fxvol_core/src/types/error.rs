//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: an input lies outside its admissible band
//! - `SolverError`: the implied-volatility solver failed to converge

use thiserror::Error;

/// Domain validation errors.
///
/// Raised when a pricing input lies outside the band configured in
/// [`DomainLimits`](crate::types::DomainLimits). Validation is a hard
/// precondition: nothing is priced with an out-of-band input.
///
/// # Variants
/// - `SpotOutOfRange`: spot outside the admissible band
/// - `StrikeOutOfRange`: strike outside the admissible band
/// - `ExpiryOutOfRange`: time to expiry outside the admissible band
/// - `VolatilityOutOfRange`: volatility outside the admissible band
/// - `RateOutOfRange`: domestic rate outside the admissible band
/// - `CarryOutOfRange`: cost of carry outside the admissible band
/// - `MissingVolatility`: volatility required but not supplied
///
/// # Examples
/// ```
/// use fxvol_core::types::DomainError;
///
/// let err = DomainError::VolatilityOutOfRange { value: -0.2, min: 0.005, max: 1.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Spot price outside the admissible band.
    #[error("spot {value} outside [{min}, {max}]")]
    SpotOutOfRange {
        /// The rejected spot value
        value: f64,
        /// Lower band edge
        min: f64,
        /// Upper band edge
        max: f64,
    },

    /// Strike price outside the admissible band.
    #[error("strike {value} outside [{min}, {max}]")]
    StrikeOutOfRange {
        /// The rejected strike value
        value: f64,
        /// Lower band edge
        min: f64,
        /// Upper band edge
        max: f64,
    },

    /// Time to expiry outside the admissible band.
    #[error("expiry {value} outside [{min}, {max}]")]
    ExpiryOutOfRange {
        /// The rejected expiry value (years)
        value: f64,
        /// Lower band edge
        min: f64,
        /// Upper band edge
        max: f64,
    },

    /// Volatility outside the admissible band.
    #[error("volatility {value} outside [{min}, {max}]")]
    VolatilityOutOfRange {
        /// The rejected volatility value
        value: f64,
        /// Lower band edge
        min: f64,
        /// Upper band edge
        max: f64,
    },

    /// Domestic rate outside the admissible band.
    #[error("rate {value} outside [{min}, {max}]")]
    RateOutOfRange {
        /// The rejected rate value
        value: f64,
        /// Lower band edge
        min: f64,
        /// Upper band edge
        max: f64,
    },

    /// Cost of carry outside the admissible band.
    #[error("carry {value} outside [{min}, {max}]")]
    CarryOutOfRange {
        /// The rejected carry value
        value: f64,
        /// Lower band edge
        min: f64,
        /// Upper band edge
        max: f64,
    },

    /// Volatility required but not supplied on the option spec.
    #[error("volatility required for pricing but not supplied")]
    MissingVolatility,
}

/// Implied-volatility solver errors.
///
/// Provides structured error handling for the two-phase root finder with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `NotConverged`: neither Newton-Raphson nor bisection reduced the price
///   residual below the requested precision; carries the best estimate so the
///   caller can decide whether to accept an approximate answer
/// - `Domain`: an input was rejected before any iteration ran
///
/// # Examples
/// ```
/// use fxvol_core::types::SolverError;
///
/// let err = SolverError::NotConverged {
///     best_vol: 1.0,
///     residual: 0.42,
///     precision: 1e-5,
/// };
/// assert!(format!("{}", err).contains("residual"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Failed to converge within the iteration budget of both phases.
    #[error(
        "failed to converge: best volatility {best_vol}, residual {residual} > precision {precision}"
    )]
    NotConverged {
        /// Best volatility estimate found across both phases
        best_vol: f64,
        /// Absolute price residual at the best estimate
        residual: f64,
        /// The requested convergence precision
        precision: f64,
    },

    /// An input was rejected by domain validation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
