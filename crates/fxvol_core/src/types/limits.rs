//! Admissible input bands for pricing and solving.
//!
//! The reference behaviour for out-of-band inputs in many spreadsheet-era
//! pricers is to print a warning and compute anyway. Here the bands are a
//! single immutable value injected into the pricing engine and the solver at
//! construction, and validation is a hard precondition (`DomainError`).

use num_traits::Float;

use super::error::DomainError;

/// Admissible bands for every pricing input.
///
/// All bounds are inclusive: a value exactly at a band edge validates. The
/// volatility band doubles as the clamping range for the implied-volatility
/// solver, which never evaluates the pricing engine outside it.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use fxvol_core::types::DomainLimits;
///
/// let limits: DomainLimits<f64> = DomainLimits::default();
/// assert!(limits.check_volatility(0.005).is_ok());
/// assert!(limits.check_volatility(1.2).is_err());
/// assert_eq!(limits.clamp_volatility(1.2), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainLimits<T: Float> {
    /// Minimum spot price.
    pub min_spot: T,
    /// Maximum spot price.
    pub max_spot: T,
    /// Minimum strike price.
    pub min_strike: T,
    /// Maximum strike price.
    pub max_strike: T,
    /// Minimum time to expiry (years).
    pub min_expiry: T,
    /// Maximum time to expiry (years).
    pub max_expiry: T,
    /// Minimum volatility.
    pub min_volatility: T,
    /// Maximum volatility.
    pub max_volatility: T,
    /// Minimum domestic rate.
    pub min_rate: T,
    /// Maximum domestic rate.
    pub max_rate: T,
    /// Minimum cost of carry.
    pub min_carry: T,
    /// Maximum cost of carry.
    pub max_carry: T,
}

impl<T: Float> Default for DomainLimits<T> {
    /// Default bands.
    ///
    /// Volatility `[0.005, 1.0]` and expiry `[0.001, 100.0]` are the classic
    /// solver bands; spot and strike `[1e-4, 1e6]` and rate/carry
    /// `[-1.0, 1.0]` reject economically nonsensical inputs while admitting
    /// any realistic FX or equity quote.
    fn default() -> Self {
        Self {
            min_spot: T::from(1e-4).unwrap(),
            max_spot: T::from(1e6).unwrap(),
            min_strike: T::from(1e-4).unwrap(),
            max_strike: T::from(1e6).unwrap(),
            min_expiry: T::from(0.001).unwrap(),
            max_expiry: T::from(100.0).unwrap(),
            min_volatility: T::from(0.005).unwrap(),
            max_volatility: T::from(1.0).unwrap(),
            min_rate: T::from(-1.0).unwrap(),
            max_rate: T::from(1.0).unwrap(),
            min_carry: T::from(-1.0).unwrap(),
            max_carry: T::from(1.0).unwrap(),
        }
    }
}

impl<T: Float> DomainLimits<T> {
    /// Checks the spot price against its band.
    ///
    /// # Errors
    /// `DomainError::SpotOutOfRange` if outside `[min_spot, max_spot]`.
    pub fn check_spot(&self, value: T) -> Result<(), DomainError> {
        if value < self.min_spot || value > self.max_spot {
            return Err(DomainError::SpotOutOfRange {
                value: to_f64(value),
                min: to_f64(self.min_spot),
                max: to_f64(self.max_spot),
            });
        }
        Ok(())
    }

    /// Checks the strike price against its band.
    ///
    /// # Errors
    /// `DomainError::StrikeOutOfRange` if outside `[min_strike, max_strike]`.
    pub fn check_strike(&self, value: T) -> Result<(), DomainError> {
        if value < self.min_strike || value > self.max_strike {
            return Err(DomainError::StrikeOutOfRange {
                value: to_f64(value),
                min: to_f64(self.min_strike),
                max: to_f64(self.max_strike),
            });
        }
        Ok(())
    }

    /// Checks the time to expiry against its band.
    ///
    /// # Errors
    /// `DomainError::ExpiryOutOfRange` if outside `[min_expiry, max_expiry]`.
    pub fn check_expiry(&self, value: T) -> Result<(), DomainError> {
        if value < self.min_expiry || value > self.max_expiry {
            return Err(DomainError::ExpiryOutOfRange {
                value: to_f64(value),
                min: to_f64(self.min_expiry),
                max: to_f64(self.max_expiry),
            });
        }
        Ok(())
    }

    /// Checks the volatility against its band.
    ///
    /// # Errors
    /// `DomainError::VolatilityOutOfRange` if outside
    /// `[min_volatility, max_volatility]`.
    pub fn check_volatility(&self, value: T) -> Result<(), DomainError> {
        if value < self.min_volatility || value > self.max_volatility {
            return Err(DomainError::VolatilityOutOfRange {
                value: to_f64(value),
                min: to_f64(self.min_volatility),
                max: to_f64(self.max_volatility),
            });
        }
        Ok(())
    }

    /// Checks the domestic rate against its band.
    ///
    /// # Errors
    /// `DomainError::RateOutOfRange` if outside `[min_rate, max_rate]`.
    pub fn check_rate(&self, value: T) -> Result<(), DomainError> {
        if value < self.min_rate || value > self.max_rate {
            return Err(DomainError::RateOutOfRange {
                value: to_f64(value),
                min: to_f64(self.min_rate),
                max: to_f64(self.max_rate),
            });
        }
        Ok(())
    }

    /// Checks the cost of carry against its band.
    ///
    /// # Errors
    /// `DomainError::CarryOutOfRange` if outside `[min_carry, max_carry]`.
    pub fn check_carry(&self, value: T) -> Result<(), DomainError> {
        if value < self.min_carry || value > self.max_carry {
            return Err(DomainError::CarryOutOfRange {
                value: to_f64(value),
                min: to_f64(self.min_carry),
                max: to_f64(self.max_carry),
            });
        }
        Ok(())
    }

    /// Clamps a volatility into `[min_volatility, max_volatility]`.
    #[inline]
    pub fn clamp_volatility(&self, value: T) -> T {
        value.max(self.min_volatility).min(self.max_volatility)
    }

    /// Returns true when a volatility lies strictly inside the band.
    ///
    /// Used by the bisection phase to decide whether the closed-form seed can
    /// anchor a local bracket or the full band must be searched.
    #[inline]
    pub fn volatility_strictly_inside(&self, value: T) -> bool {
        value > self.min_volatility && value < self.max_volatility
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
