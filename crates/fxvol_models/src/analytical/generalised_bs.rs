//! Generalised Black-Scholes model for European options.
//!
//! The cost-of-carry formulation prices both FX options (Garman-Kohlhagen,
//! `b = rd - rf`) and equity options (`b = r`) from one closed form:
//!
//! ## Call Option Price
//! C = S * e^((b-r)T) * N(d1) - K * e^(-rT) * N(d2)
//!
//! ## Put Option Price
//! P = K * e^(-rT) * N(-d2) - S * e^((b-r)T) * N(-d1)
//!
//! where:
//! d1 = [ln(S/K) + (b + σ²/2) * T] / (σ * √T)
//! d2 = d1 - σ * √T
//!
//! Greeks are reported raw and annualised: vega per unit of volatility and
//! theta per year, with no per-1% or per-day rescaling. The solver relies on
//! vega being the exact derivative of the value with respect to volatility.
//!
//! # Examples
//!
//! ```
//! use fxvol_core::types::DomainLimits;
//! use fxvol_models::analytical::GeneralisedBlackScholes;
//! use fxvol_models::instruments::{OptionKind, OptionSpec};
//!
//! let spec = OptionSpec::fx(OptionKind::Put, 1.56_f64, 1.60, 0.5, 0.06, 0.08)
//!     .with_volatility(0.12);
//! let model = GeneralisedBlackScholes::new(&spec, &DomainLimits::default()).unwrap();
//!
//! assert!((model.value() - 0.082981).abs() < 1e-6);
//! assert!((model.delta() - (-0.620404)).abs() < 1e-6);
//! assert!((model.vega() - 0.394282).abs() < 1e-6);
//! ```

use num_traits::Float;

use fxvol_core::math::distributions::{norm_cdf, norm_pdf};
use fxvol_core::types::{DomainError, DomainLimits};

use crate::instruments::{OptionKind, OptionSpec};

/// Option value and the five sensitivities, produced fresh per evaluation.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult<T: Float> {
    /// Option value in domestic currency.
    pub value: T,
    /// Sensitivity to spot.
    pub delta: T,
    /// Rate of change of delta with respect to spot.
    pub gamma: T,
    /// Sensitivity to the passage of time (per year).
    pub theta: T,
    /// Sensitivity to volatility (per unit of volatility).
    pub vega: T,
    /// Sensitivity to the domestic rate.
    pub rho: T,
}

/// Generalised Black-Scholes model for European option pricing.
///
/// Validates its inputs against the injected [`DomainLimits`] at
/// construction (a hard precondition — out-of-band inputs price nothing) and
/// pre-computes d1, d2, and the discount factors.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone)]
pub struct GeneralisedBlackScholes<T: Float> {
    kind: OptionKind,
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    carry: T,
    volatility: T,
    /// d1 term from the formula.
    d1: T,
    /// d2 term from the formula.
    d2: T,
    /// √T
    sqrt_t: T,
    /// e^(-r * T)
    df_rate: T,
    /// e^((b - r) * T)
    df_carry: T,
}

impl<T: Float> GeneralisedBlackScholes<T> {
    /// Creates a new model instance from a fully specified option.
    ///
    /// # Arguments
    ///
    /// * `spec` - Option inputs; `spec.volatility` must be `Some`
    /// * `limits` - Admissible bands checked before anything is computed
    ///
    /// # Errors
    ///
    /// `DomainError::MissingVolatility` if the spec carries no volatility,
    /// or the matching `*OutOfRange` variant for the first input outside its
    /// band.
    pub fn new(spec: &OptionSpec<T>, limits: &DomainLimits<T>) -> Result<Self, DomainError> {
        let volatility = spec.volatility.ok_or(DomainError::MissingVolatility)?;

        limits.check_spot(spec.spot)?;
        limits.check_strike(spec.strike)?;
        limits.check_expiry(spec.expiry)?;
        limits.check_volatility(volatility)?;
        limits.check_rate(spec.rate)?;
        limits.check_carry(spec.carry)?;

        let sqrt_t = spec.expiry.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;

        // d1 = [ln(S/K) + (b + σ²/2) * T] / (σ * √T)
        let log_sk = (spec.spot / spec.strike).ln();
        let drift = spec.carry + volatility * volatility / T::from(2.0).unwrap();
        let d1 = (log_sk + drift * spec.expiry) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let df_rate = (-spec.rate * spec.expiry).exp();
        let df_carry = ((spec.carry - spec.rate) * spec.expiry).exp();

        Ok(Self {
            kind: spec.kind,
            spot: spec.spot,
            strike: spec.strike,
            expiry: spec.expiry,
            rate: spec.rate,
            carry: spec.carry,
            volatility,
            d1,
            d2,
            sqrt_t,
            df_rate,
            df_carry,
        })
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Computes the option value.
    pub fn value(&self) -> T {
        match self.kind {
            OptionKind::Call => {
                // C = S * e^((b-r)T) * N(d1) - K * e^(-rT) * N(d2)
                self.spot * self.df_carry * norm_cdf(self.d1)
                    - self.strike * self.df_rate * norm_cdf(self.d2)
            }
            OptionKind::Put => {
                // P = K * e^(-rT) * N(-d2) - S * e^((b-r)T) * N(-d1)
                self.strike * self.df_rate * norm_cdf(-self.d2)
                    - self.spot * self.df_carry * norm_cdf(-self.d1)
            }
        }
    }

    /// Computes Delta, the sensitivity of the value to spot.
    pub fn delta(&self) -> T {
        match self.kind {
            OptionKind::Call => self.df_carry * norm_cdf(self.d1),
            OptionKind::Put => -self.df_carry * norm_cdf(-self.d1),
        }
    }

    /// Computes Gamma, the rate of change of delta with respect to spot.
    ///
    /// Identical for calls and puts.
    pub fn gamma(&self) -> T {
        self.df_carry * norm_pdf(self.d1) / (self.spot * self.volatility * self.sqrt_t)
    }

    /// Computes Theta, the sensitivity to time decay (per year).
    pub fn theta(&self) -> T {
        let two = T::from(2.0).unwrap();
        let decay =
            -self.spot * self.volatility * self.df_carry * norm_pdf(self.d1) / (two * self.sqrt_t);
        let carry_drift = (self.carry - self.rate) * self.spot * self.df_carry;
        let funding = self.rate * self.strike * self.df_rate;

        match self.kind {
            OptionKind::Call => {
                decay - carry_drift * norm_cdf(self.d1) - funding * norm_cdf(self.d2)
            }
            OptionKind::Put => {
                decay + carry_drift * norm_cdf(-self.d1) + funding * norm_cdf(-self.d2)
            }
        }
    }

    /// Computes Vega, the sensitivity to volatility.
    ///
    /// Identical for calls and puts, and strictly positive for in-band
    /// inputs — this is the analytic derivative the Newton-Raphson phase of
    /// the solver divides by.
    pub fn vega(&self) -> T {
        self.spot * self.df_carry * self.sqrt_t * norm_pdf(self.d1)
    }

    /// Computes Rho, the sensitivity to the domestic rate.
    pub fn rho(&self) -> T {
        let discounted_strike = self.strike * self.expiry * self.df_rate;
        match self.kind {
            OptionKind::Call => discounted_strike * norm_cdf(self.d2),
            OptionKind::Put => -discounted_strike * norm_cdf(-self.d2),
        }
    }

    /// Evaluates the value and all five Greeks in one pass.
    pub fn evaluate(&self) -> PricingResult<T> {
        PricingResult {
            value: self.value(),
            delta: self.delta(),
            gamma: self.gamma(),
            theta: self.theta(),
            vega: self.vega(),
            rho: self.rho(),
        }
    }
}

/// Prices an option against the given limits.
///
/// # Arguments
///
/// * `spec` - Option inputs with volatility set
/// * `limits` - Admissible bands
///
/// # Errors
///
/// See [`GeneralisedBlackScholes::new`].
pub fn price<T: Float>(
    spec: &OptionSpec<T>,
    limits: &DomainLimits<T>,
) -> Result<PricingResult<T>, DomainError> {
    Ok(GeneralisedBlackScholes::new(spec, limits)?.evaluate())
}

/// Prices an equity option (`carry = rate`) against default limits.
///
/// # Arguments
///
/// * `kind` - Call or Put
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `expiry` - Time to expiry in years
/// * `rate` - Risk-free rate
/// * `volatility` - Annualised volatility
///
/// # Errors
///
/// `DomainError` if any input lies outside the default bands.
pub fn equity_option_price<T: Float>(
    kind: OptionKind,
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
) -> Result<PricingResult<T>, DomainError> {
    let spec = OptionSpec::equity(kind, spot, strike, expiry, rate).with_volatility(volatility);
    price(&spec, &DomainLimits::default())
}

/// Prices an FX option (`carry = rd - rf`) against default limits.
///
/// # Arguments
///
/// * `kind` - Call or Put
/// * `spot` - Spot exchange rate (domestic per foreign)
/// * `strike` - Strike price
/// * `expiry` - Time to expiry in years
/// * `rate_domestic` - Domestic risk-free rate
/// * `rate_foreign` - Foreign risk-free rate
/// * `volatility` - Annualised volatility
///
/// # Errors
///
/// `DomainError` if any input lies outside the default bands.
pub fn fx_option_price<T: Float>(
    kind: OptionKind,
    spot: T,
    strike: T,
    expiry: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
) -> Result<PricingResult<T>, DomainError> {
    let spec =
        OptionSpec::fx(kind, spot, strike, expiry, rate_domestic, rate_foreign).with_volatility(volatility);
    price(&spec, &DomainLimits::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fx_put_spec() -> OptionSpec<f64> {
        OptionSpec::fx(OptionKind::Put, 1.56, 1.60, 0.5, 0.06, 0.08).with_volatility(0.12)
    }

    fn model(spec: &OptionSpec<f64>) -> GeneralisedBlackScholes<f64> {
        GeneralisedBlackScholes::new(spec, &DomainLimits::default()).unwrap()
    }

    #[test]
    fn test_d2_is_d1_minus_vol_sqrt_t() {
        let m = model(&fx_put_spec());
        assert_relative_eq!(m.d1() - m.d2(), 0.12 * 0.5_f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_fx_put_reference_values() {
        // USD/DEM-style put: spot 1.56, strike 1.60, 6m, rd 6%, rf 8%, σ 12%
        let m = model(&fx_put_spec());
        assert_relative_eq!(m.value(), 0.082981, epsilon = 1e-6);
        assert_relative_eq!(m.delta(), -0.620404, epsilon = 1e-6);
        assert_relative_eq!(m.vega(), 0.394282, epsilon = 1e-6);
    }

    #[test]
    fn test_fx_call_reference_values() {
        let spec = OptionSpec::fx(OptionKind::Call, 0.7, 0.72, 0.5, 0.0575, 0.0625)
            .with_volatility(0.2756);
        let m = model(&spec);
        assert_relative_eq!(m.value(), 0.043577, epsilon = 1e-6);
        assert_relative_eq!(m.rho(), 0.139719, epsilon = 1e-6);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S*e^((b-r)T) - K*e^(-rT)
        let put = fx_put_spec();
        let call = OptionSpec { kind: OptionKind::Call, ..put };

        let call_value = model(&call).value();
        let put_value = model(&put).value();

        let forward_diff = put.spot * ((put.carry - put.rate) * put.expiry).exp()
            - put.strike * (-put.rate * put.expiry).exp();
        assert_relative_eq!(call_value - put_value, forward_diff, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_relationship() {
        // Δ_put - Δ_call = -e^((b-r)T)
        let put = fx_put_spec();
        let call = OptionSpec { kind: OptionKind::Call, ..put };

        let df_carry = ((put.carry - put.rate) * put.expiry).exp();
        assert_relative_eq!(
            model(&put).delta() - model(&call).delta(),
            -df_carry,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_gamma_and_vega_shared_between_kinds() {
        let put = fx_put_spec();
        let call = OptionSpec { kind: OptionKind::Call, ..put };

        assert_relative_eq!(model(&put).gamma(), model(&call).gamma(), epsilon = 1e-14);
        assert_relative_eq!(model(&put).vega(), model(&call).vega(), epsilon = 1e-14);
    }

    #[test]
    fn test_value_monotonic_in_volatility() {
        let base = OptionSpec::equity(OptionKind::Call, 100.0, 110.0, 0.75, 0.03);
        let mut previous = model(&base.with_volatility(0.05)).value();
        for i in 1..=19 {
            let vol = 0.05 * (1 + i) as f64;
            if vol > 1.0 {
                break;
            }
            let current = model(&base.with_volatility(vol)).value();
            assert!(current > previous, "value not increasing at σ = {}", vol);
            previous = current;
        }
    }

    #[test]
    fn test_vega_positive() {
        for (spot, strike) in [(80.0, 100.0), (100.0, 100.0), (125.0, 100.0)] {
            let spec =
                OptionSpec::equity(OptionKind::Call, spot, strike, 0.5, 0.03).with_volatility(0.2);
            assert!(model(&spec).vega() > 0.0);
        }
    }

    #[test]
    fn test_evaluate_bundles_all_greeks() {
        let m = model(&fx_put_spec());
        let result = m.evaluate();
        assert_eq!(result.value, m.value());
        assert_eq!(result.delta, m.delta());
        assert_eq!(result.gamma, m.gamma());
        assert_eq!(result.theta, m.theta());
        assert_eq!(result.vega, m.vega());
        assert_eq!(result.rho, m.rho());
        assert!(result.value.is_finite());
        assert!(result.theta.is_finite());
    }

    #[test]
    fn test_expiry_band_edges_price_cleanly() {
        let limits = DomainLimits::default();
        for expiry in [0.001_f64, 100.0] {
            let spec = OptionSpec::equity(OptionKind::Call, 100.0, 100.0, expiry, 0.03)
                .with_volatility(0.2);
            let result = GeneralisedBlackScholes::new(&spec, &limits)
                .unwrap()
                .evaluate();
            assert!(result.value.is_finite());
            assert!(result.vega.is_finite());
        }
    }

    #[test]
    fn test_missing_volatility_rejected() {
        let spec = OptionSpec::equity(OptionKind::Call, 100.0, 100.0, 0.5, 0.03);
        let err = GeneralisedBlackScholes::new(&spec, &DomainLimits::default()).unwrap_err();
        assert_eq!(err, DomainError::MissingVolatility);
    }

    #[test]
    fn test_out_of_band_inputs_rejected() {
        let limits = DomainLimits::default();

        let bad_spot = OptionSpec::equity(OptionKind::Call, 0.0, 100.0, 0.5, 0.03)
            .with_volatility(0.2);
        assert!(matches!(
            GeneralisedBlackScholes::new(&bad_spot, &limits),
            Err(DomainError::SpotOutOfRange { .. })
        ));

        let bad_expiry = OptionSpec::equity(OptionKind::Call, 100.0, 100.0, 0.0, 0.03)
            .with_volatility(0.2);
        assert!(matches!(
            GeneralisedBlackScholes::new(&bad_expiry, &limits),
            Err(DomainError::ExpiryOutOfRange { .. })
        ));

        let bad_vol = OptionSpec::equity(OptionKind::Call, 100.0, 100.0, 0.5, 0.03)
            .with_volatility(1.5);
        assert!(matches!(
            GeneralisedBlackScholes::new(&bad_vol, &limits),
            Err(DomainError::VolatilityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_convenience_functions_match_engine() {
        let via_fn =
            fx_option_price(OptionKind::Put, 1.56, 1.60, 0.5, 0.06, 0.08, 0.12).unwrap();
        let via_model = model(&fx_put_spec()).evaluate();
        assert_eq!(via_fn, via_model);

        let equity = equity_option_price(OptionKind::Put, 100.0, 100.0, 1.0, 0.02, 0.25).unwrap();
        assert!(equity.value > 0.0);
        assert!(equity.delta < 0.0);
    }
}
