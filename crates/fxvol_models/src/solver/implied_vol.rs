//! Two-phase implied-volatility solver.
//!
//! Given a market price, finds the volatility at which the generalised
//! Black-Scholes value reproduces it. The search runs as a small phase
//! machine:
//!
//! 1. **Seed**: a closed-form rational approximation to the inverse pricing
//!    formula (Manaster-Koehler style) provides the starting point.
//! 2. **Newton-Raphson**: fast quadratic convergence using the analytic vega
//!    from the same pricing call. Aborts to the fallback the moment an update
//!    leaves the admissible volatility band, the error stops improving, or
//!    vega degenerates.
//! 3. **Regula-falsi bisection**: a bracketed secant search around the seed.
//!    Trades speed for guaranteed convergence wherever the value is monotonic
//!    in volatility (vega > 0), which holds on the whole admissible band.
//!
//! The monotonic-improvement guard in the Newton phase is deliberate: the
//! loop hands over to bisection on the very first step whose error is worse
//! than the best seen so far, even with iteration budget left. Poorly
//! conditioned inputs (deep in/out of the money, very short expiry) reach the
//! robust phase after one wasted step instead of oscillating.
//!
//! # Examples
//!
//! ```
//! use fxvol_models::instruments::{OptionKind, OptionSpec};
//! use fxvol_models::solver::ImpliedVolSolver;
//!
//! let solver = ImpliedVolSolver::with_defaults();
//! let spec = OptionSpec::new(OptionKind::Call, 100.0_f64, 100.0, 0.5, 0.03, 0.02);
//! let vol = solver.solve(&spec, 11.10).unwrap();
//! assert!((vol - 0.380595).abs() < 1e-6);
//! ```

use num_traits::Float;

use fxvol_core::types::{DomainError, DomainLimits, SolverError};

use crate::analytical::{GeneralisedBlackScholes, PricingResult};
use crate::instruments::{OptionKind, OptionSpec};

use super::config::SolverConfig;

/// Phase of the implied-volatility search.
///
/// `solve` drives these transitions:
/// Newton -> { Converged | Bisection }, Bisection -> { Converged | Failed }.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase<T: Float> {
    /// Newton-Raphson iteration from the clamped closed-form seed.
    Newton,
    /// Bracketed regula-falsi fallback around the raw seed.
    Bisection,
    /// A phase reached the requested precision.
    Converged(T),
    /// Both phases exhausted; carries the best estimate and its residual.
    Failed { best_vol: T, residual: T },
}

/// Two-phase implied-volatility solver.
///
/// Owns no iteration state between calls: every `solve` works on locals, so
/// one solver value can serve concurrent callers without coordination.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    /// Admissible input bands; also the volatility clamping range.
    limits: DomainLimits<T>,
    /// Convergence precision and iteration budget.
    config: SolverConfig<T>,
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Create a solver with the given limits and configuration.
    pub fn new(limits: DomainLimits<T>, config: SolverConfig<T>) -> Self {
        Self { limits, config }
    }

    /// Create a solver with default limits and configuration.
    pub fn with_defaults() -> Self {
        Self {
            limits: DomainLimits::default(),
            config: SolverConfig::default(),
        }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Returns the admissible bands.
    pub fn limits(&self) -> &DomainLimits<T> {
        &self.limits
    }

    /// Solves for the volatility that reproduces `market_price`.
    ///
    /// Any volatility already on `spec` is ignored; the solver never
    /// evaluates the pricing engine outside the admissible volatility band.
    ///
    /// # Arguments
    ///
    /// * `spec` - Option inputs (volatility not required)
    /// * `market_price` - Observed option price to invert
    ///
    /// # Returns
    ///
    /// The implied volatility, always within
    /// `[limits.min_volatility, limits.max_volatility]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::Domain` - an input lies outside its band
    /// * `SolverError::NotConverged` - neither phase reduced the price
    ///   residual below `config.precision` within `config.max_steps`;
    ///   carries the best estimate, its residual, and the requested precision
    pub fn solve(&self, spec: &OptionSpec<T>, market_price: T) -> Result<T, SolverError> {
        self.validate_quote(spec)?;

        let mut phase = Phase::Newton;
        loop {
            phase = match phase {
                Phase::Newton => self.newton(spec, market_price)?,
                Phase::Bisection => self.bisection(spec, market_price)?,
                Phase::Converged(vol) => return Ok(vol),
                Phase::Failed { best_vol, residual } => {
                    return Err(SolverError::NotConverged {
                        best_vol: to_f64(best_vol),
                        residual: to_f64(residual),
                        precision: to_f64(self.config.precision),
                    })
                }
            };
        }
    }

    /// Closed-form seed volatility (Manaster-Koehler style rational
    /// approximation to the inverse pricing formula).
    ///
    /// Returns the raw estimate: the Newton phase clamps it into the band,
    /// the bisection phase inspects the raw value to choose its bracket.
    fn seed_volatility(&self, spec: &OptionSpec<T>, market_price: T) -> T {
        let two = T::from(2.0).unwrap();
        let pi = T::from(std::f64::consts::PI).unwrap();

        let ebrt = ((spec.carry - spec.rate) * spec.expiry).exp();
        let ert = (-spec.rate * spec.expiry).exp();

        let a = (two * pi).sqrt() / (spec.spot * ebrt + spec.strike * ert);
        let payoff = match spec.kind {
            OptionKind::Call => spec.spot * ebrt - spec.strike * ert,
            OptionKind::Put => spec.strike * ert - spec.spot * ebrt,
        };
        let beta = market_price - payoff / two;
        let gamma = payoff * payoff / pi;

        a * (beta + (beta * beta + gamma).sqrt()) / spec.expiry.sqrt()
    }

    /// Newton-Raphson phase.
    ///
    /// Loop guard: continue only while `precision <= diff <= min_diff`, i.e.
    /// stop on success, and abort to bisection on the first strictly
    /// non-improving step. An update that leaves the volatility band abandons
    /// the phase immediately — it is not clamped and retried.
    fn newton(&self, spec: &OptionSpec<T>, market_price: T) -> Result<Phase<T>, DomainError> {
        let vega_floor = T::from(1e-30).unwrap();

        let mut vol = self
            .limits
            .clamp_volatility(self.seed_volatility(spec, market_price));
        let mut result = self.price_at(spec, vol)?;
        let mut diff = (market_price - result.value).abs();
        let mut min_diff = diff;
        let mut steps = 0;

        while diff >= self.config.precision && diff <= min_diff && steps < self.config.max_steps {
            if result.vega.abs() < vega_floor {
                return Ok(Phase::Bisection);
            }

            vol = vol - (result.value - market_price) / result.vega;
            if !vol.is_finite()
                || vol < self.limits.min_volatility
                || vol > self.limits.max_volatility
            {
                return Ok(Phase::Bisection);
            }

            result = self.price_at(spec, vol)?;
            diff = (market_price - result.value).abs();
            min_diff = min_diff.min(diff);
            steps += 1;
        }

        if diff < self.config.precision {
            Ok(Phase::Converged(vol))
        } else {
            Ok(Phase::Bisection)
        }
    }

    /// Regula-falsi fallback phase.
    ///
    /// Brackets around the raw seed (`[0.5·v0, 1.5·v0]` clamped into the
    /// band) or, when the seed sits at or outside the band, searches the full
    /// band from its midpoint. Each step interpolates linearly between the
    /// bracket prices rather than halving, then clamps the interpolant.
    fn bisection(&self, spec: &OptionSpec<T>, market_price: T) -> Result<Phase<T>, DomainError> {
        let two = T::from(2.0).unwrap();
        let half = T::from(0.5).unwrap();
        let three_halves = T::from(1.5).unwrap();

        let seed = self.seed_volatility(spec, market_price);
        let (mut v_low, mut v_high, mut v_mid);
        if self.limits.volatility_strictly_inside(seed) {
            v_low = self.limits.clamp_volatility(half * seed);
            v_high = self.limits.clamp_volatility(three_halves * seed);
            v_mid = seed;
        } else {
            v_low = self.limits.min_volatility;
            v_high = self.limits.max_volatility;
            v_mid = (v_low + v_high) / two;
        }

        let mut value_mid = self.price_at(spec, v_mid)?.value;
        let mut diff = (market_price - value_mid).abs();
        if diff <= self.config.precision {
            return Ok(Phase::Converged(v_mid));
        }

        for _step in 0..self.config.max_steps {
            if value_mid < market_price {
                v_low = v_mid;
            } else {
                v_high = v_mid;
            }

            let value_low = self.price_at(spec, v_low)?.value;
            let value_high = self.price_at(spec, v_high)?.value;

            // A flat or collapsed bracket cannot be interpolated; surfaced
            // as non-convergence instead of a division by zero.
            let denominator = value_high - value_low;
            if denominator == T::zero() {
                return Ok(Phase::Failed {
                    best_vol: v_mid,
                    residual: diff,
                });
            }

            let interpolant = v_low + (market_price - value_low) * (v_high - v_low) / denominator;
            if !interpolant.is_finite() {
                return Ok(Phase::Failed {
                    best_vol: v_mid,
                    residual: diff,
                });
            }

            v_mid = self.limits.clamp_volatility(interpolant);
            value_mid = self.price_at(spec, v_mid)?.value;
            diff = (market_price - value_mid).abs();

            if diff <= self.config.precision {
                return Ok(Phase::Converged(v_mid));
            }
        }

        Ok(Phase::Failed {
            best_vol: v_mid,
            residual: diff,
        })
    }

    /// Evaluates the pricing engine at a trial volatility.
    fn price_at(&self, spec: &OptionSpec<T>, vol: T) -> Result<PricingResult<T>, DomainError> {
        let model = GeneralisedBlackScholes::new(&spec.with_volatility(vol), &self.limits)?;
        Ok(model.evaluate())
    }

    /// Validates every input except the volatility being solved for.
    fn validate_quote(&self, spec: &OptionSpec<T>) -> Result<(), DomainError> {
        self.limits.check_spot(spec.spot)?;
        self.limits.check_strike(spec.strike)?;
        self.limits.check_expiry(spec.expiry)?;
        self.limits.check_rate(spec.rate)?;
        self.limits.check_carry(spec.carry)?;
        Ok(())
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Solves for implied volatility with default limits and configuration.
///
/// # Arguments
///
/// * `spec` - Option inputs (volatility not required)
/// * `market_price` - Observed option price
///
/// # Errors
///
/// See [`ImpliedVolSolver::solve`].
pub fn implied_vol<T: Float>(spec: &OptionSpec<T>, market_price: T) -> Result<T, SolverError> {
    ImpliedVolSolver::with_defaults().solve(spec, market_price)
}

/// Solves for the implied volatility of an equity option (`carry = rate`).
///
/// # Arguments
///
/// * `kind` - Call or Put
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `expiry` - Time to expiry in years
/// * `rate` - Risk-free rate
/// * `market_price` - Observed option price
///
/// # Errors
///
/// See [`ImpliedVolSolver::solve`].
pub fn equity_implied_vol<T: Float>(
    kind: OptionKind,
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    market_price: T,
) -> Result<T, SolverError> {
    let spec = OptionSpec::equity(kind, spot, strike, expiry, rate);
    implied_vol(&spec, market_price)
}

/// Solves for the implied volatility of an FX option (`carry = rd - rf`).
///
/// # Arguments
///
/// * `kind` - Call or Put
/// * `spot` - Spot exchange rate (domestic per foreign)
/// * `strike` - Strike price
/// * `expiry` - Time to expiry in years
/// * `rate_domestic` - Domestic risk-free rate
/// * `rate_foreign` - Foreign risk-free rate
/// * `market_price` - Observed option price
///
/// # Errors
///
/// See [`ImpliedVolSolver::solve`].
pub fn fx_implied_vol<T: Float>(
    kind: OptionKind,
    spot: T,
    strike: T,
    expiry: T,
    rate_domestic: T,
    rate_foreign: T,
    market_price: T,
) -> Result<T, SolverError> {
    let spec = OptionSpec::fx(kind, spot, strike, expiry, rate_domestic, rate_foreign);
    implied_vol(&spec, market_price)
}
