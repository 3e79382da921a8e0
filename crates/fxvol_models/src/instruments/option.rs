//! European option instrument definitions.
//!
//! An [`OptionSpec`] carries the market inputs of one European option under
//! the generalised Black-Scholes model: spot, strike, time to expiry, the
//! domestic rate, and the cost of carry `b`. The carry term is what
//! specialises the model:
//!
//! - **FX (Garman-Kohlhagen)**: `b = rate_domestic - rate_foreign`
//! - **Equity (Black-Scholes)**: `b = rate`
//!
//! Volatility is optional on the spec because the implied-volatility solver
//! consumes specs without one.
//!
//! # Examples
//!
//! ```
//! use fxvol_models::instruments::{OptionKind, OptionSpec};
//!
//! // EUR/USD call, 1.10 spot, 1.12 strike, one year, 3% domestic, 1% foreign
//! let fx = OptionSpec::fx(OptionKind::Call, 1.10_f64, 1.12, 1.0, 0.03, 0.01);
//! assert!((fx.carry - 0.02).abs() < 1e-12);
//! assert!(fx.volatility.is_none());
//!
//! let priced = fx.with_volatility(0.15);
//! assert_eq!(priced.volatility, Some(0.15));
//! ```

use num_traits::Float;

/// Option exercise direction (Call or Put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns whether this is a call option.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put option.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// Market inputs of one European option, immutable once constructed.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec<T: Float> {
    /// Call or Put.
    pub kind: OptionKind,
    /// Spot (or forward) price of the underlying.
    pub spot: T,
    /// Strike price.
    pub strike: T,
    /// Time to expiry in years.
    pub expiry: T,
    /// Domestic risk-free rate (continuous compounding).
    pub rate: T,
    /// Cost of carry `b`.
    pub carry: T,
    /// Annualised volatility; `None` while being solved for.
    pub volatility: Option<T>,
}

impl<T: Float> OptionSpec<T> {
    /// Creates a spec with an explicit carry term.
    ///
    /// Prefer [`OptionSpec::equity`] or [`OptionSpec::fx`] unless the carry
    /// comes from somewhere else (e.g. a commodity convenience yield).
    pub fn new(kind: OptionKind, spot: T, strike: T, expiry: T, rate: T, carry: T) -> Self {
        Self {
            kind,
            spot,
            strike,
            expiry,
            rate,
            carry,
            volatility: None,
        }
    }

    /// Creates an equity option spec: `carry = rate`.
    pub fn equity(kind: OptionKind, spot: T, strike: T, expiry: T, rate: T) -> Self {
        Self::new(kind, spot, strike, expiry, rate, rate)
    }

    /// Creates an FX option spec: `carry = rate_domestic - rate_foreign`.
    ///
    /// # Arguments
    ///
    /// * `kind` - Call or Put
    /// * `spot` - Spot exchange rate (domestic per foreign)
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiry in years
    /// * `rate_domestic` - Domestic risk-free rate
    /// * `rate_foreign` - Foreign risk-free rate
    pub fn fx(
        kind: OptionKind,
        spot: T,
        strike: T,
        expiry: T,
        rate_domestic: T,
        rate_foreign: T,
    ) -> Self {
        Self::new(
            kind,
            spot,
            strike,
            expiry,
            rate_domestic,
            rate_domestic - rate_foreign,
        )
    }

    /// Returns a copy of the spec with the given volatility.
    #[inline]
    pub fn with_volatility(mut self, volatility: T) -> Self {
        self.volatility = Some(volatility);
        self
    }
}
