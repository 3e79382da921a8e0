//! Property tests for the pricing engine and the solver.

use proptest::prelude::*;

use fxvol_core::types::DomainLimits;
use fxvol_models::analytical::price;
use fxvol_models::instruments::{OptionKind, OptionSpec};
use fxvol_models::solver::ImpliedVolSolver;

fn kind_strategy() -> impl Strategy<Value = OptionKind> {
    prop_oneof![Just(OptionKind::Call), Just(OptionKind::Put)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Put-call parity: C - P = S*e^((b-r)T) - K*e^(-rT) for any valid spec.
    #[test]
    fn prop_put_call_parity(
        spot in 50.0f64..150.0,
        moneyness in 0.8f64..1.25,
        expiry in 0.1f64..3.0,
        rate in -0.02f64..0.08,
        rate_foreign in -0.02f64..0.08,
        vol in 0.05f64..0.9,
    ) {
        let limits = DomainLimits::default();
        let strike = spot * moneyness;

        let call = OptionSpec::fx(OptionKind::Call, spot, strike, expiry, rate, rate_foreign)
            .with_volatility(vol);
        let put = OptionSpec { kind: OptionKind::Put, ..call };

        let call_value = price(&call, &limits).unwrap().value;
        let put_value = price(&put, &limits).unwrap().value;

        let carry = rate - rate_foreign;
        let forward_diff =
            spot * ((carry - rate) * expiry).exp() - strike * (-rate * expiry).exp();

        prop_assert!((call_value - put_value - forward_diff).abs() < 1e-9);
    }

    /// The option value is strictly increasing in volatility (vega > 0),
    /// which is what lets the bracketed phase assume a monotonic oracle.
    #[test]
    fn prop_value_monotonic_in_volatility(
        kind in kind_strategy(),
        spot in 50.0f64..150.0,
        moneyness in 0.9f64..1.1,
        expiry in 0.25f64..2.0,
        rate in -0.02f64..0.08,
        low_vol in 0.05f64..0.8,
        bump in 0.01f64..0.2,
    ) {
        let limits = DomainLimits::default();
        let strike = spot * moneyness;
        let high_vol = (low_vol + bump).min(1.0);

        let spec = OptionSpec::equity(kind, spot, strike, expiry, rate);
        let low = price(&spec.with_volatility(low_vol), &limits).unwrap().value;
        let high = price(&spec.with_volatility(high_vol), &limits).unwrap().value;

        prop_assert!(high > low, "value not increasing: {} at σ={}, {} at σ={}", low, low_vol, high, high_vol);
    }

    /// Round trip: pricing at a known volatility and solving the resulting
    /// price recovers that volatility.
    #[test]
    fn prop_price_then_implied_vol_round_trips(
        kind in kind_strategy(),
        spot in 50.0f64..150.0,
        moneyness in 0.9f64..1.1,
        expiry in 0.25f64..2.0,
        rate in -0.02f64..0.08,
        rate_foreign in -0.02f64..0.08,
        vol in 0.1f64..0.6,
    ) {
        let limits = DomainLimits::default();
        let solver = ImpliedVolSolver::with_defaults();
        let strike = spot * moneyness;

        let spec = OptionSpec::fx(kind, spot, strike, expiry, rate, rate_foreign);
        let market = price(&spec.with_volatility(vol), &limits).unwrap().value;
        let solved = solver.solve(&spec, market).unwrap();

        prop_assert!((solved - vol).abs() < 1e-4, "solved {} for true σ = {}", solved, vol);
    }

    /// Whatever the solver returns, it is inside the volatility band.
    #[test]
    fn prop_solver_output_stays_in_band(
        kind in kind_strategy(),
        spot in 50.0f64..150.0,
        moneyness in 0.9f64..1.1,
        expiry in 0.25f64..2.0,
        vol in 0.1f64..0.6,
    ) {
        let limits = DomainLimits::default();
        let solver = ImpliedVolSolver::with_defaults();
        let strike = spot * moneyness;

        let spec = OptionSpec::equity(kind, spot, strike, expiry, 0.03);
        let market = price(&spec.with_volatility(vol), &limits).unwrap().value;

        if let Ok(solved) = solver.solve(&spec, market) {
            prop_assert!(solved >= limits.min_volatility);
            prop_assert!(solved <= limits.max_volatility);
        }
    }
}
