use chrono::NaiveDate;
use hedging_engine::core::overrides::ManualOverrides;
use hedging_engine::core::params::{HedgingParams, SimulationParams};
// Aliased: proptest's `Strategy` trait is glob-imported below.
use hedging_engine::core::strategy::Strategy as HedgeStrategy;
use hedging_engine::core::strategy::{OptionType, StrategyLeg, StrikeMode};
use hedging_engine::math::black_scholes;
use hedging_engine::math::normal::norm_cdf;
use hedging_engine::projection::payoff::build_payoff_curve;
use hedging_engine::projection::results::ResultsProjector;
use hedging_engine::summary::totals;
use proptest::prelude::*;

/// Generate an option side.
fn arb_option_type() -> impl Strategy<Value = OptionType> {
    prop::sample::select(vec![OptionType::Call, OptionType::Put])
}

/// Generate a strategy leg from small, well-conditioned pools.
fn arb_leg() -> impl Strategy<Value = StrategyLeg> {
    (
        arb_option_type(),
        80.0f64..120.0,
        10.0f64..60.0,
        10.0f64..100.0,
    )
        .prop_map(|(option_type, strike, volatility, quantity)| {
            StrategyLeg::new(
                option_type,
                strike,
                StrikeMode::PercentOfSpot,
                volatility,
                quantity,
            )
            .unwrap()
        })
}

/// Generate a strategy of 1..5 legs.
fn arb_strategy() -> impl Strategy<Value = HedgeStrategy> {
    prop::collection::vec(arb_leg(), 1..5)
        .prop_map(|legs| legs.into_iter().collect::<HedgeStrategy>())
}

/// Generate hedging parameters over a sane domain.
fn arb_params() -> impl Strategy<Value = HedgingParams> {
    (1u32..=36, 20.0f64..500.0, 0.0f64..10.0, 1..28u32).prop_map(
        |(months, spot, rate, start_day)| HedgingParams {
            start_date: NaiveDate::from_ymd_opt(2024, 3, start_day).unwrap(),
            months_to_hedge: months,
            interest_rate: rate,
            total_volume: 100.0 * months as f64,
            spot_price: spot,
        },
    )
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Put-call parity.
    //
    // For any valid inputs, C - P = S - K e^{-rt} within numerical
    // tolerance of the CDF approximation.
    // ===================================================================
    #[test]
    fn put_call_parity(
        s in 10.0f64..500.0,
        k in 10.0f64..500.0,
        r in 0.0f64..0.15,
        t in 0.01f64..5.0,
        vol in 0.05f64..0.9,
    ) {
        let call = black_scholes::price(OptionType::Call, s, k, r, t, vol);
        let put = black_scholes::price(OptionType::Put, s, k, r, t, vol);
        let parity = s - k * (-r * t).exp();
        prop_assert!(
            (call - put - parity).abs() < 1e-4 * s.max(k),
            "parity violated: C-P={} vs {}",
            call - put,
            parity
        );
    }

    // ===================================================================
    // INVARIANT 2: Normal CDF symmetry and range.
    // ===================================================================
    #[test]
    fn cdf_symmetric_and_bounded(x in -8.0f64..8.0) {
        let value = norm_cdf(x);
        prop_assert!((0.0..=1.0).contains(&value));
        prop_assert!((norm_cdf(-x) - (1.0 - value)).abs() < 1e-12);
    }

    // ===================================================================
    // INVARIANT 3: Payoff curve shape.
    //
    // Always exactly 101 points spanning spot x [0.5, 1.5], endpoints
    // included, for any strategy and spot.
    // ===================================================================
    #[test]
    fn payoff_curve_shape(strategy in arb_strategy(), spot in 20.0f64..500.0) {
        let curve = build_payoff_curve(&strategy, spot, 0.05);
        prop_assert_eq!(curve.len(), 101);
        prop_assert!((curve[0].underlying_price - 0.5 * spot).abs() < 1e-9);
        prop_assert!((curve[100].underlying_price - 1.5 * spot).abs() < 1e-9);
    }

    // ===================================================================
    // INVARIANT 4: One period per month, constant volume.
    // ===================================================================
    #[test]
    fn projection_period_shape(params in arb_params(), strategy in arb_strategy()) {
        let results = ResultsProjector::project(
            &params,
            &strategy,
            &ManualOverrides::new(),
            &SimulationParams::default(),
        );
        prop_assert_eq!(results.len(), params.months_to_hedge as usize);
        for period in &results {
            prop_assert!((period.monthly_volume - params.monthly_volume()).abs() < 1e-9);
            prop_assert_eq!(period.per_leg_premiums.len(), strategy.len());
            prop_assert!(period.time_to_maturity >= 0.0);
        }
    }

    // ===================================================================
    // INVARIANT 5: The cost identity holds in every period.
    //
    // delta_pnl = unhedged - hedged, and hedged decomposes into the
    // real price plus net option cost.
    // ===================================================================
    #[test]
    fn cost_identity(params in arb_params(), strategy in arb_strategy()) {
        let results = ResultsProjector::project(
            &params,
            &strategy,
            &ManualOverrides::new(),
            &SimulationParams::default(),
        );
        for period in &results {
            prop_assert!(
                (period.delta_pnl - (period.unhedged_cost - period.hedged_cost)).abs() < 1e-6
            );
            let recomposed = period.monthly_volume
                * (period.real_price + period.strategy_premium - period.total_payoff);
            prop_assert!((period.hedged_cost - recomposed).abs() < 1e-6);
        }
    }

    // ===================================================================
    // INVARIANT 6: Totals equal the floating-point sum of the periods.
    // ===================================================================
    #[test]
    fn totals_sum_periods(params in arb_params(), strategy in arb_strategy()) {
        let results = ResultsProjector::project(
            &params,
            &strategy,
            &ManualOverrides::new(),
            &SimulationParams::default(),
        );
        let summary = totals(&results);
        let manual: f64 = results.iter().map(|p| p.delta_pnl).sum();
        prop_assert_eq!(summary.delta_pnl, manual);
    }

    // ===================================================================
    // INVARIANT 7: Projection is deterministic with simulation off.
    // ===================================================================
    #[test]
    fn deterministic_without_simulation(params in arb_params(), strategy in arb_strategy()) {
        let overrides = ManualOverrides::new();
        let sim = SimulationParams::default();
        let a = ResultsProjector::project(&params, &strategy, &overrides, &sim);
        let b = ResultsProjector::project(&params, &strategy, &overrides, &sim);
        prop_assert_eq!(a, b);
    }

    // ===================================================================
    // INVARIANT 8: Legs contribute independently.
    //
    // A two-leg projection's premium and payoff are the sums of the
    // single-leg projections', period by period.
    // ===================================================================
    #[test]
    fn legs_are_additive(params in arb_params(), leg_a in arb_leg(), leg_b in arb_leg()) {
        let overrides = ManualOverrides::new();
        let sim = SimulationParams::default();

        let both: HedgeStrategy = [leg_a.clone(), leg_b.clone()].into_iter().collect();
        let only_a: HedgeStrategy = [leg_a].into_iter().collect();
        let only_b: HedgeStrategy = [leg_b].into_iter().collect();

        let combined = ResultsProjector::project(&params, &both, &overrides, &sim);
        let a = ResultsProjector::project(&params, &only_a, &overrides, &sim);
        let b = ResultsProjector::project(&params, &only_b, &overrides, &sim);

        for i in 0..combined.len() {
            prop_assert!(
                (combined[i].strategy_premium - (a[i].strategy_premium + b[i].strategy_premium))
                    .abs()
                    < 1e-9
            );
            prop_assert!(
                (combined[i].total_payoff - (a[i].total_payoff + b[i].total_payoff)).abs() < 1e-9
            );
        }
    }
}
