//! Applying a stress scenario to a calculator state.

use crate::core::period::PeriodKey;
use crate::core::state::HedgeState;
use crate::projection::price_path::{elapsed_years, period_date};
use crate::scenario::catalog::{CurveShift, ScenarioCatalog};

/// Apply a stress scenario and re-project.
///
/// Pure transform: the input state is never mutated, and callers compare
/// scenarios by applying each one to the same base snapshot. An unknown
/// key returns the state unchanged (a no-op, not an error).
///
/// # Algorithm
///
/// 1. Shock the spot: `stressed = spot * (1 + price_shock)`.
/// 2. Copy the scenario's volatility and drift into the simulation
///    parameters. Simulation stays on unless the scenario defines a
///    real-price curve, which replaces the stochastic path outright.
/// 3. A `ForwardBasis` shift clears the manual forward curve and, when
///    the basis is non-zero, writes `stressed * e^(basis * i)` for every
///    period `i`.
/// 4. A `RealBasis` shift clears the manual real-price curve, writes the
///    shifted curve `stressed * e^(basis * i)` there, and pins the
///    forward curve to pure carry from the stressed spot. The two curves
///    decouple: forwards reflect financing only, real prices the shock.
/// 5. Re-project results and payoff from the stressed inputs.
pub fn apply_scenario(key: &str, catalog: &ScenarioCatalog, state: &HedgeState) -> HedgeState {
    let Some(scenario) = catalog.get(key) else {
        log::warn!("unknown scenario key {:?}, leaving state unchanged", key);
        return state.clone();
    };

    let mut next = state.clone();
    let stressed_spot = state.params.spot_price * (1.0 + scenario.price_shock);
    next.params.spot_price = stressed_spot;

    next.real_price_params.use_simulation =
        !matches!(scenario.curve_shift, CurveShift::RealBasis(_));
    next.real_price_params.volatility = scenario.volatility;
    next.real_price_params.drift = scenario.drift;

    match scenario.curve_shift {
        CurveShift::None => {}
        CurveShift::ForwardBasis(basis) => {
            next.overrides.clear_forwards();
            if basis != 0.0 {
                for index in 0..next.params.months_to_hedge {
                    let date = period_date(next.params.start_date, index);
                    next.overrides.set_forward(
                        PeriodKey::from_date(date),
                        stressed_spot * (basis * index as f64).exp(),
                    );
                }
            }
        }
        CurveShift::RealBasis(basis) => {
            next.overrides.clear_real_prices();
            if basis != 0.0 {
                let rate = next.params.rate_fraction();
                for index in 0..next.params.months_to_hedge {
                    let date = period_date(next.params.start_date, index);
                    let period_key = PeriodKey::from_date(date);
                    let carry = elapsed_years(next.params.start_date, date);
                    next.overrides
                        .set_forward(period_key.clone(), stressed_spot * (rate * carry).exp());
                    next.overrides
                        .set_real_price(period_key, stressed_spot * (basis * index as f64).exp());
                }
            }
        }
    }

    next.recompute();
    log::info!(
        "applied scenario {:?} ({}): spot {} -> {}",
        key,
        scenario.name,
        state.params.spot_price,
        stressed_spot
    );
    next
}
