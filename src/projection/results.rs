//! Month-by-month projection of premiums, payoffs, and hedged cost.

use crate::core::overrides::ManualOverrides;
use crate::core::params::{HedgingParams, SimulationParams};
use crate::core::period::{Period, PeriodKey};
use crate::core::strategy::Strategy;
use crate::math::black_scholes;
use crate::projection::price_path::{
    forward_price, period_date, simulate_real_path, time_to_maturity,
};

/// The projection engine.
///
/// Orchestrates price-path resolution and per-leg pricing into one
/// `Period` record per month of the horizon.
pub struct ResultsProjector;

impl ResultsProjector {
    /// Project the full horizon.
    ///
    /// An empty strategy yields an empty result: "no hedge" is a defined
    /// state, not an error. Each call prices every period from scratch;
    /// callers re-project after any mutation of a leg, a parameter, or
    /// an override, since no incremental path exists.
    ///
    /// # Algorithm
    ///
    /// Per period:
    /// 1. Resolve the forward price (manual override or carry from spot)
    ///    and the real price (simulated walk, manual override, or the
    ///    forward as fallback).
    /// 2. Price each leg with Black-Scholes at the forward price and the
    ///    period's time to maturity; a per-period implied-vol override
    ///    replaces every leg's volatility for that period only.
    /// 3. Sum quantity-weighted premiums, and quantity-weighted intrinsic
    ///    payoffs valued at the real price. Premium is paid at
    ///    forward-quoted terms; payoff realizes at the price actually
    ///    seen at maturity, which is why the two use different prices.
    /// 4. Cost accounting per month of volume:
    ///    `unhedged = volume * real`,
    ///    `hedged = volume * (real + premium - payoff)`,
    ///    `delta_pnl = unhedged - hedged`.
    pub fn project(
        params: &HedgingParams,
        strategy: &Strategy,
        overrides: &ManualOverrides,
        sim: &SimulationParams,
    ) -> Vec<Period> {
        if strategy.is_empty() {
            return Vec::new();
        }

        let monthly_volume = params.monthly_volume();
        let rate = params.rate_fraction();
        let real_path = if sim.use_simulation {
            Some(simulate_real_path(params, sim))
        } else {
            None
        };

        let mut periods = Vec::with_capacity(params.months_to_hedge as usize);
        for index in 0..params.months_to_hedge {
            let date = period_date(params.start_date, index);
            let key = PeriodKey::from_date(date);

            let forward = forward_price(params, overrides, date);
            let real_price = match &real_path {
                Some(path) => path[index as usize],
                None => overrides.real_price_for(&key).unwrap_or(forward),
            };
            let ttm = time_to_maturity(params, index);
            let vol_override = overrides.implied_vol_for(&key);

            let mut per_leg_premiums = Vec::with_capacity(strategy.len());
            let mut strategy_premium = 0.0;
            let mut total_payoff = 0.0;
            for leg in strategy.legs() {
                let strike = leg.resolve_strike(params.spot_price);
                let volatility = vol_override.unwrap_or_else(|| leg.volatility_fraction());
                let premium =
                    black_scholes::price(leg.option_type, forward, strike, rate, ttm, volatility);

                per_leg_premiums.push(premium);
                strategy_premium += premium * leg.quantity_fraction();
                total_payoff +=
                    leg.option_type.intrinsic(real_price, strike) * leg.quantity_fraction();
            }

            let unhedged_cost = monthly_volume * real_price;
            let hedged_cost = monthly_volume * (real_price + strategy_premium - total_payoff);

            periods.push(Period {
                date,
                key,
                time_to_maturity: ttm,
                forward_price: forward,
                real_price,
                per_leg_premiums,
                strategy_premium,
                total_payoff,
                monthly_volume,
                hedged_cost,
                unhedged_cost,
                delta_pnl: unhedged_cost - hedged_cost,
            });
        }

        log::debug!(
            "projected {} periods for {} leg(s), simulation={}",
            periods.len(),
            strategy.len(),
            sim.use_simulation
        );
        periods
    }
}
