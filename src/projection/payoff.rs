//! Strategy payoff curve across a price range at a fixed maturity.

use crate::core::strategy::Strategy;
use crate::math::black_scholes;
use serde::{Deserialize, Serialize};

/// Number of points in a payoff curve.
pub const PAYOFF_POINT_COUNT: usize = 101;

/// Reference maturity, in years, at which diagram premiums are quoted.
const DIAGRAM_MATURITY_YEARS: f64 = 1.0;

/// One point of a strategy payoff diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub underlying_price: f64,
    /// Net payoff per unit at this price: intrinsic value minus premium,
    /// quantity-weighted across legs.
    pub strategy_payoff: f64,
}

/// Payoff of the strategy across prices spanning spot x [0.5, 1.5].
///
/// Exactly [`PAYOFF_POINT_COUNT`] points at `spot * (0.5 + k * 0.01)`,
/// `k = 0..=100`, endpoints included. Premiums are quoted at a flat
/// one-year maturity with each leg's own volatility, independent of the
/// monthly hedge horizon. Pure function of its inputs; recompute it
/// whenever the strategy or the spot price changes.
///
/// # Examples
///
/// ```
/// use hedging_engine::core::strategy::{OptionType, Strategy, StrategyLeg, StrikeMode};
/// use hedging_engine::projection::payoff::build_payoff_curve;
///
/// let strategy: Strategy = [
///     StrategyLeg::new(OptionType::Call, 105.0, StrikeMode::PercentOfSpot, 20.0, 100.0).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// let curve = build_payoff_curve(&strategy, 100.0, 0.05);
/// assert_eq!(curve.len(), 101);
/// assert_eq!(curve[0].underlying_price, 50.0);
/// assert_eq!(curve[100].underlying_price, 150.0);
/// ```
pub fn build_payoff_curve(strategy: &Strategy, spot: f64, rate: f64) -> Vec<PayoffPoint> {
    (0..PAYOFF_POINT_COUNT)
        .map(|k| {
            let underlying_price = spot * (0.5 + k as f64 * 0.01);
            let strategy_payoff = strategy
                .legs()
                .iter()
                .map(|leg| {
                    let strike = leg.resolve_strike(spot);
                    let premium = black_scholes::price(
                        leg.option_type,
                        underlying_price,
                        strike,
                        rate,
                        DIAGRAM_MATURITY_YEARS,
                        leg.volatility_fraction(),
                    );
                    (leg.option_type.intrinsic(underlying_price, strike) - premium)
                        * leg.quantity_fraction()
                })
                .sum();
            PayoffPoint {
                underlying_price,
                strategy_payoff,
            }
        })
        .collect()
}
