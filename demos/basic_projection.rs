//! Basic projection example.
//!
//! Builds a 12-month hedge with a collar strategy and prints the
//! month-by-month cost comparison.

use chrono::NaiveDate;
use hedging_engine::core::params::HedgingParams;
use hedging_engine::core::state::HedgeState;
use hedging_engine::core::strategy::{OptionType, StrategyLeg, StrikeMode};
use hedging_engine::summary::totals;

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  hedging-engine: Basic Projection Example     ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let params = HedgingParams {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        months_to_hedge: 12,
        interest_rate: 5.0,
        total_volume: 1_200_000.0,
        spot_price: 100.0,
    };

    let mut state = HedgeState::new(params);

    // A collar: cap the upside with a 110% call, floor the downside
    // with a 90% put, each on the full monthly volume.
    state.strategy.add(
        StrategyLeg::new(OptionType::Call, 110.0, StrikeMode::PercentOfSpot, 20.0, 100.0)
            .expect("valid leg"),
    );
    state.strategy.add(
        StrategyLeg::new(OptionType::Put, 90.0, StrikeMode::PercentOfSpot, 20.0, 100.0)
            .expect("valid leg"),
    );

    state.recompute();

    println!(
        "{:<9} {:>10} {:>10} {:>9} {:>14} {:>14}",
        "Period", "Forward", "Real", "Premium", "Hedged", "Unhedged"
    );
    for period in &state.results {
        println!(
            "{:<9} {:>10.2} {:>10.2} {:>9.4} {:>14.2} {:>14.2}",
            period.key.to_string(),
            period.forward_price,
            period.real_price,
            period.strategy_premium,
            period.hedged_cost,
            period.unhedged_cost
        );
    }

    println!("\n{}", totals(&state.results));

    println!("Payoff curve: {} points from {:.2} to {:.2}",
        state.payoff_data.len(),
        state.payoff_data[0].underlying_price,
        state.payoff_data[100].underlying_price
    );
}
