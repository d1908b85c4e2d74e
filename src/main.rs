//! hedging-engine CLI
//!
//! Project hedged procurement costs from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Project a saved calculator state
//! hedging-engine project --input state.json
//!
//! # Output as JSON
//! hedging-engine project --input state.json --format json
//!
//! # Apply a stress scenario and compare
//! hedging-engine scenario --input state.json --name crash
//!
//! # Write a starter state with a sample collar
//! hedging-engine init --months 12 --spot 100 --output state.json
//! ```

use hedging_engine::core::params::HedgingParams;
use hedging_engine::core::state::HedgeState;
use hedging_engine::core::strategy::{OptionType, StrategyLeg, StrikeMode};
use hedging_engine::scenario::catalog::ScenarioCatalog;
use hedging_engine::scenario::engine::apply_scenario;
use hedging_engine::summary::{by_year, totals};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"hedging-engine — commodity hedging calculator

USAGE:
    hedging-engine <COMMAND> [OPTIONS]

COMMANDS:
    project     Project monthly hedged vs unhedged costs
    payoff      Print the strategy payoff curve
    scenario    Apply a stress scenario and project under it
    scenarios   List the built-in stress scenarios
    init        Write a starter state file with a sample collar
    help        Show this message

OPTIONS (project, payoff, scenario):
    --input <FILE>      Path to a JSON state file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (scenario):
    --name <KEY>        Scenario key (see `scenarios`)

OPTIONS (init):
    --months <N>        Months to hedge (default: 12)
    --spot <P>          Spot price (default: 100)
    --rate <R>          Annualized interest rate in percent (default: 5)
    --volume <V>        Total volume over the horizon (default: 1200)
    --start <DATE>      Start date, YYYY-MM-DD (default: 2024-01-15)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    hedging-engine init --months 24 --spot 80 --output state.json
    hedging-engine project --input state.json
    hedging-engine scenario --input state.json --name backwardationReal
    hedging-engine payoff --input state.json --format json"#
    );
}

/// JSON output schema for one projected period.
#[derive(serde::Serialize)]
struct PeriodOutput {
    period: String,
    forward_price: f64,
    real_price: f64,
    strategy_premium: f64,
    total_payoff: f64,
    hedged_cost: f64,
    unhedged_cost: f64,
    delta_pnl: f64,
}

#[derive(serde::Serialize)]
struct ProjectionOutput {
    periods: Vec<PeriodOutput>,
    hedged_cost: f64,
    unhedged_cost: f64,
    delta_pnl: f64,
    cost_reduction_percent: f64,
}

fn load_state(path: &str) -> HedgeState {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing state JSON: {}", e);
        process::exit(1);
    })
}

fn parse_io_flags(args: &[String]) -> (Option<String>, String, Option<String>) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut name = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            "--name" => {
                i += 1;
                name = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--name requires a scenario key");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }
    (input_path, format, name)
}

fn require_input(input_path: Option<String>) -> String {
    input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    })
}

fn print_projection(state: &HedgeState, format: &str) {
    if state.results.is_empty() {
        println!("No results to display: the strategy is empty.");
        return;
    }

    let summary = totals(&state.results);

    if format == "json" {
        let output = ProjectionOutput {
            periods: state
                .results
                .iter()
                .map(|p| PeriodOutput {
                    period: p.key.to_string(),
                    forward_price: p.forward_price,
                    real_price: p.real_price,
                    strategy_premium: p.strategy_premium,
                    total_payoff: p.total_payoff,
                    hedged_cost: p.hedged_cost,
                    unhedged_cost: p.unhedged_cost,
                    delta_pnl: p.delta_pnl,
                })
                .collect(),
            hedged_cost: summary.hedged_cost,
            unhedged_cost: summary.unhedged_cost,
            delta_pnl: summary.delta_pnl,
            cost_reduction_percent: summary.cost_reduction_percent,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!(
            "{:<9} {:>10} {:>10} {:>9} {:>9} {:>12} {:>12} {:>10}",
            "Period", "Forward", "Real", "Premium", "Payoff", "Hedged", "Unhedged", "ΔP&L"
        );
        for p in &state.results {
            println!(
                "{:<9} {:>10.2} {:>10.2} {:>9.4} {:>9.4} {:>12.2} {:>12.2} {:>10.2}",
                p.key.to_string(),
                p.forward_price,
                p.real_price,
                p.strategy_premium,
                p.total_payoff,
                p.hedged_cost,
                p.unhedged_cost,
                p.delta_pnl
            );
        }

        println!("\nBy year:");
        for (year, y) in by_year(&state.results) {
            println!(
                "  {}: hedged {:.2}, unhedged {:.2}, ΔP&L {:.2}",
                year, y.hedged_cost, y.unhedged_cost, y.delta_pnl
            );
        }
        println!("\n{}", summary);
    }
}

fn cmd_project(args: &[String]) {
    let (input_path, format, _) = parse_io_flags(args);
    let mut state = load_state(&require_input(input_path));
    if let Err(e) = state.params.validate() {
        eprintln!("Invalid parameters: {}", e);
        process::exit(1);
    }
    state.recompute();
    print_projection(&state, &format);
}

fn cmd_payoff(args: &[String]) {
    let (input_path, format, _) = parse_io_flags(args);
    let mut state = load_state(&require_input(input_path));
    state.recompute();

    if state.payoff_data.is_empty() {
        println!("No payoff curve: the strategy is empty.");
        return;
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&state.payoff_data).unwrap());
    } else {
        println!("{:>12} {:>12}", "Price", "Payoff");
        for point in &state.payoff_data {
            println!("{:>12.2} {:>12.4}", point.underlying_price, point.strategy_payoff);
        }
    }
}

fn cmd_scenario(args: &[String]) {
    let (input_path, format, name) = parse_io_flags(args);
    let key = name.unwrap_or_else(|| {
        eprintln!("Error: --name <KEY> is required (see `hedging-engine scenarios`)");
        process::exit(1);
    });

    let mut state = load_state(&require_input(input_path));
    state.recompute();

    let catalog = state.stress_test_scenarios.clone();
    if catalog.get(&key).is_none() {
        eprintln!("Unknown scenario '{}'. Available keys:", key);
        for k in catalog.keys() {
            eprintln!("  {}", k);
        }
        process::exit(1);
    }

    let stressed = apply_scenario(&key, &catalog, &state);
    print_projection(&stressed, &format);
}

fn cmd_scenarios() {
    let catalog = ScenarioCatalog::default();

    println!("{:<20} {:<22} {:>6} {:>7} {:>7}", "Key", "Name", "Vol", "Drift", "Shock");
    for (key, s) in catalog.iter() {
        println!(
            "{:<20} {:<22} {:>6.2} {:>7.2} {:>7.2}",
            key, s.name, s.volatility, s.drift, s.price_shock
        );
    }
}

fn cmd_init(args: &[String]) {
    let mut months = 12u32;
    let mut spot = 100.0f64;
    let mut rate = 5.0f64;
    let mut volume = 1200.0f64;
    let mut start = "2024-01-15".to_string();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--months" => {
                i += 1;
                months = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--months requires a number");
                    process::exit(1);
                });
            }
            "--spot" => {
                i += 1;
                spot = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--spot requires a number");
                    process::exit(1);
                });
            }
            "--rate" => {
                i += 1;
                rate = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--rate requires a number");
                    process::exit(1);
                });
            }
            "--volume" => {
                i += 1;
                volume = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--volume requires a number");
                    process::exit(1);
                });
            }
            "--start" => {
                i += 1;
                start = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--start requires a YYYY-MM-DD date");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let start_date = start.parse().unwrap_or_else(|e| {
        eprintln!("Invalid start date '{}': {}", start, e);
        process::exit(1);
    });

    let params = HedgingParams {
        start_date,
        months_to_hedge: months,
        interest_rate: rate,
        total_volume: volume,
        spot_price: spot,
    };
    if let Err(e) = params.validate() {
        eprintln!("Invalid parameters: {}", e);
        process::exit(1);
    }

    let mut state = HedgeState::new(params);
    // Sample collar: a 105% call and a 95% put, each covering half the
    // monthly volume.
    for leg in [
        StrategyLeg::new(OptionType::Call, 105.0, StrikeMode::PercentOfSpot, 20.0, 50.0),
        StrategyLeg::new(OptionType::Put, 95.0, StrikeMode::PercentOfSpot, 20.0, 50.0),
    ] {
        match leg {
            Ok(leg) => state.strategy.add(leg),
            Err(e) => {
                eprintln!("Invalid sample leg: {}", e);
                process::exit(1);
            }
        }
    }
    state.recompute();

    let json = serde_json::to_string_pretty(&state).unwrap();
    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Wrote {}-month state at spot {} → {}",
            months, spot, path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "project" => cmd_project(rest),
        "payoff" => cmd_payoff(rest),
        "scenario" => cmd_scenario(rest),
        "scenarios" => cmd_scenarios(),
        "init" => cmd_init(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
