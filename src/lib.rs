//! # hedging-engine
//!
//! Commodity hedging calculator: Black-Scholes option pricing, forward
//! projection, and stress scenarios.
//!
//! Given a volume schedule, a spot price, and a portfolio of option
//! positions (a "strategy"), this engine projects monthly forward prices,
//! option premiums, intrinsic payoffs, and the resulting hedged-vs-unhedged
//! cost differential over a horizon, and compares that projection under
//! stress scenarios (shocked volatility, drift, spot, forward/real basis).
//!
//! ## Architecture
//!
//! - **core** — Foundational types: parameters, strategy legs, periods,
//!   manual overrides, state snapshot
//! - **math** — Normal CDF and Black-Scholes premium
//! - **projection** — Price-path resolution, per-period results, payoff curve
//! - **scenario** — Stress-scenario catalog and application engine
//! - **summary** — Yearly and total cost roll-ups

pub mod core;
pub mod math;
pub mod projection;
pub mod scenario;
pub mod summary;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::overrides::ManualOverrides;
    pub use crate::core::params::{HedgingParams, SimulationParams};
    pub use crate::core::period::{Period, PeriodKey};
    pub use crate::core::state::HedgeState;
    pub use crate::core::strategy::{OptionType, Strategy, StrategyLeg, StrikeMode};
    pub use crate::projection::payoff::{build_payoff_curve, PayoffPoint};
    pub use crate::projection::results::ResultsProjector;
    pub use crate::scenario::catalog::{CurveShift, ScenarioCatalog, StressScenario};
    pub use crate::scenario::engine::apply_scenario;
    pub use crate::summary::{by_year, totals, SummaryTotals, YearlySummary};
}
