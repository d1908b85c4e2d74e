use crate::core::overrides::ManualOverrides;
use crate::core::params::{HedgingParams, SimulationParams};
use crate::core::period::Period;
use crate::core::strategy::Strategy;
use crate::projection::payoff::{build_payoff_curve, PayoffPoint};
use crate::projection::results::ResultsProjector;
use crate::scenario::catalog::{ScenarioCatalog, StressScenario};
use serde::{Deserialize, Serialize};

/// Full calculator state: the serialization contract with persistence
/// and presentation collaborators.
///
/// The engine owns no ambient storage. Collaborators load a snapshot,
/// call into the engine, and save the returned snapshot at their own
/// checkpoints; `load(save(x)) == x` holds for every field the engine
/// owns. All mapping-typed fields are keyed by the period's
/// "year-month" identifier.
///
/// Nothing recomputes implicitly: after mutating `params`, `strategy`,
/// overrides, or `real_price_params`, call [`HedgeState::recompute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeState {
    pub params: HedgingParams,
    pub strategy: Strategy,
    /// Result of the last projection; replaced wholesale by `recompute`.
    pub results: Vec<Period>,
    /// Payoff curve of the last projection; empty when the strategy is.
    pub payoff_data: Vec<PayoffPoint>,
    /// Manual forward / real-price / implied-vol curves
    /// (`manual_forwards`, `real_prices`, `implied_vols` in the JSON).
    #[serde(flatten)]
    pub overrides: ManualOverrides,
    /// Simulation controls for the real-price path.
    pub real_price_params: SimulationParams,
    /// Opaque UI field, carried for round-trip only.
    pub active_tab: String,
    /// The user-defined scenario, persisted alongside the catalog.
    pub custom_scenario: StressScenario,
    /// The stress-scenario catalog, including any per-key edits.
    pub stress_test_scenarios: ScenarioCatalog,
}

impl HedgeState {
    /// A fresh state with no strategy, no overrides, and the built-in
    /// scenario catalog.
    pub fn new(params: HedgingParams) -> Self {
        Self {
            params,
            strategy: Strategy::new(),
            results: Vec::new(),
            payoff_data: Vec::new(),
            overrides: ManualOverrides::new(),
            real_price_params: SimulationParams::default(),
            active_tab: String::new(),
            custom_scenario: ScenarioCatalog::custom_default(),
            stress_test_scenarios: ScenarioCatalog::default(),
        }
    }

    /// Re-run the projection and payoff curve from the current inputs,
    /// replacing `results` and `payoff_data` wholesale.
    ///
    /// This is the single recompute entry point: every mutation of a
    /// single leg, parameter, or override requires a full re-projection,
    /// and removing the last leg clears both outputs.
    pub fn recompute(&mut self) {
        self.results = ResultsProjector::project(
            &self.params,
            &self.strategy,
            &self.overrides,
            &self.real_price_params,
        );
        self.payoff_data = if self.strategy.is_empty() {
            Vec::new()
        } else {
            build_payoff_curve(
                &self.strategy,
                self.params.spot_price,
                self.params.rate_fraction(),
            )
        };
        log::debug!(
            "recomputed state: {} periods, {} payoff points",
            self.results.len(),
            self.payoff_data.len()
        );
    }
}
