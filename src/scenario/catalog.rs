//! Stress-scenario definitions and the built-in catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Basis adjustment a scenario applies to the price curves.
///
/// A scenario shifts at most one curve: the forward curve (contango and
/// backwardation quoted on forward terms) or the real-price curve (the
/// same shape applied to realized prices, with the forward curve left
/// on pure carry). The basis is a monthly continuously-compounded rate:
/// period `i` is scaled by `e^(basis * i)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveShift {
    /// No curve adjustment.
    None,
    /// Shift the forward curve.
    ForwardBasis(f64),
    /// Shift the real-price curve; forwards stay on carry.
    RealBasis(f64),
}

impl Default for CurveShift {
    fn default() -> Self {
        CurveShift::None
    }
}

/// One stress scenario: simulation parameters, a spot shock, and an
/// optional curve shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    pub name: String,
    pub description: String,
    /// Annualized walk volatility, as a fraction.
    pub volatility: f64,
    /// Annualized walk drift, as a fraction.
    pub drift: f64,
    /// Fractional shock applied to the spot price (-0.2 = 20% crash).
    pub price_shock: f64,
    #[serde(default)]
    pub curve_shift: CurveShift,
    /// Whether presentation collaborators offer this entry for editing.
    pub editable: bool,
}

impl StressScenario {
    fn new(
        name: &str,
        description: &str,
        volatility: f64,
        drift: f64,
        price_shock: f64,
        curve_shift: CurveShift,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            volatility,
            drift,
            price_shock,
            curve_shift,
            editable: true,
        }
    }
}

/// The stress-scenario catalog: built-in entries plus any user edits.
///
/// Every entry is independently editable and independently resettable to
/// its built-in default without affecting the others.
///
/// # Examples
///
/// ```
/// use hedging_engine::scenario::catalog::ScenarioCatalog;
///
/// let mut catalog = ScenarioCatalog::default();
/// assert!(catalog.get("crash").is_some());
///
/// let mut crash = catalog.get("crash").unwrap().clone();
/// crash.price_shock = -0.5;
/// catalog.set("crash", crash);
/// assert_eq!(catalog.get("crash").unwrap().price_shock, -0.5);
///
/// catalog.reset("crash");
/// assert_eq!(catalog.get("crash").unwrap().price_shock, -0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioCatalog {
    scenarios: BTreeMap<String, StressScenario>,
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        let scenarios = BUILTIN_KEYS
            .iter()
            .filter_map(|key| builtin(key).map(|s| (key.to_string(), s)))
            .collect();
        Self { scenarios }
    }
}

/// Catalog keys, in display order.
pub const BUILTIN_KEYS: [&str; 9] = [
    "base",
    "highVol",
    "crash",
    "bull",
    "contango",
    "backwardation",
    "contangoReal",
    "backwardationReal",
    "custom",
];

fn builtin(key: &str) -> Option<StressScenario> {
    let scenario = match key {
        "base" => StressScenario::new(
            "Base Case",
            "Current market conditions",
            0.20,
            0.01,
            0.0,
            CurveShift::None,
        ),
        "highVol" => StressScenario::new(
            "High Volatility",
            "Double volatility, unchanged spot",
            0.40,
            0.01,
            0.0,
            CurveShift::None,
        ),
        "crash" => StressScenario::new(
            "Market Crash",
            "Spot down 20%, elevated volatility, negative drift",
            0.50,
            -0.05,
            -0.20,
            CurveShift::None,
        ),
        "bull" => StressScenario::new(
            "Bull Market",
            "Spot up 10%, positive drift",
            0.25,
            0.05,
            0.10,
            CurveShift::None,
        ),
        "contango" => StressScenario::new(
            "Contango",
            "Forward curve rising 1% per month",
            0.20,
            0.01,
            0.0,
            CurveShift::ForwardBasis(0.01),
        ),
        "backwardation" => StressScenario::new(
            "Backwardation",
            "Forward curve falling 1% per month",
            0.20,
            0.01,
            0.0,
            CurveShift::ForwardBasis(-0.01),
        ),
        "contangoReal" => StressScenario::new(
            "Contango (Real)",
            "Real prices rising 1% per month, forwards on carry",
            0.20,
            0.01,
            0.0,
            CurveShift::RealBasis(0.01),
        ),
        "backwardationReal" => StressScenario::new(
            "Backwardation (Real)",
            "Real prices falling 1% per month, forwards on carry",
            0.20,
            0.01,
            0.0,
            CurveShift::RealBasis(-0.01),
        ),
        "custom" => ScenarioCatalog::custom_default(),
        _ => return None,
    };
    Some(scenario)
}

impl ScenarioCatalog {
    /// Look up a scenario by key.
    pub fn get(&self, key: &str) -> Option<&StressScenario> {
        self.scenarios.get(key)
    }

    /// Insert or replace a scenario under `key`.
    pub fn set(&mut self, key: &str, scenario: StressScenario) {
        self.scenarios.insert(key.to_string(), scenario);
    }

    /// Restore one entry to its built-in default, leaving the rest
    /// untouched. Returns `false` for keys with no built-in default.
    pub fn reset(&mut self, key: &str) -> bool {
        match builtin(key) {
            Some(scenario) => {
                self.scenarios.insert(key.to_string(), scenario);
                true
            }
            None => false,
        }
    }

    /// Keys present in the catalog, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StressScenario)> {
        self.scenarios.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// The default user-defined scenario.
    pub fn custom_default() -> StressScenario {
        StressScenario::new(
            "Custom",
            "User-defined scenario",
            0.20,
            0.01,
            0.0,
            CurveShift::None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_builtins() {
        let catalog = ScenarioCatalog::default();
        assert_eq!(catalog.len(), BUILTIN_KEYS.len());
        for key in BUILTIN_KEYS {
            assert!(catalog.get(key).is_some(), "missing builtin {}", key);
        }
    }

    #[test]
    fn test_basis_scenarios_shift_one_curve() {
        let catalog = ScenarioCatalog::default();
        assert!(matches!(
            catalog.get("contango").unwrap().curve_shift,
            CurveShift::ForwardBasis(b) if b > 0.0
        ));
        assert!(matches!(
            catalog.get("backwardationReal").unwrap().curve_shift,
            CurveShift::RealBasis(b) if b < 0.0
        ));
        assert!(matches!(
            catalog.get("crash").unwrap().curve_shift,
            CurveShift::None
        ));
    }

    #[test]
    fn test_reset_is_per_key() {
        let mut catalog = ScenarioCatalog::default();

        let mut crash = catalog.get("crash").unwrap().clone();
        crash.volatility = 0.99;
        catalog.set("crash", crash);
        let mut bull = catalog.get("bull").unwrap().clone();
        bull.drift = 0.42;
        catalog.set("bull", bull);

        assert!(catalog.reset("crash"));
        assert_eq!(catalog.get("crash").unwrap().volatility, 0.50);
        // The other edit survives.
        assert_eq!(catalog.get("bull").unwrap().drift, 0.42);
    }

    #[test]
    fn test_reset_unknown_key_is_false() {
        let mut catalog = ScenarioCatalog::default();
        assert!(!catalog.reset("no-such-scenario"));
    }

    #[test]
    fn test_catalog_round_trips_as_plain_map() {
        let catalog = ScenarioCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["crash"]["price_shock"].is_number());

        let restored: ScenarioCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }
}
