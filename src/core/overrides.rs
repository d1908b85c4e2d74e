use crate::core::period::PeriodKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Manual price curves keyed by period.
///
/// Presence of a key overrides the computed value for that period;
/// absence falls back to the computed or simulated value. The scenario
/// engine writes basis-shifted curves here, and clears whichever curve a
/// scenario redefines.
///
/// `implied_vols` is a per-period implied-volatility override (as a
/// fraction): when set for a period it replaces every leg's own
/// volatility for that period only, without mutating the legs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualOverrides {
    /// Period key -> forward price.
    pub manual_forwards: HashMap<PeriodKey, f64>,
    /// Period key -> realized price.
    pub real_prices: HashMap<PeriodKey, f64>,
    /// Period key -> implied volatility fraction.
    #[serde(default)]
    pub implied_vols: HashMap<PeriodKey, f64>,
}

impl ManualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The manual forward for a period, if one is set.
    pub fn forward_for(&self, key: &PeriodKey) -> Option<f64> {
        self.manual_forwards.get(key).copied()
    }

    /// The manual real price for a period, if one is set.
    pub fn real_price_for(&self, key: &PeriodKey) -> Option<f64> {
        self.real_prices.get(key).copied()
    }

    /// The implied-vol override for a period, if one is set.
    pub fn implied_vol_for(&self, key: &PeriodKey) -> Option<f64> {
        self.implied_vols.get(key).copied()
    }

    pub fn set_forward(&mut self, key: PeriodKey, price: f64) {
        self.manual_forwards.insert(key, price);
    }

    pub fn set_real_price(&mut self, key: PeriodKey, price: f64) {
        self.real_prices.insert(key, price);
    }

    pub fn set_implied_vol(&mut self, key: PeriodKey, vol: f64) {
        self.implied_vols.insert(key, vol);
    }

    pub fn clear_forwards(&mut self) {
        self.manual_forwards.clear();
    }

    pub fn clear_real_prices(&mut self) {
        self.real_prices.clear();
    }
}
