//! Yearly and total roll-ups of projected periods.

use crate::core::period::Period;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Cost totals for one calendar year of the horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub hedged_cost: f64,
    pub unhedged_cost: f64,
    pub delta_pnl: f64,
}

/// Cost totals for the whole horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub hedged_cost: f64,
    pub unhedged_cost: f64,
    pub delta_pnl: f64,
    /// `delta_pnl / |unhedged_cost| * 100`. `NaN` when the horizon has
    /// no unhedged cost to compare against; a sentinel for display, not
    /// an error.
    pub cost_reduction_percent: f64,
}

/// Sum period costs grouped by the calendar year of each period's date.
pub fn by_year(results: &[Period]) -> BTreeMap<i32, YearlySummary> {
    let mut years: BTreeMap<i32, YearlySummary> = BTreeMap::new();
    for period in results {
        let entry = years.entry(period.date.year()).or_default();
        entry.hedged_cost += period.hedged_cost;
        entry.unhedged_cost += period.unhedged_cost;
        entry.delta_pnl += period.delta_pnl;
    }
    years
}

/// Sum period costs over the whole horizon.
pub fn totals(results: &[Period]) -> SummaryTotals {
    let hedged_cost: f64 = results.iter().map(|p| p.hedged_cost).sum();
    let unhedged_cost: f64 = results.iter().map(|p| p.unhedged_cost).sum();
    let delta_pnl: f64 = results.iter().map(|p| p.delta_pnl).sum();
    let cost_reduction_percent = if unhedged_cost == 0.0 {
        f64::NAN
    } else {
        delta_pnl / unhedged_cost.abs() * 100.0
    };

    SummaryTotals {
        hedged_cost,
        unhedged_cost,
        delta_pnl,
        cost_reduction_percent,
    }
}

impl fmt::Display for SummaryTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Hedging Summary ===")?;
        writeln!(f, "Unhedged Cost:  {:.2}", self.unhedged_cost)?;
        writeln!(f, "Hedged Cost:    {:.2}", self.hedged_cost)?;
        writeln!(f, "Delta P&L:      {:.2}", self.delta_pnl)?;
        writeln!(f, "Cost Reduction: {:.2}%", self.cost_reduction_percent)?;
        Ok(())
    }
}
