use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors arising from parsing period keys.
#[derive(Debug, Error)]
pub enum PeriodKeyError {
    #[error("period key must look like \"2024-7\", got {0:?}")]
    Malformed(String),
    #[error("month must be 1-12, got {0}")]
    MonthOutOfRange(u32),
}

/// "year-month" identifier for a monthly period.
///
/// This is the key of every mapping-typed field in the state snapshot
/// (manual forwards, manual real prices, implied-vol overrides). The
/// month is unpadded to match the state files the snapshot round-trips.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hedging_engine::core::period::PeriodKey;
///
/// let key = PeriodKey::from_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
/// assert_eq!(key.as_str(), "2024-7");
/// assert_eq!("2024-7".parse::<PeriodKey>().unwrap(), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodKey(String);

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self(format!("{}-{}", year, month))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PeriodKey {
    type Err = PeriodKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .rsplit_once('-')
            .ok_or_else(|| PeriodKeyError::Malformed(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodKeyError::Malformed(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodKeyError::Malformed(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(PeriodKeyError::MonthOutOfRange(month));
        }
        Ok(Self::new(year, month))
    }
}

/// Projected outcome of one monthly period.
///
/// One `Period` is produced per month of the horizon; the full sequence
/// is replaced wholesale by each projection call. `delta_pnl` is always
/// `unhedged_cost - hedged_cost`: positive means the option overlay
/// reduced the cost of acquiring that month's volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Settlement date of this period.
    pub date: NaiveDate,
    /// "year-month" identifier, used for all override lookups.
    pub key: PeriodKey,
    /// Fraction of the hedge horizon remaining until this period settles.
    /// The first period uses the fraction of its calendar month remaining
    /// after the start date (the stub period).
    pub time_to_maturity: f64,
    /// Forward price: manual override, or spot grown at the financing rate.
    pub forward_price: f64,
    /// Realized price assumption: simulated, manually set, or the forward.
    pub real_price: f64,
    /// Unweighted Black-Scholes premium of each leg, in strategy order.
    pub per_leg_premiums: Vec<f64>,
    /// Quantity-weighted premium paid across all legs.
    pub strategy_premium: f64,
    /// Quantity-weighted intrinsic payoff received, valued at the real price.
    pub total_payoff: f64,
    /// Volume acquired this period (total volume split evenly).
    pub monthly_volume: f64,
    /// Cost of the volume with the option overlay.
    pub hedged_cost: f64,
    /// Cost of the volume at the realized price alone.
    pub unhedged_cost: f64,
    /// `unhedged_cost - hedged_cost`.
    pub delta_pnl: f64,
}
