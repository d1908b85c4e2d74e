use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from invalid hedging parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("months_to_hedge must be at least 1")]
    EmptyHorizon,
    #[error("spot price must be positive, got {0}")]
    InvalidSpot(f64),
    #[error("total volume must be non-negative, got {0}")]
    InvalidVolume(f64),
}

/// Inputs shared by every projection: the hedge horizon, the financing
/// rate, the volume schedule, and the current spot price.
///
/// Rates and volatilities throughout the crate follow the convention of
/// their source fields: `interest_rate` is an annualized percentage
/// (e.g. `5.0` for 5%), converted with [`HedgingParams::rate_fraction`]
/// where the math needs a fraction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hedging_engine::core::params::HedgingParams;
///
/// let params = HedgingParams {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     months_to_hedge: 12,
///     interest_rate: 5.0,
///     total_volume: 1_200_000.0,
///     spot_price: 100.0,
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.monthly_volume(), 100_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgingParams {
    /// First day of the hedge horizon.
    pub start_date: NaiveDate,
    /// Number of monthly periods to project.
    pub months_to_hedge: u32,
    /// Annualized financing rate, in percent.
    pub interest_rate: f64,
    /// Total volume to acquire over the horizon, split evenly per month.
    pub total_volume: f64,
    /// Current spot price of the underlying.
    pub spot_price: f64,
}

impl HedgingParams {
    /// Check the parameter set before projecting.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.months_to_hedge == 0 {
            return Err(ParamsError::EmptyHorizon);
        }
        if self.spot_price <= 0.0 {
            return Err(ParamsError::InvalidSpot(self.spot_price));
        }
        if self.total_volume < 0.0 {
            return Err(ParamsError::InvalidVolume(self.total_volume));
        }
        Ok(())
    }

    /// Volume acquired in each monthly period. Constant across the horizon.
    pub fn monthly_volume(&self) -> f64 {
        self.total_volume / self.months_to_hedge as f64
    }

    /// The annualized financing rate as a fraction (5% -> 0.05).
    pub fn rate_fraction(&self) -> f64 {
        self.interest_rate / 100.0
    }
}

/// Controls how the realized ("real") price of each period is produced.
///
/// When `use_simulation` is off, real prices come from manual overrides
/// with the forward price as fallback. When on, they come from a
/// path-dependent walk seeded at the spot price; see
/// [`crate::projection::price_path::simulate_real_path`] for the exact
/// step, including its deliberately non-Gaussian noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Whether real prices are simulated rather than looked up.
    pub use_simulation: bool,
    /// Annualized volatility of the walk, as a fraction (0.20 = 20%).
    pub volatility: f64,
    /// Annualized drift of the walk, as a fraction.
    pub drift: f64,
    /// Carried for state compatibility; the walk draws a single path.
    pub num_simulations: u32,
    /// Fixed RNG seed for reproducible paths; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            use_simulation: false,
            volatility: 0.20,
            drift: 0.01,
            num_simulations: 1000,
            seed: None,
        }
    }
}
