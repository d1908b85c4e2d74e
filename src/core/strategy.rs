use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors arising from invalid strategy legs.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("strike must be positive, got {0}")]
    InvalidStrike(f64),
    #[error("volatility must be positive, got {0}%")]
    InvalidVolatility(f64),
    #[error("quantity must be non-negative, got {0}%")]
    InvalidQuantity(f64),
}

/// Side of an option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Exercise value at a given price, excluding premium:
    /// `max(price - strike, 0)` for a call, `max(strike - price, 0)` for a put.
    pub fn intrinsic(self, price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (price - strike).max(0.0),
            OptionType::Put => (strike - price).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// How a leg's strike field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeMode {
    /// Strike is a percentage of the spot price (100 = at the money).
    PercentOfSpot,
    /// Strike is an absolute price level.
    Absolute,
}

/// One option position within a hedging strategy.
///
/// `volatility` and `quantity` are percentages: a leg with
/// `volatility: 20.0` prices at 20% implied volatility, and
/// `quantity: 50.0` covers half of each period's volume.
///
/// # Examples
///
/// ```
/// use hedging_engine::core::strategy::{OptionType, StrategyLeg, StrikeMode};
///
/// let leg = StrategyLeg::new(OptionType::Call, 105.0, StrikeMode::PercentOfSpot, 20.0, 50.0)
///     .unwrap();
/// // 105% of a 100 spot
/// assert_eq!(leg.resolve_strike(100.0), 105.0);
/// assert_eq!(leg.quantity_fraction(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    pub option_type: OptionType,
    pub strike: f64,
    pub strike_mode: StrikeMode,
    /// Implied volatility for pricing this leg, in percent.
    pub volatility: f64,
    /// Share of each period's volume this leg covers, in percent.
    pub quantity: f64,
}

impl StrategyLeg {
    /// Create a validated leg.
    pub fn new(
        option_type: OptionType,
        strike: f64,
        strike_mode: StrikeMode,
        volatility: f64,
        quantity: f64,
    ) -> Result<Self, StrategyError> {
        if strike <= 0.0 {
            return Err(StrategyError::InvalidStrike(strike));
        }
        if volatility <= 0.0 {
            return Err(StrategyError::InvalidVolatility(volatility));
        }
        if quantity < 0.0 {
            return Err(StrategyError::InvalidQuantity(quantity));
        }
        Ok(Self {
            option_type,
            strike,
            strike_mode,
            volatility,
            quantity,
        })
    }

    /// The absolute strike level for this leg given the spot price.
    pub fn resolve_strike(&self, spot: f64) -> f64 {
        match self.strike_mode {
            StrikeMode::PercentOfSpot => spot * self.strike / 100.0,
            StrikeMode::Absolute => self.strike,
        }
    }

    /// The leg's implied volatility as a fraction (20% -> 0.20).
    pub fn volatility_fraction(&self) -> f64 {
        self.volatility / 100.0
    }

    /// The leg's volume share as a fraction (50% -> 0.5).
    pub fn quantity_fraction(&self) -> f64 {
        self.quantity / 100.0
    }
}

/// An ordered portfolio of option legs.
///
/// Order affects only display labels; premiums and payoffs are summed
/// across legs, so pricing is order-independent. An empty strategy is
/// the defined "no hedge" state: projecting it yields no periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    legs: Vec<StrategyLeg>,
}

impl Strategy {
    pub fn new() -> Self {
        Self { legs: Vec::new() }
    }

    pub fn add(&mut self, leg: StrategyLeg) {
        self.legs.push(leg);
    }

    /// Remove the leg at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<StrategyLeg> {
        if index < self.legs.len() {
            Some(self.legs.remove(index))
        } else {
            None
        }
    }

    pub fn legs(&self) -> &[StrategyLeg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl FromIterator<StrategyLeg> for Strategy {
    fn from_iter<T: IntoIterator<Item = StrategyLeg>>(iter: T) -> Self {
        Self {
            legs: iter.into_iter().collect(),
        }
    }
}
