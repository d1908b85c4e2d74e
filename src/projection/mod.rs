pub mod payoff;
pub mod price_path;
pub mod results;
