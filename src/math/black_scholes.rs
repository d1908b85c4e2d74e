//! Black-Scholes premium for European calls and puts, no dividend yield.

use crate::core::strategy::OptionType;
use crate::math::normal::norm_cdf;

/// Black-Scholes premium.
///
/// `rate` and `volatility` are annualized fractions; `time_years` is the
/// time to maturity in the same unit the volatility is quoted against.
///
/// # Panics
///
/// Panics if `underlying`, `strike`, `time_years`, or `volatility` is not
/// positive. Degenerate maturities and volatilities divide by zero in
/// `d1`; callers guarantee the inputs rather than this function guessing
/// a recovery.
///
/// # Examples
///
/// ```
/// use hedging_engine::core::strategy::OptionType;
/// use hedging_engine::math::black_scholes::price;
///
/// let call = price(OptionType::Call, 100.0, 100.0, 0.05, 1.0, 0.2);
/// let put = price(OptionType::Put, 100.0, 100.0, 0.05, 1.0, 0.2);
/// // Put-call parity: C - P = S - K e^{-rt}
/// let parity = 100.0 - 100.0 * (-0.05f64).exp();
/// assert!((call - put - parity).abs() < 1e-4);
/// ```
pub fn price(
    option_type: OptionType,
    underlying: f64,
    strike: f64,
    rate: f64,
    time_years: f64,
    volatility: f64,
) -> f64 {
    assert!(underlying > 0.0, "underlying must be positive, got {}", underlying);
    assert!(strike > 0.0, "strike must be positive, got {}", strike);
    assert!(time_years > 0.0, "time to maturity must be positive, got {}", time_years);
    assert!(volatility > 0.0, "volatility must be positive, got {}", volatility);

    let vol_sqrt_t = volatility * time_years.sqrt();
    let d1 = ((underlying / strike).ln() + (rate + volatility * volatility / 2.0) * time_years)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let discount = (-rate * time_years).exp();

    match option_type {
        OptionType::Call => underlying * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionType::Put => {
            strike * discount * (1.0 - norm_cdf(d2)) - underlying * (1.0 - norm_cdf(d1))
        }
    }
}
