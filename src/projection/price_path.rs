//! Per-period price resolution: forward curve, stub-period time
//! fractions, and the pseudo-stochastic real-price walk.

use crate::core::overrides::ManualOverrides;
use crate::core::params::{HedgingParams, SimulationParams};
use crate::core::period::PeriodKey;
use chrono::{Datelike, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Settlement date of period `index`: the start date advanced by whole
/// calendar months.
///
/// # Panics
///
/// Panics if the month arithmetic overflows `NaiveDate`'s range.
pub fn period_date(start: NaiveDate, index: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(index))
        .expect("period date out of calendar range")
}

/// Exact elapsed calendar time between two dates, in years (actual/365).
pub fn elapsed_years(start: NaiveDate, date: NaiveDate) -> f64 {
    (date - start).num_days() as f64 / DAYS_PER_YEAR
}

/// Forward price for a period: the manual override when one is set,
/// otherwise spot grown at the financing rate over the exact elapsed
/// calendar time.
pub fn forward_price(params: &HedgingParams, overrides: &ManualOverrides, date: NaiveDate) -> f64 {
    let key = PeriodKey::from_date(date);
    if let Some(manual) = overrides.forward_for(&key) {
        return manual;
    }
    let elapsed = elapsed_years(params.start_date, date);
    params.spot_price * (params.rate_fraction() * elapsed).exp()
}

/// Time to maturity of period `index` as a fraction of the horizon.
///
/// The first period is a stub: it gets the fraction of its calendar
/// month remaining from the start date (counting the start day itself,
/// so the value is always positive), divided by the horizon length.
/// Later periods get `index / months`.
pub fn time_to_maturity(params: &HedgingParams, index: u32) -> f64 {
    let months = params.months_to_hedge as f64;
    if index == 0 {
        let day = params.start_date.day();
        let in_month = days_in_month(params.start_date.year(), params.start_date.month());
        let remaining = (in_month - day + 1) as f64;
        (remaining / in_month as f64) / months
    } else {
        index as f64 / months
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// One realized price per period, produced by a sequential walk from the
/// spot price:
///
/// `p <- p * exp((drift - vol^2/2) * dt + vol * sqrt(dt) * u)`, `dt = 1/12`.
///
/// Shocks `u` are drawn uniform on [-1, 1] rather than from a normal:
/// the walk is a coarse what-if path, not a calibrated lognormal
/// simulation, and the bounded noise keeps single-month moves tame. The
/// path is stateful across periods and is recomputed in full on every
/// projection; there is no incremental reuse.
pub fn simulate_real_path(params: &HedgingParams, sim: &SimulationParams) -> Vec<f64> {
    let mut rng = match sim.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    simulate_real_path_with(params, sim, &mut rng)
}

/// Same walk with a caller-supplied RNG.
pub fn simulate_real_path_with(
    params: &HedgingParams,
    sim: &SimulationParams,
    rng: &mut impl Rng,
) -> Vec<f64> {
    let dt = 1.0 / MONTHS_PER_YEAR;
    let half_var = sim.volatility * sim.volatility / 2.0;
    let mut price = params.spot_price;

    (0..params.months_to_hedge)
        .map(|_| {
            let u: f64 = rng.gen_range(-1.0..=1.0);
            price *= ((sim.drift - half_var) * dt + sim.volatility * dt.sqrt() * u).exp();
            price
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_params() -> HedgingParams {
        HedgingParams {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            months_to_hedge: 12,
            interest_rate: 5.0,
            total_volume: 1200.0,
            spot_price: 100.0,
        }
    }

    #[test]
    fn test_period_dates_advance_by_month() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(period_date(start, 0), start);
        // Clamped to the shorter month
        assert_eq!(
            period_date(start, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            period_date(start, 3),
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
        );
    }

    #[test]
    fn test_forward_from_carry() {
        let params = sample_params();
        let overrides = ManualOverrides::new();

        // Period 0 is the start date itself: no carry accrued.
        assert_abs_diff_eq!(
            forward_price(&params, &overrides, params.start_date),
            100.0,
            epsilon = 1e-12
        );

        let one_year = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let expected = 100.0 * (0.05f64 * 366.0 / 365.0).exp(); // 2024 is a leap year
        assert_abs_diff_eq!(
            forward_price(&params, &overrides, one_year),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_manual_forward_wins() {
        let params = sample_params();
        let mut overrides = ManualOverrides::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        overrides.set_forward(PeriodKey::from_date(date), 123.45);

        assert_eq!(forward_price(&params, &overrides, date), 123.45);
    }

    #[test]
    fn test_stub_period_fraction() {
        let params = sample_params();
        // Jan 15 of a 31-day month: 17 days remain including the 15th.
        let expected = (17.0 / 31.0) / 12.0;
        assert_abs_diff_eq!(time_to_maturity(&params, 0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_stub_positive_on_last_day_of_month() {
        let mut params = sample_params();
        params.start_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert!(time_to_maturity(&params, 0) > 0.0);
    }

    #[test]
    fn test_later_periods_linear() {
        let params = sample_params();
        assert_abs_diff_eq!(time_to_maturity(&params, 1), 1.0 / 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(time_to_maturity(&params, 11), 11.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_walk_is_seed_deterministic() {
        let params = sample_params();
        let sim = SimulationParams {
            use_simulation: true,
            seed: Some(42),
            ..SimulationParams::default()
        };
        let a = simulate_real_path(&params, &sim);
        let b = simulate_real_path(&params, &sim);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn test_walk_zero_vol_is_pure_drift() {
        let params = sample_params();
        let sim = SimulationParams {
            use_simulation: true,
            volatility: 0.0,
            drift: 0.12,
            seed: Some(1),
            ..SimulationParams::default()
        };
        let path = simulate_real_path(&params, &sim);
        // Each month compounds exp(drift / 12) exactly.
        let step = (0.12f64 / 12.0).exp();
        let mut expected = 100.0;
        for value in path {
            expected *= step;
            assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_walk_stays_positive() {
        let params = sample_params();
        let sim = SimulationParams {
            use_simulation: true,
            volatility: 0.9,
            drift: -0.5,
            seed: Some(7),
            ..SimulationParams::default()
        };
        assert!(simulate_real_path(&params, &sim).iter().all(|p| *p > 0.0));
    }
}
