//! Standard normal CDF via an error-function polynomial approximation.

/// Error function, Abramowitz & Stegun 7.1.26; max error ~1.5e-7.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let ax = x.abs();

    let p = 0.3275911;
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;

    let t = 1.0 / (1.0 + p * ax);
    let poly = ((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t;
    let y = 1.0 - poly * (-ax * ax).exp();

    sign * y
}

/// Cumulative distribution function of the standard normal,
/// `(1 + erf(x/sqrt(2))) / 2`. Defined for all finite `x`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x * std::f64::consts::FRAC_1_SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cdf_reference_values() {
        let cases = [
            (-3.0, 0.0013498980316301035),
            (-1.0, 0.15865525393145707),
            (0.0, 0.5),
            (1.0, 0.8413447460685429),
            (3.0, 0.9986501019683699),
        ];
        for (x, expected) in cases {
            assert_abs_diff_eq!(norm_cdf(x), expected, epsilon = 2e-7);
        }
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [0.1, 0.5, 1.0, 2.5, 4.0] {
            assert_abs_diff_eq!(norm_cdf(-x), 1.0 - norm_cdf(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_monotone() {
        let mut prev = norm_cdf(-6.0);
        let mut x = -6.0;
        while x <= 6.0 {
            let current = norm_cdf(x);
            assert!(current >= prev, "cdf must not decrease at x={}", x);
            prev = current;
            x += 0.01;
        }
    }

    #[test]
    fn test_cdf_bounds() {
        for x in [-50.0, -8.0, 0.0, 8.0, 50.0] {
            let value = norm_cdf(x);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
