//! Standard-normal primitives via `statrs`.
//!
//! Every formula in this crate evaluates the density at the liability
//! threshold, so both functions are total and never panic: out-of-domain
//! arguments produce NaN and the open boundaries produce ±∞.

use std::f64::consts::SQRT_2;

use statrs::consts::SQRT_2PI;
use statrs::function::erf::erfc_inv;

/// Inverse survival function of the standard normal.
///
/// Returns `t` with `P(Z > t) = q`. Computed as `√2 · erfc⁻¹(2q)`, the
/// symmetric form of the inverse CDF at `1 − q`, which keeps full precision
/// for small `q`.
///
/// `q = 0` gives `+∞`, `q = 1` gives `−∞`, anything outside `[0, 1]` is NaN.
pub fn inverse_survival(q: f64) -> f64 {
    if !(0.0..=1.0).contains(&q) {
        return f64::NAN;
    }
    if q == 0.0 {
        return f64::INFINITY;
    }
    if q == 1.0 {
        return f64::NEG_INFINITY;
    }
    SQRT_2 * erfc_inv(2.0 * q)
}

/// Standard normal density `φ(x) = exp(−x²/2) / √(2π)`.
pub fn density(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{Continuous, ContinuousCDF, Normal};

    fn standard() -> Normal {
        Normal::new(0.0, 1.0).unwrap()
    }

    #[test]
    fn test_inverse_survival_matches_inverse_cdf() {
        let n = standard();
        for q in [0.001, 0.01, 0.05, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
            let expected = n.inverse_cdf(1.0 - q);
            let got = inverse_survival(q);
            assert!((got - expected).abs() < 1e-9, "q={q}: {got} vs {expected}");
        }
    }

    #[test]
    fn test_inverse_survival_known_quantiles() {
        assert!((inverse_survival(0.01) - 2.3263478740408408).abs() < 1e-10);
        assert!((inverse_survival(0.05) - 1.6448536269514726).abs() < 1e-10);
        assert!(inverse_survival(0.5).abs() < 1e-15);
    }

    #[test]
    fn test_inverse_survival_is_odd_around_half() {
        for q in [0.01, 0.2, 0.4] {
            let diff = inverse_survival(q) + inverse_survival(1.0 - q);
            assert!(diff.abs() < 1e-10, "q={q}: {diff}");
        }
    }

    #[test]
    fn test_inverse_survival_boundaries() {
        assert_eq!(inverse_survival(0.0), f64::INFINITY);
        assert_eq!(inverse_survival(1.0), f64::NEG_INFINITY);
        assert!(inverse_survival(-0.1).is_nan());
        assert!(inverse_survival(1.1).is_nan());
        assert!(inverse_survival(f64::NAN).is_nan());
    }

    #[test]
    fn test_density_matches_statrs() {
        let n = standard();
        for x in [-3.0, -1.0, 0.0, 0.5, 1.2815515655446008, 2.3263478740408408] {
            assert!((density(x) - n.pdf(x)).abs() < 1e-15, "x={x}");
        }
        assert_eq!(density(f64::INFINITY), 0.0);
        assert_eq!(density(f64::NEG_INFINITY), 0.0);
    }
}
