//! Mixing coefficient and moments of the averaged variable `m = (a + b) / 2`.

use super::cross::{covariance, product_expectation};
use super::single::{mean, second_moment, variance};

/// `(v − 2ρ) / (v + 2ρ)` with `v = variance(va) + variance(vb)` and `ρ = covariance(va, vb)`.
///
/// The square root of this quantity drives [`alpha`]; it must be
/// non-negative with a non-zero denominator for `alpha` to be real.
pub fn alpha_radicand(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    radicand_from(variance(va, k, p), variance(vb, k, p), covariance(va, vb, k, p))
}

/// Mixing coefficient `1 + √((v − 2ρ) / (v + 2ρ))`.
///
/// Evaluates to exactly 2 without ascertainment whenever `va + vb > 0`.
/// NaN when the radicand is negative; ±∞ or NaN when `v + 2ρ = 0`.
pub fn alpha(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    alpha_from_radicand(alpha_radicand(va, vb, k, p))
}

/// Expectation of `m` under ascertainment.
pub fn m_mean(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    (mean(va, k, p) + mean(vb, k, p)) / 2.0
}

/// Second moment of `m` under ascertainment.
pub fn m_second_moment(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    m_second_moment_from(
        second_moment(va, k, p),
        second_moment(vb, k, p),
        product_expectation(va, vb, k, p),
    )
}

pub(crate) fn radicand_from(v0: f64, v1: f64, rho: f64) -> f64 {
    let v = v0 + v1;
    (v - 2.0 * rho) / (v + 2.0 * rho)
}

pub(crate) fn alpha_from_radicand(radicand: f64) -> f64 {
    1.0 + radicand.sqrt()
}

pub(crate) fn m_second_moment_from(v0: f64, v1: f64, v01: f64) -> f64 {
    (v0 + 2.0 * v01 + v1) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_two_without_ascertainment() {
        assert_eq!(alpha(0.5, 0.5, 0.1, 0.1), 2.0);
        assert_eq!(alpha(0.2, 0.8, 0.3, 0.3), 2.0);
    }

    #[test]
    fn test_alpha_reference_value() {
        let a = alpha(0.5, 0.5, 0.1, 0.5);
        assert!((a - 1.847819298405282).abs() < 1e-9, "alpha={a}");
    }

    #[test]
    fn test_alpha_nan_on_negative_radicand() {
        assert!(alpha_radicand(1.0, 1.0, 0.1, 1.0) < 0.0);
        assert!(alpha(1.0, 1.0, 0.1, 1.0).is_nan());
    }

    #[test]
    fn test_radicand_singular_denominator() {
        assert_eq!(radicand_from(0.5, 0.5, -0.5), f64::INFINITY);
        assert!(radicand_from(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_m_moments_without_ascertainment() {
        assert_eq!(m_mean(0.4, 0.6, 0.2, 0.2), 0.0);
        // (va + vb) / 4 for independent components.
        assert_eq!(m_second_moment(0.4, 0.6, 0.2, 0.2), 0.25);
    }

    #[test]
    fn test_m_moments_reference_values() {
        let mm = m_mean(0.6, 0.4, 0.01, 0.5);
        let msm = m_second_moment(0.6, 0.4, 0.01, 0.5);
        assert!((mm - 0.6595732161461847).abs() < 1e-9, "m_mean={mm}");
        assert!((msm - 1.0171983745779785).abs() < 1e-9, "m_second_moment={msm}");
    }
}
