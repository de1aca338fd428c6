//! Moments of `a` with the alpha-scaled contribution of `m` regressed out.

use super::cross::product_expectation;
use super::mixing::{alpha, m_mean, m_second_moment};
use super::single::{mean, second_moment};

/// `mean(va) − α · m_mean(va, vb)`.
pub fn corrected_mean(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    let a = alpha(va, vb, k, p);
    corrected_mean_from(mean(va, k, p), a, m_mean(va, vb, k, p))
}

/// `E[a²] − α · (E[a²] + E[ab]) + α² · E[m²]`.
pub fn corrected_second_moment(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    let a = alpha(va, vb, k, p);
    corrected_second_moment_from(
        second_moment(va, k, p),
        product_expectation(va, vb, k, p),
        m_second_moment(va, vb, k, p),
        a,
    )
}

pub(crate) fn corrected_mean_from(ma: f64, a: f64, mm: f64) -> f64 {
    ma - a * mm
}

// Kept unreduced: distributing the alpha terms changes rounding.
pub(crate) fn corrected_second_moment_from(v0: f64, v01: f64, vm: f64, a: f64) -> f64 {
    v0 - a * (v0 + v01) + a * a * vm
}
