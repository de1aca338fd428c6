//! Moments of one latent variable under ascertainment.
//!
//! `v` is the variance of the variable with no ascertainment, `k` the
//! population prevalence and `p` the proportion of cases in the sample.

use crate::normal::{density, inverse_survival};

/// Liability threshold above which the outcome is one.
pub fn threshold(k: f64) -> f64 {
    inverse_survival(k)
}

/// Expectation of the variable under ascertainment.
///
/// `v · φ(t) · (p − k) / (k · (1 − k))`. Exactly zero when `p == k`.
pub fn mean(v: f64, k: f64, p: f64) -> f64 {
    let t = threshold(k);
    v * density(t) * (p - k) / (k * (1.0 - k))
}

/// Second moment of the variable under ascertainment.
///
/// `v + v² · φ(t) · t · (p − k) / (k · (1 − k))`. Exactly `v` when `p == k`.
pub fn second_moment(v: f64, k: f64, p: f64) -> f64 {
    let t = threshold(k);
    v + v * v * density(t) * t * (p - k) / (k * (1.0 - k))
}

/// Variance of the variable under ascertainment.
pub fn variance(v: f64, k: f64, p: f64) -> f64 {
    second_moment(v, k, p) - mean(v, k, p).powi(2)
}
