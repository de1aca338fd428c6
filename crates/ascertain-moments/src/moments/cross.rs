//! Cross-moments of two components that are independent before ascertainment.
//!
//! The shared selection event is the only source of correlation, so the
//! induced cross-moment is proportional to `va · vb`.

use super::single::{mean, threshold};
use crate::normal::density;

/// Expectation of `ab` under ascertainment.
///
/// `(p/k − (1 − p)/(1 − k)) · φ(t) · t · va · vb`. The variance product is
/// formed first so the result is bit-for-bit symmetric in `va` and `vb`.
pub fn product_expectation(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    let t = threshold(k);
    (p / k - (1.0 - p) / (1.0 - k)) * density(t) * t * (va * vb)
}

/// Covariance of `a` and `b` under ascertainment.
pub fn covariance(va: f64, vb: f64, k: f64, p: f64) -> f64 {
    let ma = mean(va, k, p);
    let mb = mean(vb, k, p);
    product_expectation(va, vb, k, p) - ma * mb
}
