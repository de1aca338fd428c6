//! # ascertain-moments
//!
//! Ascertainment-corrected moments of latent liabilities under the
//! normal liability-threshold model.
//!
//! A liability `l = a + b` is the sum of two components that are
//! independent with zero mean and variances `va + vb = 1` before
//! ascertainment. Subjects enter the sample through a binary outcome
//! (`l > t`) with population prevalence `K` and sample proportion `P`.
//! This crate maps `(va, vb, K, P)` to the post-ascertainment moments of
//! `a`, `b`, their average `m`, and of `a` with the `m` contribution
//! regressed out.
//!
//! Two tiers share the same formulas:
//! - [`moments`]: unchecked, IEEE-754 semantics (NaN/±∞ on invalid input).
//! - [`checked`]: validating, returns [`MomentError`] with the offending value.
//!
//! [`MomentCorrector`] picks a tier from configuration; [`batch`] maps any
//! scalar function element-wise over slices.

pub mod batch;
pub mod checked;
pub mod corrector;
pub mod moments;
pub mod normal;
pub mod types;

pub use ascertain_core::MomentError;
pub use batch::BatchEvaluator;
pub use corrector::MomentCorrector;
pub use moments::{
    alpha, alpha_radicand, corrected_mean, corrected_second_moment, covariance, m_mean,
    m_second_moment, mean, product_expectation, second_moment, threshold, variance,
};
pub use types::{Ascertainment, Components, CorrectedMoments};
