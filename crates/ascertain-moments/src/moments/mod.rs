//! Ascertainment-corrected moments, unchecked fast path.
//!
//! Each function is a direct evaluation of its closed form with IEEE-754
//! semantics: no validation, no panics, NaN or ±∞ for invalid inputs.
//! The validating tier lives in [`crate::checked`].
//!
//! Dependency chain:
//! `threshold` → `mean`/`second_moment` → `variance`;
//! `product_expectation` → `covariance` → `alpha`;
//! `m_mean`/`m_second_moment` → `corrected_mean`/`corrected_second_moment`.

pub mod corrected;
pub mod cross;
pub mod mixing;
pub mod single;

pub use corrected::{corrected_mean, corrected_second_moment};
pub use cross::{covariance, product_expectation};
pub use mixing::{alpha, alpha_radicand, m_mean, m_second_moment};
pub use single::{mean, second_moment, threshold, variance};
