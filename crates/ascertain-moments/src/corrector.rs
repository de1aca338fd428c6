//! The configured moment corrector.
//!
//! A `MomentCorrector` fixes the validation discipline once, from
//! [`AscertainConfig`], so call sites do not have to choose between
//! [`crate::moments`] and [`crate::checked`] themselves.

use ascertain_core::{AscertainConfig, MomentError, ValidationMode};

use crate::batch::BatchEvaluator;
use crate::types::{Ascertainment, Components, CorrectedMoments};
use crate::{checked, moments};

/// Stateless evaluator of the ascertainment corrections.
///
/// In [`ValidationMode::Permissive`] every method returns `Ok` and IEEE-754
/// NaN/±∞ pass through as values. In [`ValidationMode::Strict`] the checked
/// tier is used and domain failures surface as [`MomentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MomentCorrector {
    mode: ValidationMode,
    batch: BatchEvaluator,
}

macro_rules! dispatch {
    ($(#[$doc:meta])* $name:ident($($arg:ident),+)) => {
        $(#[$doc])*
        pub fn $name(&self, $($arg: f64),+) -> Result<f64, MomentError> {
            match self.mode {
                ValidationMode::Permissive => Ok(moments::$name($($arg),+)),
                ValidationMode::Strict => checked::$name($($arg),+),
            }
        }
    };
}

impl MomentCorrector {
    pub fn new(mode: ValidationMode, batch: BatchEvaluator) -> Self {
        Self { mode, batch }
    }

    pub fn permissive() -> Self {
        Self::new(ValidationMode::Permissive, BatchEvaluator::default())
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict, BatchEvaluator::default())
    }

    pub fn from_config(config: &AscertainConfig) -> Self {
        let corrector = Self::new(
            config.validation.effective_mode(),
            BatchEvaluator::from_config(&config.batch),
        );
        tracing::debug!(
            mode = %corrector.mode,
            parallel_threshold = corrector.batch.parallel_threshold(),
            "moment corrector configured"
        );
        corrector
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn batch(&self) -> &BatchEvaluator {
        &self.batch
    }

    dispatch!(
        /// Liability threshold for prevalence `k`.
        threshold(k)
    );
    dispatch!(mean(v, k, p));
    dispatch!(second_moment(v, k, p));
    dispatch!(variance(v, k, p));
    dispatch!(product_expectation(va, vb, k, p));
    dispatch!(covariance(va, vb, k, p));
    dispatch!(alpha_radicand(va, vb, k, p));
    dispatch!(
        /// Mixing coefficient; strict mode rejects a singular or negative radicand.
        alpha(va, vb, k, p)
    );
    dispatch!(m_mean(va, vb, k, p));
    dispatch!(m_second_moment(va, vb, k, p));
    dispatch!(corrected_mean(va, vb, k, p));
    dispatch!(corrected_second_moment(va, vb, k, p));

    /// Every quantity for one pair of components under one ascertainment.
    pub fn summary(
        &self,
        components: Components,
        ascertainment: Ascertainment,
    ) -> Result<CorrectedMoments, MomentError> {
        match self.mode {
            ValidationMode::Permissive => Ok(CorrectedMoments::compute(components, ascertainment)),
            ValidationMode::Strict => CorrectedMoments::try_compute(components, ascertainment),
        }
    }

    /// Corrected mean for each `(va, vb)` pair, one result per element.
    pub fn corrected_means(
        &self,
        vas: &[f64],
        vbs: &[f64],
        ascertainment: Ascertainment,
    ) -> Result<Vec<Result<f64, MomentError>>, MomentError> {
        self.batch
            .map_pair(|va, vb, k, p| self.corrected_mean(va, vb, k, p), vas, vbs, ascertainment)
    }

    /// Corrected second moment for each `(va, vb)` pair, one result per element.
    pub fn corrected_second_moments(
        &self,
        vas: &[f64],
        vbs: &[f64],
        ascertainment: Ascertainment,
    ) -> Result<Vec<Result<f64, MomentError>>, MomentError> {
        self.batch.map_pair(
            |va, vb, k, p| self.corrected_second_moment(va, vb, k, p),
            vas,
            vbs,
            ascertainment,
        )
    }

    /// Full summaries for heterogeneous `(va, vb, K, P)` tuples.
    pub fn summaries(
        &self,
        scenarios: &[(f64, f64, f64, f64)],
    ) -> Vec<Result<CorrectedMoments, MomentError>> {
        self.batch.map_pair_scenarios(
            |va, vb, k, p| self.summary(Components::new(va, vb), Ascertainment::new(k, p)),
            scenarios,
        )
    }
}
