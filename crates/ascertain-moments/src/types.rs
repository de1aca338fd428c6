//! Typed inputs and the full result record of one evaluation.

use ascertain_core::MomentError;
use serde::{Deserialize, Serialize};

use crate::checked;
use crate::moments::{self, corrected, cross, mixing, single};

/// The ascertainment event: population prevalence `K` and sample proportion `P`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascertainment {
    pub prevalence: f64,
    pub sample_proportion: f64,
}

impl Ascertainment {
    /// Build without validation.
    pub fn new(prevalence: f64, sample_proportion: f64) -> Self {
        Self {
            prevalence,
            sample_proportion,
        }
    }

    /// Build after checking `0 < prevalence < 1`.
    pub fn try_new(prevalence: f64, sample_proportion: f64) -> Result<Self, MomentError> {
        checked::check_prevalence(prevalence)?;
        Ok(Self::new(prevalence, sample_proportion))
    }

    /// A sample drawn at the population rate (`P = K`).
    pub fn unselected(prevalence: f64) -> Self {
        Self::new(prevalence, prevalence)
    }

    pub fn threshold(&self) -> f64 {
        single::threshold(self.prevalence)
    }

    /// `P = K`: the sample carries no enrichment or depletion of cases.
    pub fn is_unselected(&self) -> bool {
        self.sample_proportion == self.prevalence
    }
}

/// Variances of the two components before ascertainment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub va: f64,
    pub vb: f64,
}

impl Components {
    pub fn new(va: f64, vb: f64) -> Self {
        Self { va, vb }
    }

    /// Components of a liability with total variance one: `(va, 1 − va)`.
    pub fn standardized(va: f64) -> Self {
        Self::new(va, 1.0 - va)
    }

    pub fn total(&self) -> f64 {
        self.va + self.vb
    }

    /// Swap the roles of `a` and `b`.
    pub fn swapped(&self) -> Self {
        Self::new(self.vb, self.va)
    }
}

/// Every quantity of the corrector for one `(va, vb, K, P)` input.
///
/// Each field is bit-identical to the corresponding free function in
/// [`crate::moments`]; shared intermediates are computed once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectedMoments {
    pub components: Components,
    pub ascertainment: Ascertainment,
    pub threshold: f64,
    pub mean_a: f64,
    pub mean_b: f64,
    pub second_moment_a: f64,
    pub second_moment_b: f64,
    pub variance_a: f64,
    pub variance_b: f64,
    pub product_expectation: f64,
    pub covariance: f64,
    pub alpha_radicand: f64,
    pub alpha: f64,
    pub m_mean: f64,
    pub m_second_moment: f64,
    pub corrected_mean: f64,
    pub corrected_second_moment: f64,
}

impl CorrectedMoments {
    /// Evaluate every quantity without validation.
    pub fn compute(components: Components, ascertainment: Ascertainment) -> Self {
        let Components { va, vb } = components;
        let Ascertainment {
            prevalence: k,
            sample_proportion: p,
        } = ascertainment;

        let mean_a = moments::mean(va, k, p);
        let mean_b = moments::mean(vb, k, p);
        let second_moment_a = moments::second_moment(va, k, p);
        let second_moment_b = moments::second_moment(vb, k, p);
        let variance_a = second_moment_a - mean_a.powi(2);
        let variance_b = second_moment_b - mean_b.powi(2);
        let product_expectation = cross::product_expectation(va, vb, k, p);
        let covariance = product_expectation - mean_a * mean_b;
        let alpha_radicand = mixing::radicand_from(variance_a, variance_b, covariance);
        let alpha = mixing::alpha_from_radicand(alpha_radicand);
        let m_mean = (mean_a + mean_b) / 2.0;
        let m_second_moment =
            mixing::m_second_moment_from(second_moment_a, second_moment_b, product_expectation);

        Self {
            components,
            ascertainment,
            threshold: ascertainment.threshold(),
            mean_a,
            mean_b,
            second_moment_a,
            second_moment_b,
            variance_a,
            variance_b,
            product_expectation,
            covariance,
            alpha_radicand,
            alpha,
            m_mean,
            m_second_moment,
            corrected_mean: corrected::corrected_mean_from(mean_a, alpha, m_mean),
            corrected_second_moment: corrected::corrected_second_moment_from(
                second_moment_a,
                product_expectation,
                m_second_moment,
                alpha,
            ),
        }
    }

    /// Evaluate every quantity, rejecting invalid prevalence or alpha radicand.
    pub fn try_compute(
        components: Components,
        ascertainment: Ascertainment,
    ) -> Result<Self, MomentError> {
        checked::check_prevalence(ascertainment.prevalence)?;
        let summary = Self::compute(components, ascertainment);
        checked::check_radicand(
            summary.variance_a + summary.variance_b,
            summary.covariance,
            summary.alpha_radicand,
        )?;
        Ok(summary)
    }
}
