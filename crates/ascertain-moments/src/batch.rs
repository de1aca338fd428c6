//! Element-wise evaluation over slices.
//!
//! Any scalar function of this crate (unchecked or checked) can be mapped
//! over a slice. Results come back in input order, one per element, so a
//! checked function yields `Vec<Result<f64, MomentError>>` and an invalid
//! element never affects its neighbours. Slices at or above the parallel
//! threshold are evaluated with rayon.

use ascertain_core::config::batch_config::DEFAULT_PARALLEL_THRESHOLD;
use ascertain_core::{BatchConfig, MomentError};
use rayon::prelude::*;

use crate::types::Ascertainment;

/// Maps scalar moment functions over slices of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchEvaluator {
    parallel_threshold: usize,
}

impl Default for BatchEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl BatchEvaluator {
    /// `parallel_threshold` of 0 is treated as 1 (always parallel).
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold: parallel_threshold.max(1),
        }
    }

    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.effective_parallel_threshold())
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn is_parallel(&self, len: usize) -> bool {
        let parallel = len >= self.parallel_threshold;
        tracing::trace!(len, parallel, "batch evaluation");
        parallel
    }

    /// Apply `f(v, K, P)` to every `v` under one shared ascertainment.
    pub fn map_single<F, T>(&self, f: F, vs: &[f64], ascertainment: Ascertainment) -> Vec<T>
    where
        F: Fn(f64, f64, f64) -> T + Sync,
        T: Send,
    {
        let Ascertainment {
            prevalence: k,
            sample_proportion: p,
        } = ascertainment;
        if self.is_parallel(vs.len()) {
            vs.par_iter().map(|&v| f(v, k, p)).collect()
        } else {
            vs.iter().map(|&v| f(v, k, p)).collect()
        }
    }

    /// Apply `f(va, vb, K, P)` pairwise under one shared ascertainment.
    ///
    /// Fails only when the two slices differ in length.
    pub fn map_pair<F, T>(
        &self,
        f: F,
        vas: &[f64],
        vbs: &[f64],
        ascertainment: Ascertainment,
    ) -> Result<Vec<T>, MomentError>
    where
        F: Fn(f64, f64, f64, f64) -> T + Sync,
        T: Send,
    {
        if vas.len() != vbs.len() {
            return Err(MomentError::LengthMismatch {
                left: vas.len(),
                right: vbs.len(),
            });
        }
        let Ascertainment {
            prevalence: k,
            sample_proportion: p,
        } = ascertainment;
        let out = if self.is_parallel(vas.len()) {
            vas.par_iter()
                .zip(vbs.par_iter())
                .map(|(&va, &vb)| f(va, vb, k, p))
                .collect()
        } else {
            vas.iter()
                .zip(vbs.iter())
                .map(|(&va, &vb)| f(va, vb, k, p))
                .collect()
        };
        Ok(out)
    }

    /// Apply `f(v, K, P)` to heterogeneous `(v, K, P)` tuples.
    pub fn map_scenarios<F, T>(&self, f: F, scenarios: &[(f64, f64, f64)]) -> Vec<T>
    where
        F: Fn(f64, f64, f64) -> T + Sync,
        T: Send,
    {
        if self.is_parallel(scenarios.len()) {
            scenarios.par_iter().map(|&(v, k, p)| f(v, k, p)).collect()
        } else {
            scenarios.iter().map(|&(v, k, p)| f(v, k, p)).collect()
        }
    }

    /// Apply `f(va, vb, K, P)` to heterogeneous `(va, vb, K, P)` tuples.
    pub fn map_pair_scenarios<F, T>(&self, f: F, scenarios: &[(f64, f64, f64, f64)]) -> Vec<T>
    where
        F: Fn(f64, f64, f64, f64) -> T + Sync,
        T: Send,
    {
        if self.is_parallel(scenarios.len()) {
            scenarios
                .par_iter()
                .map(|&(va, vb, k, p)| f(va, vb, k, p))
                .collect()
        } else {
            scenarios
                .iter()
                .map(|&(va, vb, k, p)| f(va, vb, k, p))
                .collect()
        }
    }
}

/// [`BatchEvaluator::map_single`] with the default parallel threshold.
pub fn map_single<F, T>(f: F, vs: &[f64], ascertainment: Ascertainment) -> Vec<T>
where
    F: Fn(f64, f64, f64) -> T + Sync,
    T: Send,
{
    BatchEvaluator::default().map_single(f, vs, ascertainment)
}

/// [`BatchEvaluator::map_pair`] with the default parallel threshold.
pub fn map_pair<F, T>(
    f: F,
    vas: &[f64],
    vbs: &[f64],
    ascertainment: Ascertainment,
) -> Result<Vec<T>, MomentError>
where
    F: Fn(f64, f64, f64, f64) -> T + Sync,
    T: Send,
{
    BatchEvaluator::default().map_pair(f, vas, vbs, ascertainment)
}

/// [`BatchEvaluator::map_scenarios`] with the default parallel threshold.
pub fn map_scenarios<F, T>(f: F, scenarios: &[(f64, f64, f64)]) -> Vec<T>
where
    F: Fn(f64, f64, f64) -> T + Sync,
    T: Send,
{
    BatchEvaluator::default().map_scenarios(f, scenarios)
}
