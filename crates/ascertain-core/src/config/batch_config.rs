//! Batch evaluation configuration.

use serde::{Deserialize, Serialize};

/// Default element count at which batch evaluation switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for element-wise batch evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Minimum slice length evaluated in parallel. Default: 4096.
    pub parallel_threshold: Option<usize>,
}

impl BatchConfig {
    /// Returns the effective parallel threshold, defaulting to 4096.
    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }
}
