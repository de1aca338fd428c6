//! Top-level configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BatchConfig, ValidationConfig, ValidationMode};
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to [`AscertainConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "ascertain.toml";

pub const ENV_VALIDATION_MODE: &str = "ASCERTAIN_VALIDATION_MODE";
pub const ENV_BATCH_PARALLEL_THRESHOLD: &str = "ASCERTAIN_BATCH_PARALLEL_THRESHOLD";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ASCERTAIN_*`)
/// 2. Project config (`ascertain.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AscertainConfig {
    pub validation: ValidationConfig,
    pub batch: BatchConfig,
}

impl AscertainConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        tracing::debug!(
            mode = %config.validation.effective_mode(),
            parallel_threshold = config.batch.effective_parallel_threshold(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (no env layer).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AscertainConfig) -> Result<(), ConfigError> {
        if config.batch.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "batch.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AscertainConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AscertainConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut AscertainConfig, other: &AscertainConfig) {
        if other.validation.mode.is_some() {
            base.validation.mode = other.validation.mode;
        }
        if other.batch.parallel_threshold.is_some() {
            base.batch.parallel_threshold = other.batch.parallel_threshold;
        }
    }

    /// Apply `ASCERTAIN_*` environment overrides.
    fn apply_env_overrides(config: &mut AscertainConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_VALIDATION_MODE) {
            let mode = val.parse::<ValidationMode>().map_err(|message| {
                ConfigError::InvalidValue {
                    field: ENV_VALIDATION_MODE.to_string(),
                    message,
                }
            })?;
            config.validation.mode = Some(mode);
        }
        if let Ok(val) = std::env::var(ENV_BATCH_PARALLEL_THRESHOLD) {
            let threshold = val.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidValue {
                    field: ENV_BATCH_PARALLEL_THRESHOLD.to_string(),
                    message: e.to_string(),
                }
            })?;
            config.batch.parallel_threshold = Some(threshold);
        }
        Ok(())
    }
}
