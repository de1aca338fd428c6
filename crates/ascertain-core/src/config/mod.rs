//! Configuration system for the moment corrector.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod ascertain_config;
pub mod batch_config;
pub mod validation_config;

pub use ascertain_config::AscertainConfig;
pub use batch_config::BatchConfig;
pub use validation_config::{ValidationConfig, ValidationMode};
