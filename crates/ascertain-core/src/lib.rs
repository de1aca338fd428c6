//! # ascertain-core
//!
//! Shared plumbing for the ascertainment moment corrector: error enums and
//! their stable codes, TOML/env configuration, and tracing setup.
//! The numerics live in `ascertain-moments`.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{AscertainConfig, BatchConfig, ValidationConfig, ValidationMode};
pub use errors::{AscertainErrorCode, ConfigError, MomentError};

/// Crate version, shared by every workspace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
