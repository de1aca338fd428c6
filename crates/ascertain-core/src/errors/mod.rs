//! Error handling for the moment corrector.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod moment_error;

pub use config_error::ConfigError;
pub use error_code::AscertainErrorCode;
pub use moment_error::MomentError;
