//! AscertainErrorCode trait for downstream consumers.

/// Stable, machine-readable code for every error enum.
///
/// Downstream estimators and notebooks match on these strings rather than
/// on the human-readable message, which may change between releases.
pub trait AscertainErrorCode {
    /// Returns the error code string (e.g., "DOMAIN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
pub const SINGULAR_ERROR: &str = "SINGULAR_ERROR";
pub const RADICAND_ERROR: &str = "RADICAND_ERROR";
pub const SHAPE_ERROR: &str = "SHAPE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
