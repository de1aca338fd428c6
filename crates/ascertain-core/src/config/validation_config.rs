//! Validation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the corrector treats inputs outside the formulas' valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// IEEE-754 semantics: NaN and ±∞ flow through as values.
    #[default]
    Permissive,
    /// Reject out-of-range prevalence and invalid alpha radicands.
    Strict,
}

impl ValidationMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!("expected 'strict' or 'permissive', got '{other}'")),
        }
    }
}

/// Configuration for input validation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validation mode. Default: permissive.
    pub mode: Option<ValidationMode>,
}

impl ValidationConfig {
    /// Returns the effective validation mode, defaulting to permissive.
    pub fn effective_mode(&self) -> ValidationMode {
        self.mode.unwrap_or_default()
    }
}
