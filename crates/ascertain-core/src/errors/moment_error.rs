//! Moment evaluation errors, raised only by the validating tier.

use super::error_code::{self, AscertainErrorCode};

/// Errors reported by checked moment evaluation.
///
/// The unchecked path never produces these; it follows IEEE-754 and
/// returns NaN or ±∞ instead.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MomentError {
    #[error("Prevalence must lie strictly between 0 and 1, got {prevalence}")]
    PrevalenceOutOfRange { prevalence: f64 },

    #[error("Alpha is singular: v + 2*rho = {denominator}")]
    SingularAlpha { denominator: f64 },

    #[error("Alpha radicand (v - 2*rho)/(v + 2*rho) is negative: {radicand}")]
    NegativeRadicand { radicand: f64 },

    #[error("Batch inputs differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

impl AscertainErrorCode for MomentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PrevalenceOutOfRange { .. } => error_code::DOMAIN_ERROR,
            Self::SingularAlpha { .. } => error_code::SINGULAR_ERROR,
            Self::NegativeRadicand { .. } => error_code::RADICAND_ERROR,
            Self::LengthMismatch { .. } => error_code::SHAPE_ERROR,
        }
    }
}
