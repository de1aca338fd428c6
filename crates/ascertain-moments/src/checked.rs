//! Validating tier: the same formulas, with fail-fast domain checks.
//!
//! Every function rejects a prevalence outside the open interval `(0, 1)`.
//! Functions that go through the mixing coefficient also reject a singular
//! or negative alpha radicand. The sample proportion is never checked, since
//! out-of-range values are a legitimate extrapolation. On success the
//! returned value is bit-identical to [`crate::moments`].

use ascertain_core::MomentError;

use crate::moments::{self, mixing};

/// Reject a prevalence outside `(0, 1)`, including NaN.
pub fn check_prevalence(k: f64) -> Result<(), MomentError> {
    if k > 0.0 && k < 1.0 {
        Ok(())
    } else {
        tracing::debug!(prevalence = k, "rejected prevalence outside (0, 1)");
        Err(MomentError::PrevalenceOutOfRange { prevalence: k })
    }
}

/// Reject a mixing coefficient that would not be a finite real number.
///
/// `v` is the summed variance, `rho` the covariance and `radicand` the
/// already-evaluated `(v − 2ρ)/(v + 2ρ)`.
pub fn check_radicand(v: f64, rho: f64, radicand: f64) -> Result<f64, MomentError> {
    let denominator = v + 2.0 * rho;
    if denominator == 0.0 || !denominator.is_finite() {
        tracing::debug!(denominator, "rejected singular alpha");
        return Err(MomentError::SingularAlpha { denominator });
    }
    if radicand < 0.0 || radicand.is_nan() {
        tracing::debug!(radicand, "rejected negative alpha radicand");
        return Err(MomentError::NegativeRadicand { radicand });
    }
    Ok(radicand)
}

pub fn threshold(k: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::threshold(k))
}

pub fn mean(v: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::mean(v, k, p))
}

pub fn second_moment(v: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::second_moment(v, k, p))
}

pub fn variance(v: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::variance(v, k, p))
}

pub fn product_expectation(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::product_expectation(va, vb, k, p))
}

pub fn covariance(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::covariance(va, vb, k, p))
}

/// Checked `(v − 2ρ)/(v + 2ρ)`: validates both prevalence and the radicand itself.
pub fn alpha_radicand(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    let v0 = moments::variance(va, k, p);
    let v1 = moments::variance(vb, k, p);
    let rho = moments::covariance(va, vb, k, p);
    check_radicand(v0 + v1, rho, mixing::radicand_from(v0, v1, rho))
}

pub fn alpha(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    let radicand = alpha_radicand(va, vb, k, p)?;
    Ok(mixing::alpha_from_radicand(radicand))
}

pub fn m_mean(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::m_mean(va, vb, k, p))
}

pub fn m_second_moment(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    check_prevalence(k)?;
    Ok(moments::m_second_moment(va, vb, k, p))
}

pub fn corrected_mean(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    alpha_radicand(va, vb, k, p)?;
    Ok(moments::corrected_mean(va, vb, k, p))
}

pub fn corrected_second_moment(va: f64, vb: f64, k: f64, p: f64) -> Result<f64, MomentError> {
    alpha_radicand(va, vb, k, p)?;
    Ok(moments::corrected_second_moment(va, vb, k, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevalence_bounds() {
        assert!(check_prevalence(0.5).is_ok());
        for k in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(check_prevalence(k), Err(MomentError::PrevalenceOutOfRange { .. })),
                "k={k} should be rejected"
            );
        }
    }

    #[test]
    fn test_offending_prevalence_is_reported() {
        match mean(1.0, 1.25, 0.5) {
            Err(MomentError::PrevalenceOutOfRange { prevalence }) => assert_eq!(prevalence, 1.25),
            other => panic!("Expected PrevalenceOutOfRange, got: {:?}", other),
        }
    }

    #[test]
    fn test_sample_proportion_is_not_validated() {
        assert!(mean(1.0, 0.1, 1.5).is_ok());
        assert!(product_expectation(0.5, 0.5, 0.1, -0.2).is_ok());
    }

    #[test]
    fn test_singular_radicand() {
        match check_radicand(1.0, -0.5, f64::INFINITY) {
            Err(MomentError::SingularAlpha { denominator }) => assert_eq!(denominator, 0.0),
            other => panic!("Expected SingularAlpha, got: {:?}", other),
        }
    }

    #[test]
    fn test_negative_radicand() {
        match alpha(1.0, 1.0, 0.1, 1.0) {
            Err(MomentError::NegativeRadicand { radicand }) => assert!(radicand < 0.0),
            other => panic!("Expected NegativeRadicand, got: {:?}", other),
        }
        assert!(corrected_mean(1.0, 1.0, 0.1, 1.0).is_err());
        assert!(corrected_second_moment(1.0, 1.0, 0.1, 1.0).is_err());
    }

    #[test]
    fn test_ok_values_match_unchecked() {
        let (va, vb, k, p) = (0.3, 0.7, 0.05, 0.2);
        assert_eq!(threshold(k).unwrap(), moments::threshold(k));
        assert_eq!(variance(va, k, p).unwrap(), moments::variance(va, k, p));
        assert_eq!(alpha(va, vb, k, p).unwrap(), moments::alpha(va, vb, k, p));
        assert_eq!(
            corrected_second_moment(va, vb, k, p).unwrap(),
            moments::corrected_second_moment(va, vb, k, p)
        );
    }
}
