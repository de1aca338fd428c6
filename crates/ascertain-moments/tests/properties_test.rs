//! Property-based tests for the moment identities.

use proptest::prelude::*;

use ascertain_moments::{
    alpha, batch::BatchEvaluator, checked, covariance, m_mean, mean, product_expectation,
    second_moment, variance, Ascertainment, MomentError,
};

fn prevalence() -> impl Strategy<Value = f64> {
    0.001f64..0.999
}

proptest! {
    /// P = K reproduces the unselected moments exactly.
    #[test]
    fn prop_no_ascertainment_identity(v in 0.0f64..10.0, k in prevalence()) {
        prop_assert_eq!(mean(v, k, k), 0.0);
        prop_assert_eq!(second_moment(v, k, k), v);
        prop_assert_eq!(variance(v, k, k), v);
    }

    #[test]
    fn prop_covariance_vanishes_without_ascertainment(
        va in 0.0f64..5.0,
        vb in 0.0f64..5.0,
        k in prevalence(),
    ) {
        prop_assert_eq!(covariance(va, vb, k, k), 0.0);
        prop_assert_eq!(m_mean(va, vb, k, k), 0.0);
    }

    #[test]
    fn prop_product_expectation_symmetric(
        va in 0.0f64..5.0,
        vb in 0.0f64..5.0,
        k in prevalence(),
        p in -0.5f64..1.5,
    ) {
        prop_assert_eq!(
            product_expectation(va, vb, k, p).to_bits(),
            product_expectation(vb, va, k, p).to_bits()
        );
    }

    #[test]
    fn prop_alpha_two_without_ascertainment(
        va in 0.01f64..5.0,
        vb in 0.01f64..5.0,
        k in prevalence(),
    ) {
        prop_assert_eq!(alpha(va, vb, k, k), 2.0);
    }

    #[test]
    fn prop_mean_monotone_in_sample_proportion(
        v in 0.01f64..5.0,
        k in 0.01f64..0.99,
        p1 in 0.0f64..1.0,
        dp in 0.0f64..1.0,
    ) {
        let p2 = p1 + dp;
        prop_assert!(mean(v, k, p1) <= mean(v, k, p2));
    }

    #[test]
    fn prop_checked_agrees_with_unchecked(
        v in 0.0f64..5.0,
        k in prevalence(),
        p in 0.0f64..1.0,
    ) {
        prop_assert_eq!(checked::mean(v, k, p), Ok(mean(v, k, p)));
        prop_assert_eq!(checked::second_moment(v, k, p), Ok(second_moment(v, k, p)));
    }

    #[test]
    fn prop_checked_rejects_out_of_range_prevalence(
        k in prop_oneof![-5.0f64..=0.0, 1.0f64..5.0],
        v in 0.0f64..5.0,
    ) {
        prop_assert_eq!(
            checked::variance(v, k, 0.5),
            Err(MomentError::PrevalenceOutOfRange { prevalence: k })
        );
    }

    #[test]
    fn prop_parallel_batch_matches_scalar(
        vs in prop::collection::vec(0.0f64..2.0, 0..200),
        k in prevalence(),
        p in 0.0f64..1.0,
    ) {
        let out = BatchEvaluator::new(1).map_single(second_moment, &vs, Ascertainment::new(k, p));
        prop_assert_eq!(out.len(), vs.len());
        for (v, m2) in vs.iter().zip(&out) {
            prop_assert_eq!(m2.to_bits(), second_moment(*v, k, p).to_bits());
        }
    }
}
