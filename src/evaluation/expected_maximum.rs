use tracing::debug;

use crate::core::Sample;
use crate::evaluation::{EstimationError, EstimationMode, ExpectedMaximumCurve};
#[cfg(debug_assertions)]
use crate::utils::math::is_close;

#[cfg(debug_assertions)]
const REL_TOL: f64 = 1e-9;

/// Expected maximum performance for every trial budget `n = 1..=m`.
///
/// Methods from "Showing Your Work Doesn't Always Work" (Tang et al., ACL
/// 2020), building on "Show Your Work" (Dodge et al., EMNLP 2019). The
/// returned curve has one element per measurement; element `n - 1` is the
/// expected best score after `n` trials.
///
/// Fails with [`EstimationError::EmptySample`] when `values` is empty.
pub fn expected_maximum_performance(
    values: &[f64],
    mode: EstimationMode,
) -> Result<ExpectedMaximumCurve, EstimationError> {
    let sample = Sample::new(values.iter().copied())?;
    estimate_curve(&sample, mode)
}

/// Same as [`expected_maximum_performance`] for an already-built sample.
pub fn estimate_curve(
    sample: &Sample,
    mode: EstimationMode,
) -> Result<ExpectedMaximumCurve, EstimationError> {
    let estimator = mode.estimator();
    let m = sample.len();
    debug!(sample_size = m, %mode, "estimating expected maximum curve");

    let mut maximums = Vec::with_capacity(m);
    for n in 1..=m {
        maximums.push(estimator.expected_maximum(sample, n)?);
    }

    #[cfg(debug_assertions)]
    check_invariants(sample, &maximums);

    Ok(ExpectedMaximumCurve::new(mode, maximums))
}

#[cfg(debug_assertions)]
fn check_invariants(sample: &Sample, maximums: &[f64]) {
    let scale = sample.min().abs().max(sample.max().abs()).max(1.0);
    let abs_tol = REL_TOL * scale;

    debug_assert!(
        is_close(maximums[0], sample.mean(), REL_TOL, abs_tol),
        "first trial must equal the sample mean: {} vs {}",
        maximums[0],
        sample.mean()
    );
    let top = sample.max();
    for (i, &v) in maximums.iter().enumerate() {
        debug_assert!(
            v <= top || is_close(v, top, REL_TOL, abs_tol),
            "expected maximum after {} trials exceeds the sample maximum: {v} > {top}",
            i + 1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn random_values(rng: &mut StdRng, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-50.0..100.0)).collect()
    }

    #[test]
    fn unbiased_three_values() {
        let curve = expected_maximum_performance(&[1.0, 2.0, 3.0], EstimationMode::Unbiased)
            .unwrap();
        let v = curve.values();
        assert_eq!(v.len(), 3);
        assert!((v[0] - 2.0).abs() < EPS);
        assert!((v[1] - 8.0 / 3.0).abs() < EPS);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn biased_three_values() {
        let curve =
            expected_maximum_performance(&[3.0, 1.0, 2.0], EstimationMode::Biased).unwrap();
        let v = curve.values();
        assert!((v[0] - 2.0).abs() < EPS);
        assert!((v[1] - 22.0 / 9.0).abs() < EPS);
        assert!((v[2] - 72.0 / 27.0).abs() < EPS);
        assert!(v[2] < 3.0);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = expected_maximum_performance(&[0.3, 0.9, 0.1, 0.5], EstimationMode::Unbiased)
            .unwrap();
        let b = expected_maximum_performance(&[0.9, 0.5, 0.3, 0.1], EstimationMode::Unbiased)
            .unwrap();
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn empty_sample_fails() {
        for mode in EstimationMode::iter() {
            let err = expected_maximum_performance(&[], mode).unwrap_err();
            assert!(matches!(err, EstimationError::EmptySample));
        }
    }

    #[test]
    fn single_value_curve() {
        for mode in EstimationMode::iter() {
            let curve = expected_maximum_performance(&[0.42], mode).unwrap();
            assert_eq!(curve.values(), &[0.42]);
        }
    }

    #[test]
    fn constant_sample_gives_flat_curve() {
        for mode in EstimationMode::iter() {
            let curve = expected_maximum_performance(&[5.0; 12], mode).unwrap();
            for &v in curve.values() {
                assert!((v - 5.0).abs() < EPS, "mode={mode}, v={v}");
            }
        }
    }

    #[test]
    fn random_samples_satisfy_curve_properties() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..25 {
            let len = rng.random_range(1..60);
            let values = random_values(&mut rng, len);
            let sample = Sample::new(values.iter().copied()).unwrap();
            for mode in EstimationMode::iter() {
                let curve = estimate_curve(&sample, mode).unwrap();
                let v = curve.values();
                assert_eq!(v.len(), len);
                assert!((v[0] - sample.mean()).abs() < 1e-7, "mode={mode}");
                for w in v.windows(2) {
                    assert!(w[1] >= w[0] - 1e-9, "mode={mode}: {} then {}", w[0], w[1]);
                }
                for &x in v {
                    assert!(x <= sample.max() + 1e-9, "mode={mode}: {x}");
                }
            }
        }
    }

    #[test]
    fn unbiased_last_element_is_sample_max() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [2usize, 5, 30, 120] {
            let values = random_values(&mut rng, len);
            let sample = Sample::new(values.iter().copied()).unwrap();
            let curve = estimate_curve(&sample, EstimationMode::Unbiased).unwrap();
            assert_eq!(curve.values()[len - 1], sample.max());
        }
    }

    #[test]
    fn biased_stays_below_unbiased_at_full_budget() {
        let values = [0.61, 0.74, 0.70, 0.55, 0.80, 0.77];
        let unbiased = expected_maximum_performance(&values, EstimationMode::Unbiased).unwrap();
        let biased = expected_maximum_performance(&values, EstimationMode::Biased).unwrap();
        assert!(biased.values()[5] < unbiased.values()[5]);
        assert_eq!(unbiased.values()[5], 0.80);
    }

    #[test]
    fn large_samples_use_overflow_safe_arithmetic() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = random_values(&mut rng, 250);
        let sample = Sample::new(values.iter().copied()).unwrap();
        for mode in EstimationMode::iter() {
            let curve = estimate_curve(&sample, mode).unwrap();
            assert!(curve.values().iter().all(|v| v.is_finite()), "mode={mode}");
            assert!((curve.values()[0] - sample.mean()).abs() < 1e-7);
        }
    }
}
