use crate::core::Sample;
use crate::utils::math::MathError;

/// Closed-form expected-maximum estimator over the order statistics of a
/// [`Sample`].
///
/// Implementations provide [`MaximumEstimator::weight`]: the probability that the order
/// statistic at `index` is the best of `n` trials drawn from `m` measurements.
/// The expected maximum is then the weighted sum over the sorted sample.
pub trait MaximumEstimator {
    /// Probability that `sorted[index]` is the maximum of `n` trials.
    fn weight(&self, index: usize, n: usize, m: usize) -> Result<f64, MathError>;

    /// Expected best result after `n` trials (`1 <= n <= sample.len()`).
    ///
    /// Terms are accumulated in ascending index order so the float rounding is
    /// reproducible.
    fn expected_maximum(&self, sample: &Sample, n: usize) -> Result<f64, MathError> {
        let m = sample.len();
        let mut acc = 0.0;
        for (index, value) in sample.values().iter().enumerate() {
            acc += value * self.weight(index, n, m)?;
        }
        Ok(acc)
    }
}
