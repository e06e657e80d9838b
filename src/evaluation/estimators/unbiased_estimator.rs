use crate::evaluation::estimators::MaximumEstimator;
use crate::utils::math::{MathError, binomial_ratio};

/// Without-replacement estimator (Tang et al., 2020).
///
/// Weight of index `i` is `C(i, n - 1) / C(m, n)`: the share of size-`n`
/// subsets of the sample whose maximum is `sorted[i]`. For `i < n - 1` the
/// numerator is zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnbiasedEstimator;

impl MaximumEstimator for UnbiasedEstimator {
    fn weight(&self, index: usize, n: usize, m: usize) -> Result<f64, MathError> {
        binomial_ratio(index as i64, n as i64 - 1, m as i64, n as i64)
    }
}
