use crate::evaluation::EstimationError;

/// Performance measurements from repeated experiments, sorted ascending.
///
/// A `Sample` is never empty and is immutable once built. Ordering matters to
/// the estimators: index `i` is the `i`-th order statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    sorted: Vec<f64>,
}

impl Sample {
    /// Builds a sample from measurements in any order.
    ///
    /// Fails with [`EstimationError::EmptySample`] when `values` is empty and
    /// with [`EstimationError::NonFinite`] on `NaN` or infinities.
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Result<Self, EstimationError> {
        let mut sorted: Vec<f64> = values.into_iter().collect();
        if sorted.is_empty() {
            return Err(EstimationError::EmptySample);
        }
        if let Some(&bad) = sorted.iter().find(|v| !v.is_finite()) {
            return Err(EstimationError::NonFinite(bad));
        }
        sorted.sort_by(f64::total_cmp);
        Ok(Self { sorted })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Order statistics, smallest first.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.sorted
    }

    pub fn mean(&self) -> f64 {
        self.sorted.iter().sum::<f64>() / self.len() as f64
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }
}
