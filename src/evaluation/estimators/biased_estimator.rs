use crate::evaluation::estimators::MaximumEstimator;
use crate::utils::math::MathError;

/// With-replacement estimator over the empirical CDF (Dodge et al., 2019).
///
/// Weight of index `i` is `((i + 1)^n - i^n) / m^n`: the share of ordered
/// size-`n` draws whose largest index is exactly `i`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BiasedEstimator;

impl MaximumEstimator for BiasedEstimator {
    fn weight(&self, index: usize, n: usize, m: usize) -> Result<f64, MathError> {
        let exact = u32::try_from(n).ok().and_then(|exp| {
            let upper = (index as u128 + 1).checked_pow(exp)?;
            let lower = (index as u128).checked_pow(exp)?;
            let total = (m as u128).checked_pow(exp)?;
            Some((upper - lower) as f64 / total as f64)
        });
        if let Some(w) = exact {
            return Ok(w);
        }

        let n = n as f64;
        let m = m as f64;
        let i = index as f64;
        Ok(((i + 1.0) / m).powf(n) - (i / m).powf(n))
    }
}
