use crate::utils::math::MathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("empty sample: at least one measurement is required")]
    EmptySample,

    #[error("non-finite measurement: {0}")]
    NonFinite(f64),

    #[error(transparent)]
    Math(#[from] MathError),
}
