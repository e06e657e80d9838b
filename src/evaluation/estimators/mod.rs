mod biased_estimator;
mod estimator;
mod unbiased_estimator;

pub use biased_estimator::BiasedEstimator;
pub use estimator::MaximumEstimator;
pub use unbiased_estimator::UnbiasedEstimator;
