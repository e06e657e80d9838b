//! Expected maximum performance as a function of the trial budget.
//!
//! Given performance measurements from repeated experiments, estimates the
//! expected best score after `n` experiments for every `n` up to the sample
//! size, using either the biased with-replacement estimator or the unbiased
//! order-statistics estimator.

pub mod core;
pub mod evaluation;
pub mod sources;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::Sample;
pub use crate::evaluation::{
    EstimationError, EstimationMode, ExpectedMaximumCurve, expected_maximum_performance,
};
pub use crate::utils::math::binomial;
