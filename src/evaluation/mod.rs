mod error;
mod estimators;
mod expected_maximum;
mod mode;
mod preview;

pub use error::EstimationError;
pub use estimators::{BiasedEstimator, MaximumEstimator, UnbiasedEstimator};
pub use expected_maximum::{estimate_curve, expected_maximum_performance};
pub use mode::EstimationMode;
pub use preview::{CurveFormat, ExpectedMaximumCurve, format_fixed, format_list};
