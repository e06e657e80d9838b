mod curve;

pub use curve::{CurveFormat, ExpectedMaximumCurve, format_fixed, format_list};
