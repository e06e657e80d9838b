pub mod math;
pub mod parsing;
