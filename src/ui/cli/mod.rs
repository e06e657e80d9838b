mod args;
pub mod drivers;
pub mod runner;

pub use args::Cli;
pub use runner::{RunOutcome, render_curve, run};
