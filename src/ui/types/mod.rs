mod config;

pub use config::{ExportTarget, OutputStyle, RunConfig};
