use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::evaluation::{CurveFormat, EstimationMode};
use crate::ui::cli::Cli;

/// How the curve is written to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputStyle {
    /// Header and bracketed list on a single line.
    #[default]
    Aggregate,
    /// Header line, then one value per line.
    PerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub path: PathBuf,
    #[serde(default)]
    pub format: CurveFormat,
}

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub numbers: Vec<f64>,
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub mode: EstimationMode,
    #[serde(default)]
    pub output_style: OutputStyle,
    #[serde(default)]
    pub export: Option<ExportTarget>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            numbers: cli.numbers,
            file: cli.file,
            mode: if cli.biased {
                EstimationMode::Biased
            } else {
                EstimationMode::Unbiased
            },
            output_style: if cli.print {
                OutputStyle::PerLine
            } else {
                OutputStyle::Aggregate
            },
            export: cli.output.map(|path| ExportTarget {
                path,
                format: cli.format,
            }),
        }
    }
}
