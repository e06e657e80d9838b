use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::parsing::{ParseError, parse_value};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    Unavailable(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Prompt(#[from] anyhow::Error),

    #[error("failed to write diagnostics: {0}")]
    Diagnostics(#[source] std::io::Error),
}

/// Outcome of reading one source: the parsed values in input order plus
/// every line that was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceReport {
    pub values: Vec<f64>,
    pub skipped: Vec<ParseError>,
}

impl SourceReport {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keeps `value` when finite; otherwise warns on `diag` and skips it.
    pub(crate) fn push_value(&mut self, value: f64, diag: &mut dyn Write) -> Result<(), SourceError> {
        if value.is_finite() {
            self.values.push(value);
            return Ok(());
        }
        self.skip(
            ParseError {
                line: value.to_string(),
            },
            diag,
        )
    }

    fn skip(&mut self, e: ParseError, diag: &mut dyn Write) -> Result<(), SourceError> {
        writeln!(diag, "{e}").map_err(SourceError::Diagnostics)?;
        self.skipped.push(e);
        Ok(())
    }

    /// Parses `line` into the report, warning on `diag` when it is skipped.
    pub(crate) fn push_line(&mut self, line: &str, diag: &mut dyn Write) -> Result<(), SourceError> {
        match parse_value(line) {
            Ok(v) => {
                self.values.push(v);
                Ok(())
            }
            Err(e) => self.skip(e, diag),
        }
    }
}

/// One place a sample can come from.
pub trait SampleSource {
    /// Short name used in fallback diagnostics (e.g. `"interactive"`).
    fn label(&self) -> &'static str;

    /// Reads every value this source offers. Unparseable lines are reported
    /// on `diag` and skipped.
    fn read(&mut self, diag: &mut dyn Write) -> Result<SourceReport, SourceError>;

    /// Whether an empty read should be announced before falling through.
    fn announce_empty(&self) -> bool {
        true
    }
}
