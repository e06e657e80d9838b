use std::io::Write;
use tracing::{debug, info};

use crate::sources::{SampleSource, SourceError};

/// Values obtained from the first source that produced any.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSample {
    pub origin: &'static str,
    pub values: Vec<f64>,
}

/// Tries `sources` in order and returns the first non-empty read.
///
/// A missing or unreadable file and an empty read both fall through to the
/// next source, with a note on `diag`. Prompt failures abort the chain.
/// `Ok(None)` means no source produced a number.
pub fn resolve_sample(
    sources: &mut [Box<dyn SampleSource + '_>],
    diag: &mut dyn Write,
) -> Result<Option<ResolvedSample>, SourceError> {
    let count = sources.len();
    for idx in 0..count {
        let next_label = sources.get(idx + 1).map(|s| s.label());
        let source = &mut sources[idx];
        debug!(source = source.label(), "reading sample");

        let note = match source.read(diag) {
            Ok(report) if !report.is_empty() => {
                info!(
                    source = source.label(),
                    values = report.values.len(),
                    skipped = report.skipped.len(),
                    "sample resolved"
                );
                return Ok(Some(ResolvedSample {
                    origin: source.label(),
                    values: report.values,
                }));
            }
            Ok(_) if source.announce_empty() => Some("No numbers are read".to_string()),
            Ok(_) => None,
            Err(e @ (SourceError::Unavailable(_) | SourceError::Io { .. })) => Some(e.to_string()),
            Err(e) => return Err(e),
        };

        if let (Some(note), Some(next)) = (note, next_label) {
            writeln!(diag, "{note}, enter {next} mode").map_err(SourceError::Diagnostics)?;
        }
    }
    Ok(None)
}
