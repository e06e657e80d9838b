use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::evaluation::{ExpectedMaximumCurve, expected_maximum_performance, format_list};
use crate::sources::{ExplicitList, FileSource, InteractivePrompt, SampleSource, resolve_sample};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::{OutputStyle, RunConfig};

/// What a run ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No source produced a number; nothing was estimated.
    NoNumbers,
    Estimated(ExpectedMaximumCurve),
}

/// Resolves the sample, estimates the curve and renders it.
///
/// Results go to `out`; warnings and fallback notes go to `err`.
pub fn run<D: PromptDriver>(
    config: &RunConfig,
    driver: D,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RunOutcome> {
    match serde_json::to_string(config) {
        Ok(json) => debug!(config = %json, "run configuration"),
        Err(e) => debug!(error = %e, ?config, "run configuration is not serializable"),
    }

    let mut sources: Vec<Box<dyn SampleSource + '_>> =
        vec![Box::new(ExplicitList::new(config.numbers.clone()))];
    if let Some(path) = &config.file {
        sources.push(Box::new(FileSource::new(path)));
    }
    sources.push(Box::new(InteractivePrompt::new(driver)));

    let Some(resolved) = resolve_sample(&mut sources, err)? else {
        writeln!(err, "No numbers given, end script.")?;
        return Ok(RunOutcome::NoNumbers);
    };

    writeln!(out, "Numbers: {}", format_list(&resolved.values))?;

    let curve = expected_maximum_performance(&resolved.values, config.mode)?;
    render_curve(&curve, config.output_style, out)?;

    if let Some(target) = &config.export {
        curve.export(&target.path, target.format).with_context(|| {
            format!("failed to export curve to {}", target.path.display())
        })?;
        info!(path = %target.path.display(), format = %target.format, "curve exported");
    }

    Ok(RunOutcome::Estimated(curve))
}

/// Writes the mode header and the formatted curve.
pub fn render_curve(
    curve: &ExpectedMaximumCurve,
    style: OutputStyle,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let header = curve.mode().header();
    match style {
        OutputStyle::Aggregate => writeln!(out, "{header} {curve}"),
        OutputStyle::PerLine => {
            writeln!(out, "{header}")?;
            for value in curve.formatted() {
                writeln!(out, "{value}")?;
            }
            Ok(())
        }
    }
}
