use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display as StrumDisplay, EnumString};

use crate::evaluation::EstimationMode;

/// File layouts accepted by [`ExpectedMaximumCurve::export`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CurveFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Fixed-point rendering with exactly six fractional digits.
#[inline]
pub fn format_fixed(value: f64) -> String {
    format!("{value:.6}")
}

/// `[a, b, c]` with every element rendered by [`format_fixed`].
pub fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|&v| format_fixed(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Expected maximum performance per trial budget.
///
/// Element `n - 1` holds the expected best score after `n` trials.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedMaximumCurve {
    mode: EstimationMode,
    entries: Vec<f64>,
}

impl ExpectedMaximumCurve {
    pub fn new(mode: EstimationMode, entries: Vec<f64>) -> Self {
        Self { mode, entries }
    }

    pub fn mode(&self) -> EstimationMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.entries
    }

    /// Expected maximum after `trials` runs (1-indexed).
    pub fn get(&self, trials: usize) -> Option<f64> {
        trials
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .copied()
    }

    /// `(trials, expected_maximum)` pairs, starting at one trial.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }

    pub fn formatted(&self) -> Vec<String> {
        self.entries.iter().map(|&v| format_fixed(v)).collect()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(&mut w, ',')?,
            CurveFormat::Tsv => self.export_with_delimiter(&mut w, '\t')?,
            CurveFormat::Json => self.export_json(&mut w)?,
        }
        w.flush()
    }

    fn export_with_delimiter<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        writeln!(w, "trials{d}expected_maximum", d = delimiter)?;
        for (trials, v) in self.iter() {
            writeln!(w, "{trials}{d}{v:.6}", d = delimiter)?;
        }
        Ok(())
    }

    fn export_json<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        let rows: Vec<serde_json::Value> = self
            .iter()
            .map(|(trials, v)| serde_json::json!({ "trials": trials, "expected_maximum": v }))
            .collect();
        let doc = serde_json::json!({ "mode": self.mode, "curve": rows });
        serde_json::to_writer_pretty(&mut *w, &doc)?;
        writeln!(w)
    }
}

impl Display for ExpectedMaximumCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_list(&self.entries))
    }
}
