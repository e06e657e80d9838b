use thiserror::Error;

/// A line or token that could not be read as a finite real number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line format not recognized: \"{line}\", skipped")]
pub struct ParseError {
    pub line: String,
}

/// Parses one trimmed line as a finite `f64`.
pub fn parse_value(line: &str) -> Result<f64, ParseError> {
    let trimmed = line.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError {
            line: trimmed.to_string(),
        }),
    }
}
