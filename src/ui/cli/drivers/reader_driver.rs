use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result};
use std::io::BufRead;

/// Reads lines from any buffered reader (piped stdin, in-memory buffers).
///
/// No prompt is echoed so piped output stays clean.
pub struct ReaderDriver<R> {
    reader: R,
}

impl<R: BufRead> ReaderDriver<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PromptDriver for ReaderDriver<R> {
    fn ask_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
