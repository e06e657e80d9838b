use std::io::Write;

use crate::sources::{SampleSource, SourceError, SourceReport};
use crate::ui::cli::drivers::PromptDriver;

const PROMPT: &str = "> ";

/// Reads values one line at a time until an empty line or end of input.
pub struct InteractivePrompt<D> {
    driver: D,
}

impl<D: PromptDriver> InteractivePrompt<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }
}

impl<D: PromptDriver> SampleSource for InteractivePrompt<D> {
    fn label(&self) -> &'static str {
        "interactive"
    }

    fn read(&mut self, diag: &mut dyn Write) -> Result<SourceReport, SourceError> {
        let mut report = SourceReport::default();
        while let Some(line) = self.driver.ask_line(PROMPT)? {
            if line.trim().is_empty() {
                break;
            }
            report.push_line(&line, diag)?;
        }
        Ok(report)
    }
}
