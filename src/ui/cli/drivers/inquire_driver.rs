use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{InquireError, Text};

/// Terminal driver backed by `inquire`.
///
/// Esc and Ctrl-C end the input the same way an empty line does.
pub struct InquireDriver {
    help: Option<&'static str>,
}

impl InquireDriver {
    pub fn new() -> Self {
        Self {
            help: Some("One number per line, empty line to finish"),
        }
    }
}

impl Default for InquireDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDriver for InquireDriver {
    fn ask_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut q = Text::new(prompt);
        if let Some(help) = self.help {
            q = q.with_help_message(help);
        }
        match q.prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
