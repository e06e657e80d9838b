use anyhow::Result;

/// Line-oriented input used by the interactive sample source.
pub trait PromptDriver {
    /// Shows `prompt` and reads one line. `Ok(None)` means end of input.
    fn ask_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<D: PromptDriver + ?Sized> PromptDriver for &mut D {
    fn ask_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).ask_line(prompt)
    }
}
