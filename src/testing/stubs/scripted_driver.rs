use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use std::collections::VecDeque;

/// Replays canned answers, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
