//! Prompt payload passed from tools to the provider gateway

use serde::{Deserialize, Serialize};

/// A single-turn prompt with an optional system preamble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            preamble: None,
        }
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    /// Preamble, if present and non-blank
    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Preamble and prompt as one block, separated by a blank line
    pub fn combined_text(&self) -> String {
        match self.preamble() {
            Some(preamble) => format!("{}\n\n{}", preamble, self.prompt),
            None => self.prompt.clone(),
        }
    }
}
