//! Summaries with a word budget

use crate::llm::PromptRequest;
use crate::tools::arguments::ToolArguments;
use crate::tools::base::TextTool;
use crate::tools::error::ToolError;
use serde_json::{Value, json};

const DEFAULT_MAX_WORDS: u64 = 150;
const MAX_WORDS_LIMIT: u64 = 2_000;
const STYLES: [&str; 2] = ["paragraph", "bullets"];

const PREAMBLE: &str = "You write faithful summaries. Keep the key facts, drop repetition, \
and never add information that is not in the source.";

pub struct SummarizeTextTool;

impl TextTool for SummarizeTextTool {
    fn name(&self) -> &str {
        "summarize_text"
    }

    fn description(&self) -> &str {
        "Summarize text within a word budget, as a paragraph or as bullet points."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to summarize"
                },
                "max_words": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": MAX_WORDS_LIMIT,
                    "default": DEFAULT_MAX_WORDS,
                    "description": "Approximate upper bound on summary length"
                },
                "style": {
                    "type": "string",
                    "enum": STYLES,
                    "default": "paragraph"
                }
            },
            "required": ["text"]
        })
    }

    fn build_prompt(&self, args: &ToolArguments) -> Result<PromptRequest, ToolError> {
        let text = args.required_str("text")?;
        let max_words = args.optional_count("max_words", DEFAULT_MAX_WORDS, MAX_WORDS_LIMIT)?;
        let style = args.optional_choice("style", &STYLES, "paragraph")?;

        let shape = if style == "bullets" {
            "a bulleted list"
        } else {
            "a single paragraph"
        };
        let prompt = format!(
            "Summarize the text below as {} of at most {} words.\n\nText:\n{}",
            shape, max_words, text
        );

        Ok(PromptRequest::new(prompt).with_preamble(PREAMBLE))
    }
}
