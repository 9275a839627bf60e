//! Translation between natural languages

use crate::llm::PromptRequest;
use crate::tools::arguments::ToolArguments;
use crate::tools::base::TextTool;
use crate::tools::error::ToolError;
use serde_json::{Value, json};

const PREAMBLE: &str = "You are a professional translator. Preserve meaning, tone and \
formatting. Output only the translation, with no commentary.";

pub struct TranslateTextTool;

impl TextTool for TranslateTextTool {
    fn name(&self) -> &str {
        "translate_text"
    }

    fn description(&self) -> &str {
        "Translate text into a target language. The source language is detected when not given."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to translate"
                },
                "target_language": {
                    "type": "string",
                    "description": "Language to translate into, e.g. \"French\""
                },
                "source_language": {
                    "type": "string",
                    "description": "Language of the input; detected automatically when omitted"
                }
            },
            "required": ["text", "target_language"]
        })
    }

    fn build_prompt(&self, args: &ToolArguments) -> Result<PromptRequest, ToolError> {
        let text = args.required_str("text")?;
        let target = args.required_str("target_language")?;
        let source = args.optional_str("source_language")?;

        let direction = match source {
            Some(source) => format!("from {} into {}", source, target),
            None => format!("into {} (detect the source language)", target),
        };
        let prompt = format!("Translate the following text {}:\n\n{}", direction, text);

        Ok(PromptRequest::new(prompt).with_preamble(PREAMBLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auto_detect_source() {
        let args = ToolArguments::from_value(json!({
            "text": "Guten Morgen",
            "target_language": "English"
        }))
        .unwrap();
        let request = TranslateTextTool.build_prompt(&args).unwrap();
        assert!(request.prompt.starts_with("Translate the following text into English (detect"));
        assert!(request.prompt.ends_with("Guten Morgen"));
    }

    #[test]
    fn test_explicit_source() {
        let args = ToolArguments::from_value(json!({
            "text": "Hola",
            "target_language": "English",
            "source_language": "Spanish"
        }))
        .unwrap();
        let request = TranslateTextTool.build_prompt(&args).unwrap();
        assert!(request.prompt.contains("from Spanish into English"));
    }

    #[test]
    fn test_target_language_required() {
        let args = ToolArguments::from_value(json!({ "text": "Hola" })).unwrap();
        let err = TranslateTextTool.build_prompt(&args).unwrap_err();
        assert!(err.to_string().contains("target_language"));
    }
}
