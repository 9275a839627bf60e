//! Prompt rewriting

use crate::llm::PromptRequest;
use crate::tools::arguments::ToolArguments;
use crate::tools::base::TextTool;
use crate::tools::error::ToolError;
use serde_json::{Value, json};

const PREAMBLE: &str = "You are an expert prompt engineer. You rewrite prompts so they are \
specific, unambiguous and easy for a language model to follow, without changing their intent.";

pub struct OptimizePromptTool;

impl TextTool for OptimizePromptTool {
    fn name(&self) -> &str {
        "optimize_prompt"
    }

    fn description(&self) -> &str {
        "Rewrite a prompt to be clearer and more effective, and explain the changes."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "The prompt to improve"
                },
                "goal": {
                    "type": "string",
                    "description": "What the prompt should achieve"
                },
                "target_model": {
                    "type": "string",
                    "description": "Model family the prompt will be sent to"
                }
            },
            "required": ["prompt"]
        })
    }

    fn build_prompt(&self, args: &ToolArguments) -> Result<PromptRequest, ToolError> {
        let original = args.required_str("prompt")?;
        let goal = args.optional_str("goal")?;
        let target_model = args.optional_str("target_model")?;

        let mut prompt = String::from("Improve the prompt below.\n");
        if let Some(goal) = goal {
            prompt.push_str(&format!("Goal: {}\n", goal));
        }
        if let Some(model) = target_model {
            prompt.push_str(&format!("Target model: {}\n", model));
        }
        prompt.push_str(&format!(
            "\nOriginal prompt:\n\"\"\"\n{}\n\"\"\"\n\n\
             Return the optimized prompt first, then a short list of the changes you made.",
            original
        ));

        Ok(PromptRequest::new(prompt).with_preamble(PREAMBLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_rendered() {
        let args = ToolArguments::from_value(json!({
            "prompt": "write code",
            "goal": "a rust parser",
            "target_model": "gemini"
        }))
        .unwrap();
        let request = OptimizePromptTool.build_prompt(&args).unwrap();
        assert!(request.prompt.contains("Goal: a rust parser"));
        assert!(request.prompt.contains("Target model: gemini"));
        assert!(request.prompt.contains("\"\"\"\nwrite code\n\"\"\""));
    }

    #[test]
    fn test_goal_must_be_string() {
        let args = ToolArguments::from_value(json!({ "prompt": "x", "goal": 1 })).unwrap();
        assert!(OptimizePromptTool.build_prompt(&args).is_err());
    }
}
