//! Step-by-step reasoning chains

use crate::llm::PromptRequest;
use crate::tools::arguments::ToolArguments;
use crate::tools::base::TextTool;
use crate::tools::error::ToolError;
use serde_json::{Value, json};

const DEFAULT_STEPS: u64 = 5;
const MAX_STEPS: u64 = 20;

const PREAMBLE: &str = "You reason in explicit, numbered steps. Each step states one inference \
and what it depends on. Finish with a clearly marked conclusion.";

pub struct ReasoningChainTool;

impl TextTool for ReasoningChainTool {
    fn name(&self) -> &str {
        "generate_reasoning_chain"
    }

    fn description(&self) -> &str {
        "Work through a problem as a numbered chain of reasoning steps ending in a conclusion."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "problem": {
                    "type": "string",
                    "description": "The question or problem to reason about"
                },
                "max_steps": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": MAX_STEPS,
                    "default": DEFAULT_STEPS,
                    "description": "Upper bound on the number of reasoning steps"
                }
            },
            "required": ["problem"]
        })
    }

    fn build_prompt(&self, args: &ToolArguments) -> Result<PromptRequest, ToolError> {
        let problem = args.required_str("problem")?;
        let max_steps = args.optional_count("max_steps", DEFAULT_STEPS, MAX_STEPS)?;

        let prompt = format!(
            "Problem: {}\n\n\
             Solve this using at most {} numbered steps. Label each step \"Step N:\". \
             After the last step write \"Conclusion:\" followed by the answer.",
            problem, max_steps
        );
        Ok(PromptRequest::new(prompt).with_preamble(PREAMBLE))
    }
}
