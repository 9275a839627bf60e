//! Fact-check a single statement

use crate::llm::PromptRequest;
use crate::tools::arguments::ToolArguments;
use crate::tools::base::TextTool;
use crate::tools::error::ToolError;
use serde_json::{Value, json};

const PREAMBLE: &str = "You are a careful fact-checker. Judge claims strictly on the evidence \
you know of, say plainly when something cannot be determined, and never invent sources.";

pub struct VerifyStatementTool;

impl TextTool for VerifyStatementTool {
    fn name(&self) -> &str {
        "verify_statement"
    }

    fn description(&self) -> &str {
        "Assess whether a statement is accurate. Returns a verdict (true, false, partially true \
         or unverifiable), the reasoning behind it, and any corrections."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "statement": {
                    "type": "string",
                    "description": "The claim to verify"
                },
                "context": {
                    "type": "string",
                    "description": "Optional background that the claim should be judged against"
                }
            },
            "required": ["statement"]
        })
    }

    fn build_prompt(&self, args: &ToolArguments) -> Result<PromptRequest, ToolError> {
        let statement = args.required_str("statement")?;
        let context = args.optional_str("context")?;

        let mut prompt = format!("Verify the following statement.\n\nStatement: {}\n", statement);
        if let Some(context) = context {
            prompt.push_str(&format!("\nContext: {}\n", context));
        }
        prompt.push_str(
            "\nRespond with:\n\
             1. Verdict: TRUE, FALSE, PARTIALLY TRUE, or UNVERIFIABLE\n\
             2. Reasoning: the key facts that support the verdict\n\
             3. Corrections: an accurate restatement if the claim is wrong or incomplete",
        );

        Ok(PromptRequest::new(prompt).with_preamble(PREAMBLE))
    }
}
