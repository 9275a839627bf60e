//! Core TextTool trait definition

use super::arguments::ToolArguments;
use super::error::ToolError;
use crate::llm::PromptRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool that answers by sending one templated prompt to the provider.
///
/// Tools are pure prompt builders: they never touch the network, so
/// argument validation always happens before any outbound call.
pub trait TextTool: Send + Sync {
    /// Unique name, e.g. `translate_text`
    fn name(&self) -> &str;

    /// Description shown in `tools/list`
    fn description(&self) -> &str;

    /// JSON schema of the arguments object
    fn input_schema(&self) -> Value;

    /// Validate `args` and render the prompt
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidArguments`] for a missing required
    /// argument, a wrong type, an empty required string, or an out-of-range
    /// number.
    fn build_prompt(&self, args: &ToolArguments) -> Result<PromptRequest, ToolError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Name, description and schema of a tool, as advertised to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}
