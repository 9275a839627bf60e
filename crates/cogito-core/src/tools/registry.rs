//! Tool registry for dispatching calls by name

use super::arguments::ToolArguments;
use super::base::{TextTool, ToolDefinition};
use super::builtin::default_tools;
use super::error::ToolError;
use crate::error::CogitoResult;
use crate::llm::{LlmClient, PromptRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Registry of text tools sharing one [`LlmClient`]
pub struct ToolRegistry {
    client: Arc<LlmClient>,
    tools: HashMap<String, Arc<dyn TextTool>>,
    // Advertised order for tools/list
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new(client: Arc<LlmClient>) -> Self {
        Self {
            client,
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registry with the five built-in tools
    pub fn with_defaults(client: Arc<LlmClient>) -> Self {
        let mut registry = Self::new(client);
        for tool in default_tools() {
            registry.register(tool);
        }
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn TextTool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn TextTool>> {
        self.tools.get(name)
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Definitions of every registered tool, in registration order
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.definition())
            .collect()
    }

    pub fn client(&self) -> &LlmClient {
        &self.client
    }

    /// Resolve the tool and render its prompt without calling the provider.
    ///
    /// # Errors
    ///
    /// [`CogitoError::UnknownTool`](crate::error::CogitoError::UnknownTool)
    /// or [`CogitoError::InvalidInput`](crate::error::CogitoError::InvalidInput).
    pub fn prepare(&self, name: &str, arguments: Value) -> CogitoResult<PromptRequest> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        let args = ToolArguments::from_value(arguments)?;
        Ok(tool.build_prompt(&args)?)
    }

    /// Validate, build the prompt and send it through the client.
    #[instrument(skip(self, arguments, cancel), fields(tool = %name))]
    pub async fn call(
        &self,
        name: &str,
        arguments: Value,
        cancel: &CancellationToken,
    ) -> CogitoResult<String> {
        let request = self.prepare(name, arguments)?;
        debug!(prompt_chars = request.prompt.len(), "tool prompt built");
        self.client.generate(&request, cancel).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.order)
            .field("client", &self.client)
            .finish()
    }
}
