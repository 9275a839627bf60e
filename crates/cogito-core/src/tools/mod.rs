//! Tool layer
//!
//! Each tool turns validated arguments into a [`PromptRequest`] from a fixed
//! template. The [`ToolRegistry`] looks tools up by name and forwards the
//! prompt to the shared [`LlmClient`](crate::llm::LlmClient).
//!
//! [`PromptRequest`]: crate::llm::PromptRequest

pub mod arguments;
pub mod base;
pub mod builtin;
pub mod error;
pub mod registry;

pub use arguments::ToolArguments;
pub use base::{TextTool, ToolDefinition};
pub use builtin::{
    OptimizePromptTool, ReasoningChainTool, SummarizeTextTool, TranslateTextTool,
    VerifyStatementTool, default_tools,
};
pub use error::ToolError;
pub use registry::ToolRegistry;
