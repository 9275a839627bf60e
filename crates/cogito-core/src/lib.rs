//! Cogito Core Library
//!
//! An MCP server that exposes a handful of text tools (verification,
//! reasoning chains, prompt optimization, translation, summarization) and
//! forwards each one as a single prompt to a remote LLM provider.
//!
//! Outbound calls go through a sliding-window rate limiter and a bounded
//! exponential-backoff retry loop.

pub mod config;
pub mod error;
pub mod llm;
pub mod mcp;
pub mod tools;

// Re-export commonly used types
pub use config::{Config, ConfigLoader, FailurePolicy, ProviderKind};
pub use error::{CogitoError, CogitoResult, ProviderError, UnifiedError};
pub use llm::{LlmClient, PromptRequest, RateLimiter, RetryPolicy, TextGenerator};
pub use mcp::McpServer;
pub use tools::{TextTool, ToolRegistry};
