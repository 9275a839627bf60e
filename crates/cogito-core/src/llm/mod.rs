//! Provider gateway and reliability wrapper
//!
//! [`providers`] turns a [`PromptRequest`] into an HTTP call against the
//! configured backend. [`LlmClient`] wraps that call with the sliding-window
//! [`RateLimiter`] and a bounded exponential-backoff retry loop.

pub mod client;
pub mod messages;
pub mod parsers;
pub mod providers;
pub mod rate_limiter;

pub use client::{LlmClient, RetryPolicy};
pub use messages::PromptRequest;
pub use providers::{GeminiProvider, OpenAiProvider, ProviderBackend, TextGenerator};
pub use rate_limiter::{RateLimitConfig, RateLimiter};
