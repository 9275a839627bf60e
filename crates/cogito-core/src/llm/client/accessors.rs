//! LLM client accessor methods

use super::policy::RetryPolicy;
use super::types::LlmClient;
use crate::llm::rate_limiter::RateLimiter;

impl LlmClient {
    /// Name of the backend, e.g. `gemini`
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Model requests are sent to; empty for injected generators
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}
