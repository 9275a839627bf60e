//! LLM client type definitions

use super::policy::RetryPolicy;
use crate::llm::providers::TextGenerator;
use crate::llm::rate_limiter::RateLimiter;
use std::sync::Arc;

/// Rate-limited, retrying client for the configured provider.
///
/// Built once in the composition root and shared by every tool. The
/// generator is one [`TextGenerator`] call per attempt; the client decides
/// how many attempts happen and when.
///
/// # Examples
///
/// ```no_run
/// use cogito_core::config::ConfigLoader;
/// use cogito_core::llm::{LlmClient, PromptRequest};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConfigLoader::new().with_env().load()?;
/// let client = LlmClient::from_config(&config)?;
///
/// let request = PromptRequest::new("Is the sky blue?");
/// let text = client.generate(&request, &CancellationToken::new()).await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LlmClient {
    pub(super) provider_name: String,
    pub(super) model: String,
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) rate_limiter: RateLimiter,
    pub(super) retry_policy: RetryPolicy,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("provider", &self.provider_name)
            .field("model", &self.model)
            .field("rate_limit", self.rate_limiter.config())
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}
