//! LLM client constructor and initialization logic

use super::policy::RetryPolicy;
use super::types::LlmClient;
use crate::config::Config;
use crate::error::CogitoResult;
use crate::llm::providers::{ProviderBackend, TextGenerator, build_http_client};
use crate::llm::rate_limiter::{RateLimitConfig, RateLimiter};
use std::sync::Arc;
use tracing::debug;

impl LlmClient {
    /// Build the client for the provider selected in `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built or
    /// if the rate limit or retry settings are degenerate.
    pub fn from_config(config: &Config) -> CogitoResult<Self> {
        let http_client = build_http_client(&config.timeouts)?;
        let backend = ProviderBackend::from_config(config, http_client);
        let rate_limiter = RateLimiter::new(RateLimitConfig::from(&config.rate_limit))?;
        let retry_policy = RetryPolicy::try_from(&config.retry)?;

        debug!(
            provider = backend.name(),
            model = backend.model(),
            max_requests = config.rate_limit.max_requests,
            window_ms = config.rate_limit.window_ms,
            max_attempts = retry_policy.max_attempts(),
            "LLM client initialized"
        );

        let provider_name = backend.name().to_string();
        let model = backend.model().to_string();
        Ok(Self {
            provider_name,
            model,
            generator: Arc::new(backend),
            rate_limiter,
            retry_policy,
        })
    }

    /// Wrap an arbitrary generator. Used by tests and by embedders that
    /// bring their own backend.
    pub fn with_generator(
        provider_name: impl Into<String>,
        generator: Arc<dyn TextGenerator>,
        rate_limiter: RateLimiter,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            model: String::new(),
            generator,
            rate_limiter,
            retry_policy,
        }
    }
}
