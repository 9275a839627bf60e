//! Retry logic for provider requests

use super::types::LlmClient;
use crate::error::{CogitoError, CogitoResult, ProviderError, UnifiedError};
use std::future::Future;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{instrument, warn};

impl LlmClient {
    /// Run `operation` until it succeeds, fails fatally, or the attempt
    /// budget is spent.
    ///
    /// Each attempt first sleeps its backoff, then takes a rate limiter slot,
    /// then calls the provider. All three race against `cancel`; once it
    /// fires no further attempt is made.
    ///
    /// # Errors
    ///
    /// Fatal provider errors are returned as soon as they occur. After the
    /// last retryable failure the error is wrapped in
    /// [`ProviderError::Exhausted`].
    #[instrument(skip(self, operation, cancel), fields(max_attempts = self.retry_policy.max_attempts()))]
    pub(super) async fn execute_with_retry<F, Fut>(
        &self,
        operation: F,
        cancel: &CancellationToken,
    ) -> CogitoResult<String>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<String, ProviderError>>,
    {
        let max_attempts = self.retry_policy.max_attempts();
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            let delay = self.retry_policy.delay_before(attempt);
            if !delay.is_zero() {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(CogitoError::Cancelled),
                    _ = sleep(delay) => {}
                }
            }

            self.rate_limiter.admit_or_cancel(cancel).await?;

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(CogitoError::Cancelled),
                outcome = operation() => outcome,
            };

            match outcome {
                Ok(text) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "request succeeded after retry");
                    }
                    return Ok(text);
                }
                Err(error) if !error.is_retryable() => {
                    warn!(attempt, error = %error, "non-retryable provider error");
                    return Err(error.into());
                }
                Err(error) => {
                    if attempt < max_attempts {
                        warn!(
                            attempt,
                            max_attempts,
                            delay_ms = self.retry_policy.delay_before(attempt + 1).as_millis() as u64,
                            error = %error,
                            "retrying after failure"
                        );
                    }
                    last_error = Some(error);
                }
            }
        }

        tracing::error!(attempts = max_attempts, "all retry attempts exhausted");
        let last = last_error.unwrap_or_else(|| ProviderError::Request {
            provider: self.provider_name.clone(),
            message: "no attempt was made".to_string(),
        });
        Err(ProviderError::Exhausted {
            attempts: max_attempts,
            last: Box::new(last),
        }
        .into())
    }
}
