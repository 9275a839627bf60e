//! Text generation entry point

use super::types::LlmClient;
use crate::error::CogitoResult;
use crate::llm::messages::PromptRequest;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

impl LlmClient {
    /// Send one prompt and return the provider's text unmodified.
    ///
    /// # Errors
    ///
    /// - [`CogitoError::Provider`](crate::error::CogitoError::Provider) with
    ///   a fatal error, or `Exhausted` once the retry budget is spent
    /// - [`CogitoError::Cancelled`](crate::error::CogitoError::Cancelled)
    ///   when `cancel` fires first
    #[instrument(
        skip(self, request, cancel),
        fields(provider = %self.provider_name, prompt_chars = request.prompt.len())
    )]
    pub async fn generate(
        &self,
        request: &PromptRequest,
        cancel: &CancellationToken,
    ) -> CogitoResult<String> {
        let text = self
            .execute_with_retry(|| self.generator.generate(request), cancel)
            .await?;
        tracing::info!(response_chars = text.len(), "llm request completed");
        Ok(text)
    }
}
