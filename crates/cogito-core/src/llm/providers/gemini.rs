//! Google Gemini provider

use super::error_utils::handle_http_error;
use super::provider_trait::TextGenerator;
use crate::config::GeminiSettings;
use crate::error::ProviderError;
use crate::llm::messages::PromptRequest;
use crate::llm::parsers::ResponseParser;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

const PROVIDER: &str = "gemini";

/// Gemini `generateContent` backend
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    settings: GeminiSettings,
    http_client: Client,
}

impl GeminiProvider {
    pub fn new(settings: GeminiSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Gemini has no separate system turn in this request shape; the
    /// preamble is folded into the single user part.
    fn request_body(request: &PromptRequest) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": request.combined_text() }]
            }]
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %self.settings.model), level = "debug")]
    async fn generate(&self, request: &PromptRequest) -> Result<String, ProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingCredential {
                provider: PROVIDER.to_string(),
            })?;

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(request))
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(handle_http_error(response, PROVIDER).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;
        tracing::debug!("Gemini response received");

        ResponseParser::parse_gemini(&body)
    }
}
