//! OpenAI-compatible chat completions provider

use super::error_utils::handle_http_error;
use super::provider_trait::TextGenerator;
use crate::config::OpenAiSettings;
use crate::error::ProviderError;
use crate::llm::messages::PromptRequest;
use crate::llm::parsers::ResponseParser;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

const PROVIDER: &str = "openai";

/// Backend for any service exposing `/chat/completions`
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    settings: OpenAiSettings,
    http_client: Client,
}

impl OpenAiProvider {
    pub fn new(settings: OpenAiSettings, http_client: Client) -> Self {
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
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, request: &PromptRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(preamble) = request.preamble() {
            messages.push(json!({ "role": "system", "content": preamble }));
        }
        messages.push(json!({ "role": "user", "content": request.prompt }));

        json!({
            "model": self.settings.model,
            "messages": messages,
            "temperature": self.settings.temperature,
            "max_tokens": self.settings.max_tokens,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiProvider {
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
            .bearer_auth(api_key)
            .json(&self.request_body(request))
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
        tracing::debug!("OpenAI response received");

        ResponseParser::parse_openai(&body)
    }
}
