//! Provider trait and backend dispatch

use super::gemini::GeminiProvider;
use super::openai::OpenAiProvider;
use crate::config::{Config, ProviderKind};
use crate::error::ProviderError;
use crate::llm::messages::PromptRequest;
use async_trait::async_trait;
use reqwest::Client;

/// A remote service that turns a prompt into text.
///
/// Implementations make exactly one network call per invocation; retries
/// and rate limiting live in [`crate::llm::LlmClient`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &PromptRequest) -> Result<String, ProviderError>;
}

/// The configured backend, fixed for the lifetime of the process.
#[derive(Debug)]
pub enum ProviderBackend {
    Gemini(GeminiProvider),
    OpenAi(OpenAiProvider),
}

impl ProviderBackend {
    /// Select and build the backend named by `config.provider`.
    ///
    /// A missing credential is not an error here; it surfaces as
    /// [`ProviderError::MissingCredential`] on the first call, which keeps
    /// `tools/list` and `config show` usable without a key.
    pub fn from_config(config: &Config, http_client: Client) -> Self {
        match config.provider {
            ProviderKind::Gemini => {
                Self::Gemini(GeminiProvider::new(config.gemini.clone(), http_client))
            }
            ProviderKind::OpenAi => {
                Self::OpenAi(OpenAiProvider::new(config.openai.clone(), http_client))
            }
        }
    }

    /// Provider name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini(_) => ProviderKind::Gemini.name(),
            Self::OpenAi(_) => ProviderKind::OpenAi.name(),
        }
    }

    /// Model the backend sends requests to
    pub fn model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.model(),
            Self::OpenAi(p) => p.model(),
        }
    }
}

#[async_trait]
impl TextGenerator for ProviderBackend {
    async fn generate(&self, request: &PromptRequest) -> Result<String, ProviderError> {
        match self {
            Self::Gemini(p) => p.generate(request).await,
            Self::OpenAi(p) => p.generate(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_follows_config() {
        let mut config = Config::default();
        let backend = ProviderBackend::from_config(&config, Client::new());
        assert_eq!(backend.name(), "gemini");
        assert_eq!(backend.model(), "gemini-2.0-flash");

        config.provider = ProviderKind::OpenAi;
        config.openai.model = "deepseek-chat".to_string();
        let backend = ProviderBackend::from_config(&config, Client::new());
        assert_eq!(backend.name(), "openai");
        assert_eq!(backend.model(), "deepseek-chat");
    }
}
