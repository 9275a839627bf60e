//! Configuration data model

use super::timeouts::TimeoutConfig;
use crate::error::CogitoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which remote backend answers prompts. Fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini `generateContent` endpoint
    #[default]
    Gemini,
    /// Any OpenAI-compatible `/chat/completions` endpoint
    #[serde(alias = "openai_compatible")]
    OpenAi,
}

impl ProviderKind {
    /// Provider name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = CogitoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" | "openai_compatible" | "deepseek" => Ok(Self::OpenAi),
            other => Err(CogitoError::config(format!(
                "Unknown provider '{}'. Valid providers are: gemini, openai",
                other
            ))),
        }
    }
}

/// What a tool call returns once the provider has definitively failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Return the failure as ordinary text content flagged with `isError`
    #[default]
    Degrade,
    /// Return a JSON-RPC internal error
    Error,
}

impl FromStr for FailurePolicy {
    type Err = CogitoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrade" | "text" => Ok(Self::Degrade),
            "error" | "raise" => Ok(Self::Error),
            other => Err(CogitoError::config(format!(
                "Unknown failure policy '{}'. Valid values are: degrade, error",
                other
            ))),
        }
    }
}

/// Variant A settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// Variant B settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
        }
    }
}

/// At most `max_requests` outbound calls per rolling `window_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    pub max_requests: u32,
    pub window_ms: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window_ms: 60_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1_000,
        }
    }
}

/// Complete process configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub gemini: GeminiSettings,
    pub openai: OpenAiSettings,
    pub rate_limit: RateLimitSettings,
    pub retry: RetrySettings,
    pub timeouts: TimeoutConfig,
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// API key of the selected provider, ignoring empty strings
    pub fn active_api_key(&self) -> Option<&str> {
        let key = match self.provider {
            ProviderKind::Gemini => self.gemini.api_key.as_deref(),
            ProviderKind::OpenAi => self.openai.api_key.as_deref(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    /// Model name of the selected provider
    pub fn active_model(&self) -> &str {
        match self.provider {
            ProviderKind::Gemini => &self.gemini.model,
            ProviderKind::OpenAi => &self.openai.model,
        }
    }

    /// Copy of this configuration that is safe to print
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.gemini.api_key = copy.gemini.api_key.as_deref().map(mask_secret);
        copy.openai.api_key = copy.openai.api_key.as_deref().map(mask_secret);
        copy
    }
}

fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!("Google".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!(" openai ".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert!("anthropic".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_serde_names() {
        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let parsed: ProviderKind = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(parsed, ProviderKind::Gemini);
    }

    #[test]
    fn test_active_api_key_ignores_blank() {
        let mut config = Config::default();
        config.gemini.api_key = Some("   ".to_string());
        assert!(config.active_api_key().is_none());

        config.gemini.api_key = Some("AIza-real".to_string());
        assert_eq!(config.active_api_key(), Some("AIza-real"));
    }

    #[test]
    fn test_redacted_masks_keys() {
        let mut config = Config::default();
        config.gemini.api_key = Some("AIzaSyVerySecretValue".to_string());
        config.openai.api_key = Some("short".to_string());

        let redacted = config.redacted();
        assert_eq!(redacted.gemini.api_key.as_deref(), Some("AIza****"));
        assert_eq!(redacted.openai.api_key.as_deref(), Some("****"));
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIzaSyVerySecretValue"));
    }
}
