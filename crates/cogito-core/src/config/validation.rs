//! Configuration validation
//!
//! Everything that would otherwise fail (or hang) at call time is rejected
//! here, before the server starts reading requests.

use super::model::{Config, ProviderKind};
use crate::error::{CogitoError, CogitoResult};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &Config) -> CogitoResult<()> {
        Self::validate_provider(config)?;
        Self::validate_limits(config)?;
        config
            .timeouts
            .validate()
            .map_err(|e| CogitoError::config_with_context(e, "Validating timeouts"))?;
        Ok(())
    }

    fn validate_provider(config: &Config) -> CogitoResult<()> {
        if config.active_api_key().is_none() {
            let hint = match config.provider {
                ProviderKind::Gemini => "set GEMINI_API_KEY",
                ProviderKind::OpenAi => "set OPENAI_API_KEY",
            };
            return Err(CogitoError::config_with_context(
                format!("No API key configured for provider '{}'", config.provider),
                hint,
            ));
        }

        let base_url = match config.provider {
            ProviderKind::Gemini => &config.gemini.base_url,
            ProviderKind::OpenAi => &config.openai.base_url,
        };
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CogitoError::config(format!(
                "Base URL '{}' must start with http:// or https://",
                base_url
            )));
        }

        if config.active_model().trim().is_empty() {
            return Err(CogitoError::config("Model name must not be empty"));
        }

        if config.provider == ProviderKind::OpenAi
            && !(0.0..=2.0).contains(&config.openai.temperature)
        {
            return Err(CogitoError::config(format!(
                "Temperature {} is out of range 0.0..=2.0",
                config.openai.temperature
            )));
        }

        Ok(())
    }

    fn validate_limits(config: &Config) -> CogitoResult<()> {
        // A zero-capacity window would block every call forever.
        if config.rate_limit.max_requests == 0 {
            return Err(CogitoError::config(
                "rate_limit.max_requests must be at least 1",
            ));
        }
        if config.rate_limit.window_ms == 0 {
            return Err(CogitoError::config("rate_limit.window_ms must be at least 1"));
        }
        if config.retry.max_attempts == 0 {
            return Err(CogitoError::config("retry.max_attempts must be at least 1"));
        }
        Ok(())
    }
}

impl Config {
    /// Validate this configuration
    pub fn validate(&self) -> CogitoResult<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.gemini.api_key = Some("AIza-test".to_string());
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_key_for_selected_provider() {
        let mut config = valid_config();
        config.provider = ProviderKind::OpenAi;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("openai"));
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let mut config = valid_config();
        config.rate_limit.max_requests = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.rate_limit.window_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = valid_config();
        config.retry.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = valid_config();
        config.gemini.base_url = "generativelanguage.googleapis.com".to_string();
        assert!(config.validate().is_err());
    }
}
