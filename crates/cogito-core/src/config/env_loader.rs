//! Environment variable-based configuration loading
//!
//! Variables are read through a lookup function so the same code serves the
//! process environment and explicit override maps.

use super::model::Config;
use crate::error::{CogitoError, CogitoResult};
use std::str::FromStr;

/// Provider selector
pub const ENV_PROVIDER: &str = "COGITO_PROVIDER";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Accepted as a fallback for [`ENV_GEMINI_API_KEY`]
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const ENV_OPENAI_TEMPERATURE: &str = "OPENAI_TEMPERATURE";
pub const ENV_OPENAI_MAX_TOKENS: &str = "OPENAI_MAX_TOKENS";
pub const ENV_RATE_LIMIT_REQUESTS: &str = "COGITO_RATE_LIMIT_REQUESTS";
pub const ENV_RATE_LIMIT_WINDOW_MS: &str = "COGITO_RATE_LIMIT_WINDOW_MS";
pub const ENV_MAX_ATTEMPTS: &str = "COGITO_MAX_ATTEMPTS";
pub const ENV_RETRY_BASE_DELAY_MS: &str = "COGITO_RETRY_BASE_DELAY_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "COGITO_REQUEST_TIMEOUT_SECS";
pub const ENV_FAILURE_POLICY: &str = "COGITO_FAILURE_POLICY";

/// Overlay values from the process environment onto `config`.
///
/// A `.env` file in the working directory is loaded first when present.
pub fn apply_process_env(config: &mut Config) -> CogitoResult<()> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }
    apply_env(config, |key| std::env::var(key).ok())
}

/// Overlay values produced by `lookup` onto `config`.
///
/// Empty values are treated as unset.
pub fn apply_env<F>(config: &mut Config, lookup: F) -> CogitoResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(provider) = get(ENV_PROVIDER) {
        config.provider = provider.parse()?;
    }

    // Gemini
    if let Some(key) = get(ENV_GEMINI_API_KEY).or_else(|| get(ENV_GOOGLE_API_KEY)) {
        config.gemini.api_key = Some(key);
    }
    if let Some(model) = get(ENV_GEMINI_MODEL) {
        config.gemini.model = model;
    }
    if let Some(base_url) = get(ENV_GEMINI_BASE_URL) {
        config.gemini.base_url = base_url;
    }

    // OpenAI-compatible
    if let Some(key) = get(ENV_OPENAI_API_KEY) {
        config.openai.api_key = Some(key);
    }
    if let Some(base_url) = get(ENV_OPENAI_BASE_URL) {
        config.openai.base_url = base_url;
    }
    if let Some(model) = get(ENV_OPENAI_MODEL) {
        config.openai.model = model;
    }
    if let Some(value) = get(ENV_OPENAI_TEMPERATURE) {
        config.openai.temperature = parse_var(ENV_OPENAI_TEMPERATURE, &value)?;
    }
    if let Some(value) = get(ENV_OPENAI_MAX_TOKENS) {
        config.openai.max_tokens = parse_var(ENV_OPENAI_MAX_TOKENS, &value)?;
    }

    // Reliability
    if let Some(value) = get(ENV_RATE_LIMIT_REQUESTS) {
        config.rate_limit.max_requests = parse_var(ENV_RATE_LIMIT_REQUESTS, &value)?;
    }
    if let Some(value) = get(ENV_RATE_LIMIT_WINDOW_MS) {
        config.rate_limit.window_ms = parse_var(ENV_RATE_LIMIT_WINDOW_MS, &value)?;
    }
    if let Some(value) = get(ENV_MAX_ATTEMPTS) {
        config.retry.max_attempts = parse_var(ENV_MAX_ATTEMPTS, &value)?;
    }
    if let Some(value) = get(ENV_RETRY_BASE_DELAY_MS) {
        config.retry.base_delay_ms = parse_var(ENV_RETRY_BASE_DELAY_MS, &value)?;
    }
    if let Some(value) = get(ENV_REQUEST_TIMEOUT_SECS) {
        config.timeouts.request_timeout_secs = parse_var(ENV_REQUEST_TIMEOUT_SECS, &value)?;
    }
    if let Some(value) = get(ENV_FAILURE_POLICY) {
        config.failure_policy = value.parse()?;
    }

    Ok(())
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> CogitoResult<T> {
    value.trim().parse().map_err(|_| {
        CogitoError::config_with_context(
            format!("Invalid {} value", name),
            format!("Parsing environment value '{}'", value),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{FailurePolicy, ProviderKind};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_selects_openai_with_overrides() {
        let mut config = Config::default();
        apply_env(
            &mut config,
            lookup(&[
                (ENV_PROVIDER, "openai"),
                (ENV_OPENAI_API_KEY, "sk-test"),
                (ENV_OPENAI_BASE_URL, "https://api.deepseek.com/v1"),
                (ENV_OPENAI_MODEL, "deepseek-chat"),
            ]),
        )
        .unwrap();

        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai.base_url, "https://api.deepseek.com/v1");
        assert_eq!(config.active_model(), "deepseek-chat");
    }

    #[test]
    fn test_google_key_is_fallback_for_gemini() {
        let mut config = Config::default();
        apply_env(&mut config, lookup(&[(ENV_GOOGLE_API_KEY, "AIza-google")])).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-google"));

        let mut config = Config::default();
        apply_env(
            &mut config,
            lookup(&[
                (ENV_GOOGLE_API_KEY, "AIza-google"),
                (ENV_GEMINI_API_KEY, "AIza-gemini"),
            ]),
        )
        .unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-gemini"));
    }

    #[test]
    fn test_numeric_overrides() {
        let mut config = Config::default();
        apply_env(
            &mut config,
            lookup(&[
                (ENV_RATE_LIMIT_REQUESTS, "5"),
                (ENV_RATE_LIMIT_WINDOW_MS, "1000"),
                (ENV_MAX_ATTEMPTS, "4"),
                (ENV_REQUEST_TIMEOUT_SECS, "45"),
                (ENV_FAILURE_POLICY, "error"),
            ]),
        )
        .unwrap();

        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window_ms, 1000);
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.timeouts.request_timeout_secs, 45);
        assert_eq!(config.failure_policy, FailurePolicy::Error);
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let mut config = Config::default();
        let err = apply_env(&mut config, lookup(&[(ENV_MAX_ATTEMPTS, "three")])).unwrap_err();
        assert!(matches!(err, CogitoError::Config { .. }));
        assert!(err.to_string().contains(ENV_MAX_ATTEMPTS));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut config = Config::default();
        apply_env(&mut config, lookup(&[(ENV_PROVIDER, "  ")])).unwrap();
        assert_eq!(config.provider, ProviderKind::Gemini);
    }
}
