//! Provider error sanitization helpers.

use crate::error::ProviderError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 512;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(api[_-]?key|key|token|secret|authorization|x-goog-api-key)\b\s*[:=]\s*["']?[^"',\s}&]+"#,
    )
    .expect("valid key/value secret regex")
});

// Google API keys also show up bare inside error messages.
static GOOGLE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"AIza[0-9A-Za-z_\-]{20,}").expect("valid google key regex"));

/// Redact secrets in a provider error body and cap its length.
pub fn sanitize_error_body(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    if let Ok(mut json) = serde_json::from_str::<Value>(trimmed) {
        redact_json(&mut json);
        let serialized =
            serde_json::to_string(&json).unwrap_or_else(|_| "<unserializable error>".to_string());
        return truncate(serialized);
    }

    truncate(redact_inline(trimmed))
}

fn redact_json(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_json(val);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_json),
        Value::String(s) => *s = redact_inline(s),
        _ => {}
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.to_ascii_lowercase().replace(['-', ' '], "_");
    ["api_key", "apikey", "token", "secret", "authorization", "password"]
        .iter()
        .any(|needle| normalized.contains(needle))
}

fn redact_inline(input: &str) -> String {
    let step = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    let step = GOOGLE_KEY_RE.replace_all(&step, REDACTED);
    KEY_VALUE_SECRET_RE
        .replace_all(&step, "$1=[REDACTED]")
        .into_owned()
}

fn truncate(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }
    let head: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        head,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}

/// Turn a non-2xx response into [`ProviderError::Status`].
pub async fn handle_http_error(response: reqwest::Response, provider: &str) -> ProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ProviderError::status(provider, status, sanitize_error_body(&body))
}
