//! Response parsers for the supported providers
//!
//! Both backends answer with deeply nested JSON; only one text field is of
//! interest. A 2xx response without that field is a fatal error, distinct
//! from an HTTP failure.

use crate::error::ProviderError;
use serde_json::Value;

/// Response parser for provider payloads
pub struct ResponseParser;

impl ResponseParser {
    /// Extract `candidates[0].content.parts[0].text` from a Gemini response
    pub fn parse_gemini(response: &Value) -> Result<String, ProviderError> {
        if let Some(text) = response
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        {
            return Ok(text.to_string());
        }

        let detail = match response.pointer("/promptFeedback/blockReason").and_then(Value::as_str) {
            Some(reason) => format!("prompt blocked ({})", reason),
            None if response.get("candidates").is_none() => "missing 'candidates'".to_string(),
            None => "missing candidates[0].content.parts[0].text".to_string(),
        };
        Err(ProviderError::malformed("gemini", detail))
    }

    /// Extract `choices[0].message.content` from a chat completion response
    pub fn parse_openai(response: &Value) -> Result<String, ProviderError> {
        response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                let detail = if response.get("choices").is_none() {
                    "missing 'choices'"
                } else {
                    "missing choices[0].message.content"
                };
                ProviderError::malformed("openai", detail)
            })
    }
}
