//! Gemini provider tests against a mock server

use super::gemini::GeminiProvider;
use super::provider_trait::TextGenerator;
use crate::config::GeminiSettings;
use crate::error::{ProviderError, UnifiedError};
use crate::llm::messages::PromptRequest;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(base_url: &str, api_key: Option<&str>) -> GeminiProvider {
    let settings = GeminiSettings {
        api_key: api_key.map(str::to_string),
        model: "gemini-2.0-flash".to_string(),
        base_url: base_url.to_string(),
    };
    let http_client = Client::builder().no_proxy().build().unwrap();
    GeminiProvider::new(settings, http_client)
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": { "promptTokenCount": 4, "candidatesTokenCount": 2 }
    })
}

#[tokio::test]
async fn test_generate_sends_key_header_and_combined_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "AIza-test"))
        .and(body_json(json!({
            "contents": [{ "parts": [{ "text": "Be brief.\n\nIs water wet?" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("Yes.")))
        .expect(1)
        .mount(&server)
        .await;

    let request = PromptRequest::new("Is water wet?").with_preamble("Be brief.");
    let text = provider(&server.uri(), Some("AIza-test"))
        .generate(&request)
        .await
        .unwrap();
    assert_eq!(text, "Yes.");
}

#[tokio::test]
async fn test_missing_candidates_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "usageMetadata": {} })))
        .mount(&server)
        .await;

    let err = provider(&server.uri(), Some("AIza-test"))
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_service_unavailable_is_retryable_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = provider(&server.uri(), Some("AIza-test"))
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_error_body_is_sanitized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid: AIzaSyA1234567890abcdefghijk",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = provider(&server.uri(), Some("AIzaSyA1234567890abcdefghijk"))
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert!(!err.is_retryable());
    assert!(!err.to_string().contains("AIzaSyA1234567890abcdefghijk"));
}

#[tokio::test]
async fn test_missing_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider(&server.uri(), None)
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MissingCredential { .. }));
}
