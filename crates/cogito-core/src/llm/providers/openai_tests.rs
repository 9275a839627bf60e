//! OpenAI-compatible provider tests against a mock server

use super::openai::OpenAiProvider;
use super::provider_trait::TextGenerator;
use crate::config::OpenAiSettings;
use crate::error::{ProviderError, UnifiedError};
use crate::llm::messages::PromptRequest;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(base_url: &str) -> OpenAiProvider {
    provider_with_client(base_url, Client::builder().no_proxy().build().unwrap())
}

fn provider_with_client(base_url: &str, http_client: Client) -> OpenAiProvider {
    let settings = OpenAiSettings {
        api_key: Some("sk-test-key".to_string()),
        model: "gpt-4o-mini".to_string(),
        base_url: base_url.to_string(),
        temperature: 0.2,
        max_tokens: 256,
    };
    OpenAiProvider::new(settings, http_client)
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1704067200,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12 }
    })
}

#[tokio::test]
async fn test_generate_with_system_preamble() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 256,
            "messages": [
                { "role": "system", "content": "You translate." },
                { "role": "user", "content": "Bonjour" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hello")))
        .expect(1)
        .mount(&server)
        .await;

    let request = PromptRequest::new("Bonjour").with_preamble("You translate.");
    let text = provider(&server.uri()).generate(&request).await.unwrap();
    assert_eq!(text, "Hello");
}

#[tokio::test]
async fn test_generate_without_preamble_sends_only_user_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{ "role": "user", "content": "ping" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider(&server.uri())
        .generate(&PromptRequest::new("ping"))
        .await
        .unwrap();
    assert_eq!(text, "pong");
}

#[tokio::test]
async fn test_rate_limited_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached", "type": "requests" }
        })))
        .mount(&server)
        .await;

    let err = provider(&server.uri())
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(429));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_missing_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "x" })))
        .mount(&server)
        .await;

    let err = provider(&server.uri())
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_request_timeout_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http_client = Client::builder()
        .no_proxy()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = provider_with_client(&server.uri(), http_client)
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Timeout { .. }), "got {err:?}");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_dropped_by_peer_is_retryable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        drop(socket);
    });

    let err = provider(&format!("http://{addr}"))
        .generate(&PromptRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Connection { .. }), "got {err:?}");
    assert!(err.is_retryable());
}
