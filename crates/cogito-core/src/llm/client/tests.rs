//! Tests for the retrying, rate-limited client

use super::policy::RetryPolicy;
use super::types::LlmClient;
use crate::error::{CogitoError, ProviderError};
use crate::llm::messages::PromptRequest;
use crate::llm::providers::MockTextGenerator;
use crate::llm::rate_limiter::{RateLimitConfig, RateLimiter};
use mockall::Sequence;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

fn unavailable() -> ProviderError {
    ProviderError::status("gemini", 503, "overloaded")
}

fn client_with(mock: MockTextGenerator, max_requests: u32, window: Duration) -> LlmClient {
    let limiter = RateLimiter::new(RateLimitConfig::new(max_requests, window)).unwrap();
    LlmClient::with_generator(
        "gemini",
        Arc::new(mock),
        limiter,
        RetryPolicy::new(3, Duration::from_secs(1)).unwrap(),
    )
}

fn client(mock: MockTextGenerator) -> LlmClient {
    client_with(mock, 100, Duration::from_secs(60))
}

#[tokio::test(start_paused = true)]
async fn test_recovers_after_two_unavailable_responses() {
    let mut mock = MockTextGenerator::new();
    let mut seq = Sequence::new();
    mock.expect_generate()
        .times(2)
        .in_sequence(&mut seq)
        .returning(|_| Err(unavailable()));
    mock.expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("fine".to_string()));

    let client = client(mock);
    let start = Instant::now();
    let text = client
        .generate(&PromptRequest::new("hi"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(text, "fine");
    assert!(start.elapsed() >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_bad_request_fails_immediately() {
    let mut mock = MockTextGenerator::new();
    mock.expect_generate()
        .times(1)
        .returning(|_| Err(ProviderError::status("gemini", 400, "bad request")));

    let client = client(mock);
    let start = Instant::now();
    let err = client
        .generate(&PromptRequest::new("hi"), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        CogitoError::Provider(ProviderError::Status { status, .. }) => assert_eq!(status, 400),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_persistent_rate_limiting_exhausts_budget() {
    let mut mock = MockTextGenerator::new();
    mock.expect_generate()
        .times(3)
        .returning(|_| Err(ProviderError::status("gemini", 429, "quota")));

    let client = client(mock);
    let start = Instant::now();
    let err = client
        .generate(&PromptRequest::new("hi"), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        CogitoError::Provider(ProviderError::Exhausted { attempts, last }) => {
            assert_eq!(attempts, 3);
            assert_eq!(last.status_code(), Some(429));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(start.elapsed() >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_malformed_response_is_not_retried() {
    let mut mock = MockTextGenerator::new();
    mock.expect_generate()
        .times(1)
        .returning(|_| Err(ProviderError::malformed("gemini", "missing 'candidates'")));

    let err = client(mock)
        .generate(&PromptRequest::new("hi"), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CogitoError::Provider(ProviderError::MalformedResponse { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_retries_consume_rate_limit_budget() {
    let mut mock = MockTextGenerator::new();
    let mut seq = Sequence::new();
    mock.expect_generate()
        .times(2)
        .in_sequence(&mut seq)
        .returning(|_| Err(unavailable()));
    mock.expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("late".to_string()));

    // Attempts at 0s and 1s fill the window; the third waits for the first
    // slot to expire at 10s.
    let client = client_with(mock, 2, Duration::from_secs(10));
    let start = Instant::now();
    let text = client
        .generate(&PromptRequest::new("hi"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(text, "late");
    assert_eq!(start.elapsed(), Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_backoff_stops_retrying() {
    let mut mock = MockTextGenerator::new();
    mock.expect_generate()
        .times(1)
        .returning(|_| Err(unavailable()));

    let client = client(mock);
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        trigger.cancel();
    });

    let start = Instant::now();
    let err = client
        .generate(&PromptRequest::new("hi"), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, CogitoError::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_already_cancelled_makes_no_call() {
    let mut mock = MockTextGenerator::new();
    mock.expect_generate().times(0);

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = client(mock)
        .generate(&PromptRequest::new("hi"), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, CogitoError::Cancelled));
}

#[test]
fn test_from_config_uses_selected_provider() {
    let mut config = crate::config::Config::default();
    config.provider = crate::config::ProviderKind::OpenAi;
    config.retry.max_attempts = 5;

    let client = LlmClient::from_config(&config).unwrap();
    assert_eq!(client.provider_name(), "openai");
    assert_eq!(client.model(), "gpt-4o-mini");
    assert_eq!(client.retry_policy().max_attempts(), 5);
    assert_eq!(client.rate_limiter().config().max_requests, 30);
}

#[test]
fn test_from_config_rejects_zero_rate_limit() {
    let mut config = crate::config::Config::default();
    config.rate_limit.max_requests = 0;
    assert!(LlmClient::from_config(&config).is_err());
}
