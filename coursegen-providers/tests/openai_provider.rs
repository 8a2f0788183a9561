//! Wire-level tests for the OpenAI provider against a mock server

use coursegen_core::{Error, FinishReason, Message, Provider, Request};
use coursegen_providers::OpenAIBuilder;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-abc",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

fn request() -> Request {
    Request::builder()
        .message(Message::system("You are a marketing expert."))
        .message(Message::user("A course that teaches juniors how to code python"))
        .max_tokens(1000)
        .temperature(1.0)
        .build()
}

fn provider_for(server: &MockServer) -> coursegen_providers::OpenAI {
    OpenAIBuilder::new("sk-test")
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_request_shape_and_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": "You are a marketing expert."},
                {"role": "user", "content": "A course that teaches juniors how to code python"}
            ],
            "stream": false,
            "max_tokens": 1000,
            "temperature": 1.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Code Like a Pro")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server).request(request()).await.unwrap();

    assert_eq!(response.content, "Code Like a Pro");
    assert_eq!(response.metadata.finish_reason, Some(FinishReason::Stop));
    assert_eq!(response.metadata.usage.map(|u| u.total_tokens), Some(15));
}

#[tokio::test]
async fn test_organization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("openai-organization", "org-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAIBuilder::new("sk-test")
        .base_url(server.uri())
        .organization("org-7")
        .build()
        .unwrap();

    assert_eq!(provider.request(request()).await.unwrap().content, "ok");
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided: sk-test.", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    match provider_for(&server).request(request()).await {
        Err(Error::Authentication(msg)) => assert!(msg.contains("Incorrect API key")),
        other => panic!("Expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "12")
                .set_body_json(json!({"error": {"message": "Rate limit reached for requests"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = provider_for(&server).request(request()).await.unwrap_err();

    assert_eq!(error.retry_after(), Some(Duration::from_secs(12)));
    assert!(error.to_string().contains("HTTP 429"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let error = provider_for(&server).request(request()).await.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Provider error (openai): HTTP 503: upstream unavailable"
    );
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let provider = OpenAIBuilder::new("sk-test")
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    assert!(matches!(
        provider.request(request()).await,
        Err(Error::Timeout)
    ));
}

#[tokio::test]
async fn test_connection_refused() {
    let provider = OpenAIBuilder::new("sk-test")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    assert!(matches!(
        provider.request(request()).await,
        Err(Error::Network { .. })
    ));
}
