//! End-to-end tests: generator → OpenAI provider → mock HTTP server

use coursegen::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request as MockRequest, ResponseTemplate};

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

async fn generator_for(server: &MockServer) -> CourseGenerator<OpenAI> {
    let provider = OpenAIBuilder::new("sk-e2e")
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap();
    CourseGenerator::new(provider).unwrap()
}

fn sent_body(request: &MockRequest) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_course_outline_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "Week 1: Variables\n- Your Friendly Generator.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator_for(&server).await;
    let description = "A course that teaches juniors how to code python";
    let outline = generator
        .generate_course_outline(description, Some("beginner"), 600)
        .await
        .unwrap();

    assert_eq!(outline, "Week 1: Variables\n- Your Friendly Generator.");

    let requests = server.received_requests().await.unwrap();
    let body = sent_body(&requests[0]);
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 600);
    assert_eq!(body["temperature"], 1.0);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1], json!({"role": "user", "content": description}));

    let system = body["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("write with: 600"));
    assert!(system.contains("Difficulty parameter: beginner"));
}

#[test_log::test(tokio::test)]
async fn test_every_operation_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(4)
        .mount(&server)
        .await;

    let generator = generator_for(&server).await;
    let description = "Intro to cloud";

    assert_eq!(generator.generate_titles(description, DEFAULT_MAX_TOKENS).await.unwrap(), "ok");
    assert_eq!(
        generator
            .generate_marketing_text(description, DEFAULT_MAX_TOKENS)
            .await
            .unwrap(),
        "ok"
    );
    assert_eq!(
        generator
            .generate_course_outline(description, None, DEFAULT_MAX_TOKENS)
            .await
            .unwrap(),
        "ok"
    );
    assert_eq!(
        generator
            .generate_coding_exercises("Pandas module", None, DEFAULT_MAX_TOKENS)
            .await
            .unwrap(),
        "ok"
    );

    let requests = server.received_requests().await.unwrap();
    let users: Vec<String> = requests
        .iter()
        .map(|r| sent_body(r)["messages"][1]["content"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(users, vec![description, description, description, "Pandas module"]);
}

#[test_log::test(tokio::test)]
async fn test_rate_limit_surfaces_to_caller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "3")
                .set_body_json(json!({"error": {"message": "You exceeded your current quota"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = generator_for(&server)
        .await
        .generate_titles("anything", 100)
        .await
        .unwrap_err();

    assert_eq!(error.retry_after(), Some(Duration::from_secs(3)));
    assert!(error.to_string().contains("You exceeded your current quota"));
}

#[test_log::test(tokio::test)]
async fn test_bad_credentials_surface_to_caller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided"}
        })))
        .mount(&server)
        .await;

    let result = generator_for(&server)
        .await
        .generate_marketing_text("anything", 100)
        .await;

    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[test_log::test(tokio::test)]
async fn test_environment_overrides_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-from-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/v1", server.uri());
    let generator = CourseGenerator::from_lookup(|name: &str| match name {
        "API_KEY" => Some("sk-from-env".to_string()),
        "OPENAI_BASE_URL" => Some(base_url.clone()),
        "OPENAI_MODEL" => Some("gpt-4o-mini".to_string()),
        _ => None,
    })
    .unwrap();

    let titles = generator.generate_titles("Intro to cloud", 200).await.unwrap();
    assert_eq!(titles, "ok");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(sent_body(&requests[0])["model"], "gpt-4o-mini");
}
