use std::time::Duration;

use serde_json::json;
use sumarizar::ProviderError;
use sumarizar::ai::{LlmClient, Summarizer};
use sumarizar::core::config::AppConfig;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LlmClient {
    LlmClient::new(
        "test-key".to_string(),
        &format!("{}/openai/v1", server.uri()),
        "llama-test".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_summarize_posts_chat_completion_and_reads_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-test",
            "messages": [
                {
                    "role": "system",
                    "content": "Resuma o texto em exatamente 4 frases em português. Seja direto."
                },
                { "role": "user", "content": "input text" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "model": "llama-test",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Um resumo." } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let summary = client.summarize("input text", 4).await.unwrap();

    assert_eq!(summary, "Um resumo.");
    assert_eq!(client.model(), "llama-test");
}

#[tokio::test]
async fn test_missing_content_is_empty_summary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let summary = client_for(&server).summarize("input", 3).await.unwrap();
    assert_eq!(summary, "");
}

#[tokio::test]
async fn test_error_status_is_api_error_with_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Invalid API Key",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).summarize("input", 3).await.unwrap_err();

    match &err {
        ProviderError::Api(msg) => {
            assert_eq!(msg, "status 401: Invalid API Key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.to_string().contains("invalid_request_error"));
}

#[tokio::test]
async fn test_non_json_success_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).summarize("input", 3).await.unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = LlmClient::new(
        "test-key".to_string(),
        &server.uri(),
        "llama-test".to_string(),
        Duration::from_millis(200),
    )
    .unwrap();

    let err = client.summarize("input", 3).await.unwrap_err();
    assert!(matches!(err, ProviderError::Http(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_http_error() {
    let client = LlmClient::new(
        "test-key".to_string(),
        "http://127.0.0.1:9",
        "llama-test".to_string(),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client.summarize("input", 3).await.unwrap_err();
    assert!(matches!(err, ProviderError::Http(_)));
    assert!(err.to_string().starts_with("Failed to reach summarization provider"));
}

#[tokio::test]
async fn test_from_config_builds_client_with_configured_model() {
    let config = AppConfig::from_lookup(|key: &str| match key {
        "GROQ_API_KEY" => Some("test-key".to_string()),
        "GROQ_MODEL" => Some("llama-test".to_string()),
        "PROVIDER_TIMEOUT_SECS" => Some("1".to_string()),
        _ => None,
    })
    .unwrap();

    let client = LlmClient::from_config(&config).unwrap();
    assert_eq!(client.model(), "llama-test");
}
