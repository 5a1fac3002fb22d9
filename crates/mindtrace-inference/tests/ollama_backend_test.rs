//! Integration tests for the Ollama generation backend against a mock
//! HTTP server.

use mindtrace_core::{Error, GenerationBackend};
use mindtrace_inference::OllamaBackend;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "test-gen",
        "message": {
            "role": "assistant",
            "content": content
        },
        "done": true
    })
}

#[tokio::test]
async fn test_generate_returns_message_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-gen",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Hello there")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = OllamaBackend::with_config(mock_server.uri(), "test-gen".to_string()).unwrap();
    let result = backend.generate("say hello").await;

    assert_eq!(result.unwrap(), "Hello there");
}

#[tokio::test]
async fn test_generate_with_system_sends_system_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(serde_json::json!({
            "messages": [
                { "role": "system", "content": "you are terse" },
                { "role": "user", "content": "hi" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = OllamaBackend::with_config(mock_server.uri(), "test-gen".to_string()).unwrap();
    let result = backend.generate_with_system("you are terse", "hi").await;

    assert_eq!(result.unwrap(), "ok");
}

#[tokio::test]
async fn test_generate_json_enforces_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(serde_json::json!({
            "format": "json",
            "think": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("[\"a\"]")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = OllamaBackend::with_config(mock_server.uri(), "test-gen".to_string()).unwrap();
    let result = backend.generate_json("system", "prompt").await;

    assert_eq!(result.unwrap(), "[\"a\"]");
}

#[tokio::test]
async fn test_http_error_maps_to_generation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = OllamaBackend::with_config(mock_server.uri(), "test-gen".to_string()).unwrap();
    let err = backend.generate("x").await.unwrap_err();

    match err {
        Error::Generation(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("model not loaded"));
        }
        other => panic!("Expected Generation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_body_maps_to_generation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = OllamaBackend::with_config(mock_server.uri(), "test-gen".to_string()).unwrap();
    let err = backend.generate("x").await.unwrap_err();

    assert!(matches!(err, Error::Generation(_)));
}
