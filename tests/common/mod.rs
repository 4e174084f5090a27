//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pythia::provider::{ApiConfig, DEFAULT_MODEL};

/// Start a mock server that simulates the Messages API
pub async fn start_oracle_mock() -> MockServer {
    MockServer::start().await
}

/// Request configuration pointed at the mock server
pub fn mock_config(server: &MockServer) -> ApiConfig {
    ApiConfig::new("test-key", DEFAULT_MODEL)
        .with_api_url(format!("{}/v1/messages", server.uri()))
}

/// Mount a successful answer response
pub async fn mount_answer(server: &MockServer, answer_text: &str) {
    let body = serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{
            "type": "text",
            "text": answer_text
        }],
        "model": DEFAULT_MODEL,
        "stop_reason": "end_turn",
        "usage": {
            "input_tokens": 10,
            "output_tokens": 20
        }
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a response whose content carries no text blocks at all
pub async fn mount_textless_answer(server: &MockServer) {
    let body = serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [],
        "model": DEFAULT_MODEL,
        "stop_reason": "end_turn",
        "usage": {
            "input_tokens": 10,
            "output_tokens": 0
        }
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an API-level failure
pub async fn mount_api_error(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
        .mount(server)
        .await;
}
