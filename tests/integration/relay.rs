//! Relay endpoint tests for the no-key upstream (target 0)
//!
//! - GET /api/ai/stream - info page
//! - POST /api/ai/stream - paced relay, error marker behavior,
//!   server index validation

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestApp;

const ERROR_MARKER: &str = "\u{274c} Error: ";

#[tokio::test]
async fn test_info_page() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api/ai/stream").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(response.text().contains("Stream endpoint is running"));
}

#[tokio::test]
async fn test_invalid_json_is_400_before_any_upstream_call() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/ai/stream")
        .bytes("{not json".into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid JSON");
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn test_relay_body_equals_upstream_answer() {
    let app = TestApp::spawn().await;
    app.mock_direct_success("Hello from upstream!").await;

    let response = app
        .server
        .post("/api/ai/stream")
        .json(&json!({
            "model": "gpt-4o",
            "messages": [{"role": "user", "content": "hi"}],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    // Paced one character per tick, collected here; no reordering or loss
    assert_eq!(response.text(), "Hello from upstream!");
}

#[tokio::test]
async fn test_outbound_request_carries_model_messages_and_timestamp() {
    let app = TestApp::spawn().await;
    app.mock_direct_success("ok").await;

    app.server
        .post("/api/ai/stream")
        .json(&json!({
            "model": "gpt-4o",
            "messages": [{"role": "user", "content": "hi"}],
        }))
        .await;

    let requests = app.upstream_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/openai");

    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["messages"][0]["content"], "hi");
    // Cache-busting timestamp rides along
    assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn test_bare_content_extraction() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/openai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "bare answer"})))
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .post("/api/ai/stream")
        .json(&json!({"model": "m", "messages": []}))
        .await;
    assert_eq!(response.text(), "bare answer");
}

#[tokio::test]
async fn test_placeholder_when_upstream_has_no_content() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/openai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .post("/api/ai/stream")
        .json(&json!({"model": "m", "messages": []}))
        .await;
    assert_eq!(response.text(), "No content received");
}

#[tokio::test]
async fn test_upstream_failure_is_inline_error_in_200_response() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/openai"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .post("/api/ai/stream")
        .json(&json!({"model": "m", "messages": []}))
        .await;

    // Headers were already committed, so the failure is in-band
    assert_eq!(response.status_code(), StatusCode::OK);
    let text = response.text();
    assert!(text.starts_with(ERROR_MARKER));
    assert!(text.contains("AI server responded with 500"));
    assert!(text.contains("upstream exploded"));
}

#[tokio::test]
async fn test_out_of_range_server_index_never_reaches_upstream() {
    let app = TestApp::spawn().await;
    app.mock_direct_success("should not be used").await;

    let response = app
        .server
        .post("/api/ai/stream")
        .json(&json!({"model": "m", "messages": [], "serverIdx": 2}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.text(),
        format!("{ERROR_MARKER}Invalid server index: 2")
    );
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn test_negative_server_index_is_an_in_stream_error() {
    let app = TestApp::spawn().await;
    app.mock_direct_success("should not be used").await;

    let response = app
        .server
        .post("/api/ai/stream")
        .json(&json!({"model": "m", "messages": [], "serverIdx": -1}))
        .await;

    // A well-formed body with a bad index fails after the response commit
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.text(),
        format!("{ERROR_MARKER}Invalid server index: -1")
    );
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn test_empty_body_is_treated_as_empty_payload() {
    let app = TestApp::spawn().await;
    app.mock_direct_success("default answer").await;

    let response = app.server.post("/api/ai/stream").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "default answer");
}
