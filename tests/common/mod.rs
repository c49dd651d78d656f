//! Common test utilities for teletype
//!
//! Provides the in-process test application (router + mock upstream) shared
//! across integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use teletype::{config::Config, routes, AppState, DispatchMode, UpstreamTarget};

/// Bearer key configured for the fallback-chain upstream in tests
pub const TEST_A4F_KEY: &str = "test-a4f-key";

/// In-process application with both upstream targets pointing at one
/// wiremock server
pub struct TestApp {
    pub server: TestServer,
    pub upstream: MockServer,
}

impl TestApp {
    /// Spawn the router with a 1ms typewriter tick so paced bodies collect
    /// quickly.
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            typewriter_tick: Duration::from_millis(1),
            upstreams: vec![
                UpstreamTarget {
                    base_url: upstream.uri(),
                    api_key: None,
                    mode: DispatchMode::Single,
                },
                UpstreamTarget {
                    base_url: upstream.uri(),
                    api_key: Some(TEST_A4F_KEY.to_string()),
                    mode: DispatchMode::ModelFallback,
                },
            ],
        };

        let state = Arc::new(AppState::new_for_testing(config));
        let server = TestServer::new(routes::create_router(state)).expect("failed to start test server");

        Self { server, upstream }
    }

    /// Mount a successful chat-completion response on the no-key endpoint.
    pub async fn mock_direct_success(&self, answer: &str) {
        Mock::given(method("POST"))
            .and(path("/openai"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": answer}}]
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Mount a per-model response on the fallback-chain endpoint.
    pub async fn mock_fallback_model(&self, model: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({"model": model})))
            .respond_with(response)
            .mount(&self.upstream)
            .await;
    }

    /// Requests the mock upstream actually received.
    pub async fn upstream_requests(&self) -> Vec<wiremock::Request> {
        self.upstream.received_requests().await.unwrap_or_default()
    }
}
