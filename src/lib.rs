//! teletype - HTTP relay for AI completion backends
//!
//! This library provides the core functionality for the teletype relay
//! server: forwarding chat payloads to a fixed table of upstream
//! completion services and returning the answer typewriter-paced, plus a
//! side endpoint for remote PDF text extraction.

pub mod config;
pub mod error;
pub mod middleware;
pub mod pdf;
pub mod relay;
pub mod routes;
pub mod upstream;

use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, PdfError, RelayError, ERROR_MARKER};
pub use crate::upstream::{DispatchMode, UpstreamTarget};

/// Application state shared across all request handlers
///
/// Immutable after startup; there is no cross-request mutable state.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Pooled HTTP client shared by all handlers. Deliberately no
        // request timeout: a hung upstream hangs only that caller.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        Ok(Self {
            config,
            http_client,
            start_time: Instant::now(),
        })
    }

    /// Create application state for integration tests, with the upstream
    /// table pointing at mock servers.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            start_time: Instant::now(),
        }
    }
}
