//! Configuration management for teletype
//!
//! Configuration is loaded from environment variables. The upstream target
//! table is resolved here once at startup and stays immutable for the
//! process lifetime.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::upstream::{DispatchMode, UpstreamTarget};

/// Default pacing interval between emitted characters, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 20;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on (platform-injected in deployment)
    pub port: u16,

    /// Interval between emitted characters in the paced response body
    pub typewriter_tick: Duration,

    /// Fixed upstream target table, indexed by the caller's `serverIdx`
    pub upstreams: Vec<UpstreamTarget>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let tick_ms: u64 = env::var("TYPEWRITER_TICK_MS")
            .unwrap_or_else(|_| DEFAULT_TICK_MS.to_string())
            .parse()
            .context("Invalid TYPEWRITER_TICK_MS")?;

        Ok(Self {
            host: env::var("TELETYPE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,

            typewriter_tick: Duration::from_millis(tick_ms),

            upstreams: vec![
                UpstreamTarget {
                    base_url: env::var("POLLINATIONS_URL")
                        .unwrap_or_else(|_| "https://text.pollinations.ai".to_string()),
                    api_key: None,
                    mode: DispatchMode::Single,
                },
                UpstreamTarget {
                    base_url: env::var("A4F_URL")
                        .unwrap_or_else(|_| "https://api.a4f.co/v1".to_string()),
                    api_key: env::var("A4F_API_KEY").ok().filter(|k| !k.is_empty()),
                    mode: DispatchMode::ModelFallback,
                },
            ],
        })
    }
}
