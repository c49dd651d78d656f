//! Upstream dispatch
//!
//! Handles request forwarding to the fixed table of external completion
//! services. Each target carries a dispatch mode: a single request with
//! the literal model value, or a linear fallback over model candidates.

pub mod direct;
pub mod extract;
pub mod fallback;

use crate::error::RelayError;
use crate::relay::types::{Message, ModelSpec};

/// How requests to a target are dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// One request with the model field passed through as received
    Single,
    /// One request per normalized model candidate, first success wins
    ModelFallback,
}

/// One entry in the fixed upstream table
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    /// Base URL of the service, without trailing slash
    pub base_url: String,
    /// Bearer token; requests go out without Authorization when absent
    pub api_key: Option<String>,
    /// Dispatch strategy for this target
    pub mode: DispatchMode,
}

/// Forward the (possibly rewritten) conversation to `target` and return the
/// extracted answer text.
pub async fn dispatch(
    client: &reqwest::Client,
    target: &UpstreamTarget,
    model: &ModelSpec,
    messages: &[Message],
) -> Result<String, RelayError> {
    match target.mode {
        DispatchMode::Single => direct::dispatch(client, target, model, messages).await,
        DispatchMode::ModelFallback => fallback::dispatch(client, target, model, messages).await,
    }
}
