//! Model fallback chain for the keyed upstream (target 1)
//!
//! The inbound model field is normalized into an ordered candidate list and
//! each candidate is tried once against `{base}/chat/completions`. The first
//! success wins; when every candidate fails, the last recorded failure is
//! what the caller sees. Linear and non-retrying: no backoff, no second
//! attempts.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::RelayError;
use crate::relay::types::{Message, ModelSpec};
use crate::upstream::extract::{extract_answer, FALLBACK_RULES};
use crate::upstream::UpstreamTarget;

/// Try each model candidate in order until one succeeds.
pub async fn dispatch(
    client: &reqwest::Client,
    target: &UpstreamTarget,
    model: &ModelSpec,
    messages: &[Message],
) -> Result<String, RelayError> {
    let candidates = model.candidates();
    if candidates.is_empty() {
        return Err(RelayError::NoCandidates);
    }

    let url = format!("{}/chat/completions", target.base_url);
    let mut last_error: Option<RelayError> = None;

    for candidate in &candidates {
        info!(url = %url, model = %candidate, "Trying model candidate");
        match try_candidate(client, target, &url, candidate, messages).await {
            Ok(answer) => return Ok(answer),
            Err(err) => {
                warn!(model = %candidate, error = %err, "Model candidate failed");
                last_error = Some(err);
            }
        }
    }

    let detail = last_error
        .map(|err| err.to_string())
        .unwrap_or_else(|| "unknown failure".to_string());
    Err(RelayError::CandidatesExhausted { detail })
}

async fn try_candidate(
    client: &reqwest::Client,
    target: &UpstreamTarget,
    url: &str,
    model: &str,
    messages: &[Message],
) -> Result<String, RelayError> {
    let body = json!({
        "model": model,
        "messages": messages,
    });

    let mut request = client.post(url).json(&body);
    if let Some(key) = &target.api_key {
        request = request.bearer_auth(key);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RelayError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let value: Value = response.json().await?;
    Ok(extract_answer(&value, FALLBACK_RULES))
}
