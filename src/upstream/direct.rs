//! Single-shot dispatch to the no-key upstream (target 0)
//!
//! One POST to `{base}/openai` with the literal model value and the message
//! list. A millisecond timestamp rides along to defeat intermediate caching.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::RelayError;
use crate::relay::types::{Message, ModelSpec};
use crate::upstream::extract::{extract_answer, DIRECT_RULES};
use crate::upstream::UpstreamTarget;

/// Send one request and extract the answer, or fail.
pub async fn dispatch(
    client: &reqwest::Client,
    target: &UpstreamTarget,
    model: &ModelSpec,
    messages: &[Message],
) -> Result<String, RelayError> {
    let url = format!("{}/openai", target.base_url);
    info!(url = %url, "Forwarding to upstream");

    let body = json!({
        "model": model,
        "messages": messages,
        "timestamp": chrono::Utc::now().timestamp_millis(),
    });

    let mut request = client.post(&url).json(&body);
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
    let answer = extract_answer(&value, DIRECT_RULES);
    debug!(answer_len = answer.len(), "Extracted upstream answer");
    Ok(answer)
}
