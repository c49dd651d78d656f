//! The relay endpoint
//!
//! `GET /api/ai/stream` serves a small info page. `POST /api/ai/stream`
//! accepts a chat payload, forwards it to the selected upstream, and emits
//! the answer typewriter-paced. The response is committed before any
//! upstream work, so failures from that point on are written inline as an
//! error-marked chunk rather than a status code.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use futures::Stream;
use tracing::{info, warn};

use crate::{
    error::{AppError, RelayError},
    relay::{
        attachments::embed_image_attachments,
        typewriter::{error_chunk, typewriter},
        types::ChatRelayRequest,
    },
    upstream, AppState,
};

/// Info page shown on GET, mirroring the POST contract.
pub async fn info_page() -> Html<&'static str> {
    Html(
        "<html><body><h3>\u{2705} Stream endpoint is running</h3>\
         <p>POST JSON here to stream AI responses.</p></body></html>",
    )
}

/// Handle a chat relay request with a typewriter-paced body.
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Empty body is an empty payload; anything else must parse
    let payload: ChatRelayRequest = if body.is_empty() {
        ChatRelayRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?
    };

    info!(
        server_idx = payload.server_idx,
        messages = payload.messages.len(),
        files = payload.files.len(),
        "Relaying chat request"
    );

    let stream = relay_stream(state, payload);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-cache")
        .header("X-Accel-Buffering", "no")
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
}

/// The whole pipeline lives inside the body stream: headers are already
/// committed, so errors become an inline chunk, and a caller disconnect
/// drops the stream, cancelling both pacing and any in-flight upstream
/// call.
fn relay_stream(
    state: Arc<AppState>,
    payload: ChatRelayRequest,
) -> impl Stream<Item = Result<Bytes, Infallible>> {
    async_stream::stream! {
        let answer = match resolve_answer(&state, payload).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "Relay failed after response commit");
                yield Ok(error_chunk(&err));
                return;
            }
        };

        let paced = typewriter(answer, state.config.typewriter_tick);
        for await chunk in paced {
            yield chunk;
        }
    }
}

/// Select the target, rewrite attachments, dispatch, extract.
async fn resolve_answer(
    state: &AppState,
    payload: ChatRelayRequest,
) -> Result<String, RelayError> {
    // Negative indexes are well-formed input, just never in the table
    let target = usize::try_from(payload.server_idx)
        .ok()
        .and_then(|idx| state.config.upstreams.get(idx))
        .ok_or(RelayError::InvalidServerIndex(payload.server_idx))?;

    let messages = embed_image_attachments(payload.messages, &payload.files);

    upstream::dispatch(&state.http_client, target, &payload.model, &messages).await
}

/// Fallback for unmatched (method, path) pairs.
pub async fn not_found() -> impl IntoResponse {
    AppError::NotFound
}
