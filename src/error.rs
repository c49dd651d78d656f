//! Error types for teletype
//!
//! Two error families exist because of when they can occur relative to the
//! response headers. [`AppError`] covers failures before the response is
//! committed and maps to conventional status codes with plain-text bodies.
//! [`RelayError`] covers failures after the streamed body has begun; those
//! are degraded to an inline error-marked chunk inside an already-200
//! response (see [`crate::relay::typewriter::error_chunk`]).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Marker prefixed to error text written into an already-committed stream.
/// Callers must treat a chunk starting with this as a failure signal despite
/// the 200 status.
pub const ERROR_MARKER: &str = "\u{274c} Error: ";

/// Errors surfaced before the response headers are committed
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

/// Errors raised while resolving an answer for an already-committed stream
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid server index: {0}")]
    InvalidServerIndex(i64),

    #[error("AI server responded with {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no model candidates supplied")]
    NoCandidates,

    #[error("all model candidates failed; last error: {detail}")]
    CandidatesExhausted { detail: String },
}

/// Errors from the PDF extraction endpoint
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to fetch PDF: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("PDF fetch returned status {0}")]
    FetchStatus(u16),

    #[error("failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
