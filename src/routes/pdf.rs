//! PDF text extraction endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    pdf::{self, PdfInfo},
    AppState,
};

/// Request body for `POST /api/extract-pdf`
#[derive(Debug, Deserialize)]
pub struct ExtractPdfRequest {
    /// URL of the remote PDF
    pub url: String,
}

/// Successful extraction response
#[derive(Debug, Serialize)]
pub struct ExtractPdfResponse {
    pub success: bool,
    pub text: String,
    pub pages: usize,
    pub info: PdfInfo,
}

/// Error response for any fetch or parse failure
#[derive(Debug, Serialize)]
pub struct ExtractPdfError {
    pub success: bool,
    pub error: String,
}

/// Fetch a remote PDF and return its extracted text and metadata.
pub async fn extract_pdf(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractPdfRequest>,
) -> Result<Json<ExtractPdfResponse>, (StatusCode, Json<ExtractPdfError>)> {
    match pdf::fetch_and_extract(&state.http_client, &request.url).await {
        Ok(extract) => Ok(Json(ExtractPdfResponse {
            success: true,
            text: extract.text,
            pages: extract.pages,
            info: extract.info,
        })),
        Err(err) => {
            warn!(url = %request.url, error = %err, "PDF extraction failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExtractPdfError {
                    success: false,
                    error: err.to_string(),
                }),
            ))
        }
    }
}
