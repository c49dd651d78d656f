//! HTTP routes for teletype
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod health;
pub mod pdf;
pub mod stream;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::cors_middleware, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/ai/stream",
            get(stream::info_page).post(stream::relay_chat),
        )
        .route("/api/extract-pdf", post(pdf::extract_pdf))
        .route("/health", get(health::health_check))
        .fallback(stream::not_found)
        // Global middleware (applied to all routes); CORS runs first so it
        // can short-circuit OPTIONS preflights before routing
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}
