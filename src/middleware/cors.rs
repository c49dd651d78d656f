//! Permissive CORS for browser callers
//!
//! Every response carries the same fixed headers, and OPTIONS preflights
//! are short-circuited with an empty 204 before routing. Hand-rolled
//! rather than `tower_http::cors` because the contract pins the exact
//! header values and the 204 preflight status.

use axum::{
    extract::Request,
    http::{header::HeaderValue, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}

/// Attach CORS headers to every response; answer OPTIONS with an empty 204.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}
