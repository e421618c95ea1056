//! Request audit logging

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

/// Logs every request with its request id, status and duration
///
/// Server errors are logged at `warn`, everything else at `info`.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let started = Utc::now();
    let response = next.run(request).await;
    let duration_ms = (Utc::now() - started).num_milliseconds();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(%method, %uri, %request_id, status, duration_ms, "Request failed");
    } else {
        info!(%method, %uri, %request_id, status, duration_ms, "Request handled");
    }

    response
}
