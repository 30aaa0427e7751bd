//! Request logging with credential redaction.

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

/// Redact an `Authorization` value for logging, keeping only the scheme
/// (`Bearer [REDACTED]`). Values without a scheme are redacted entirely.
pub fn redact_authorization(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{scheme} [REDACTED]"),
        None => "[REDACTED]".to_string(),
    }
}

/// Middleware logging method, path, status, and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let auth = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(redact_authorization);
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        authorization = auth.as_deref(),
        "request"
    );
    response
}
