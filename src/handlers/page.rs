//! Landing page and health check.

use crate::server::AppState;
use axum::extract::State;
use axum::response::{Html, Json};
use serde::Serialize;
use std::sync::Arc;

/// Serve the landing page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider_configured: bool,
}

/// Liveness plus whether completions can be served.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider_configured: state.provider.is_configured(),
    })
}
