//! Code assistance: explanation, debugging, optimization, docs, complexity.

use super::{plain_text, require_field, JsonBody};
use crate::auth::AuthClaims;
use crate::error::ApiError;
use crate::prompts::{self, AssistKind};
use crate::server::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Body of `POST /ai-chat`.
#[derive(Debug, Deserialize)]
pub struct AssistRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub output: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Answer a question about a piece of code. Unknown kinds fall back to an
/// explanation.
pub async fn ai_chat(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<AuthClaims>,
    JsonBody(request): JsonBody<AssistRequest>,
) -> Result<Response, ApiError> {
    let code = require_field(request.code.as_deref(), "code")?;
    let language = require_field(request.language.as_deref(), "language")?;
    let kind = AssistKind::parse_or_default(request.kind.as_deref());

    debug!(subject = claims.subject(), ?kind, language, "ai_chat");
    let prompt = prompts::compose_assist(kind, code, language, &request.output)?;
    Ok(plain_text(state.complete(&prompt).await?))
}
