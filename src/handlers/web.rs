//! HTML/CSS/JS generation and refactoring.

use super::{non_empty, plain_text, JsonBody};
use crate::auth::AuthClaims;
use crate::error::ApiError;
use crate::extract::{extract_fenced, has_fence};
use crate::prompts::{self, AssetKind};
use crate::server::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Body of `POST /htmlcssjsgenerate-code`.
#[derive(Debug, Deserialize)]
pub struct GenerateAssetRequest {
    pub prompt: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "htmlContent", default)]
    pub html_content: String,
    #[serde(rename = "cssContent", default)]
    pub css_content: String,
}

/// Body of `POST /htmlcssjsrefactor-code`.
#[derive(Debug, Default, Deserialize)]
pub struct RefactorAssetRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
    pub problem_description: Option<String>,
}

impl RefactorAssetRequest {
    /// The submitted source for `kind`.
    pub fn content(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Html => &self.html,
            AssetKind::Css => &self.css,
            AssetKind::Js => &self.js,
        }
    }
}

/// Generate HTML, or CSS/JS for already generated HTML (and CSS).
pub async fn generate_asset(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<AuthClaims>,
    JsonBody(request): JsonBody<GenerateAssetRequest>,
) -> Result<Response, ApiError> {
    let Some(description) = non_empty(request.prompt.as_deref()) else {
        return Err(ApiError::validation("Project description is required"));
    };
    let Some(kind) = request.kind.as_deref().and_then(AssetKind::parse) else {
        return Err(ApiError::validation("Invalid or missing 'type' parameter"));
    };

    debug!(subject = claims.subject(), %kind, "generate asset");
    let time = prompts::current_time_reference();
    let prompt = prompts::compose_asset_generation(
        kind,
        description,
        &request.html_content,
        &request.css_content,
        &time,
    )?;
    Ok(plain_text(state.complete(&prompt).await?))
}

/// Which refactor to run, decided from the request alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefactorPlan {
    pub kind: AssetKind,
    /// Trimmed, lower-cased description; `None` when absent or blank.
    pub description: Option<String>,
}

/// Decide the refactor branch for a request.
///
/// HTML needs `html`; CSS needs `html`; JS needs `html` and `css`. The
/// description only selects the template variant. A JS request missing
/// either source gets its own message naming both fields rather than the
/// generic "appropriate content" error.
pub fn plan_refactor(request: &RefactorAssetRequest) -> Result<RefactorPlan, ApiError> {
    let Some(kind) = non_empty(request.kind.as_deref()) else {
        return Err(ApiError::validation("Type is required."));
    };

    let has_html = !request.html.is_empty();
    let has_css = !request.css.is_empty();
    let kind = match AssetKind::parse(kind) {
        Some(AssetKind::Html) if has_html => AssetKind::Html,
        Some(AssetKind::Css) if has_html => AssetKind::Css,
        Some(AssetKind::Css) => {
            return Err(ApiError::validation(
                "HTML content is required for CSS refactoring.",
            ))
        },
        Some(AssetKind::Js) if has_html && has_css => AssetKind::Js,
        Some(AssetKind::Js) => {
            return Err(ApiError::validation(
                "Both HTML and CSS content are required for JS refactoring.",
            ))
        },
        _ => {
            return Err(ApiError::validation(
                "Please provide the appropriate content for the requested type.",
            ))
        },
    };

    let description = request
        .problem_description
        .as_deref()
        .map(|d| d.trim().to_lowercase())
        .filter(|d| !d.is_empty());

    Ok(RefactorPlan { kind, description })
}

/// Code to answer a refactor with: the body of the model's first fenced
/// block, or the submitted source when the reply has no fence.
pub fn refactored_content<'a>(
    reply: &'a str,
    request: &'a RefactorAssetRequest,
    kind: AssetKind,
) -> &'a str {
    if has_fence(reply) {
        extract_fenced(reply)
    } else {
        request.content(kind)
    }
}

/// Refactor one asset and answer `{"<type>": code}`.
pub async fn refactor_asset(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<AuthClaims>,
    JsonBody(request): JsonBody<RefactorAssetRequest>,
) -> Result<Response, ApiError> {
    let plan = plan_refactor(&request)?;

    debug!(
        subject = claims.subject(),
        kind = %plan.kind,
        with_description = plan.description.is_some(),
        "refactor asset"
    );
    let prompt = prompts::compose_asset_refactor(
        plan.kind,
        &request.html,
        &request.css,
        &request.js,
        plan.description.as_deref(),
    )?;
    let reply = state.complete(&prompt).await?;

    let mut body = Map::new();
    body.insert(
        plan.kind.as_str().to_string(),
        Value::String(refactored_content(&reply, &request, plan.kind).to_string()),
    );
    Ok(Json(body).into_response())
}
