//! Code generation, output simulation, and refactoring.

use super::{non_empty, plain_text, require_field, JsonBody};
use crate::auth::AuthClaims;
use crate::error::ApiError;
use crate::languages::{self, UNSUPPORTED_EXECUTION_LANGUAGE, UNSUPPORTED_LANGUAGE};
use crate::prompts;
use crate::server::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Body of `POST /generate_code`.
#[derive(Debug, Deserialize)]
pub struct GenerateCodeRequest {
    pub problem_description: Option<String>,
    pub language: Option<String>,
}

/// Body of `POST /get-output`.
#[derive(Debug, Deserialize)]
pub struct OutputRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "userInput")]
    pub user_input: Option<String>,
}

/// Body of `POST /refactor_code`.
#[derive(Debug, Deserialize)]
pub struct RefactorCodeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    pub output: Option<String>,
    pub problem_description: Option<String>,
}

/// Generate code for a problem description in a supported language.
pub async fn generate_code(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<AuthClaims>,
    JsonBody(request): JsonBody<GenerateCodeRequest>,
) -> Result<Response, ApiError> {
    let description = require_field(request.problem_description.as_deref(), "problem_description")?;
    let language = require_field(request.language.as_deref(), "language")?;

    if !languages::is_supported(language) {
        return Err(ApiError::UnsupportedLanguage(UNSUPPORTED_LANGUAGE));
    }

    debug!(subject = claims.subject(), language, "generate_code");
    let prompt = prompts::compose_code_generation(description, language)?;
    Ok(plain_text(state.complete(&prompt).await?))
}

/// Ask the model for the terminal output `code` would produce.
///
/// This route is not behind the bearer guard.
pub async fn get_output(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<OutputRequest>,
) -> Result<Response, ApiError> {
    let (Some(code), Some(language)) = (
        non_empty(request.code.as_deref()),
        non_empty(request.language.as_deref()),
    ) else {
        return Err(ApiError::validation("Missing code or language"));
    };

    let Some(template) = prompts::execution_template(language) else {
        return Err(ApiError::UnsupportedLanguage(UNSUPPORTED_EXECUTION_LANGUAGE));
    };

    let time = prompts::current_time_reference();
    let prompt = prompts::compose_output_simulation(
        template,
        language,
        code,
        request.user_input.as_deref(),
        &time,
    )?;
    Ok(plain_text(state.complete(&prompt).await?))
}

/// Refactor code given its current output and an optional goal.
///
/// `output` must be present but may be empty.
pub async fn refactor_code(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<AuthClaims>,
    JsonBody(request): JsonBody<RefactorCodeRequest>,
) -> Result<Response, ApiError> {
    let (Some(code), Some(language)) = (
        non_empty(request.code.as_deref()),
        non_empty(request.language.as_deref()),
    ) else {
        return Err(ApiError::validation("Missing code or language"));
    };
    let Some(output) = request.output.as_deref() else {
        return Err(ApiError::validation("Missing required field: output"));
    };

    if !languages::is_supported(language) {
        return Err(ApiError::UnsupportedLanguage(UNSUPPORTED_LANGUAGE));
    }

    debug!(subject = claims.subject(), language, "refactor_code");
    let description = non_empty(request.problem_description.as_deref());
    let prompt = prompts::compose_code_refactor(code, language, output, description)?;
    Ok(plain_text(state.complete(&prompt).await?))
}
