//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, ApiError>`; the [`IntoResponse`] impl is
//! the only place errors become status codes and bodies.

use crate::completion::CompletionError;
use crate::prompts::PromptError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors a request can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or a field value is not acceptable.
    #[error("{0}")]
    Validation(String),

    /// The requested language is not offered by this operation.
    #[error("{0}")]
    UnsupportedLanguage(&'static str),

    /// No bearer token on a protected route.
    #[error("Token is missing!")]
    MissingToken,

    /// Bearer token present but not valid.
    #[error("Invalid token!")]
    InvalidToken,

    /// A prompt template could not be rendered.
    #[error("failed to compose prompt: {0}")]
    Prompt(#[from] PromptError),

    /// The completion provider failed.
    #[error("{0}")]
    Upstream(#[from] CompletionError),
}

impl ApiError {
    /// Shorthand for [`ApiError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Status code this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            Self::MissingToken => StatusCode::FORBIDDEN,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Prompt(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::MissingToken | Self::InvalidToken => json!({ "message": self.to_string() }),
            Self::Upstream(err) => {
                error!(error = %err, "completion request failed");
                json!({ "error": self.to_string() })
            },
            Self::Prompt(err) => {
                error!(error = %err, "prompt composition failed");
                json!({ "error": self.to_string() })
            },
            Self::Validation(_) | Self::UnsupportedLanguage(_) => {
                json!({ "error": self.to_string() })
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
