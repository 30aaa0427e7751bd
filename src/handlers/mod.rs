//! Route handlers.
//!
//! Each handler validates its body, composes one prompt, makes at most one
//! completion call through [`AppState::complete`](crate::server::AppState::complete),
//! and shapes the response.

pub mod assist;
pub mod code;
pub mod page;
pub mod web;

use crate::error::ApiError;
use axum::extract::FromRequest;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

/// JSON body extractor whose rejections are answered as
/// `400 {"error": ...}` instead of axum's plain-text default.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// `200 text/plain` response carrying model output.
pub(crate) fn plain_text(text: String) -> Response {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
}

/// The field's value if present and non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A field that must be present and non-empty.
pub(crate) fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    non_empty(value).ok_or_else(|| ApiError::validation(format!("Missing required field: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field() {
        assert_eq!(require_field(Some("py"), "language").unwrap(), "py");

        let err = require_field(Some(""), "language").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: language");
        assert!(require_field(None, "code").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
