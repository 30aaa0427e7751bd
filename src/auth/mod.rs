//! Bearer-token guard for the protected routes.

mod claims;
mod jwt;

use crate::error::ApiError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::{debug, warn};

pub use claims::AuthClaims;
pub use jwt::{TokenError, TokenVerifier};

/// Extract the token from `Authorization: Bearer <token>`.
///
/// Returns `None` when the header is absent, not valid UTF-8, uses another
/// scheme, or carries an empty token. Anything after a second space is
/// ignored.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.split(' ').next()?;
    (!token.is_empty()).then_some(token)
}

/// Middleware that admits a request only with a valid HS512 bearer token.
///
/// On success the decoded [`AuthClaims`] are added to the request
/// extensions. Missing tokens are answered with 403, invalid ones with 401.
pub async fn require_bearer(
    State(verifier): State<Arc<TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = bearer_token(request.headers()) else {
        warn!(path = %request.uri().path(), "request without bearer token");
        return Err(ApiError::MissingToken);
    };

    let claims = verifier.verify(token).map_err(|err| {
        warn!(path = %request.uri().path(), reason = %err, "bearer token rejected");
        ApiError::InvalidToken
    })?;

    debug!(
        subject = claims.subject(),
        expires_at = claims.expires_at(),
        "bearer token accepted"
    );
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
