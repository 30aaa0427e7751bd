//! HS512 bearer-token verification.
//!
//! Tokens are minted by the login service; this side only checks them.
//! Verification pins the algorithm to HS512, so a token signed with any
//! other algorithm (including `none` and HS256 with the same secret) fails.

use super::claims::AuthClaims;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Why a token was rejected. All variants map to the same 401 response;
/// the distinction only reaches the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("algorithm not allowed")]
    InvalidAlgorithm,
    #[error("token not yet valid")]
    Immature,
    #[error("malformed token: {0}")]
    Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                Self::InvalidAlgorithm
            },
            ErrorKind::ImmatureSignature => Self::Immature,
            _ => Self::Malformed(err.to_string()),
        }
    }
}

/// Verifies bearer tokens against the server-held HS512 secret.
///
/// Only signature, algorithm, and the time claims that happen to be present
/// (`exp`, `nbf`) are checked, with no clock leeway; no claim is required.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenVerifier {
    /// Create a verifier for HS512 tokens signed with `secret`.
    pub fn hs512(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.leeway = 0;
        Self {
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify `token` and return its claims.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] describing why verification failed.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, TokenError> {
        let data = decode::<HashMap<String, serde_json::Value>>(
            token,
            &self.decoding,
            &self.validation,
        )?;
        Ok(AuthClaims::new(data.claims))
    }
}
