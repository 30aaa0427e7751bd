//! Decoded bearer-token claims.

use std::collections::HashMap;

/// Claims of a verified bearer token.
///
/// The guard inserts this into request extensions once the signature checks
/// out. No route authorizes on its contents; handlers only use the subject
/// for log context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthClaims {
    /// All claims from the token payload.
    pub claims: HashMap<String, serde_json::Value>,
}

impl AuthClaims {
    /// Wrap a decoded claim set.
    pub fn new(claims: HashMap<String, serde_json::Value>) -> Self {
        Self { claims }
    }

    /// The `sub` claim, or a string-valued `id` / `email` claim as issued by
    /// the login service.
    pub fn subject(&self) -> Option<&str> {
        ["sub", "id", "email"]
            .iter()
            .find_map(|key| self.claims.get(*key).and_then(|v| v.as_str()))
    }

    /// Expiration timestamp (Unix epoch seconds), if the token carries one.
    pub fn expires_at(&self) -> Option<u64> {
        self.claims.get("exp").and_then(|v| v.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(pairs: &[(&str, serde_json::Value)]) -> AuthClaims {
        AuthClaims::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_subject_prefers_sub() {
        let c = claims(&[("sub", json!("u-1")), ("email", json!("a@b.c"))]);
        assert_eq!(c.subject(), Some("u-1"));
    }

    #[test]
    fn test_subject_falls_back_to_id_and_email() {
        assert_eq!(claims(&[("id", json!("abc"))]).subject(), Some("abc"));
        assert_eq!(claims(&[("email", json!("a@b.c"))]).subject(), Some("a@b.c"));
        assert_eq!(claims(&[("id", json!(7))]).subject(), None);
    }

    #[test]
    fn test_expires_at() {
        assert_eq!(claims(&[("exp", json!(1_900_000_000u64))]).expires_at(), Some(1_900_000_000));
        assert_eq!(claims(&[("exp", json!("soon"))]).expires_at(), None);
        assert_eq!(claims(&[]).expires_at(), None);
    }
}
