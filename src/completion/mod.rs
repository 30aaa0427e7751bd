//! Completion provider abstraction.
//!
//! Handlers talk to the model only through [`CompletionProvider`], so the
//! HTTP layer can be exercised with a scripted provider and the real client
//! can be swapped for [`UnconfiguredProvider`] when no API key is available.
//!
//! Tool-augmented completion (an agent that may call tools such as a
//! calculator before answering) is not offered; every call is a single plain
//! chat completion.

mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiCompatibleClient;

/// Errors surfaced by a completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No provider credentials were configured at startup.
    #[error("completion provider is not configured: {0}")]
    NotConfigured(String),

    /// Network failure, timeout, or TLS error talking to the provider.
    #[error("request to completion provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("completion provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body excerpt.
        body: String,
    },

    /// Provider answered 2xx but the body was not a usable completion.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// A chat-completion backend.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one fully composed prompt and return the reply text, trimmed.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Whether this provider can actually reach a model.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Stand-in used when the provider API key is missing.
///
/// Every call fails with [`CompletionError::NotConfigured`], which handlers
/// turn into a 500 response instead of proceeding without a client.
#[derive(Debug, Clone)]
pub struct UnconfiguredProvider {
    reason: String,
}

impl UnconfiguredProvider {
    /// Create a provider that always fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for UnconfiguredProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Err(CompletionError::NotConfigured(self.reason.clone()))
    }

    fn is_configured(&self) -> bool {
        false
    }
}
