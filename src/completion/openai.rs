//! OpenAI-compatible chat-completion client (OpenRouter, OpenAI, vLLM, ...).

use super::{CompletionError, CompletionProvider};
use crate::config::ProviderSettings;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Longest provider error body kept in [`CompletionError::Status`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for `POST {base_url}/chat/completions`.
///
/// Holds one pooled `reqwest::Client`; cloning the client shares the pool.
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl fmt::Debug for OpenAiCompatibleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatibleClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiCompatibleClient {
    /// Build a client from provider settings.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::NotConfigured`] when no API key is set or an
    /// attribution header is not a valid header value, and
    /// [`CompletionError::Transport`] if the HTTP client cannot be built.
    pub fn new(settings: &ProviderSettings) -> Result<Self, CompletionError> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CompletionError::NotConfigured("no API key configured".into()))?;

        let mut headers = HeaderMap::new();
        for (name, value) in [("http-referer", &settings.referer), ("x-title", &settings.title)] {
            let value = HeaderValue::from_str(value).map_err(|e| {
                CompletionError::NotConfigured(format!("invalid {name} header value: {e}"))
            })?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key,
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }

    /// Full URL completions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatibleClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending chat completion");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        let parsed: ChatResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedResponse("response contained no message content".into())
            })?;

        Ok(content.trim().to_string())
    }
}

fn truncate(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &value[..end])
}
