//! Service configuration.
//!
//! Configuration is read once at startup from an optional TOML file, then
//! overridden by environment variables, validated, and handed to the server
//! as an immutable value.
//!
//! # Example Configuration File
//!
//! ```toml
//! bind_addr = "0.0.0.0:5001"
//! cors_origins = ["http://localhost:5173"]
//!
//! [provider]
//! base_url = "https://openrouter.ai/api/v1"
//! model = "meta-llama/llama-3-8b-instruct"
//! timeout_secs = 60
//! ```
//!
//! Secrets (`JWT_SECRET`, `OPENROUTER_API_KEY`) are normally supplied through
//! the environment rather than the file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the HS512 signing secret.
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
/// Primary environment variable for the provider API key.
pub const ENV_OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
/// Fallback environment variable for the provider API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_LLM_BASE_URL: &str = "LLM_BASE_URL";
pub const ENV_LLM_MODEL: &str = "LLM_MODEL";
pub const ENV_LLM_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
/// Comma-separated list of allowed CORS origins.
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`ServiceConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required secret was not provided.
    #[error("{0} must be set")]
    MissingSecret(&'static str),

    /// A value was present but unusable.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

/// Settings for the chat-completion provider.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of an OpenAI-compatible API, without `/chat/completions`.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// API key. `None` leaves completion-backed routes failing with 500.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Sampling temperature; 0 keeps answers as deterministic as the model allows.
    pub temperature: f64,
    /// Value of the `HTTP-Referer` attribution header.
    pub referer: String,
    /// Value of the `X-Title` attribution header.
    pub title: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "meta-llama/llama-3-8b-instruct".to_string(),
            api_key: None,
            timeout_secs: 60,
            temperature: 0.0,
            referer: "http://localhost".to_string(),
            title: "CodeAgentix".to_string(),
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

/// Top-level service configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// HS512 secret bearer tokens are verified against.
    #[serde(skip_serializing)]
    pub jwt_secret: Option<String>,
    /// Origins allowed by the CORS policy.
    pub cors_origins: Vec<String>,
    /// Completion provider settings.
    pub provider: ProviderSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5001)),
            jwt_secret: None,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            provider: ProviderSettings::default(),
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("cors_origins", &self.cors_origins)
            .field("provider", &self.provider)
            .finish()
    }
}

impl ServiceConfig {
    /// Load configuration the way the binary does: optional file, then the
    /// process environment, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(Into::into)
    }

    /// Override settings from environment-style lookups.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map. Empty
    /// values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(secret) = get(ENV_JWT_SECRET) {
            self.jwt_secret = Some(secret);
        }
        if let Some(key) = get(ENV_OPENROUTER_API_KEY).or_else(|| get(ENV_OPENAI_API_KEY)) {
            self.provider.api_key = Some(key);
        }
        if let Some(base_url) = get(ENV_LLM_BASE_URL) {
            self.provider.base_url = base_url;
        }
        if let Some(model) = get(ENV_LLM_MODEL) {
            self.provider.model = model;
        }
        if let Some(timeout) = get(ENV_LLM_TIMEOUT_SECS) {
            self.provider.timeout_secs = parse_value(ENV_LLM_TIMEOUT_SECS, &timeout)?;
        }
        if let Some(addr) = get(ENV_BIND_ADDR) {
            self.bind_addr = parse_value(ENV_BIND_ADDR, &addr)?;
        }
        if let Some(origins) = get(ENV_CORS_ORIGINS) {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(())
    }

    /// Check that the configuration can run the service.
    ///
    /// A missing API key is not an error here; the server starts and reports
    /// the problem on every completion-backed request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingSecret(ENV_JWT_SECRET));
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "provider.base_url",
                message: "must not be empty".to_string(),
            });
        }
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "provider.model",
                message: "must not be empty".to_string(),
            });
        }
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "provider.timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}
