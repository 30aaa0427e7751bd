//! Router assembly and server entry point.

use crate::auth::{self, TokenVerifier};
use crate::completion::{CompletionProvider, OpenAiCompatibleClient, UnconfiguredProvider};
use crate::config::{ConfigError, ServiceConfig, ENV_JWT_SECRET};
use crate::error::ApiError;
use crate::handlers;
use crate::http_utils;
use anyhow::Result;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, error, info, warn};

/// Shared application state, read-only after startup.
pub struct AppState {
    pub config: ServiceConfig,
    pub provider: Arc<dyn CompletionProvider>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Assemble state around an already built provider.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::MissingSecret`] when no JWT secret is set.
    pub fn new(
        config: ServiceConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, ConfigError> {
        let secret = config
            .jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingSecret(ENV_JWT_SECRET))?;
        let verifier = Arc::new(TokenVerifier::hs512(secret.as_bytes()));
        Ok(Self {
            config,
            provider,
            verifier,
        })
    }

    /// Assemble state with the provider described by `config`.
    ///
    /// Without an API key the server still starts; the completion-backed
    /// routes then answer 500.
    pub fn from_config(config: ServiceConfig) -> Result<Self, ConfigError> {
        let provider: Arc<dyn CompletionProvider> =
            match OpenAiCompatibleClient::new(&config.provider) {
                Ok(client) => {
                    info!(endpoint = client.endpoint(), model = client.model(), "completion provider ready");
                    Arc::new(client)
                },
                Err(err) => {
                    error!(error = %err, "completion provider unavailable; completion routes will fail");
                    Arc::new(UnconfiguredProvider::new(err.to_string()))
                },
            };
        Self::new(config, provider)
    }

    /// Run one completion.
    pub async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        debug!(prompt_chars = prompt.len(), "requesting completion");
        Ok(self.provider.complete(prompt).await?)
    }
}

/// CORS policy for the configured origins. Origins that are not valid
/// header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/generate_code", post(handlers::code::generate_code))
        .route("/refactor_code", post(handlers::code::refactor_code))
        .route("/htmlcssjsgenerate-code", post(handlers::web::generate_asset))
        .route("/htmlcssjsrefactor-code", post(handlers::web::refactor_asset))
        .route("/ai-chat", post(handlers::assist::ai_chat))
        .route_layer(middleware::from_fn_with_state(
            state.verifier.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::page::health))
        // Open route: no bearer token required.
        .route("/get-output", post(handlers::code::get_output))
        .merge(protected)
        .layer(middleware::from_fn(http_utils::log_requests))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

/// CodeAgentix HTTP server
pub struct CodeAgentServer;

impl CodeAgentServer {
    /// Bind to `config.bind_addr` and serve until Ctrl+C.
    pub async fn start(config: ServiceConfig) -> Result<()> {
        let addr = config.bind_addr;
        let state = Arc::new(AppState::from_config(config)?);
        let app = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        info!("CodeAgentix server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: Option<&str>) -> ServiceConfig {
        ServiceConfig {
            jwt_secret: secret.map(str::to_string),
            ..ServiceConfig::default()
        }
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let provider = Arc::new(UnconfiguredProvider::new("test"));
        let err = AppState::new(config(None), provider.clone()).err().unwrap();
        assert!(matches!(err, ConfigError::MissingSecret(ENV_JWT_SECRET)));
        assert!(AppState::new(config(Some("")), provider).is_err());
    }

    #[test]
    fn test_missing_api_key_installs_unconfigured_provider() {
        let state = AppState::from_config(config(Some("secret"))).unwrap();
        assert!(!state.provider.is_configured());
    }

    #[test]
    fn test_api_key_installs_client() {
        let mut config = config(Some("secret"));
        config.provider.api_key = Some("sk-test".to_string());
        let state = AppState::from_config(config).unwrap();
        assert!(state.provider.is_configured());
    }
}
