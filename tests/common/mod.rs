//! Shared fixtures for the router integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use codeagentix_server::{
    build_router, AppState, CompletionError, CompletionProvider, ServiceConfig,
    UnconfiguredProvider,
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

/// Provider that answers with a fixed reply and records every prompt.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

pub fn config() -> ServiceConfig {
    ServiceConfig {
        jwt_secret: Some(SECRET.to_string()),
        ..ServiceConfig::default()
    }
}

pub fn app(provider: Arc<RecordingProvider>) -> Router {
    let state = AppState::new(config(), provider).unwrap();
    build_router(Arc::new(state))
}

pub fn unconfigured_app() -> Router {
    let provider = Arc::new(UnconfiguredProvider::new("OPENROUTER_API_KEY is not set"));
    let state = AppState::new(config(), provider).unwrap();
    build_router(Arc::new(state))
}

pub fn token_with(alg: Algorithm, secret: &str) -> String {
    token_with_claims(alg, secret, json!({"sub": "student-42", "email": "student@example.com"}))
}

pub fn token_with_claims(alg: Algorithm, secret: &str, claims: Value) -> String {
    encode(&Header::new(alg), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

pub fn token() -> String {
    token_with(Algorithm::HS512, SECRET)
}

pub fn post_json(path: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body = text(response).await;
    (status, serde_json::from_str(&body).unwrap())
}
