//! CodeAgentix backend server
//!
//! A small HTTP service that turns coding tasks into prompts for a
//! chat-completion model and hands the model's text back to the caller.
//!
//! # Routes
//!
//! | Route | Auth | Response |
//! |---|---|---|
//! | `POST /generate_code` | bearer | generated code (text) |
//! | `POST /get-output` | open | simulated terminal output (text) |
//! | `POST /refactor_code` | bearer | refactored code (text) |
//! | `POST /htmlcssjsgenerate-code` | bearer | generated HTML/CSS/JS (text) |
//! | `POST /htmlcssjsrefactor-code` | bearer | `{"html" \| "css" \| "js": ...}` |
//! | `POST /ai-chat` | bearer | explanation / review (text) |
//! | `GET /health` | open | `{"status": "ok", "provider_configured": bool}` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use codeagentix_server::{CodeAgentServer, ServiceConfig};
//!
//! let config = ServiceConfig::load(None)?;
//! CodeAgentServer::start(config).await?;
//! ```

pub mod auth;
pub mod completion;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod http_utils;
pub mod languages;
pub mod logging;
pub mod prompts;
pub mod server;

pub use auth::{AuthClaims, TokenVerifier};
pub use completion::{
    CompletionError, CompletionProvider, OpenAiCompatibleClient, UnconfiguredProvider,
};
pub use config::{ConfigError, ProviderSettings, ServiceConfig};
pub use error::ApiError;
pub use extract::extract_fenced;
pub use server::{build_router, AppState, CodeAgentServer};
