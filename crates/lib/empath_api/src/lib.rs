//! # empath_api
//!
//! HTTP API library for Empath.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use empath_core::PhraseBank;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::handlers::{chat, hello};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Reply phrase tables, built once at startup and never mutated.
    pub phrases: Arc<PhraseBank>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            phrases: Arc::new(PhraseBank::new()),
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/hello", get(hello::hello_handler))
        .route("/api/chat", post(chat::chat_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// Maps a panicking handler to the generic 500 body, details stay server-side.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    use axum::response::IntoResponse;

    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(detail).into_response()
}
