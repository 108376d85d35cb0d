// lib.rs - exports the service modules so integration tests can assemble the app
pub mod db;
pub mod handlers;
pub mod inference;
pub mod middleware;
pub mod models;
pub mod prompt;
pub mod store;
pub mod workers_ai_client;

use axum::{Extension, Router};
use std::sync::Arc;

use inference::InferenceBackend;
use store::SessionStore;

/// Shared application state: the two capabilities behind the HTTP surface,
/// held as trait objects so tests can swap in fakes.
pub struct AppState {
    pub inference: Arc<dyn InferenceBackend>,
    pub store: Arc<dyn SessionStore>,
}

/// Builds the full application: the API routes, the liveness fallback for
/// everything else, CORS and request logging, and the shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::chat::chat_routes())
        .merge(handlers::report::report_routes())
        .fallback(handlers::service_online)
        .layer(axum::middleware::from_fn(middleware::cors::cors_middleware))
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(Extension(state))
}
