// src/api/http/router.rs
// HTTP router composition for the REST endpoints

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::{chat::chat_handler, handlers::health_handler};
use crate::state::AppState;

/// API router for health and chat. Nested under /api by app_router.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .with_state(app_state)
}

/// Full application router: the API under /api, the static client UI at
/// the root path.
pub fn app_router(app_state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .nest("/api", api_router(app_state))
        .fallback_service(ServeDir::new(static_dir))
}
