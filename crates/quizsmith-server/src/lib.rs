//! quizsmith-server library root.
//!
//! Modules are re-exported so integration tests can exercise the view
//! models and handlers directly, without a running server.

pub mod aws;
pub mod config;
pub mod handlers;
pub mod state;
pub mod templates;
pub mod views;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_cookies::CookieManagerLayer;

use crate::state::AppState;

/// Uploads above this size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/quiz.pdf", get(handlers::download))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
