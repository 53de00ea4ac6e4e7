use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

use state::AppState;

/// Upload size cap; axum rejects larger bodies before extraction starts.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Build the service router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    let body_limit = axum::extract::DefaultBodyLimit::max(MAX_UPLOAD_BYTES);
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health))
        .route("/extract", post(handlers::extract::extract))
        .route(
            "/extract/{method}",
            post(handlers::extract::extract_with_method),
        )
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}
