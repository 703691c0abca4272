//! Router configuration for the NER service.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::read_root))
        // Entity extraction
        .route("/ner", post(handlers::extract_entities))
        // Generated API documentation
        .route("/openapi.json", get(handlers::serve_openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
