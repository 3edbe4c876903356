use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Facets
        .route("/types", get(handlers::get_types))
        .route("/genres", get(handlers::get_genres))
        // Sampling
        .route("/sample", post(handlers::sample))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Request IDs are assigned outside the trace layer so its span sees them
        .layer(middleware::from_fn(request_id_middleware))
        // The picker form is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
