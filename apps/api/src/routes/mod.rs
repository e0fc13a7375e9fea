pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::frontend::serve_frontend;
use crate::jobs::handlers;
use crate::state::AppState;

/// API routes plus the SPA catch-all. Cross-origin requests are allowed from anywhere.
///
/// Analytics and export take whole result sets from the client, so they carry
/// no body size limit.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/jobs/filters", get(handlers::handle_filters))
        .route("/api/jobs/search", post(handlers::handle_search))
        .route(
            "/api/jobs/analytics",
            post(handlers::handle_analytics).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/api/jobs/export",
            post(handlers::handle_export).layer(DefaultBodyLimit::disable()),
        )
        // Front-end bundle
        .route("/", get(serve_frontend))
        .route("/*path", get(serve_frontend))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
