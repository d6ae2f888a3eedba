//! Axum server setup and routing.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/jobs", get(api::jobs::list_jobs))
        .route("/jobs/{id}", get(api::jobs::get_job))
        .route("/jobs/{id}/bloch", get(api::jobs::get_job_bloch))
        .route("/stats", get(api::stats::get_stats));

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        // The dashboard frontend is served from a different origin during
        // development; the proxy itself carries no credentials the browser
        // could leak.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
