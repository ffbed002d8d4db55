//! Route configuration and setup.

use crate::handlers::{
    config::get_config,
    fallback::{endpoint_not_found, method_not_allowed},
    health::health,
    openapi::openapi_json,
    storage_test::storage_test,
    upload::upload_video,
    videos::list_videos,
};
use crate::middleware::{cors_middleware, redact_error_details};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// API routes under `/api`
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/upload", post(upload_video).fallback(method_not_allowed))
        .route("/api/videos", get(list_videos).fallback(method_not_allowed))
        .route("/api/health", get(health).fallback(method_not_allowed))
        .route("/api/config", get(get_config).fallback(method_not_allowed))
        .route(
            "/api/storage-test",
            get(storage_test).fallback(method_not_allowed),
        )
        .route(
            "/api/openapi.json",
            get(openapi_json).fallback(method_not_allowed),
        )
        .route("/api", any(endpoint_not_found))
        .route("/api/", any(endpoint_not_found))
        .route("/api/{*rest}", any(endpoint_not_found))
        .with_state(state)
}

/// Setup all application routes: API, static assets and the shared layers.
pub fn setup_routes(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    tracing::info!(static_dir = %static_dir, "Serving static assets");

    api_routes(state.clone())
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn_with_state(
            state,
            redact_error_details,
        ))
        // Upload size is enforced while streaming the multipart field
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(cors_middleware))
}
