//! Tkani Catalog API
//!
//! HTTP front for the in-memory fabric catalog: public browsing (listing
//! with filters, detail, related items, categories), admin CRUD, and CSV
//! import/export of the whole catalog.
//!
//! The catalog lives in process memory by design; there is no persistence
//! layer behind this service.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use tkani_store::CatalogStore;
use tkani_utils::AppConfig;

pub mod handlers;
pub mod middleware;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub config: AppConfig,
}

/// Builds the application router around a catalog store.
pub fn create_app(store: Arc<CatalogStore>, config: &AppConfig) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // API routes
        .nest("/api/v1", routes::create_api_routes())
        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(middleware::request_id_middleware)),
        )
        // Application state
        .with_state(AppState {
            store,
            config: config.clone(),
        })
}
