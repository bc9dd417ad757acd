//! HTTP status service for the positional exit dashboard.
//!
//! Serves the normalized worker artifacts as JSON and the dashboard's static
//! assets, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use status_reader::{ArtifactSource, FileArtifact};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use config::Config;
use routes::status::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// `/` serves `index.html` from `static_dir`; any other unmatched path is
/// looked up in the same directory.
pub fn create_app<S: ArtifactSource + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    static_dir: impl AsRef<Path>,
) -> Router {
    let static_dir = static_dir.as_ref();

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/status", get(routes::status::get::<S>))
        .route("/api/saida-posicional", get(routes::status::get::<S>))
        .route("/api/precos", get(routes::status::prices::<S>))
        .with_state(state)
        .merge(metrics_router)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            // Read failures are logged by the reader; keep 500s out of ERROR here.
            TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
}

/// Creates file-backed application state from the configured artifact paths.
pub fn create_default_state(config: &Config) -> Arc<AppState<FileArtifact>> {
    Arc::new(AppState::new(
        FileArtifact::new(&config.status_path),
        FileArtifact::new(&config.prices_path),
    ))
}
