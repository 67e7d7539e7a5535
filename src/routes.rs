//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - Short link redirect
//! - `GET  /healthz` - Liveness and store reachability
//! - `/links*`       - Link management API
//!
//! Static routes take priority over `/{code}`, which is why codes that
//! collide with them are reserved (see
//! [`crate::utils::code_generator::RESERVED_CODES`]).

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and access logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] with trailing-slash normalization for serving.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
