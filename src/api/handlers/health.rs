//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the service and its store are reachable.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: `{"ok": true, "version": "0.1.0"}`
/// - **503 Service Unavailable**: store unreachable, `"ok": false`
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ok = state.link_service.is_healthy().await;

    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            ok,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
