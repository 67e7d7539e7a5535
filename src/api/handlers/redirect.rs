//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Atomically increment `clicks` and set `last_clicked` for the code
/// 2. Return 302 Found with the target in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist. Storage failures are
/// logged and also reported as 404.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.link_service.redirect(&code).await?;

    tracing::debug!(%code, %target_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
