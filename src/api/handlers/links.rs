//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://github.com",
///   "code": "GITHUB"   // optional, 6-8 alphanumeric characters
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for a missing or invalid `target_url` or an invalid `code`
/// - 409 Conflict with `{"error": "code_exists"}` if `code` is taken
/// - 500 Internal Server Error if no unique code could be generated
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let target_url = payload.target_url.unwrap_or_default();

    let link = state
        .link_service
        .create_link(&target_url, payload.code.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link with its click statistics.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{code}`
///
/// The record is removed from the store, so the code stops redirecting
/// immediately.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or was already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
