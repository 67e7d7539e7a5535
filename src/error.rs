//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a caller can observe is an [`AppError`]. Each variant belongs
//! to one [`ErrorKind`], which decides the HTTP status. Responses always have
//! the shape `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::RepositoryError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Coarse error classes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request body or missing field.
    #[error("{0}")]
    Validation(String),

    #[error("target_url must be a valid URL with http:// or https://")]
    InvalidUrl,

    #[error("code must be 6-8 alphanumeric characters (a-z, A-Z, 0-9)")]
    InvalidCode,

    #[error("code_exists")]
    CodeExists,

    #[error("Link not found")]
    NotFound,

    /// Every generated candidate collided with an existing code.
    #[error("Failed to generate unique code")]
    GenerationExhausted,

    #[error("Internal server error")]
    Storage(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::InvalidUrl | AppError::InvalidCode => {
                ErrorKind::InvalidInput
            }
            AppError::CodeExists => ErrorKind::Conflict,
            AppError::NotFound => ErrorKind::NotFound,
            AppError::GenerationExhausted | AppError::Storage(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::AlreadyExists => AppError::CodeExists,
            RepositoryError::NotFound => AppError::NotFound,
            RepositoryError::Database(e) => AppError::Storage(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Storage(ref source) = self {
            tracing::error!(error = %source, "Storage failure");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
