//! Application error types.
//!
//! All handler errors converge on [`AppError`], which renders as a JSON
//! `{"error": message}` body with a mapped status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result alias used throughout the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed to parse as the expected JSON shape.
    #[error("Invalid request body")]
    InvalidBody,

    /// Request body parsed but failed field validation.
    #[error("{0}")]
    Validation(String),

    /// The local store could not be reached or opened.
    #[error("Database connection failed: {0}")]
    DatabaseConnection(String),

    /// A query against the local store failed.
    #[error("Database query failed: {0}")]
    DatabaseQuery(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseConnection(_) | AppError::DatabaseQuery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(_: JsonRejection) -> Self {
        AppError::InvalidBody
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::DatabaseQuery(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(AppError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("email: bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_errors_map_to_500() {
        assert_eq!(
            AppError::DatabaseQuery("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_body_message() {
        assert_eq!(AppError::InvalidBody.to_string(), "Invalid request body");
    }
}
