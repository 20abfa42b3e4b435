//! Error types and handling
//!
//! Every failure a handler can produce is an [`AppError`]. Client errors carry
//! a JSON [`ErrorResponse`] body, except `NotFound` which answers with an
//! empty 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found (404, empty body)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A referenced entity does not exist (400)
    #[error("{0}")]
    InvalidReference(String),

    /// Request body or parameters failed validation (400)
    #[error("{0}")]
    ValidationError(String),

    /// Database error (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        AppError::InvalidReference(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    /// Machine-readable error type used in response bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::InvalidReference(_) => "invalid_reference",
            AppError::ValidationError(_) => "validation_error",
            AppError::Database(_) => "database_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// HTTP status this error is surfaced as
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidReference(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, error_type = self.error_type(), "Request error");
        }

        if let AppError::NotFound(_) = self {
            return status.into_response();
        }

        let body = ErrorResponse::new(self.error_type(), self.to_string());
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain in the message
        if err.downcast_ref::<sqlx::Error>().is_some() {
            AppError::Database(format!("{:#}", err))
        } else {
            AppError::Internal(format!("{:#}", err))
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;
