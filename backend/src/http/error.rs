//! HTTP error handling and response types.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ApiError;
use crate::db::RepositoryError;
use crate::services::{ServiceError, ValidationError};

/// Generic body for every server-side failure. Causes are logged, never sent.
pub const DATABASE_ERROR_MESSAGE: &str = "Database error";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing client input (400)
    Validation(ValidationError),
    /// Persistence failure (500)
    Storage(RepositoryError),
    /// Any other unexpected fault (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DATABASE_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "unexpected internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DATABASE_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ApiError::new(message))).into_response()
    }
}

/// Turn a handler panic into the generic 500 response.
///
/// Installed on the router through `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", details)).into_response()
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => AppError::Validation(e),
            ServiceError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Storage(err)
    }
}
