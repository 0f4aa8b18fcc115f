//! Error types surfaced by the school services.

use crate::db::RepositoryError;

/// Client-caused input failures. The display text is the exact message
/// returned to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A new-school submission was missing a field or had a wrongly typed one.
    #[error("All fields are required and must be valid.")]
    InvalidSchool,
    /// The caller's latitude/longitude query parameters were absent or non-numeric.
    #[error("Valid latitude and longitude are required as query params.")]
    InvalidCoordinates,
}

/// Error returned by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
