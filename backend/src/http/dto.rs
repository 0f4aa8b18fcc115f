//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies reuse the service-layer input schemas; listing rows are
//! serialized straight from [`AnnotatedSchool`].

use serde::{Deserialize, Serialize};

use crate::models::SchoolId;

pub use crate::models::AnnotatedSchool;
pub use crate::services::{AddSchoolInput, CoordinateQuery};

/// Body returned with 201 after a school is stored.
pub const SCHOOL_ADDED_MESSAGE: &str = "School added successfully!";

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response for a successful `POST /addSchool`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    pub message: String,
    #[serde(rename = "schoolId")]
    pub school_id: SchoolId,
}

impl AddSchoolResponse {
    pub fn new(school_id: SchoolId) -> Self {
        Self {
            message: SCHOOL_ADDED_MESSAGE.to_string(),
            school_id,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
