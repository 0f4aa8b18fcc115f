//! HTTP handlers for the REST API.
//!
//! Each handler maps one endpoint onto the service layer. Framework rejections
//! for malformed bodies or query strings are reported with the same 400
//! messages as failed validation.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};

use super::dto::{AddSchoolInput, AddSchoolResponse, AnnotatedSchool, CoordinateQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::services::ValidationError;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Body of `GET /`.
pub const ROOT_MESSAGE: &str = "School API running!";

/// GET /
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// GET /health
///
/// Reports whether the storage backend answers.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

/// POST /addSchool
///
/// Body: `{name, address, latitude, longitude}`. Responds 201 with the new id.
pub async fn add_school(
    State(state): State<AppState>,
    body: Result<Json<AddSchoolInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AddSchoolResponse>), AppError> {
    let Json(input) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected addSchool body");
        ValidationError::InvalidSchool
    })?;

    let school_id = state.registrar.add_school(&input).await?;

    Ok((StatusCode::CREATED, Json(AddSchoolResponse::new(school_id))))
}

/// GET /listSchools?latitude=..&longitude=..
///
/// Every stored school with a `distance` field in kilometers, nearest first.
/// Repeated parameters use their first occurrence.
pub async fn list_schools(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> HandlerResult<Vec<AnnotatedSchool>> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected listSchools query");
        ValidationError::InvalidCoordinates
    })?;
    let query = CoordinateQuery::from_pairs(pairs);

    let schools = state.queries.list_near(&query).await?;
    Ok(Json(schools))
}
