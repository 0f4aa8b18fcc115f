//! Proximity listing: every stored school, nearest to the caller first.

use std::cmp::Ordering;
use std::sync::Arc;

use super::error::ServiceResult;
use super::validation::{CoordinateQuery, ValidationOptions};
use crate::algorithms::distance;
use crate::db::SchoolRepository;
use crate::models::{AnnotatedSchool, Coordinate, School};

/// Read path of the school service.
#[derive(Clone)]
pub struct SchoolQueryService {
    repository: Arc<dyn SchoolRepository>,
    options: ValidationOptions,
}

impl SchoolQueryService {
    pub fn new(repository: Arc<dyn SchoolRepository>, options: ValidationOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    /// Validate the caller's location, load all schools, and return them
    /// annotated with their distance in ascending order.
    ///
    /// Validation happens before storage is touched. Storage failures are
    /// returned unchanged.
    pub async fn list_near(&self, query: &CoordinateQuery) -> ServiceResult<Vec<AnnotatedSchool>> {
        let origin = query.validate(self.options)?;
        let schools = self.repository.list_schools().await?;
        log::debug!(
            "Ranking {} schools around ({}, {})",
            schools.len(),
            origin.latitude.value(),
            origin.longitude.value()
        );
        Ok(nearest_first(origin, schools))
    }
}

/// Annotate each school with its distance from `origin` and sort ascending.
///
/// Equal distances fall back to id order so output is deterministic.
pub fn nearest_first(origin: Coordinate, schools: Vec<School>) -> Vec<AnnotatedSchool> {
    let mut annotated: Vec<AnnotatedSchool> = schools
        .into_iter()
        .map(|school| AnnotatedSchool {
            distance: distance(origin, school.coordinate()),
            school,
        })
        .collect();

    annotated.sort_by(|a, b| match a.distance.value().total_cmp(&b.distance.value()) {
        Ordering::Equal => a.school.id.cmp(&b.school.id),
        other => other,
    });
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;
    use crate::models::{NewSchool, SchoolId};
    use crate::services::error::{ServiceError, ValidationError};

    fn school(id: i64, lat: f64, lon: f64) -> School {
        NewSchool {
            name: format!("School {}", id),
            address: format!("{} Main St", id),
            location: Coordinate::new(lat, lon),
        }
        .into_school(SchoolId(id))
    }

    #[test]
    fn test_nearest_first_orders_by_distance() {
        let schools = vec![
            school(1, 10.0, 10.0),
            school(2, 0.0, 1.0),
            school(3, 0.0, 0.0),
            school(4, -45.0, 170.0),
        ];
        let result = nearest_first(Coordinate::new(0.0, 0.0), schools);

        let ids: Vec<i64> = result.iter().map(|s| s.school.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);
        for pair in result.windows(2) {
            assert!(pair[0].distance.value() <= pair[1].distance.value());
        }
    }

    #[test]
    fn test_nearest_first_empty() {
        assert!(nearest_first(Coordinate::new(0.0, 0.0), Vec::new()).is_empty());
    }

    #[test]
    fn test_nearest_first_keeps_all_ties() {
        let schools = vec![school(2, 0.0, 1.0), school(1, 0.0, -1.0), school(3, 1.0, 0.0)];
        let result = nearest_first(Coordinate::new(0.0, 0.0), schools);
        assert_eq!(result.len(), 3);
        for pair in result.windows(2) {
            assert!(pair[0].distance.value() <= pair[1].distance.value() + 1e-9);
        }
    }

    #[tokio::test]
    async fn test_list_near_rejects_before_touching_storage() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        let service = SchoolQueryService::new(Arc::new(repo), ValidationOptions::default());

        let err = service
            .list_near(&CoordinateQuery::new("abc", "0"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::InvalidCoordinates)
        ));
    }

    #[tokio::test]
    async fn test_list_near_surfaces_storage_error() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        let service = SchoolQueryService::new(Arc::new(repo), ValidationOptions::default());

        let err = service
            .list_near(&CoordinateQuery::new("0", "0"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
