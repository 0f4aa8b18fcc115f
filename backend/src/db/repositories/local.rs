//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. Schools live in a `Vec`
//! behind a lock, so execution is fast, deterministic, and isolated per
//! instance.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, SchoolRepository};
use crate::models::{NewSchool, School, SchoolId};

/// In-memory local repository.
///
/// Cloning shares the underlying storage.
///
/// # Example
/// ```
/// use school_locator::db::repositories::LocalRepository;
/// use school_locator::db::repository::SchoolRepository;
/// use school_locator::models::{Coordinate, NewSchool};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = LocalRepository::new();
///     let id = repo
///         .insert_school(&NewSchool {
///             name: "Hillside".to_string(),
///             address: "1 Hill Rd".to_string(),
///             location: Coordinate::new(10.0, 20.0),
///         })
///         .await
///         .unwrap();
///     assert_eq!(id.value(), 1);
///     assert_eq!(repo.list_schools().await.unwrap().len(), 1);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    schools: Vec<School>,
    next_school_id: SchoolId,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            schools: Vec::new(),
            next_school_id: SchoolId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy, every read and write fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository. Ids restart at 1.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of schools stored.
    pub fn school_count(&self) -> usize {
        self.data.read().schools.len()
    }

    fn ensure_healthy(data: &LocalData, operation: &str) -> RepositoryResult<()> {
        if data.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection_with_context(
                "Local repository is marked unhealthy",
                ErrorContext::new(operation).with_entity("school"),
            ))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_school(&self, school: &NewSchool) -> RepositoryResult<SchoolId> {
        let mut data = self.data.write();
        Self::ensure_healthy(&data, "insert_school")?;

        let id = data.next_school_id;
        data.next_school_id = SchoolId(id.0 + 1);
        data.schools.push(school.clone().into_school(id));

        Ok(id)
    }

    async fn list_schools(&self) -> RepositoryResult<Vec<School>> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "list_schools")?;
        Ok(data.schools.clone())
    }
}
