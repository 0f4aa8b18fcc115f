//! Repository trait for school persistence.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewSchool, School, SchoolId};

/// Storage operations the school service consumes.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across request handlers behind an `Arc`.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert one school and return its newly assigned identifier.
    async fn insert_school(&self, school: &NewSchool) -> RepositoryResult<SchoolId>;

    /// Fetch every stored school. No filtering and no ordering guarantee.
    async fn list_schools(&self) -> RepositoryResult<Vec<School>>;
}
