//! Write path: validate a submission and store it.

use std::sync::Arc;

use super::error::ServiceResult;
use super::validation::{AddSchoolInput, ValidationOptions};
use crate::db::SchoolRepository;
use crate::models::SchoolId;

/// Registers new schools.
#[derive(Clone)]
pub struct SchoolRegistrar {
    repository: Arc<dyn SchoolRepository>,
    options: ValidationOptions,
}

impl SchoolRegistrar {
    pub fn new(repository: Arc<dyn SchoolRepository>, options: ValidationOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    /// Validate `input` and insert exactly one school, returning its id.
    ///
    /// Nothing is written when validation fails.
    pub async fn add_school(&self, input: &AddSchoolInput) -> ServiceResult<SchoolId> {
        let school = input.validate(self.options)?;
        let id = self.repository.insert_school(&school).await?;
        log::info!("Registered school {} ({})", id, school.name);
        Ok(id)
    }
}
