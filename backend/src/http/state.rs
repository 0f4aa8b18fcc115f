//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::SchoolRepository;
use crate::services::{SchoolQueryService, SchoolRegistrar, ValidationOptions};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance, kept for health checks
    pub repository: Arc<dyn SchoolRepository>,
    /// Proximity listing
    pub queries: SchoolQueryService,
    /// School registration
    pub registrar: SchoolRegistrar,
}

impl AppState {
    /// Create application state whose services share `repository`.
    pub fn new(repository: Arc<dyn SchoolRepository>, options: ValidationOptions) -> Self {
        Self {
            queries: SchoolQueryService::new(Arc::clone(&repository), options),
            registrar: SchoolRegistrar::new(Arc::clone(&repository), options),
            repository,
        }
    }
}
