//! Repository trait definitions for database operations.
//!
//! - [`error`]: Error types for repository operations
//! - [`school`]: Insert and read-all operations for schools

pub mod error;
pub mod school;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use school::SchoolRepository;
