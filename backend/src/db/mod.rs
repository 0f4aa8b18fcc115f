//! Database module for school storage.
//!
//! Storage is abstracted behind the [`SchoolRepository`] trait so backends can
//! be swapped without touching the service layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service layer (services/) - validation, distance, sort │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  SchoolRepository trait (repository/)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼───────────────┐     ┌──────────▼──────────────┐
//! │ PostgresRepository│     │ LocalRepository         │
//! │ (Diesel + r2d2)   │     │ (in-memory)             │
//! └───────────────────┘     └─────────────────────────┘
//! ```
//!
//! There is no process-wide repository instance: the entry point builds one
//! through [`RepositoryFactory`] and injects it where it is needed.

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod postgres_config;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use postgres_config::PostgresConfig;
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::{PoolStats, PostgresRepository};
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, SchoolRepository};
