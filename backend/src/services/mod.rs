//! Service layer for school registration and proximity queries.
//!
//! Services own validation and ordering; storage is reached only through the
//! injected [`SchoolRepository`](crate::db::SchoolRepository).

pub mod error;
pub mod school_query;
pub mod school_registrar;
pub mod validation;

pub use error::{ServiceError, ServiceResult, ValidationError};
pub use school_query::{nearest_first, SchoolQueryService};
pub use school_registrar::SchoolRegistrar;
pub use validation::{parse_float_prefix, AddSchoolInput, CoordinateQuery, ValidationOptions};
