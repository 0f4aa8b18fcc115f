//! # School Locator
//!
//! A small HTTP service for registering schools with geographic coordinates
//! and listing them nearest-first from a caller-supplied location.
//!
//! ## Architecture
//!
//! - [`models`]: `School`, `Coordinate`, `AnnotatedSchool` and the `SchoolId` newtype
//! - [`algorithms`]: haversine great-circle distance
//! - [`services`]: input validation, registration, proximity listing
//! - [`db`]: repository trait with in-memory and Postgres backends
//! - [`http`]: axum router, handlers and server configuration
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use school_locator::db::LocalRepository;
//! use school_locator::services::{CoordinateQuery, SchoolQueryService, ValidationOptions};
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let service = SchoolQueryService::new(Arc::new(LocalRepository::new()), ValidationOptions::default());
//! let schools = service.list_near(&CoordinateQuery::new("0", "0")).await.unwrap();
//! assert!(schools.is_empty());
//! # });
//! ```

pub mod algorithms;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
