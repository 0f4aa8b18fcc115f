//! Numeric algorithms used by the service layer.

pub mod distance;

pub use distance::{distance, EARTH_RADIUS_KM};
