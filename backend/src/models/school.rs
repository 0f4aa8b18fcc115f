//! School domain types.
//!
//! A [`School`] is the persisted entity. [`NewSchool`] is the validated write
//! payload handed to the repository, and [`AnnotatedSchool`] is the transient
//! response row produced by the proximity listing.

use qtty::{Degrees, Kilometers};
use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(i64, SchoolId);

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        }
    }

    /// Whether latitude lies in [-90, 90] and longitude in [-180, 180].
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.value())
            && (-180.0..=180.0).contains(&self.longitude.value())
    }
}

/// A stored school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl School {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A validated school submission, not yet assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub location: Coordinate,
}

impl NewSchool {
    /// Attach the storage-assigned id.
    pub fn into_school(self, id: SchoolId) -> School {
        School {
            id,
            name: self.name,
            address: self.address,
            latitude: self.location.latitude,
            longitude: self.location.longitude,
        }
    }
}

/// A school plus its distance from the caller, serialized flat:
/// `{id, name, address, latitude, longitude, distance}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSchool {
    #[serde(flatten)]
    pub school: School,
    pub distance: Kilometers,
}
