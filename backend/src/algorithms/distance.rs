//! Great-circle distance between two geographic coordinates.
//!
//! Uses the haversine formula on a spherical Earth of radius
//! [`EARTH_RADIUS_KM`]. Non-finite inputs propagate to the output; callers are
//! expected to reject them before they get here.

use qtty::{Kilometers, Radian};

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `from` and `to`.
///
/// # Example
///
/// ```
/// use school_locator::algorithms::distance::distance;
/// use school_locator::models::Coordinate;
///
/// let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((d.value() - 111.19).abs() < 0.1);
/// ```
pub fn distance(from: Coordinate, to: Coordinate) -> Kilometers {
    let lat1 = from.latitude.to::<Radian>().value();
    let lon1 = from.longitude.to::<Radian>().value();
    let lat2 = to.latitude.to::<Radian>().value();
    let lon2 = to.longitude.to::<Radian>().value();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Kilometers::new(EARTH_RADIUS_KM * c)
}
