//! Haversine distance calculation.
//!
//! Great-circle distance between two points on a sphere, in miles.

use dropoff_core::Coordinate;

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculates the great-circle distance between two coordinates in miles.
///
/// Symmetric, zero for identical points, and total for in-range inputs: the
/// haversine term stays in `[0, 1]`, so there is no domain error to hit.
/// Out-of-range latitudes/longitudes are not validated and produce
/// undefined results.
#[inline]
#[must_use]
pub fn distance_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h =
        (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}
