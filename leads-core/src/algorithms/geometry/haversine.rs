#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/haversine_test.rs"]
mod haversine_test;

use crate::models::common::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// Gets great-circle distance in kilometers between two points using haversine formula.
///
/// Coordinates are expected to be in valid range, no validation is performed.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.).sin().powi(2);
    // rounding can push h slightly outside of [0, 1] for antipodal points
    let h = h.clamp(0., 1.);
    let c = 2. * h.sqrt().atan2((1. - h).sqrt());

    EARTH_RADIUS_KM * c
}
