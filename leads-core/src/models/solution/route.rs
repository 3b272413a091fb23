#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::algorithms::geometry::distance_km;
use crate::models::common::Coordinate;
use crate::models::problem::ProspectRecord;

/// Represents a visiting order of the selected prospects.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    /// Prospects in visiting order.
    pub stops: Vec<ProspectRecord>,
    /// Origin followed by each stop coordinate in visiting order.
    pub polyline: Vec<Coordinate>,
}

impl RouteResult {
    /// Creates a new instance of `RouteResult` building polyline from origin and stops.
    pub fn new(origin: Coordinate, stops: Vec<ProspectRecord>) -> Self {
        let polyline = std::iter::once(origin).chain(stops.iter().map(|stop| stop.coordinate)).collect();

        Self { stops, polyline }
    }

    /// Returns route origin.
    pub fn origin(&self) -> Coordinate {
        self.polyline[0]
    }

    /// Returns stop ids in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.id.as_str()).collect()
    }

    /// Returns distance of each leg: from origin to the first stop, then between consecutive stops.
    pub fn leg_distances(&self) -> Vec<f64> {
        self.polyline.windows(2).map(|leg| distance_km(leg[0], leg[1])).collect()
    }

    /// Returns total distance of the walk in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.leg_distances().iter().sum()
    }
}
