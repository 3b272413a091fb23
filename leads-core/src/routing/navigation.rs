#[cfg(test)]
#[path = "../../tests/unit/routing/navigation_test.rs"]
mod navigation_test;

use crate::models::common::Coordinate;
use crate::models::solution::RouteResult;
use std::fmt;
use std::str::FromStr;

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Specifies a travel mode requested from navigation service.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TravelMode {
    /// By car.
    #[default]
    Driving,
    /// On foot.
    Walking,
    /// By bicycle.
    Bicycling,
    /// By public transport.
    Transit,
}

/// Directions request which hands a route over to an external navigation application.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationLink {
    /// Route start.
    pub origin: Coordinate,
    /// The last stop.
    pub destination: Coordinate,
    /// Intermediate stops in visiting order.
    pub waypoints: Vec<Coordinate>,
    /// Travel mode.
    pub travel_mode: TravelMode,
}

impl NavigationLink {
    /// Creates a link from the route, returns `None` if route has no stops.
    pub fn from_route(route: &RouteResult, travel_mode: TravelMode) -> Option<Self> {
        match route.polyline.as_slice() {
            [origin, waypoints @ .., destination] => Some(Self {
                origin: *origin,
                destination: *destination,
                waypoints: waypoints.to_vec(),
                travel_mode,
            }),
            _ => None,
        }
    }

    /// Renders directions url.
    pub fn to_url(&self) -> String {
        let mut url = format!("{DIRECTIONS_BASE_URL}&origin={}&destination={}", self.origin, self.destination);

        if !self.waypoints.is_empty() {
            let waypoints = self.waypoints.iter().map(|waypoint| waypoint.to_string()).collect::<Vec<_>>().join("|");
            url.push_str(format!("&waypoints={waypoints}").as_str());
        }

        url.push_str(format!("&travelmode={}", self.travel_mode).as_str());

        url
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        };

        write!(f, "{value}")
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "bicycling" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            _ => Err(format!("unknown travel mode: '{value}'")),
        }
    }
}
