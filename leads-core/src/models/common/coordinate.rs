#[cfg(test)]
#[path = "../../../tests/unit/models/common/coordinate_test.rs"]
mod coordinate_test;

use crate::models::problem::ProspectId;
use crate::utils::{EngineError, EngineResult};
use std::fmt;

/// Represents a geo coordinate in decimal degrees (WGS84).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Latitude, valid range is [-90, 90].
    pub latitude: f64,
    /// Longitude, valid range is [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate` without validation.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a new instance of `Coordinate` checking that it is in valid range.
    pub fn try_new(latitude: f64, longitude: f64) -> EngineResult<Self> {
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate(None)?;

        Ok(coordinate)
    }

    /// Returns true if both latitude and longitude are finite and within their valid range.
    pub fn is_valid(&self) -> bool {
        (-90. ..=90.).contains(&self.latitude) && (-180. ..=180.).contains(&self.longitude)
    }

    /// Checks coordinate range, `owner` is an id of the prospect which has this coordinate.
    pub fn validate(&self, owner: Option<&ProspectId>) -> EngineResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(EngineError::InvalidCoordinate {
                id: owner.cloned(),
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
