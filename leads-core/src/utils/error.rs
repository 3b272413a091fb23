#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::problem::ProspectId;
use std::fmt;

/// An error which can be returned by engine operations.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Route optimization was requested with fewer than two distinct stops.
    InsufficientStops {
        /// Amount of distinct stops passed.
        distinct: usize,
    },

    /// Latitude or longitude is out of valid range or is not a finite number.
    InvalidCoordinate {
        /// An id of the prospect which owns coordinate, `None` for reference location.
        id: Option<ProspectId>,
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },

    /// The same prospect id is used more than once in a single list.
    DuplicateStop {
        /// Duplicated id.
        id: ProspectId,
    },

    /// Reference location is not acquired yet.
    MissingReference,
}

/// A type alias for result type with `EngineError`.
pub type EngineResult<T> = Result<T, EngineError>;

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientStops { distinct } => {
                write!(f, "route requires at least 2 distinct stops, got {distinct}")
            }
            Self::InvalidCoordinate { id: Some(id), latitude, longitude } => {
                write!(f, "prospect '{id}' has invalid coordinate: lat={latitude}, lng={longitude}")
            }
            Self::InvalidCoordinate { id: None, latitude, longitude } => {
                write!(f, "reference has invalid coordinate: lat={latitude}, lng={longitude}")
            }
            Self::DuplicateStop { id } => write!(f, "prospect id '{id}' is used more than once"),
            Self::MissingReference => write!(f, "reference location is not available"),
        }
    }
}

impl std::error::Error for EngineError {}
