//! This module reimports commonly used types.

pub use crate::algorithms::geometry::distance_km;

pub use crate::filtering::{
    ProspectCriteria, RankedProspect, filter_with_criteria, filter_within_radius, sort_by_distance,
};

pub use crate::models::common::Coordinate;
pub use crate::models::problem::{ProspectCategory, ProspectId, ProspectRecord, ProspectStatus};
pub use crate::models::solution::RouteResult;

pub use crate::routing::{NavigationLink, TravelMode, optimize_route};

pub use crate::selection::{SelectionSet, SharedSelectionSet, WorkingSelection};

pub use crate::session::Session;

pub use crate::utils::{EngineError, EngineResult, Environment, InfoLogger};
