//! This module contains host facing orchestration of filter, selection and route operations.

#[cfg(test)]
#[path = "../../tests/unit/session/session_test.rs"]
mod session_test;

use crate::filtering::{ProspectCriteria, RankedProspect, filter_with_criteria, sort_by_distance};
use crate::models::common::Coordinate;
use crate::models::problem::{ProspectRecord, ensure_unique_ids};
use crate::models::solution::RouteResult;
use crate::routing::optimize_route;
use crate::selection::{ProspectIdSet, SelectionSet, WorkingSelection};
use crate::utils::{EngineError, EngineResult, Environment};

/// Keeps the last prospect list, the reference location and the shared selection together.
///
/// The reference location comes from an external location provider which may fail or be slow: until it
/// is set, filtering and routing are refused with `MissingReference`, no default location is used.
pub struct Session {
    environment: Environment,
    reference: Option<Coordinate>,
    prospects: Vec<ProspectRecord>,
    selection: SelectionSet,
}

impl Session {
    /// Creates a new instance of `Session`.
    pub fn new(environment: Environment) -> Self {
        Self { environment, reference: None, prospects: vec![], selection: SelectionSet::default() }
    }

    /// Sets reference location.
    pub fn set_reference(&mut self, reference: Coordinate) -> EngineResult<()> {
        reference.validate(None)?;
        self.reference = Some(reference);

        Ok(())
    }

    /// Forgets reference location, e.g. when location permission is revoked.
    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    /// Returns reference location if it is known.
    pub fn reference(&self) -> Option<Coordinate> {
        self.reference
    }

    /// Replaces the prospect list and prunes selected ids which are not in it anymore.
    pub fn load_prospects(&mut self, prospects: Vec<ProspectRecord>) -> EngineResult<()> {
        ensure_unique_ids(prospects.as_slice())?;
        self.prospects = prospects;

        self.log(format!("loaded {} prospects", self.prospects.len()).as_str());
        self.prune_selection();

        Ok(())
    }

    /// Returns the last loaded prospect list.
    pub fn prospects(&self) -> &[ProspectRecord] {
        self.prospects.as_slice()
    }

    /// Returns all prospects, nearest first.
    pub fn sorted_prospects(&self) -> EngineResult<Vec<RankedProspect>> {
        sort_by_distance(self.require_reference()?, self.prospects.as_slice())
    }

    /// Returns prospects within given radius which match criteria, nearest first.
    ///
    /// Selected ids which are not in the last loaded list are pruned before filtering.
    pub fn filter(&mut self, radius_km: f64, criteria: &ProspectCriteria) -> EngineResult<Vec<RankedProspect>> {
        self.prune_selection();

        let ranked = filter_with_criteria(self.require_reference()?, self.prospects.as_slice(), radius_km, criteria)?;
        self.log(format!("{} of {} prospects within {radius_km} km", ranked.len(), self.prospects.len()).as_str());

        Ok(ranked)
    }

    /// Toggles prospect in the shared selection. Ids which are not in the last loaded list are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_known(id) { self.selection.toggle(id) } else { false }
    }

    /// Returns a copy of the shared selection.
    pub fn selection(&self) -> ProspectIdSet {
        self.selection.snapshot()
    }

    /// Returns a working copy of the shared selection for a view to edit.
    pub fn working_selection(&self) -> WorkingSelection {
        WorkingSelection::seeded_from(&self.selection)
    }

    /// Publishes view's working selection, it replaces the shared one.
    pub fn apply(&mut self, working: WorkingSelection) {
        working.apply(&mut self.selection);
        self.prune_selection();
    }

    /// Builds route through the selected prospects starting from reference location.
    ///
    /// Selected prospects are passed to the optimizer in the order of the loaded list.
    pub fn create_route(&self) -> EngineResult<RouteResult> {
        let origin = self.require_reference()?;
        let stops = self
            .prospects
            .iter()
            .filter(|prospect| self.selection.contains(prospect.id.as_str()))
            .cloned()
            .collect::<Vec<_>>();

        let route = optimize_route(origin, stops.as_slice())?;
        self.log(
            format!("route with {} stops, total distance: {:.3} km", route.stops.len(), route.total_distance())
                .as_str(),
        );

        Ok(route)
    }

    /// Drops current selection.
    pub fn cancel_route(&mut self) {
        self.selection.clear();
    }

    fn require_reference(&self) -> EngineResult<Coordinate> {
        self.reference.ok_or(EngineError::MissingReference)
    }

    fn is_known(&self, id: &str) -> bool {
        self.prospects.iter().any(|prospect| prospect.id == id)
    }

    fn prune_selection(&mut self) {
        let prospects = &self.prospects;
        let stale = self.selection.retain_known(|id| prospects.iter().any(|prospect| prospect.id == id));

        if !stale.is_empty() {
            (self.environment.logger)(format!("removed unknown ids from selection: {}", stale.join(", ")).as_str());
        }
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message);
    }
}
