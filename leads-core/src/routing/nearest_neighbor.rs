#[cfg(test)]
#[path = "../../tests/unit/routing/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use crate::algorithms::geometry::distance_km;
use crate::models::common::Coordinate;
use crate::models::problem::{ProspectRecord, ensure_unique_ids};
use crate::models::solution::RouteResult;
use crate::utils::{EngineError, EngineResult};
use rustc_hash::FxHashSet;

/// Builds a visiting order of `stops` starting from `origin` using greedy nearest neighbor heuristic.
///
/// On each step the closest unvisited stop is chosen, ties are resolved in favor of the one which comes
/// first in `stops`. The result is not guaranteed to be the shortest tour. Complexity is O(n^2).
///
/// Fails without computing anything when there are fewer than two distinct stops, when ids are not
/// unique, or when any coordinate is invalid.
pub fn optimize_route(origin: Coordinate, stops: &[ProspectRecord]) -> EngineResult<RouteResult> {
    let distinct = stops.iter().map(|stop| stop.id.as_str()).collect::<FxHashSet<_>>().len();
    if distinct < 2 {
        return Err(EngineError::InsufficientStops { distinct });
    }

    ensure_unique_ids(stops)?;
    origin.validate(None)?;
    stops.iter().try_for_each(|stop| stop.validate())?;

    let mut remaining = stops.iter().collect::<Vec<_>>();
    let mut visited = Vec::with_capacity(stops.len());
    let mut current = origin;

    while let Some(nearest) = find_nearest(current, remaining.as_slice()) {
        let stop = remaining.remove(nearest);
        current = stop.coordinate;
        visited.push(stop.clone());
    }

    Ok(RouteResult::new(origin, visited))
}

/// Returns index of the closest candidate, the first one wins on equal distance.
fn find_nearest(current: Coordinate, candidates: &[&ProspectRecord]) -> Option<usize> {
    candidates
        .iter()
        .map(|candidate| distance_km(current, candidate.coordinate))
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((idx, distance)),
        })
        .map(|(idx, _)| idx)
}
