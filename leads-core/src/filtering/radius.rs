#[cfg(test)]
#[path = "../../tests/unit/filtering/radius_test.rs"]
mod radius_test;

use super::ProspectCriteria;
use crate::algorithms::geometry::distance_km;
use crate::models::common::Coordinate;
use crate::models::problem::ProspectRecord;
use crate::utils::EngineResult;

/// Radius choices in kilometers offered to the user by default.
pub const RADIUS_PRESETS_KM: [f64; 5] = [5., 10., 15., 20., 25.];

/// A prospect annotated with its distance from reference location.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedProspect {
    /// Original record.
    pub record: ProspectRecord,
    /// Great-circle distance from reference location in kilometers.
    pub distance: f64,
}

/// Returns prospects within `radius_km` (inclusive) from `reference`, nearest first.
///
/// Prospects at the same distance keep their input order. Non-positive radius gives an empty list.
/// Fails when `reference` is invalid, prospects with invalid coordinates are skipped.
pub fn filter_within_radius(
    reference: Coordinate,
    records: &[ProspectRecord],
    radius_km: f64,
) -> EngineResult<Vec<RankedProspect>> {
    filter_with_criteria(reference, records, radius_km, &ProspectCriteria::default())
}

/// Returns prospects within `radius_km` from `reference` which also match given criteria, nearest first.
pub fn filter_with_criteria(
    reference: Coordinate,
    records: &[ProspectRecord],
    radius_km: f64,
    criteria: &ProspectCriteria,
) -> EngineResult<Vec<RankedProspect>> {
    reference.validate(None)?;

    if radius_km.is_nan() || radius_km <= 0. {
        return Ok(vec![]);
    }

    let ranked = rank(reference, records.iter().filter(|record| criteria.matches(record)))
        .into_iter()
        .filter(|ranked| ranked.distance <= radius_km)
        .collect();

    Ok(sorted(ranked))
}

/// Returns all prospects annotated with distance from `reference`, nearest first.
pub fn sort_by_distance(reference: Coordinate, records: &[ProspectRecord]) -> EngineResult<Vec<RankedProspect>> {
    reference.validate(None)?;

    Ok(sorted(rank(reference, records.iter())))
}

fn rank<'a>(reference: Coordinate, records: impl Iterator<Item = &'a ProspectRecord>) -> Vec<RankedProspect> {
    records
        .filter(|record| record.validate().is_ok())
        .map(|record| RankedProspect { record: record.clone(), distance: distance_km(reference, record.coordinate) })
        .collect()
}

fn sorted(mut ranked: Vec<RankedProspect>) -> Vec<RankedProspect> {
    // stable: equal distances keep input order
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
