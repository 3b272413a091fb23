use super::*;
use crate::helpers::models::*;
use crate::models::problem::{ProspectCategory, ProspectStatus};
use crate::utils::EngineError;
use proptest::prelude::*;

fn get_ranked_ids(ranked: &[RankedProspect]) -> Vec<&str> {
    get_ids(ranked.iter().map(|ranked| &ranked.record))
}

#[test]
fn can_filter_prospects_within_radius() {
    let ranked = filter_within_radius(test_reference(), test_prospects().as_slice(), 10.).unwrap();

    assert_eq!(get_ranked_ids(ranked.as_slice()), vec!["5", "4"]);
    assert!(ranked[0].distance <= ranked[1].distance);
    assert!(ranked.iter().all(|ranked| ranked.distance <= 10.));
}

parameterized_test! {can_return_empty_list_for_non_positive_radius, radius, {
    let ranked = filter_within_radius(test_reference(), test_prospects().as_slice(), radius).unwrap();

    assert!(ranked.is_empty());
}}

can_return_empty_list_for_non_positive_radius! {
    case01_zero: 0.,
    case02_negative: -10.,
    case03_nan: f64::NAN,
}

#[test]
fn can_return_empty_list_for_empty_input() {
    assert!(filter_within_radius(test_reference(), &[], 25.).unwrap().is_empty());
}

#[test]
fn can_include_prospect_exactly_on_boundary() {
    let prospect = test_prospect("edge", 0., 1.);
    let radius = distance_km(Coordinate::new(0., 0.), prospect.coordinate);

    let ranked = filter_within_radius(Coordinate::new(0., 0.), &[prospect], radius).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].distance, radius);
}

#[test]
fn can_keep_input_order_for_equal_distances() {
    let prospects = vec![
        test_prospect("east", 0., 0.1),
        test_prospect("north", 0.1, 0.),
        test_prospect("west", 0., -0.1),
        test_prospect("near", 0., 0.01),
    ];

    let ranked = filter_within_radius(Coordinate::new(0., 0.), prospects.as_slice(), 100.).unwrap();

    assert_eq!(get_ranked_ids(ranked.as_slice()), vec!["near", "east", "north", "west"]);
}

#[test]
fn can_skip_prospects_with_invalid_coordinates() {
    let prospects = vec![test_prospect("bad", 120., 0.), test_prospect("good", 0., 0.01)];

    let ranked = filter_within_radius(Coordinate::new(0., 0.), prospects.as_slice(), 10.).unwrap();

    assert_eq!(get_ranked_ids(ranked.as_slice()), vec!["good"]);
}

#[test]
fn can_fail_on_invalid_reference() {
    let result = filter_within_radius(Coordinate::new(0., 200.), test_prospects().as_slice(), 10.);

    assert_eq!(result, Err(EngineError::InvalidCoordinate { id: None, latitude: 0., longitude: 200. }));
}

parameterized_test! {can_filter_with_criteria, (radius, status, category, expected), {
    let criteria = ProspectCriteria { status, category };

    let ranked = filter_with_criteria(test_reference(), test_prospects().as_slice(), radius, &criteria).unwrap();

    assert_eq!(get_ranked_ids(ranked.as_slice()), expected);
}}

can_filter_with_criteria! {
    case01_no_criteria: (15., None, None, vec!["5", "4", "3", "2"]),
    case02_by_status: (15., Some(ProspectStatus::Negotiating), None, vec!["5", "2"]),
    case03_by_category: (15., None, Some(ProspectCategory::Potential), vec!["3"]),
    case04_by_both: (25., Some(ProspectStatus::New), Some(ProspectCategory::Potential), vec!["3", "1"]),
    case05_nothing_matches: (25., Some(ProspectStatus::Closed), Some(ProspectCategory::Potential), Vec::<&str>::new()),
}

#[test]
fn can_sort_all_prospects_by_distance() {
    let ranked = sort_by_distance(test_reference(), test_prospects().as_slice()).unwrap();

    assert_eq!(get_ranked_ids(ranked.as_slice()), vec!["5", "4", "3", "2", "1"]);
    assert!(ranked.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
}

#[test]
fn can_offer_default_radius_presets() {
    assert_eq!(RADIUS_PRESETS_KM, [5., 10., 15., 20., 25.]);
}

fn prospects() -> impl Strategy<Value = Vec<ProspectRecord>> {
    prop::collection::vec((-1. ..1., -1. ..1.), 0..30).prop_map(|coordinates| {
        coordinates
            .into_iter()
            .enumerate()
            .map(|(idx, (latitude, longitude))| test_prospect(idx.to_string().as_str(), latitude, longitude))
            .collect()
    })
}

proptest! {
    #[test]
    fn filtered_prospects_are_sorted_and_within_radius(prospects in prospects(), radius in -50. ..150.) {
        let ranked = filter_within_radius(Coordinate::new(0., 0.), prospects.as_slice(), radius).unwrap();

        prop_assert!(ranked.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
        prop_assert!(ranked.iter().all(|ranked| ranked.distance <= radius));
        prop_assert!(ranked.len() <= prospects.len());
    }

    #[test]
    fn negative_radius_gives_nothing(prospects in prospects(), radius in -1000. ..0.) {
        prop_assert!(filter_within_radius(Coordinate::new(0., 0.), prospects.as_slice(), radius).unwrap().is_empty());
    }
}
