use super::*;
use crate::helpers::models::*;
use proptest::prelude::*;

fn get_route_ids(route: &RouteResult) -> Vec<&str> {
    get_ids(route.stops.iter())
}

#[test]
fn can_visit_nearest_stop_first() {
    let origin = test_reference();
    let stops = vec![
        test_prospect("A", -25.3202, -49.0590),
        test_prospect("B", -25.4912, -49.1489),
        test_prospect("C", -25.4363, -49.2474),
    ];

    let route = optimize_route(origin, stops.as_slice()).unwrap();

    assert_eq!(get_route_ids(&route), vec!["C", "B", "A"]);
    assert_eq!(route.polyline.len(), 4);
    assert_eq!(route.polyline[0], origin);
    assert_eq!(route.polyline[1..], [stops[2].coordinate, stops[1].coordinate, stops[0].coordinate]);
}

parameterized_test! {can_reject_insufficient_stops, (stops, expected_distinct), {
    let result = optimize_route(test_reference(), stops.as_slice());

    assert_eq!(result, Err(EngineError::InsufficientStops { distinct: expected_distinct }));
}}

can_reject_insufficient_stops! {
    case01_no_stops: (Vec::<ProspectRecord>::new(), 0),
    case02_single_stop: (vec![test_prospect("1", 0., 0.)], 1),
    case03_same_stop_twice: (vec![test_prospect("1", 0., 0.), test_prospect("1", 0., 0.)], 1),
}

#[test]
fn can_reject_duplicate_stops() {
    let stops = vec![test_prospect("1", 0., 0.), test_prospect("2", 1., 1.), test_prospect("1", 0., 0.)];

    let result = optimize_route(test_reference(), stops.as_slice());

    assert_eq!(result, Err(EngineError::DuplicateStop { id: "1".to_string() }));
}

#[test]
fn can_reject_invalid_origin() {
    let stops = vec![test_prospect("1", 0., 0.), test_prospect("2", 1., 1.)];

    let result = optimize_route(Coordinate::new(-95., 0.), stops.as_slice());

    assert!(matches!(result, Err(EngineError::InvalidCoordinate { id: None, .. })));
}

#[test]
fn can_reject_invalid_stop_without_partial_result() {
    let stops = vec![test_prospect("1", 0., 0.), test_prospect("2", 0., 190.)];

    let result = optimize_route(Coordinate::new(0., 0.), stops.as_slice());

    assert_eq!(
        result,
        Err(EngineError::InvalidCoordinate { id: Some("2".to_string()), latitude: 0., longitude: 190. })
    );
}

#[test]
fn can_break_ties_by_input_order() {
    let stops = vec![test_prospect("west", 0., -1.), test_prospect("east", 0., 1.)];

    let route = optimize_route(Coordinate::new(0., 0.), stops.as_slice()).unwrap();
    assert_eq!(get_route_ids(&route), vec!["west", "east"]);

    let reversed = stops.into_iter().rev().collect::<Vec<_>>();
    let route = optimize_route(Coordinate::new(0., 0.), reversed.as_slice()).unwrap();
    assert_eq!(get_route_ids(&route), vec!["east", "west"]);
}

#[test]
fn can_handle_stops_at_origin() {
    let stops = vec![test_prospect("far", 0., 0.5), test_prospect("here", 0., 0.), test_prospect("also_here", 0., 0.)];

    let route = optimize_route(Coordinate::new(0., 0.), stops.as_slice()).unwrap();

    assert_eq!(get_route_ids(&route), vec!["here", "also_here", "far"]);
}

#[test]
fn can_follow_greedy_walk_instead_of_origin_distance() {
    // "b" is further from origin than "c", but closest to "a"
    let stops = vec![test_prospect("c", 0., -1.5), test_prospect("a", 0., 1.), test_prospect("b", 0., 2.)];

    let route = optimize_route(Coordinate::new(0., 0.), stops.as_slice()).unwrap();

    assert_eq!(get_route_ids(&route), vec!["a", "b", "c"]);
}

fn stops() -> impl Strategy<Value = Vec<ProspectRecord>> {
    prop::collection::vec((-5. ..5., -5. ..5.), 2..25).prop_map(|coordinates| {
        coordinates
            .into_iter()
            .enumerate()
            .map(|(idx, (latitude, longitude))| test_prospect(format!("p{idx}").as_str(), latitude, longitude))
            .collect()
    })
}

proptest! {
    #[test]
    fn route_is_permutation_of_stops(stops in stops()) {
        let route = optimize_route(Coordinate::new(0., 0.), stops.as_slice()).unwrap();

        let mut expected = get_ids(stops.iter());
        let mut actual = get_route_ids(&route);
        expected.sort();
        actual.sort();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(route.polyline.len(), stops.len() + 1);
    }

    #[test]
    fn first_stop_is_nearest_to_origin(stops in stops()) {
        let origin = Coordinate::new(0., 0.);
        let route = optimize_route(origin, stops.as_slice()).unwrap();

        let first = distance_km(origin, route.stops[0].coordinate);
        prop_assert!(stops.iter().all(|stop| first <= distance_km(origin, stop.coordinate)));
    }
}
