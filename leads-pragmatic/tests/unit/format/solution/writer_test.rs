use super::*;
use crate::format::problem::{Category, Status};
use leads_core::models::common::Coordinate;
use leads_core::models::problem::{ProspectCategory, ProspectRecord, ProspectStatus};
use leads_core::routing::{TravelMode, optimize_route};
use std::io::BufReader;

fn create_test_route() -> RouteResult {
    let origin = Coordinate::new(-25.4284, -49.2733);
    let stops = vec![
        ProspectRecord::new("A", Coordinate::new(-25.32019, -49.05904)).with_contacts("A4", "Rua A, 1", "41 1", ""),
        ProspectRecord::new("B", Coordinate::new(-25.49121, -49.14888)).with_contacts("ACA", "Rua B, 2", "41 2", ""),
        ProspectRecord::new("C", Coordinate::new(-25.436947, -49.247364)).with_contacts("AGISA", "Rua C, 3", "41 3", ""),
    ];

    optimize_route(origin, stops.as_slice()).expect("cannot create route")
}

#[test]
fn can_create_route_report() {
    let route = create_test_route();

    let report = create_route_report(&route, None);

    assert_eq!(report.stops.iter().map(|stop| stop.id.as_str()).collect::<Vec<_>>(), vec!["C", "B", "A"]);
    assert_eq!(report.stops[0].name, "AGISA");
    assert_eq!(report.stops[0].phone, "41 3");
    assert_eq!(report.polyline.len(), 4);
    assert_eq!(report.polyline[0], Location::new(-25.4284, -49.2733));
    assert_eq!(report.statistic.stops, 3);
    assert!((report.statistic.distance - route.total_distance()).abs() < 1E-9);
    assert!((report.stops[2].cumulative - report.statistic.distance).abs() < 1E-9);
    assert!((report.stops[1].cumulative - report.stops[0].distance - report.stops[1].distance).abs() < 1E-9);
    assert_eq!(report.navigation, None);
}

#[test]
fn can_add_navigation_url_to_route_report() {
    let route = create_test_route();
    let link = NavigationLink::from_route(&route, TravelMode::Walking).expect("no link");

    let report = create_route_report(&route, Some(&link));

    let url = report.navigation.expect("no navigation");
    assert!(url.starts_with("https://www.google.com/maps/dir/?api=1&origin=-25.4284,-49.2733"));
    assert!(url.ends_with("&travelmode=walking"));
}

#[test]
fn can_write_and_read_route_report() {
    let route = create_test_route();
    let mut buffer = Vec::new();

    route.write_pragmatic_json(None, BufWriter::new(&mut buffer)).expect("cannot write route");
    let report = deserialize_route_report(BufReader::new(buffer.as_slice())).expect("cannot read route");

    assert_eq!(report, create_route_report(&route, None));
    assert!(!String::from_utf8_lossy(buffer.as_slice()).contains("navigation"));
}

#[test]
fn can_create_filter_report() {
    let reference = Location::new(-25.4284, -49.2733);
    let ranked = vec![RankedProspect {
        record: ProspectRecord::new("5", Coordinate::new(-25.428995, -49.273251))
            .with_contacts("ELETROPAR", "Av. Sete de Setembro, 4550", "", "")
            .with_status(ProspectStatus::Negotiating)
            .with_category(ProspectCategory::Qualified),
        distance: 0.066,
    }];

    let report = create_filter_report(reference, Some(10.), ranked.as_slice());

    assert_eq!(report.radius, Some(10.));
    assert_eq!(report.prospects.len(), 1);
    assert_eq!(report.prospects[0].id, "5");
    assert_eq!(report.prospects[0].status, Status::Negotiating);
    assert_eq!(report.prospects[0].category, Category::Qualified);
    assert_eq!(report.prospects[0].location, Location::new(-25.428995, -49.273251));
}

#[test]
fn can_skip_radius_in_sorted_report() {
    let report = create_filter_report(Location::new(0., 0.), None, &[]);
    let mut buffer = Vec::new();

    serialize_filter_report(BufWriter::new(&mut buffer), &report).expect("cannot write report");

    let json = String::from_utf8(buffer).expect("not utf8");
    assert!(!json.contains("radius"));
    assert!(json.contains("\"prospects\": []"));
}
