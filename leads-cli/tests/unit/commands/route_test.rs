use super::*;
use leads_cli::pragmatic::format::solution::{RouteReport, deserialize_route_report};

const PROBLEM_PATH: &str = "../demos/data/prospects.problem.json";
const CONFIG_PATH: &str = "../demos/data/config.json";

fn run_route_with_args(args: Vec<&str>) -> Result<RouteReport, String> {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let out_path = tmpfile.path().to_str().unwrap().to_string();
    let args = args.into_iter().chain(["--out-result", out_path.as_str()]).collect::<Vec<_>>();
    let matches = get_route_app().try_get_matches_from(args).unwrap();

    run_route(&matches)?;

    Ok(deserialize_route_report(BufReader::new(tmpfile.as_file())).unwrap())
}

fn get_ids(report: &RouteReport) -> Vec<&str> {
    report.stops.iter().map(|stop| stop.id.as_str()).collect()
}

#[test]
fn can_route_selection_from_problem() {
    let report = run_route_with_args(vec!["route", PROBLEM_PATH]).unwrap();

    assert_eq!(get_ids(&report), vec!["5", "4", "2"]);
    assert_eq!(report.polyline.len(), 4);
    assert_eq!(report.statistic.stops, 3);
    assert_eq!(report.navigation, None);
}

#[test]
fn can_override_selection_from_args() {
    let report = run_route_with_args(vec!["route", PROBLEM_PATH, "--select", "1", "2", "4", "4"]).unwrap();

    assert_eq!(get_ids(&report), vec!["4", "2", "1"]);
}

#[test]
fn can_add_navigation_from_config() {
    let report = run_route_with_args(vec!["route", PROBLEM_PATH, "--config", CONFIG_PATH]).unwrap();

    let url = report.navigation.expect("no navigation url");
    assert!(url.starts_with("https://www.google.com/maps/dir/?api=1&origin=-25.4284,-49.2733"));
    assert!(url.ends_with("&travelmode=walking"));
}

#[test]
fn can_override_travel_mode_from_args() {
    let report =
        run_route_with_args(vec!["route", PROBLEM_PATH, "--navigation", "--travel-mode", "bicycling"]).unwrap();

    assert!(report.navigation.expect("no navigation url").ends_with("&travelmode=bicycling"));
}

#[test]
fn can_write_geo_json() {
    let geo_json = tempfile::NamedTempFile::new().unwrap();

    run_route_with_args(vec!["route", PROBLEM_PATH, "--geo-json", geo_json.path().to_str().unwrap()]).unwrap();

    let geo_json = std::fs::read_to_string(geo_json.path()).unwrap();
    assert!(geo_json.contains("FeatureCollection"));
    assert!(geo_json.contains("LineString"));
}

#[test]
fn can_return_error_when_not_enough_stops() {
    let result = run_route_with_args(vec!["route", PROBLEM_PATH, "--select", "5"]);

    assert_eq!(
        result.err(),
        Some("cannot create route: 'route requires at least 2 distinct stops, got 1'".to_string())
    );
}
