#[cfg(test)]
#[path = "../../../tests/unit/format/solution/geo_serializer_test.rs"]
mod geo_serializer_test;

use leads_core::models::common::Coordinate;
use leads_core::models::solution::RouteResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{BufWriter, Error, Write};

const ROUTE_COLOR: &str = "#007BFF";
const ORIGIN_COLOR: &str = "#9E9E9E";

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: (f64, f64) },
    LineString { coordinates: Vec<(f64, f64)> },
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
struct Feature {
    pub properties: BTreeMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// Serializes route into geo json format: origin and stops as points, polyline as a line string.
pub fn serialize_route_as_geojson<W: Write>(writer: BufWriter<W>, route: &RouteResult) -> Result<(), Error> {
    let geo_json = create_geojson_route(route);

    serde_json::to_writer_pretty(writer, &geo_json).map_err(Error::from)
}

fn create_geojson_route(route: &RouteResult) -> FeatureCollection {
    let origin = route.polyline.first().map(|&origin| Feature {
        properties: slice_to_map(&[("marker-color", ORIGIN_COLOR), ("marker-symbol", "star"), ("name", "origin")]),
        geometry: Geometry::Point { coordinates: get_lng_lat(origin) },
    });

    let stops = route.stops.iter().enumerate().map(|(stop_idx, stop)| Feature {
        properties: slice_to_map(&[
            ("marker-color", ROUTE_COLOR),
            ("marker-size", "medium"),
            ("marker-symbol", (stop_idx + 1).to_string().as_str()),
            ("stop_idx", stop_idx.to_string().as_str()),
            ("prospect_id", stop.id.as_str()),
            ("name", stop.name.as_str()),
        ]),
        geometry: Geometry::Point { coordinates: get_lng_lat(stop.coordinate) },
    });

    let line = Feature {
        properties: slice_to_map(&[("stroke", ROUTE_COLOR), ("stroke-width", "4")]),
        geometry: Geometry::LineString { coordinates: route.polyline.iter().map(|&c| get_lng_lat(c)).collect() },
    };

    FeatureCollection { features: origin.into_iter().chain(stops).chain(std::iter::once(line)).collect() }
}

fn slice_to_map(vec: &[(&str, &str)]) -> BTreeMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}

/// Geo json expects longitude first.
fn get_lng_lat(coordinate: Coordinate) -> (f64, f64) {
    (coordinate.longitude, coordinate.latitude)
}
