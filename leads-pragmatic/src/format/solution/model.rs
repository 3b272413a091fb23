use super::*;
use crate::format::problem::{Category, Status};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A prospect annotated with distance from the reference location.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RankedEntry {
    /// Prospect id.
    pub id: String,
    /// A display name.
    pub name: String,
    /// A postal address.
    pub address: String,
    /// A pipeline status.
    pub status: Status,
    /// A qualification category.
    pub category: Category,
    /// Prospect location.
    pub location: Location,
    /// Distance from reference in kilometers.
    pub distance: f64,
}

/// A result of radius filter.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct FilterReport {
    /// Reference location.
    pub reference: Location,
    /// Radius in kilometers, absent when prospects are only sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Prospects, nearest first.
    pub prospects: Vec<RankedEntry>,
}

/// A stop of the route.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RouteStop {
    /// Prospect id.
    pub id: String,
    /// A display name.
    pub name: String,
    /// A postal address.
    pub address: String,
    /// A phone number.
    pub phone: String,
    /// Stop location.
    pub location: Location,
    /// Distance from previous stop (or origin) in kilometers.
    pub distance: f64,
    /// Distance from origin along the route in kilometers.
    pub cumulative: f64,
}

/// Route statistic.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Statistic {
    /// Total distance in kilometers.
    pub distance: f64,
    /// Amount of stops.
    pub stops: usize,
}

/// A route through the selected prospects.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RouteReport {
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
    /// Origin followed by stop locations.
    pub polyline: Vec<Location>,
    /// Route statistic.
    pub statistic: Statistic,
    /// External directions url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<String>,
}

/// Serializes filter report into json.
pub fn serialize_filter_report<W: Write>(writer: BufWriter<W>, report: &FilterReport) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, report).map_err(Error::from)
}

/// Serializes route report into json.
pub fn serialize_route_report<W: Write>(writer: BufWriter<W>, report: &RouteReport) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, report).map_err(Error::from)
}

/// Deserializes route report from json.
pub fn deserialize_route_report<R: Read>(reader: BufReader<R>) -> Result<RouteReport, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
