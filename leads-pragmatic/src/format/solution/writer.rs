#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use leads_core::filtering::RankedProspect;
use leads_core::models::solution::RouteResult;
use leads_core::routing::NavigationLink;
use std::io::{BufWriter, Write};

/// Writes a route in pragmatic format.
pub trait PragmaticRoute {
    /// Serializes route as pragmatic json.
    fn write_pragmatic_json<W: Write>(
        &self,
        navigation: Option<&NavigationLink>,
        writer: BufWriter<W>,
    ) -> Result<(), String>;

    /// Serializes route as geo json.
    fn write_geo_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), String>;
}

impl PragmaticRoute for RouteResult {
    fn write_pragmatic_json<W: Write>(
        &self,
        navigation: Option<&NavigationLink>,
        writer: BufWriter<W>,
    ) -> Result<(), String> {
        let report = create_route_report(self, navigation);
        serialize_route_report(writer, &report).map_err(|err| err.to_string())
    }

    fn write_geo_json<W: Write>(&self, writer: BufWriter<W>) -> Result<(), String> {
        serialize_route_as_geojson(writer, self).map_err(|err| err.to_string())
    }
}

/// Creates filter report from ranked prospects.
pub fn create_filter_report(reference: Location, radius: Option<f64>, ranked: &[RankedProspect]) -> FilterReport {
    FilterReport {
        reference,
        radius,
        prospects: ranked
            .iter()
            .map(|ranked| RankedEntry {
                id: ranked.record.id.clone(),
                name: ranked.record.name.clone(),
                address: ranked.record.address.clone(),
                status: ranked.record.status.into(),
                category: ranked.record.category.into(),
                location: ranked.record.coordinate.into(),
                distance: ranked.distance,
            })
            .collect(),
    }
}

/// Creates route report from the route.
pub fn create_route_report(route: &RouteResult, navigation: Option<&NavigationLink>) -> RouteReport {
    let legs = route.leg_distances();

    let stops = route
        .stops
        .iter()
        .zip(legs.iter())
        .scan(0., |cumulative, (stop, &distance)| {
            *cumulative += distance;
            Some(RouteStop {
                id: stop.id.clone(),
                name: stop.name.clone(),
                address: stop.address.clone(),
                phone: stop.phone.clone(),
                location: stop.coordinate.into(),
                distance,
                cumulative: *cumulative,
            })
        })
        .collect::<Vec<_>>();

    RouteReport {
        statistic: Statistic { distance: legs.iter().sum(), stops: stops.len() },
        stops,
        polyline: route.polyline.iter().map(|&coordinate| coordinate.into()).collect(),
        navigation: navigation.map(|link| link.to_url()),
    }
}
