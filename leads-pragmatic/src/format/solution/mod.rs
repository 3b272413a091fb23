//! Specifies logic to create filter and route reports and write them into json or geo json format.

use super::*;

mod model;
pub use self::model::*;

mod geo_serializer;
pub use self::geo_serializer::serialize_route_as_geojson;

mod writer;
pub use self::writer::{PragmaticRoute, create_filter_report, create_route_report};
