//! Core crate contains the building blocks of a geospatial prospect selection engine:
//!
//! - great-circle distance between two coordinates;
//! - radius filter which narrows a prospect list down to the ones around a reference location;
//! - selection set shared between independent views;
//! - greedy nearest neighbor route built from the selected prospects.
//!
//! # Examples
//!
//! ```
//! use leads_core::prelude::*;
//!
//! let origin = Coordinate::new(-25.4284, -49.2733);
//! let stops = vec![
//!     ProspectRecord::new("A", Coordinate::new(-25.3202, -49.0590)),
//!     ProspectRecord::new("B", Coordinate::new(-25.4912, -49.1489)),
//!     ProspectRecord::new("C", Coordinate::new(-25.4363, -49.2474)),
//! ];
//!
//! let route = optimize_route(origin, &stops).expect("cannot build route");
//!
//! assert_eq!(route.ids(), vec!["C", "B", "A"]);
//! assert_eq!(route.polyline.len(), 4);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod filtering;
pub mod models;
pub mod prelude;
pub mod routing;
pub mod selection;
pub mod session;
pub mod utils;
