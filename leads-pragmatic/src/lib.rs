//! Pragmatic crate lets users describe prospects, a reference location and a selection in a simple
//! **pragmatic** json format and get filter results and routes back as json or geo json.
//!
//! # Examples
//!
//! ```
//! use leads_core::prelude::*;
//! use leads_pragmatic::format::problem::PragmaticProblem;
//!
//! let problem = r#"
//! {
//!   "reference": { "lat": -25.4284, "lng": -49.2733 },
//!   "prospects": [
//!     { "id": "A", "name": "A", "location": { "lat": -25.3202, "lng": -49.0590 } },
//!     { "id": "B", "name": "B", "location": { "lat": -25.4912, "lng": -49.1489 } },
//!     { "id": "C", "name": "C", "location": { "lat": -25.4363, "lng": -49.2474 } }
//!   ],
//!   "selection": ["A", "B", "C"]
//! }
//! "#;
//!
//! let session = problem.to_string().read_pragmatic(Environment::silent()).expect("cannot read problem");
//! let route = session.create_route().expect("cannot create route");
//!
//! assert_eq!(route.ids(), vec!["C", "B", "A"]);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod format;
pub mod validation;

pub use leads_core as core;
