//! A library part of command line tool: csv import, problem generator and tool configuration.
//!
//! # Examples
//!
//! ```
//! use leads_cli::extensions::import::import_problem;
//! use std::io::BufReader;
//!
//! let csv = "ID,NAME,LAT,LNG\nA,ACME,-25.43,-49.27\nB,Delta,-25.49,-49.14\n";
//!
//! let problem = import_problem("csv", Some(BufReader::new(csv.as_bytes()))).expect("cannot import");
//!
//! assert_eq!(problem.prospects.len(), 2);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub use leads_core as core;
pub use leads_pragmatic as pragmatic;

pub mod extensions;
