//! Import command helpers

mod csv;
pub use self::csv::*;

use leads_pragmatic::format::problem::Problem;
use std::io::{BufReader, Read};

/// Imports problem from specific format into pragmatic.
pub fn import_problem<R: Read>(input_format: &str, reader: Option<BufReader<R>>) -> Result<Problem, String> {
    match (input_format, reader) {
        ("csv", Some(reader)) => read_csv_problem(reader).map_err(|err| format!("cannot read csv: {err}")),
        ("csv", None) => Err("csv format expects a file with prospects as an input".to_string()),
        _ => Err(format!("unknown format: '{input_format}'")),
    }
}
