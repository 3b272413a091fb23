//! Specifies logic to read problem from json input.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::map_to_session;

use leads_core::session::Session;
use leads_core::utils::Environment;

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format and loads it into a new session.
    fn read_pragmatic(self, environment: Environment) -> Result<Session, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self, environment: Environment) -> Result<Session, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_session(&problem, environment)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self, environment: Environment) -> Result<Session, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.as_bytes()))?;

        map_to_session(&problem, environment)
    }
}

impl PragmaticProblem for &Problem {
    fn read_pragmatic(self, environment: Environment) -> Result<Session, MultiFormatError> {
        map_to_session(self, environment)
    }
}
