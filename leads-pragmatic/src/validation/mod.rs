//! This module provides functionality to validate problem definition for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation/prospects_test.rs"]
mod prospects_test;

use crate::format::problem::*;
use crate::format::{FormatError, Location, MultiFormatError};
use leads_core::models::common::Coordinate;
use rustc_hash::FxHashSet;

mod prospects;
use self::prospects::validate_prospects;

/// Validates problem on set of rules.
pub struct ValidationContext<'a> {
    /// Original problem definition.
    pub problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_prospects(self).err().unwrap_or_default();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Get list of prospects from the problem.
    fn prospects(&self) -> impl Iterator<Item = &Prospect> {
        self.problem.prospects.iter()
    }
}

/// Returns true if location is within valid coordinate range.
fn is_valid_location(location: &Location) -> bool {
    Coordinate::from(*location).is_valid()
}

/// Returns duplicated ids in sorted order.
fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut ids = FxHashSet::<_>::default();
    let duplicates = items
        .filter_map(move |id| if ids.insert(id) { None } else { Some(id.clone()) })
        .collect::<FxHashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}
