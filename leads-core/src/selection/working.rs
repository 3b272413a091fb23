#[cfg(test)]
#[path = "../../tests/unit/selection/working_test.rs"]
mod working_test;

use super::{ProspectIdSet, SelectionSet};

/// A local, owned copy of the selection which a single view edits before publishing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkingSelection {
    ids: SelectionSet,
}

impl WorkingSelection {
    /// Creates a working copy seeded from the shared selection.
    pub fn seeded_from(shared: &SelectionSet) -> Self {
        Self { ids: shared.clone() }
    }

    /// Toggles id in the working copy only.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.ids.toggle(id)
    }

    /// Checks whether id is selected in the working copy.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns a copy of the working membership.
    pub fn snapshot(&self) -> ProspectIdSet {
        self.ids.snapshot()
    }

    /// Publishes the working copy to the shared selection, replacing whatever it contains.
    pub fn apply(self, shared: &mut SelectionSet) {
        shared.replace(self.ids.snapshot());
    }
}
