#[cfg(test)]
#[path = "../../tests/unit/selection/shared_test.rs"]
mod shared_test;

use super::{ProspectIdSet, SelectionSet};
use crate::models::problem::ProspectId;
use std::sync::{Arc, Mutex, MutexGuard};

/// A selection which can be mutated from multiple threads, each operation is atomic.
#[derive(Clone, Debug, Default)]
pub struct SharedSelectionSet {
    inner: Arc<Mutex<SelectionSet>>,
}

impl SharedSelectionSet {
    /// Creates a new instance of `SharedSelectionSet`.
    pub fn new(selection: SelectionSet) -> Self {
        Self { inner: Arc::new(Mutex::new(selection)) }
    }

    /// Toggles id under the lock.
    pub fn toggle(&self, id: &str) -> bool {
        self.lock().toggle(id)
    }

    /// Replaces membership under the lock.
    pub fn replace<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<ProspectId>,
    {
        // collect outside of the lock
        let selection = ids.into_iter().collect::<SelectionSet>();
        *self.lock() = selection;
    }

    /// Returns a copy of the current membership.
    pub fn snapshot(&self) -> ProspectIdSet {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, SelectionSet> {
        // a poisoned lock still guards a consistent set
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
