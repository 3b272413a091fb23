#[cfg(test)]
#[path = "../../tests/unit/selection/selection_set_test.rs"]
mod selection_set_test;

use crate::models::problem::ProspectId;
use rustc_hash::FxHashSet;

/// A set of prospect ids.
pub type ProspectIdSet = FxHashSet<ProspectId>;

/// A toggle based membership container for prospect ids. Insertion order is not tracked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    ids: ProspectIdSet,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes id if it is present and returns false, inserts it and returns true otherwise.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Sets membership to exactly the given ids.
    pub fn replace<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<ProspectId>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    /// Returns a copy of the current membership.
    pub fn snapshot(&self) -> ProspectIdSet {
        self.ids.clone()
    }

    /// Checks whether id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns amount of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Removes all ids.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Removes ids which are not known by `is_known` predicate, returns removed ones.
    pub fn retain_known<F>(&mut self, is_known: F) -> Vec<ProspectId>
    where
        F: Fn(&str) -> bool,
    {
        let mut stale = self.ids.iter().filter(|id| !is_known(id.as_str())).cloned().collect::<Vec<_>>();
        stale.sort();

        stale.iter().for_each(|id| {
            self.ids.remove(id);
        });

        stale
    }
}

impl<S: Into<ProspectId>> FromIterator<S> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { ids: iter.into_iter().map(Into::into).collect() }
    }
}
