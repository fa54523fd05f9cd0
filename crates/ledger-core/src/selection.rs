//! Selection set: the entries a user has marked.
//!
//! The set is an annotation over the catalog, never the other way round. Every
//! reload prunes ids the catalog no longer has (see [`SelectionSet::reconcile`]).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::EntryId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeSet<EntryId>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.0.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn ids(&self) -> &BTreeSet<EntryId> {
        &self.0
    }

    /// Sets membership of `id`. Returns `true` when the set changed.
    pub fn set(&mut self, id: EntryId, is_selected: bool) -> bool {
        if is_selected {
            self.0.insert(id)
        } else {
            self.0.remove(&id)
        }
    }

    /// Flips membership of `id` and returns the new state.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        let now_selected = !self.0.contains(&id);
        self.set(id, now_selected);
        now_selected
    }

    /// Returns `true` when something was cleared.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.0.is_empty();
        self.0.clear();
        had_any
    }

    /// Drops every selected id that is not in `current`, returning the dropped ids.
    pub fn reconcile(&mut self, current: &BTreeSet<EntryId>) -> Vec<EntryId> {
        let stale: Vec<EntryId> = self.0.difference(current).copied().collect();
        for id in &stale {
            self.0.remove(id);
        }

        #[cfg(feature = "tracing")]
        {
            if !stale.is_empty() {
                tracing::debug!(dropped = stale.len(), "Pruned stale selections");
            }
        }

        stale
    }

    /// Removes `ids` from the set, returning how many were actually selected.
    pub fn forget<'a>(&mut self, ids: impl IntoIterator<Item = &'a EntryId>) -> usize {
        ids.into_iter().filter(|id| self.0.remove(id)).count()
    }
}

impl FromIterator<EntryId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = EntryId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[i64]) -> BTreeSet<EntryId> {
        values.iter().copied().map(EntryId::new).collect()
    }

    #[test]
    fn test_select_and_unselect() {
        let mut set = SelectionSet::new();
        assert!(set.set(EntryId::new(1), true));
        assert!(!set.set(EntryId::new(1), true), "second select is a no-op");
        assert!(set.contains(&EntryId::new(1)));

        assert!(set.set(EntryId::new(1), false));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = SelectionSet::new();
        assert!(set.toggle(EntryId::new(4)));
        assert!(!set.toggle(EntryId::new(4)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_reconcile_drops_ids_missing_from_catalog() {
        let mut set: SelectionSet = ids(&[1, 2, 3]).into_iter().collect();

        let dropped = set.reconcile(&ids(&[1, 3]));

        assert_eq!(dropped, vec![EntryId::new(2)]);
        assert_eq!(set.ids(), &ids(&[1, 3]));
    }

    #[test]
    fn test_reconcile_against_empty_catalog_empties_selection() {
        let mut set: SelectionSet = ids(&[5, 6]).into_iter().collect();
        set.reconcile(&BTreeSet::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_reconcile_keeps_everything_when_all_present() {
        let mut set: SelectionSet = ids(&[2]).into_iter().collect();
        assert!(set.reconcile(&ids(&[1, 2, 3])).is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_forget_counts_only_selected_ids() {
        let mut set: SelectionSet = ids(&[1, 2]).into_iter().collect();
        let removed = set.forget(&ids(&[2, 9]));
        assert_eq!(removed, 1);
        assert_eq!(set.ids(), &ids(&[1]));
    }

    #[test]
    fn test_clear_reports_change() {
        let mut set: SelectionSet = ids(&[1]).into_iter().collect();
        assert!(set.clear());
        assert!(!set.clear());
    }

    #[test]
    fn test_serializes_as_id_list() {
        let set: SelectionSet = ids(&[3, 1]).into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,3]");

        let back: SelectionSet = serde_json::from_str("[3,1,3]").unwrap();
        assert_eq!(back, set);
    }
}
