//! Row selection state
//!
//! Selection is keyed by row id so it stays stable while rows are filtered,
//! sorted, or re-fetched. The map holds explicit flags rather than bare
//! membership: a row toggled off stays in the map as `false`, and the
//! select-all test relies on that distinction.

use std::collections::HashMap;

/// ID-keyed selection flags, owned by the caller and read by the renderer.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    flags: HashMap<i64, bool>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a row is selected.
    pub fn is_selected(&self, id: i64) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Flips a row's selection flag.
    pub fn toggle(&mut self, id: i64) {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
    }

    /// Sets the flag for every given row id.
    pub fn set_all(&mut self, ids: &[i64], selected: bool) {
        for &id in ids {
            self.flags.insert(id, selected);
        }
    }

    /// Drops all selection state.
    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// True iff every given id is flagged `true` and the map tracks exactly
    /// those ids. Vacuously true for an empty row list with an empty map.
    ///
    /// The size check matters: stale `false` entries from toggled-off rows
    /// keep select-all unchecked even when every visible row happens to be
    /// flagged.
    pub fn all_selected(&self, ids: &[i64]) -> bool {
        self.flags.len() == ids.len() && ids.iter().all(|id| self.is_selected(*id))
    }

    /// Returns the selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<i64> {
        let mut ids: Vec<_> = self
            .flags
            .iter()
            .filter(|&(_, &flag)| flag)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.flags.values().filter(|&&flag| flag).count()
    }

    /// Checks whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
