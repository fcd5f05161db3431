//! Row selection state.

use std::collections::HashSet;

use crate::row::RowId;

/// Tracks selected rows by id, with an optional selection cap.
///
/// The model only mutates through [`toggle`](SelectionModel::toggle) and
/// [`toggle_all`](SelectionModel::toggle_all); under a cap, selecting
/// past the limit is a silent no-op and bulk select is unavailable, so
/// the selected count can never exceed the cap.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selected: HashSet<RowId>,
    max_selected: Option<usize>,
}

impl SelectionModel {
    /// Uncapped selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection limited to at most `max_selected` rows.
    pub fn with_cap(max_selected: usize) -> Self {
        Self {
            selected: HashSet::new(),
            max_selected: Some(max_selected),
        }
    }

    /// The configured cap, if any.
    pub fn cap(&self) -> Option<usize> {
        self.max_selected
    }

    /// Flip one row's selection. Returns whether the set changed;
    /// selecting past the cap changes nothing.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        if self.selected.contains(id) {
            self.selected.remove(id);
            return true;
        }
        if self.at_capacity() {
            return false;
        }
        self.selected.insert(id.clone());
        true
    }

    /// Select every listed row, or clear when all of them are already
    /// selected. Unavailable under a cap (the header control is hidden
    /// there); returns whether the set changed.
    pub fn toggle_all(&mut self, all_ids: &[RowId]) -> bool {
        if self.max_selected.is_some() {
            return false;
        }
        if self.is_all_selected(all_ids.len()) {
            if self.selected.is_empty() {
                return false;
            }
            self.selected.clear();
            return true;
        }
        let next: HashSet<RowId> = all_ids.iter().cloned().collect();
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Drop the whole selection. Returns whether the set changed.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether every one of `total` rows is selected.
    pub fn is_all_selected(&self, total: usize) -> bool {
        total > 0 && self.selected.len() == total
    }

    /// Some, but not all, of `total` rows selected.
    pub fn is_indeterminate(&self, total: usize) -> bool {
        !self.selected.is_empty() && self.selected.len() < total
    }

    /// Whether the cap is reached.
    pub fn at_capacity(&self) -> bool {
        self.max_selected
            .is_some_and(|cap| self.selected.len() >= cap)
    }

    /// Selected ids as a sorted payload for change notifications.
    pub fn sorted_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
