//! Row expansion state.

use std::collections::HashSet;

use crate::row::RowId;

/// Tracks expanded rows by id, independently of selection.
///
/// The model holds bare ids; the grid guards the "only rows with
/// sub-rows are expandable" rule before toggling.
#[derive(Debug, Clone, Default)]
pub struct ExpansionModel {
    expanded: HashSet<RowId>,
}

impl ExpansionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &RowId) -> bool {
        self.expanded.contains(id)
    }

    /// Flip one row. Returns the new expanded state.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Expand every listed row, or collapse all of them when every one
    /// is already expanded. Returns whether anything changed.
    pub fn toggle_all(&mut self, expandable_ids: &[RowId]) -> bool {
        if expandable_ids.is_empty() {
            return false;
        }
        let all_expanded = expandable_ids.iter().all(|id| self.expanded.contains(id));
        if all_expanded {
            for id in expandable_ids {
                self.expanded.remove(id);
            }
        } else {
            for id in expandable_ids {
                self.expanded.insert(id.clone());
            }
        }
        true
    }

    /// Whether every listed row is currently expanded.
    pub fn all_expanded(&self, expandable_ids: &[RowId]) -> bool {
        !expandable_ids.is_empty() && expandable_ids.iter().all(|id| self.expanded.contains(id))
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Snapshot of the expanded set.
    pub fn expanded_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.expanded.iter().cloned().collect();
        ids.sort();
        ids
    }
}
