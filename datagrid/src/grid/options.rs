//! Grid construction options.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::column::ColumnId;
use crate::row::{Row, RowId};
use crate::sort::SortDirection;

/// Fired with the sorted selected-id set after each logical change.
pub type SelectionChanged = Arc<dyn Fn(&[RowId]) + Send + Sync>;

/// Fired with the expanded map after each expansion change.
pub type ExpansionChanged = Arc<dyn Fn(&HashMap<RowId, bool>) + Send + Sync>;

/// Fired with the new sort state after each toggle.
pub type SortChanged = Arc<dyn Fn(Option<(ColumnId, SortDirection)>) + Send + Sync>;

/// Fired with the freshly built row order after a drag applies.
pub type RowsChanged = Arc<dyn Fn(&[Row]) + Send + Sync>;

/// Per-row action callback for the settings column.
pub type RowAction = Arc<dyn Fn(&RowId) + Send + Sync>;

/// Construction-time options: which synthetic columns exist and which
/// change callbacks the caller wants.
///
/// Omitting an action callback simply omits its button — never an error.
#[derive(Clone, Default)]
pub struct GridOptions {
    pub(crate) selectable: bool,
    pub(crate) max_selected: Option<usize>,
    pub(crate) expandable: bool,
    pub(crate) draggable: bool,
    pub(crate) section_field: Option<String>,
    pub(crate) edit_row: Option<RowAction>,
    pub(crate) delete_row: Option<RowAction>,
    pub(crate) on_selection_change: Option<SelectionChanged>,
    pub(crate) on_expansion_change: Option<ExpansionChanged>,
    pub(crate) on_sort_change: Option<SortChanged>,
    pub(crate) on_rows_change: Option<RowsChanged>,
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the selection checkbox column.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Add the selection column with a cap on selected rows. A capped
    /// grid hides the header select-all control entirely.
    pub fn with_selection_cap(mut self, max_selected: usize) -> Self {
        self.selectable = true;
        self.max_selected = Some(max_selected);
        self
    }

    /// Add the expansion toggle column.
    pub fn expandable(mut self) -> Self {
        self.expandable = true;
        self
    }

    /// Add the drag-handle column.
    pub fn draggable(mut self) -> Self {
        self.draggable = true;
        self
    }

    /// Field name that marks a record as a full-width section row.
    /// Defaults to `"string"`.
    pub fn section_field(mut self, name: impl Into<String>) -> Self {
        self.section_field = Some(name.into());
        self
    }

    /// Supply the per-row edit action; its button appears in the
    /// settings column.
    pub fn edit_row(mut self, action: impl Fn(&RowId) + Send + Sync + 'static) -> Self {
        self.edit_row = Some(Arc::new(action));
        self
    }

    /// Supply the per-row delete action; its button appears in the
    /// settings column.
    pub fn delete_row(mut self, action: impl Fn(&RowId) + Send + Sync + 'static) -> Self {
        self.delete_row = Some(Arc::new(action));
        self
    }

    /// Observe selection changes.
    pub fn on_selection_change(mut self, callback: impl Fn(&[RowId]) + Send + Sync + 'static) -> Self {
        self.on_selection_change = Some(Arc::new(callback));
        self
    }

    /// Observe expansion changes.
    pub fn on_expansion_change(
        mut self,
        callback: impl Fn(&HashMap<RowId, bool>) + Send + Sync + 'static,
    ) -> Self {
        self.on_expansion_change = Some(Arc::new(callback));
        self
    }

    /// Observe sort changes.
    pub fn on_sort_change(
        mut self,
        callback: impl Fn(Option<(ColumnId, SortDirection)>) + Send + Sync + 'static,
    ) -> Self {
        self.on_sort_change = Some(Arc::new(callback));
        self
    }

    /// Observe row reorders.
    pub fn on_rows_change(mut self, callback: impl Fn(&[Row]) + Send + Sync + 'static) -> Self {
        self.on_rows_change = Some(Arc::new(callback));
        self
    }

    pub(crate) fn section_field_name(&self) -> &str {
        self.section_field.as_deref().unwrap_or("string")
    }

    /// Whether the settings column exists at all.
    pub(crate) fn has_settings_column(&self) -> bool {
        self.edit_row.is_some() || self.delete_row.is_some()
    }
}

impl fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridOptions")
            .field("selectable", &self.selectable)
            .field("max_selected", &self.max_selected)
            .field("expandable", &self.expandable)
            .field("draggable", &self.draggable)
            .field("section_field", &self.section_field_name())
            .field("edit_row", &self.edit_row.is_some())
            .field("delete_row", &self.delete_row.is_some())
            .finish()
    }
}
