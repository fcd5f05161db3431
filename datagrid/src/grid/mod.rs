//! Grid assembly and state.
//!
//! [`Grid`] is the composition root: user columns plus synthetic
//! columns, row data, and the selection/expansion/sort models, behind
//! one cheap-to-clone handle. All state transitions run synchronously
//! inside the calling event handler and each produces a single atomic
//! update followed by at most one change notification.

mod assemble;
mod options;

pub use assemble::{BodyCell, BodyRow, HeaderCell};
pub use options::{
    ExpansionChanged, GridOptions, RowAction, RowsChanged, SelectionChanged, SortChanged,
};

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::column::{Column, ColumnId};
use crate::error::GridError;
use crate::expansion::ExpansionModel;
use crate::reorder::{DragEnd, apply_drag, apply_drag_paged};
use crate::row::{Row, RowId, validate_sibling_ids};
use crate::selection::SelectionModel;
use crate::sort::{SortDirection, SortModel};
use crate::theme::GridTheme;

/// Unique identifier for a Grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Internal state for the Grid.
#[derive(Debug)]
pub(crate) struct GridInner {
    /// User column declarations.
    pub(crate) columns: Vec<Column>,
    /// Top-level rows; the caller owns the authoritative array.
    pub(crate) rows: Vec<Row>,
    /// Selection state (by row id).
    pub(crate) selection: SelectionModel,
    /// Expansion state (by row id), independent of selection.
    pub(crate) expansion: ExpansionModel,
    /// Single-column sort state.
    pub(crate) sort: SortModel,
    /// Synthetic-column configuration and change callbacks.
    pub(crate) options: GridOptions,
    /// Presentation tokens.
    pub(crate) theme: GridTheme,
    /// Last selection payload delivered to the change callback.
    notified_selection: Vec<RowId>,
}

/// A multi-feature data grid.
///
/// `Grid` composes user-declared columns with synthetic columns
/// (drag handle, selection, expansion, settings) in a deterministic
/// order and derives the header/body structures the host renders.
///
/// # Example
///
/// ```
/// use datagrid::column::Column;
/// use datagrid::grid::{Grid, GridOptions};
/// use datagrid::row::Row;
/// use datagrid::theme::GridTheme;
///
/// let grid = Grid::new(
///     vec![Column::new("id", "ID"), Column::new("name", "Name")],
///     GridOptions::new().selectable(),
///     GridTheme::default(),
/// )
/// .unwrap();
/// grid.set_rows(vec![Row::new(1).set("name", "A")]).unwrap();
/// assert_eq!(grid.body().len(), 1);
/// ```
#[derive(Debug)]
pub struct Grid {
    /// Unique identifier.
    id: GridId,
    /// Internal state.
    inner: Arc<RwLock<GridInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Grid {
    /// Create a grid from user columns, options and theme.
    ///
    /// Fails fast on duplicate column ids.
    pub fn new(
        columns: Vec<Column>,
        options: GridOptions,
        theme: GridTheme,
    ) -> Result<Self, GridError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id().clone()) {
                return Err(GridError::DuplicateColumnId(column.id().to_string()));
            }
        }
        let selection = match options.max_selected {
            Some(cap) => SelectionModel::with_cap(cap),
            None => SelectionModel::new(),
        };
        Ok(Self {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(GridInner {
                columns,
                rows: Vec::new(),
                selection,
                expansion: ExpansionModel::new(),
                sort: SortModel::new(),
                options,
                theme,
                notified_selection: Vec::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Replace all rows.
    ///
    /// Fails fast on duplicate sibling ids. The selection is dropped
    /// (row identities may be gone); expansion survives a refresh so an
    /// expanded tree stays open across refetches.
    pub fn set_rows(&self, rows: Vec<Row>) -> Result<(), GridError> {
        validate_sibling_ids(&rows)?;
        let notification = {
            let Ok(mut guard) = self.inner.write() else {
                return Ok(());
            };
            guard.rows = rows;
            guard.selection.clear();
            self.dirty.store(true, Ordering::SeqCst);
            Self::take_selection_notification(&mut guard)
        };
        self.deliver_selection(notification);
        Ok(())
    }

    /// Snapshot of the top-level rows.
    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Number of top-level rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Flip one row's selection. Selecting past the cap is a no-op.
    /// Returns whether the selected set changed.
    pub fn toggle_row(&self, id: &RowId) -> bool {
        let (changed, notification) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let changed = guard.selection.toggle(id);
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
            (changed, Self::take_selection_notification(&mut guard))
        };
        self.deliver_selection(notification);
        changed
    }

    /// Select all top-level rows, or clear when all are selected.
    /// Unavailable under a selection cap.
    pub fn toggle_all(&self) -> bool {
        let (changed, notification) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let all_ids: Vec<RowId> = guard.rows.iter().map(|row| row.id().clone()).collect();
            let changed = guard.selection.toggle_all(&all_ids);
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
            (changed, Self::take_selection_notification(&mut guard))
        };
        self.deliver_selection(notification);
        changed
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Selected ids, sorted.
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.inner
            .read()
            .map(|g| g.selection.sorted_ids())
            .unwrap_or_default()
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.selection.selected_count())
            .unwrap_or(0)
    }

    /// Compare the current selected set against the last notified
    /// payload; a by-value change yields the payload to deliver.
    fn take_selection_notification(guard: &mut GridInner) -> Option<(SelectionChanged, Vec<RowId>)> {
        let current = guard.selection.sorted_ids();
        if current == guard.notified_selection {
            return None;
        }
        guard.notified_selection = current.clone();
        let callback = guard.options.on_selection_change.clone()?;
        Some((callback, current))
    }

    /// Deliver a selection notification outside the state lock.
    fn deliver_selection(&self, notification: Option<(SelectionChanged, Vec<RowId>)>) {
        if let Some((callback, ids)) = notification {
            log::debug!("grid {} selection changed: {} rows", self.id, ids.len());
            callback(&ids);
        }
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Flip one row's expansion. Rows without sub-rows never toggle.
    /// Returns whether the expanded set changed.
    pub fn toggle_expanded(&self, id: &RowId) -> bool {
        let notification = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let expandable = find_row(&guard.rows, id).is_some_and(Row::can_expand);
            if !expandable {
                return false;
            }
            guard.expansion.toggle(id);
            self.dirty.store(true, Ordering::SeqCst);
            Self::take_expansion_notification(&guard)
        };
        self.deliver_expansion(notification);
        true
    }

    /// Expand every expandable row in the tree, or collapse all of them
    /// when every one is already expanded.
    pub fn toggle_all_expanded(&self) -> bool {
        let (changed, notification) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let ids = assemble::expandable_ids(&guard.rows);
            let changed = guard.expansion.toggle_all(&ids);
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
            let notification = changed.then(|| Self::take_expansion_notification(&guard)).flatten();
            (changed, notification)
        };
        self.deliver_expansion(notification);
        changed
    }

    /// Check if a row is expanded.
    pub fn is_expanded(&self, id: &RowId) -> bool {
        self.inner
            .read()
            .map(|g| g.expansion.is_expanded(id))
            .unwrap_or(false)
    }

    /// The expanded map delivered to expansion observers.
    pub fn expanded_map(&self) -> HashMap<RowId, bool> {
        self.inner
            .read()
            .map(|g| expanded_map(&g.expansion))
            .unwrap_or_default()
    }

    fn take_expansion_notification(
        guard: &GridInner,
    ) -> Option<(ExpansionChanged, HashMap<RowId, bool>)> {
        let callback = guard.options.on_expansion_change.clone()?;
        Some((callback, expanded_map(&guard.expansion)))
    }

    fn deliver_expansion(&self, notification: Option<(ExpansionChanged, HashMap<RowId, bool>)>) {
        if let Some((callback, map)) = notification {
            callback(&map);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Advance the sort cycle for a column:
    /// `unsorted -> ascending -> descending -> unsorted`. Toggling an
    /// unknown or non-sortable column is a no-op. The grid stores the
    /// state only; the caller's data source receives the new pair and
    /// returns already-ordered rows.
    pub fn toggle_sort(&self, column: &ColumnId) -> Option<(ColumnId, SortDirection)> {
        let (next, callback) = {
            let Ok(mut guard) = self.inner.write() else {
                return None;
            };
            let sortable = guard
                .columns
                .iter()
                .any(|c| c.id() == column && c.sortable());
            if !sortable {
                return guard.sort.active().map(|(id, dir)| (id.clone(), dir));
            }
            let next = guard.sort.toggle(column);
            self.dirty.store(true, Ordering::SeqCst);
            (next, guard.options.on_sort_change.clone())
        };
        if let Some(callback) = callback {
            log::debug!("grid {} sort changed: {next:?}", self.id);
            callback(next.clone());
        }
        next
    }

    /// The active sort state.
    pub fn sort(&self) -> Option<(ColumnId, SortDirection)> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.sort.active().map(|(id, dir)| (id.clone(), dir)))
    }

    // -------------------------------------------------------------------------
    // Drag reordering
    // -------------------------------------------------------------------------

    /// Apply a completed drag gesture to the top-level row order.
    ///
    /// Cancelled gestures and same-position drops change nothing. On a
    /// real move the backing array is replaced with a new vector and the
    /// rows-changed observer receives it; selection and expansion are
    /// untouched (row identities did not change).
    pub fn drag_end(&self, drag: DragEnd) -> bool {
        self.apply_reorder(|rows| apply_drag(rows, &drag))
    }

    /// Apply a drag over a paged layout with `items_per_page` rows per
    /// drag list, translating local positions to global indices.
    pub fn drag_end_paged(&self, drag: DragEnd, items_per_page: usize) -> bool {
        self.apply_reorder(|rows| apply_drag_paged(rows, &drag, items_per_page))
    }

    fn apply_reorder(&self, splice: impl FnOnce(&[Row]) -> Option<Vec<Row>>) -> bool {
        let notification = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            let Some(next) = splice(&guard.rows) else {
                return false;
            };
            guard.rows = next;
            self.dirty.store(true, Ordering::SeqCst);
            guard
                .options
                .on_rows_change
                .clone()
                .map(|callback| (callback, guard.rows.clone()))
        };
        if let Some((callback, rows)) = notification {
            log::debug!("grid {} rows reordered", self.id);
            callback(&rows);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Assembly
    // -------------------------------------------------------------------------

    /// Assemble the header row.
    pub fn header(&self) -> Vec<HeaderCell> {
        self.inner
            .read()
            .map(|g| assemble::header(&g))
            .unwrap_or_default()
    }

    /// Assemble the body rows: a depth-first walk of the rows and their
    /// expanded sub-rows, with text rows collapsed into section rows.
    pub fn body(&self) -> Vec<BodyRow> {
        self.inner
            .read()
            .map(|g| assemble::body(&g))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the grid has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Find a row by id anywhere in the tree.
fn find_row<'a>(rows: &'a [Row], id: &RowId) -> Option<&'a Row> {
    for row in rows {
        if row.id() == id {
            return Some(row);
        }
        if let Some(found) = find_row(row.sub_rows(), id) {
            return Some(found);
        }
    }
    None
}

fn expanded_map(expansion: &ExpansionModel) -> HashMap<RowId, bool> {
    expansion
        .expanded_ids()
        .into_iter()
        .map(|id| (id, true))
        .collect()
}
