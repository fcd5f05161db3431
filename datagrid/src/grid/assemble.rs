//! Header and body assembly.
//!
//! Synthetic columns compose around the user columns in a fixed order,
//! front to back: drag handle, selection, user columns, expansion,
//! settings. Assembly produces plain header/body structures; the host
//! walks them and draws.

use crate::cell::render;
use crate::column::ColumnId;
use crate::fragment::Fragment;
use crate::row::{Row, RowId};
use crate::sort::SortDirection;

use super::GridInner;

/// One cell of the assembled header row.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderCell {
    /// Spacer over a synthetic column with no header control.
    Blank,
    /// Plain column header.
    Label(Fragment),
    /// Sortable column header carrying the current direction.
    SortToggle {
        column: ColumnId,
        content: Fragment,
        direction: Option<SortDirection>,
    },
    /// Header select-all checkbox. Omitted entirely (a [`HeaderCell::Blank`])
    /// when a selection cap is configured.
    SelectAll { checked: bool, indeterminate: bool },
    /// Header expand-all toggle.
    ExpandAll { expanded: bool },
}

/// One cell of an assembled data row, in column order.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyCell {
    /// Spacer under a synthetic column that does not apply to this row.
    Blank,
    /// Rendered user-column content.
    Content(Fragment),
    /// Row selection checkbox. `disabled` is set once the selection cap
    /// is reached and this row is not among the selected.
    Checkbox { checked: bool, disabled: bool },
    /// Expansion toggle; only rows with sub-rows carry one.
    ExpandToggle { expanded: bool },
    /// Non-interactive drag affordance; drag behavior attaches at the
    /// row level.
    DragHandle,
    /// Edit/delete action buttons, present per the supplied callbacks.
    Actions { edit: bool, delete: bool },
}

/// One assembled body row.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyRow {
    /// A normal data row. `indent` is `depth * theme.indent_unit`, in
    /// the host's display units.
    Data {
        id: RowId,
        depth: u16,
        indent: u16,
        cells: Vec<BodyCell>,
    },
    /// A text row: a single full-width bold cell spanning all columns.
    Section { id: RowId, content: Fragment },
}

impl BodyRow {
    /// The row id regardless of shape.
    pub fn id(&self) -> &RowId {
        match self {
            BodyRow::Data { id, .. } | BodyRow::Section { id, .. } => id,
        }
    }
}

pub(super) fn header(inner: &GridInner) -> Vec<HeaderCell> {
    let total = inner.rows.len();
    let mut cells = Vec::with_capacity(inner.columns.len() + 4);

    if inner.options.draggable {
        cells.push(HeaderCell::Blank);
    }
    if inner.options.selectable {
        if inner.selection.cap().is_some() {
            // Bulk select is incompatible with a cap; hide the control.
            cells.push(HeaderCell::Blank);
        } else {
            cells.push(HeaderCell::SelectAll {
                checked: inner.selection.is_all_selected(total),
                indeterminate: inner.selection.is_indeterminate(total),
            });
        }
    }
    for column in &inner.columns {
        let content = column.header().fragment();
        if column.sortable() {
            cells.push(HeaderCell::SortToggle {
                column: column.id().clone(),
                content,
                direction: inner.sort.direction_of(column.id()),
            });
        } else {
            cells.push(HeaderCell::Label(content));
        }
    }
    if inner.options.expandable {
        cells.push(HeaderCell::ExpandAll {
            expanded: inner.expansion.all_expanded(&expandable_ids(&inner.rows)),
        });
    }
    if inner.options.has_settings_column() {
        cells.push(HeaderCell::Blank);
    }
    cells
}

pub(super) fn body(inner: &GridInner) -> Vec<BodyRow> {
    let mut rows = Vec::with_capacity(inner.rows.len());
    for row in &inner.rows {
        push_row(inner, row, 0, &mut rows);
    }
    rows
}

fn push_row(inner: &GridInner, row: &Row, depth: u16, out: &mut Vec<BodyRow>) {
    if let Some(text) = row.section_text(inner.options.section_field_name()) {
        out.push(BodyRow::Section {
            id: row.id().clone(),
            content: Fragment::bold(text),
        });
        return;
    }

    out.push(BodyRow::Data {
        id: row.id().clone(),
        depth,
        indent: depth * inner.theme.indent_unit,
        cells: data_cells(inner, row),
    });

    if inner.options.expandable && row.can_expand() && inner.expansion.is_expanded(row.id()) {
        for sub_row in row.sub_rows() {
            push_row(inner, sub_row, depth + 1, out);
        }
    }
}

fn data_cells(inner: &GridInner, row: &Row) -> Vec<BodyCell> {
    let mut cells = Vec::with_capacity(inner.columns.len() + 4);

    if inner.options.draggable {
        cells.push(BodyCell::DragHandle);
    }
    if inner.options.selectable {
        let checked = inner.selection.is_selected(row.id());
        cells.push(BodyCell::Checkbox {
            checked,
            disabled: !checked && inner.selection.at_capacity(),
        });
    }
    for column in &inner.columns {
        let value = column.accessor().resolve(row);
        cells.push(BodyCell::Content(render(&value, &inner.theme)));
    }
    if inner.options.expandable {
        if row.can_expand() {
            cells.push(BodyCell::ExpandToggle {
                expanded: inner.expansion.is_expanded(row.id()),
            });
        } else {
            cells.push(BodyCell::Blank);
        }
    }
    if inner.options.has_settings_column() {
        cells.push(BodyCell::Actions {
            edit: inner.options.edit_row.is_some(),
            delete: inner.options.delete_row.is_some(),
        });
    }
    cells
}

/// Every expandable row in the tree, in depth-first order.
pub(super) fn expandable_ids(rows: &[Row]) -> Vec<RowId> {
    let mut ids = Vec::new();
    collect_expandable(rows, &mut ids);
    ids
}

fn collect_expandable(rows: &[Row], out: &mut Vec<RowId>) {
    for row in rows {
        if row.can_expand() {
            out.push(row.id().clone());
        }
        collect_expandable(row.sub_rows(), out);
    }
}
