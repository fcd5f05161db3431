//! Headless data-grid engine for admin back-office tables.
//!
//! The crate models the reusable core of a catalog/orders-style table:
//! a column/row data model, selection with an optional cap, expansion of
//! nested sub-rows, a single-column sort cycle, drag-and-drop
//! reordering, and the assembly of synthetic columns around the user's
//! declarations. Everything renders into plain [`fragment::Fragment`]
//! trees; the host UI owns the actual drawing, data fetching and row
//! ordering.

pub mod cell;
pub mod column;
pub mod error;
pub mod expansion;
pub mod fragment;
pub mod grid;
pub mod prefs;
pub mod reorder;
pub mod row;
pub mod selection;
pub mod sort;
pub mod theme;

pub mod prelude {
    pub use crate::cell::{CellValue, Price, render};
    pub use crate::column::{Accessor, Column, ColumnId, Header};
    pub use crate::error::GridError;
    pub use crate::expansion::ExpansionModel;
    pub use crate::fragment::{Emphasis, Fragment, Icon};
    pub use crate::grid::{BodyCell, BodyRow, Grid, GridId, GridOptions, HeaderCell};
    pub use crate::prefs::{MemoryStore, PreferenceStore, load_codes, store_codes};
    pub use crate::reorder::{DragEnd, DragLocation, apply_drag, apply_drag_paged, paginate, reorder};
    pub use crate::row::{Row, RowId};
    pub use crate::selection::SelectionModel;
    pub use crate::sort::{SortDirection, SortModel};
    pub use crate::theme::GridTheme;
}
