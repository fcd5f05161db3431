//! Drag-reorder behavior, both the pure splice and the grid handle.

use std::sync::{Arc, Mutex};

use datagrid::column::Column;
use datagrid::grid::{Grid, GridOptions};
use datagrid::reorder::{DragEnd, DragLocation, apply_drag, apply_drag_paged, paginate, reorder};
use datagrid::row::{Row, RowId};
use datagrid::theme::GridTheme;

#[test]
fn test_splice_move_semantics() {
    assert_eq!(
        reorder(&["a", "b", "c", "d"], 0, 2),
        vec!["b", "c", "a", "d"]
    );
}

#[test]
fn test_same_position_drop_is_a_no_op() {
    let items = vec!["a", "b", "c", "d"];
    assert_eq!(apply_drag(&items, &DragEnd::same_list(2, 2)), None);
    // The caller keeps its array untouched.
    assert_eq!(items, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_cancelled_drop_is_a_no_op() {
    let items = vec![1, 2, 3];
    let drag = DragEnd::cancelled(DragLocation::new(0, 1));
    assert_eq!(apply_drag(&items, &drag), None);
}

#[test]
fn test_cross_list_requires_a_paged_layout() {
    let items = vec![1, 2, 3, 4];
    let drag = DragEnd {
        source: DragLocation::new(0, 1),
        destination: Some(DragLocation::new(1, 0)),
    };
    assert_eq!(apply_drag(&items, &drag), None);
    assert!(apply_drag_paged(&items, &drag, 2).is_some());
}

#[test]
fn test_paged_translation_matches_flat_reorder() {
    let items: Vec<i32> = (0..7).collect();
    // Local index 1 of page 1 is global index 4; local index 0 of
    // page 0 is global index 0.
    let drag = DragEnd {
        source: DragLocation::new(1, 1),
        destination: Some(DragLocation::new(0, 0)),
    };
    let paged = apply_drag_paged(&items, &drag, 3).unwrap();
    assert_eq!(paged, reorder(&items, 4, 0));

    // Re-partitioning keeps page sizes fixed.
    let pages = paginate(&paged, 3);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0], vec![4, 0, 1]);
}

#[test]
fn test_grid_drag_end_replaces_rows_and_notifies() {
    let log: Arc<Mutex<Vec<Vec<RowId>>>> = Arc::default();
    let sink = Arc::clone(&log);
    let grid = Grid::new(
        vec![Column::new("name", "Name")],
        GridOptions::new()
            .draggable()
            .on_rows_change(move |rows| {
                if let Ok(mut entries) = sink.lock() {
                    entries.push(rows.iter().map(|r| r.id().clone()).collect());
                }
            }),
        GridTheme::default(),
    )
    .unwrap();
    grid.set_rows((1..=4).map(Row::new).collect()).unwrap();

    assert!(grid.drag_end(DragEnd::same_list(0, 2)));
    let order: Vec<RowId> = grid.rows().iter().map(|r| r.id().clone()).collect();
    assert_eq!(
        order,
        vec![RowId::from(2), RowId::from(3), RowId::from(1), RowId::from(4)]
    );
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_grid_no_op_drag_keeps_order_and_stays_silent() {
    let fired: Arc<Mutex<usize>> = Arc::default();
    let sink = Arc::clone(&fired);
    let grid = Grid::new(
        vec![Column::new("name", "Name")],
        GridOptions::new().draggable().on_rows_change(move |_| {
            if let Ok(mut count) = sink.lock() {
                *count += 1;
            }
        }),
        GridTheme::default(),
    )
    .unwrap();
    grid.set_rows((1..=3).map(Row::new).collect()).unwrap();
    let before = grid.rows();

    assert!(!grid.drag_end(DragEnd::same_list(2, 2)));
    assert!(!grid.drag_end(DragEnd::cancelled(DragLocation::new(0, 1))));
    assert_eq!(grid.rows(), before);
    assert_eq!(*fired.lock().unwrap(), 0);
}
