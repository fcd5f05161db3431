//! Selection behavior through the grid handle.

use std::sync::{Arc, Mutex};

use datagrid::column::Column;
use datagrid::grid::{Grid, GridOptions, HeaderCell};
use datagrid::row::{Row, RowId};
use datagrid::theme::GridTheme;

fn sample_rows(count: i64) -> Vec<Row> {
    (1..=count)
        .map(|i| Row::new(i).set("name", format!("row {i}")))
        .collect()
}

fn grid_with(options: GridOptions, rows: Vec<Row>) -> Grid {
    let grid = Grid::new(
        vec![Column::new("name", "Name")],
        options,
        GridTheme::default(),
    )
    .unwrap();
    grid.set_rows(rows).unwrap();
    grid
}

#[test]
fn test_cap_never_exceeded() {
    let grid = grid_with(GridOptions::new().with_selection_cap(2), sample_rows(5));

    // Arbitrary toggle sequence; the set size must never pass the cap.
    for id in [1i64, 2, 3, 4, 5, 3, 2, 2, 1, 4] {
        grid.toggle_row(&RowId::from(id));
        assert!(grid.selected_count() <= 2);
    }
}

#[test]
fn test_select_past_cap_is_a_no_op() {
    let grid = grid_with(GridOptions::new().with_selection_cap(2), sample_rows(4));
    assert!(grid.toggle_row(&RowId::from(1)));
    assert!(grid.toggle_row(&RowId::from(2)));
    assert!(!grid.toggle_row(&RowId::from(3)));
    assert_eq!(grid.selected_ids(), vec![RowId::from(1), RowId::from(2)]);

    // Deselecting frees a slot again.
    assert!(grid.toggle_row(&RowId::from(1)));
    assert!(grid.toggle_row(&RowId::from(3)));
    assert_eq!(grid.selected_ids(), vec![RowId::from(2), RowId::from(3)]);
}

#[test]
fn test_toggle_twice_notifies_once_per_change() {
    let log: Arc<Mutex<Vec<Vec<RowId>>>> = Arc::default();
    let sink = Arc::clone(&log);
    let grid = grid_with(
        GridOptions::new()
            .selectable()
            .on_selection_change(move |ids| {
                if let Ok(mut entries) = sink.lock() {
                    entries.push(ids.to_vec());
                }
            }),
        sample_rows(3),
    );

    let id = RowId::from(2);
    grid.toggle_row(&id);
    grid.toggle_row(&id);

    let entries = log.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], vec![RowId::from(2)]);
    assert!(entries[1].is_empty());
    drop(entries);
    assert!(grid.selected_ids().is_empty());
}

#[test]
fn test_no_notification_without_a_set_change() {
    let log: Arc<Mutex<Vec<Vec<RowId>>>> = Arc::default();
    let sink = Arc::clone(&log);
    let grid = grid_with(
        GridOptions::new()
            .with_selection_cap(1)
            .on_selection_change(move |ids| {
                if let Ok(mut entries) = sink.lock() {
                    entries.push(ids.to_vec());
                }
            }),
        sample_rows(3),
    );

    grid.toggle_row(&RowId::from(1));
    // Capped: this toggle changes nothing and must not notify.
    grid.toggle_row(&RowId::from(2));
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_toggle_all_selects_then_clears() {
    let grid = grid_with(GridOptions::new().selectable(), sample_rows(3));
    assert!(grid.toggle_all());
    assert_eq!(
        grid.selected_ids(),
        vec![RowId::from(1), RowId::from(2), RowId::from(3)]
    );
    assert!(grid.toggle_all());
    assert!(grid.selected_ids().is_empty());
}

#[test]
fn test_toggle_all_completes_a_partial_selection() {
    let grid = grid_with(GridOptions::new().selectable(), sample_rows(3));
    grid.toggle_row(&RowId::from(2));
    assert!(grid.toggle_all());
    assert_eq!(grid.selected_count(), 3);
}

#[test]
fn test_toggle_all_unavailable_under_cap() {
    let grid = grid_with(GridOptions::new().with_selection_cap(2), sample_rows(5));
    assert!(!grid.toggle_all());
    assert!(grid.selected_ids().is_empty());

    // The header hides the select-all control under a cap.
    let header = grid.header();
    assert_eq!(header[0], HeaderCell::Blank);
}

#[test]
fn test_indeterminate_header_state() {
    let grid = grid_with(GridOptions::new().selectable(), sample_rows(3));
    grid.toggle_row(&RowId::from(1));

    match &grid.header()[0] {
        HeaderCell::SelectAll {
            checked,
            indeterminate,
        } => {
            assert!(!checked);
            assert!(*indeterminate);
        }
        other => panic!("expected select-all header, got {other:?}"),
    }
}

#[test]
fn test_replacing_rows_drops_selection_and_notifies() {
    let log: Arc<Mutex<Vec<Vec<RowId>>>> = Arc::default();
    let sink = Arc::clone(&log);
    let grid = grid_with(
        GridOptions::new()
            .selectable()
            .on_selection_change(move |ids| {
                if let Ok(mut entries) = sink.lock() {
                    entries.push(ids.to_vec());
                }
            }),
        sample_rows(3),
    );

    grid.toggle_row(&RowId::from(1));
    grid.set_rows(sample_rows(2)).unwrap();
    let entries = log.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[1].is_empty());
}
