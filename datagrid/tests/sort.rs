//! Sort cycle behavior through the grid handle.

use std::sync::{Arc, Mutex};

use datagrid::column::{Column, ColumnId};
use datagrid::grid::{Grid, GridOptions};
use datagrid::sort::SortDirection;
use datagrid::theme::GridTheme;

fn sortable_grid() -> Grid {
    Grid::new(
        vec![
            Column::new("name", "Name"),
            Column::new("price", "Price"),
            Column::new("photo", "Photo").not_sortable(),
        ],
        GridOptions::new(),
        GridTheme::default(),
    )
    .unwrap()
}

#[test]
fn test_three_toggles_return_to_unsorted() {
    let grid = sortable_grid();
    let name = ColumnId::from("name");

    assert_eq!(
        grid.toggle_sort(&name),
        Some((name.clone(), SortDirection::Ascending))
    );
    assert_eq!(
        grid.toggle_sort(&name),
        Some((name.clone(), SortDirection::Descending))
    );
    assert_eq!(grid.toggle_sort(&name), None);
    assert_eq!(grid.sort(), None);
}

#[test]
fn test_activating_another_column_resets_the_first() {
    let grid = sortable_grid();
    let name = ColumnId::from("name");
    let price = ColumnId::from("price");

    grid.toggle_sort(&name);
    assert_eq!(
        grid.toggle_sort(&price),
        Some((price.clone(), SortDirection::Ascending))
    );
    assert_eq!(grid.sort(), Some((price, SortDirection::Ascending)));
}

#[test]
fn test_non_sortable_column_never_participates() {
    let grid = sortable_grid();
    let name = ColumnId::from("name");
    let photo = ColumnId::from("photo");

    grid.toggle_sort(&name);
    let before = grid.sort();
    grid.toggle_sort(&photo);
    assert_eq!(grid.sort(), before);

    // Unknown columns are equally inert.
    grid.toggle_sort(&ColumnId::from("missing"));
    assert_eq!(grid.sort(), before);
}

#[test]
fn test_sort_change_callback_receives_each_state() {
    let log: Arc<Mutex<Vec<Option<(ColumnId, SortDirection)>>>> = Arc::default();
    let sink = Arc::clone(&log);
    let grid = Grid::new(
        vec![Column::new("name", "Name")],
        GridOptions::new().on_sort_change(move |state| {
            if let Ok(mut entries) = sink.lock() {
                entries.push(state);
            }
        }),
        GridTheme::default(),
    )
    .unwrap();

    let name = ColumnId::from("name");
    grid.toggle_sort(&name);
    grid.toggle_sort(&name);
    grid.toggle_sort(&name);

    let entries = log.lock().unwrap();
    assert_eq!(
        *entries,
        vec![
            Some((name.clone(), SortDirection::Ascending)),
            Some((name.clone(), SortDirection::Descending)),
            None,
        ]
    );
}
