//! Leptos glue: list-view state held in a signal, and the table/grid layout switch.

use super::controller::ListViewController;
use super::row::ListRow;
use leptos::prelude::*;

/// Reactive list-view state, created at view mount and dropped with it
pub fn create_list_state<T>(page_size: usize) -> RwSignal<ListViewController<T>>
where
    T: ListRow + Send + Sync + 'static,
{
    RwSignal::new(ListViewController::new(page_size))
}

/// Table or card-grid rendering of the same list; each has its own page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Table,
    Grid,
}

impl LayoutMode {
    pub fn page_size(self, table: usize, grid: usize) -> usize {
        match self {
            LayoutMode::Table => table,
            LayoutMode::Grid => grid,
        }
    }
}
