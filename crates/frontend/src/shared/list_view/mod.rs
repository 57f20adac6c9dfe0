//! Generic sortable / filterable / paginated list view.
//!
//! Stages are pure functions over a row snapshot:
//! filter -> sort -> paginate, plus a selection set that outlives page
//! changes. [`ListViewController`] keeps the state of one mounted view.

pub mod controller;
pub mod filter;
pub mod paginate;
pub mod row;
pub mod selection;
pub mod sort;
pub mod state;

#[cfg(test)]
pub(crate) mod test_rows;

pub use controller::{compute_view, ListView, ListViewController};
pub use filter::{filter_rows, Constraint, FilterSpec, FilterValue};
pub use paginate::{page_slice, page_window, total_pages, Page, PageMarker};
pub use row::{FieldValue, ListRow};
pub use selection::{reduce, HeaderCheckState, SelectionAction, SelectionSet};
pub use sort::{sort_rows, SortDirection, SortSpec};
pub use state::{create_list_state, LayoutMode};
