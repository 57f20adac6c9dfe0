//! List-view controller: turns a row snapshot plus sort, filter and page
//! state into the slice to render, and owns the selection set.

use super::filter::{filter_rows, FilterSpec};
use super::paginate::{page_slice, page_window, Page, PageMarker};
use super::row::ListRow;
use super::selection::{HeaderCheckState, SelectionAction, SelectionSet};
use super::sort::{sort_refs, SortSpec};

/// What a list view renders for the current state
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, T> {
    pub visible_rows: Vec<&'a T>,
    pub total_pages: usize,
    pub page_window: Vec<PageMarker>,
    pub page: Page,
    /// Rows left after filtering, across all pages
    pub filtered_count: usize,
}

impl<T: ListRow> ListView<'_, T> {
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_rows.iter().map(|r| r.row_id().to_string()).collect()
    }
}

/// Filter, then sort, then slice out page `page_index` (1-based)
pub fn compute_view<'a, T: ListRow>(
    rows: &'a [T],
    sort: &SortSpec,
    filter: &FilterSpec,
    page_index: usize,
    page_size: usize,
) -> ListView<'a, T> {
    let filtered = filter_rows(rows, filter);
    let ordered = sort_refs(filtered, sort);
    let filtered_count = ordered.len();
    let page = Page::new(page_index, page_size, filtered_count);

    ListView {
        visible_rows: page_slice(&ordered, page_size, page_index).to_vec(),
        total_pages: page.total_pages,
        page_window: page_window(page_index, page.total_pages),
        page,
        filtered_count,
    }
}

/// Sort/filter/page/selection state of one mounted list view.
///
/// Any change of the sort or filter, or a new row snapshot, moves the
/// view back to page 1.
#[derive(Debug, Clone)]
pub struct ListViewController<T> {
    rows: Vec<T>,
    sort: SortSpec,
    filter: FilterSpec,
    page_index: usize,
    page_size: usize,
    selection: SelectionSet,
}

impl<T: ListRow> ListViewController<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            sort: SortSpec::default(),
            filter: FilterSpec::default(),
            page_index: 1,
            page_size: page_size.max(1),
            selection: SelectionSet::default(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replaces the snapshot (e.g. after a fetch); selection is kept
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.reset_page();
    }

    /// Switching between table and grid layouts changes the page size
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset_page();
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    fn reset_page(&mut self) {
        if self.page_index != 1 {
            log::debug!("list view: page {} -> 1", self.page_index);
        }
        self.page_index = 1;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.reset_page();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.reset_page();
    }

    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.reset_page();
    }

    /// Edits the filter in place, e.g. `c.update_filter(|f| f.toggle_value("status", 1))`
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut FilterSpec)) {
        edit(&mut self.filter);
        self.reset_page();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.update_filter(|f| f.set_search(term));
    }

    pub fn reset_filters(&mut self) {
        self.update_filter(FilterSpec::reset);
    }

    pub fn filtered_count(&self) -> usize {
        self.rows.iter().filter(|row| self.filter.matches(*row)).count()
    }

    pub fn total_pages(&self) -> usize {
        super::paginate::total_pages(self.filtered_count(), self.page_size)
    }

    /// Moves to page `index`; requests outside `1..=total_pages` are refused
    pub fn go_to_page(&mut self, index: usize) -> bool {
        let total = self.total_pages();
        if !(1..=total).contains(&index) {
            log::warn!("list view: page {} requested, valid range is 1..={}", index, total);
            return false;
        }
        self.page_index = index;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.page_index >= self.total_pages() {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page_index <= 1 {
            return false;
        }
        self.page_index -= 1;
        true
    }

    pub fn view(&self) -> ListView<'_, T> {
        compute_view(&self.rows, &self.sort, &self.filter, self.page_index, self.page_size)
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.view().visible_ids()
    }

    pub fn toggle_selected(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Header checkbox click for the current page
    pub fn toggle_all_on_page(&mut self) {
        let ids = self.visible_ids();
        self.selection.toggle_all_on_page(&ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn apply_selection(&mut self, action: SelectionAction) {
        self.selection.apply(action);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(&self.visible_ids())
    }

    pub fn header_state(&self) -> HeaderCheckState {
        self.selection.header_state(&self.visible_ids())
    }
}

impl<T: ListRow + Clone> ListViewController<T> {
    /// Owned copy of the current page, for reactive rendering
    pub fn visible_rows(&self) -> Vec<T> {
        self.view().visible_rows.into_iter().cloned().collect()
    }

    /// Owned rows whose ids are selected, in source order
    pub fn selected_rows(&self) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| self.selection.contains(row.row_id()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::paginate::PageMarker::{Ellipsis, Page as P};
    use crate::shared::list_view::test_rows::{ids, row, TestRow};
    use pretty_assertions::assert_eq;

    fn numbered(count: usize) -> Vec<TestRow> {
        (1..=count)
            .map(|i| row(&i.to_string()).price(i as f64).status((i % 2) as i32))
            .collect()
    }

    #[test]
    fn test_compute_view_first_page() {
        let rows = numbered(25);
        let view = compute_view(&rows, &SortSpec::default(), &FilterSpec::default(), 1, 10);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.filtered_count, 25);
        assert_eq!(view.visible_rows.len(), 10);
        assert_eq!(view.page_window, vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn test_empty_collection() {
        let rows: Vec<TestRow> = Vec::new();
        let view = compute_view(&rows, &SortSpec::asc("price"), &FilterSpec::default(), 1, 10);
        assert_eq!(view.total_pages, 1);
        assert!(view.visible_rows.is_empty());
        assert_eq!(view.page_window, vec![P(1)]);
    }

    #[test]
    fn test_sort_then_paginate() {
        let rows = numbered(25);
        let view = compute_view(&rows, &SortSpec::desc("price"), &FilterSpec::default(), 3, 10);
        assert_eq!(ids(&view.visible_rows), vec!["5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_go_to_page_refuses_out_of_range() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        assert!(c.go_to_page(3));
        assert!(!c.go_to_page(4));
        assert!(!c.go_to_page(0));
        assert_eq!(c.page_index(), 3);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut c = ListViewController::new(10).with_rows(numbered(15));
        assert!(!c.previous_page());
        assert!(c.next_page());
        assert!(!c.next_page());
        assert_eq!(c.page_index(), 2);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        c.go_to_page(3);
        c.toggle_sort("price");
        assert_eq!(c.page_index(), 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        c.go_to_page(3);
        c.update_filter(|f| f.toggle_value("status", 0));
        assert_eq!(c.page_index(), 1);
        assert_eq!(c.filtered_count(), 12);
        assert_eq!(c.total_pages(), 2);

        c.go_to_page(2);
        c.set_search("1");
        assert_eq!(c.page_index(), 1);

        c.go_to_page(1);
        c.reset_filters();
        assert_eq!(c.filtered_count(), 25);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        c.go_to_page(3);
        c.set_page_size(8);
        assert_eq!(c.page_index(), 1);
        assert_eq!(c.total_pages(), 4);
        c.set_page_size(0);
        assert_eq!(c.page_size(), 1);
    }

    #[test]
    fn test_new_snapshot_resets_page_and_keeps_selection() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        c.toggle_selected("7");
        c.go_to_page(2);
        c.set_rows(numbered(30));
        assert_eq!(c.page_index(), 1);
        assert!(c.is_selected("7"));
    }

    #[test]
    fn test_toggle_all_on_page_twice() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        c.go_to_page(2);
        c.toggle_all_on_page();
        assert!(c.all_selected());
        assert_eq!(c.header_state(), HeaderCheckState::Checked);
        assert_eq!(c.selected_rows().len(), 10);
        assert!(c.is_selected("11") && c.is_selected("20"));

        c.toggle_all_on_page();
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut c = ListViewController::new(10).with_rows(numbered(25));
        c.toggle_all_on_page();
        c.next_page();
        assert!(c.is_selected("1"));
        assert_eq!(c.header_state(), HeaderCheckState::Unchecked);
        // ten ids selected, ten rows visible: the length rule still holds
        assert!(c.all_selected());

        c.next_page();
        assert_eq!(c.visible_ids().len(), 5);
        assert!(!c.all_selected());
    }

    #[test]
    fn test_visible_rows_are_owned_copies() {
        let mut c = ListViewController::new(10).with_rows(numbered(12));
        c.set_sort(SortSpec::desc("price"));
        let rows = c.visible_rows();
        assert_eq!(rows.first().map(|r| r.id.as_str()), Some("12"));
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn test_long_list_window() {
        let mut c = ListViewController::new(10).with_rows(numbered(100));
        c.go_to_page(5);
        assert_eq!(
            c.view().page_window,
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
    }
}
