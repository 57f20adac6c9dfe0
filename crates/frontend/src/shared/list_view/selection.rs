//! Selection tracker for bulk actions.
//!
//! Ids survive sort, filter and page changes; only an explicit clear (or a
//! header "select all" click) drops them.

use std::collections::HashSet;

/// State of the header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone)]
pub enum SelectionAction {
    Toggle(String),
    /// Header checkbox click with the ids of the visible page
    ToggleAllOnPage(Vec<String>),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// Present ids are removed, absent ones added
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header "select all" is scoped to the visible page.
    ///
    /// When the selection is exactly the page's id set it is cleared,
    /// otherwise it is replaced by the page's id set; ids from other pages
    /// are dropped in that case.
    pub fn toggle_all_on_page<S: AsRef<str>>(&mut self, visible_ids: &[S]) {
        let page: HashSet<String> = visible_ids.iter().map(|id| id.as_ref().to_string()).collect();
        if self.ids == page {
            self.ids.clear();
        } else {
            self.ids = page;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Length-based "all selected" flag: as many ids selected as rows visible.
    ///
    /// It does not check which ids; use [`SelectionSet::header_state`] for the
    /// checkbox rendering.
    pub fn all_selected<S: AsRef<str>>(&self, visible_ids: &[S]) -> bool {
        !visible_ids.is_empty() && self.ids.len() == visible_ids.len()
    }

    pub fn selected_on_page<S: AsRef<str>>(&self, visible_ids: &[S]) -> usize {
        visible_ids
            .iter()
            .filter(|id| self.ids.contains(id.as_ref()))
            .count()
    }

    /// Tri-state of the header checkbox, from the visible ids only
    pub fn header_state<S: AsRef<str>>(&self, visible_ids: &[S]) -> HeaderCheckState {
        match self.selected_on_page(visible_ids) {
            0 => HeaderCheckState::Unchecked,
            n if n == visible_ids.len() => HeaderCheckState::Checked,
            _ => HeaderCheckState::Indeterminate,
        }
    }

    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::Toggle(id) => self.toggle(&id),
            SelectionAction::ToggleAllOnPage(ids) => self.toggle_all_on_page(&ids),
            SelectionAction::Clear => self.clear(),
        }
    }
}

/// `(selection, action) -> selection'`
pub fn reduce(mut selection: SelectionSet, action: SelectionAction) -> SelectionSet {
    selection.apply(action);
    selection
}
