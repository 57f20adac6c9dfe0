//! Paginate stage: fixed-size pages and the page-bar window.

/// Entry of the page bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page position derived from the filtered row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn new(index: usize, size: usize, count: usize) -> Self {
        Self {
            index,
            size,
            total_pages: total_pages(count, size),
        }
    }

    /// "Previous" is disabled on the first page
    pub fn has_previous(&self) -> bool {
        self.index > 1
    }

    /// "Next" is disabled on the last page
    pub fn has_next(&self) -> bool {
        self.index < self.total_pages
    }

    pub fn contains(&self, index: usize) -> bool {
        (1..=self.total_pages).contains(&index)
    }

    /// 1-based inclusive bounds of the rows on this page, for "showing x–y of n"
    pub fn item_range(&self, count: usize) -> Option<(usize, usize)> {
        let start = (self.index.checked_sub(1)?).checked_mul(self.size)?;
        if start >= count {
            return None;
        }
        Some((start + 1, (start + self.size).min(count)))
    }
}

/// `max(1, ceil(count / size))`
pub fn total_pages(count: usize, size: usize) -> usize {
    let size = size.max(1);
    count.div_ceil(size).max(1)
}

/// Rows of the 1-based page `index`.
///
/// Shorter than `size` on the last page; empty for an empty collection or an
/// index outside `1..=total_pages`. Out-of-range indices are not wrapped.
pub fn page_slice<T>(rows: &[T], size: usize, index: usize) -> &[T] {
    let Some(start) = index.checked_sub(1).and_then(|i| i.checked_mul(size)) else {
        return &[];
    };
    let end = start.saturating_add(size).min(rows.len());
    rows.get(start..end).unwrap_or(&[])
}

/// Page bar for `current` of `total` pages.
///
/// Shows the first and last page and every page within distance 1 of the
/// current one. Page 2 becomes an ellipsis when `current > 3`, page
/// `total - 1` when `current < total - 2`; other hidden pages are omitted.
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    let mut window = Vec::new();
    for page in 1..=total {
        let near_current = page + 1 >= current && page <= current + 1;
        if page == 1 || page == total || near_current {
            window.push(PageMarker::Page(page));
        } else if (page == 2 && current > 3) || (page + 1 == total && current + 2 < total) {
            window.push(PageMarker::Ellipsis);
        }
    }
    window
}
