//! 1-based page arithmetic shared by the grid views.

use crate::config;

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Items on `page` (1-based). Page 0 and pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers to offer as direct links: at most five, centred on `current`
/// and clamped to the first and last page.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    let width = config::PAGE_WINDOW;
    if total_pages <= width {
        return (1..=total_pages).collect();
    }
    let half = width / 2;
    let first = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages - width + 1
    } else {
        current - half
    };
    (first..first + width).collect()
}

/// One rendered page of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    /// Number of items after filtering, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub window: Vec<usize>,
}

impl<'a, T> Page<'a, T> {
    pub(crate) fn build(filtered: Vec<&'a T>, page: usize, page_size: usize) -> Self {
        let total = filtered.len();
        let page_count = page_count(total, page_size);
        let items = page_slice(&filtered, page, page_size).to_vec();
        Self {
            items,
            total,
            page,
            page_count,
            window: page_window(page, page_count),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
