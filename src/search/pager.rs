use serde::Serialize;
use std::num::NonZeroUsize;

/// One window of an ordered result sequence plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number as requested
    pub number: usize,
    pub page_size: usize,
    /// Never less than 1
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<'_, T> {
    /// 1-based first and last positions shown, e.g. "Showing 10-18 of 20"
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.number - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Number of pages needed for `total_count` items, minimum 1
pub fn total_pages(total_count: usize, page_size: NonZeroUsize) -> usize {
    total_count.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slice out page `page_number` (1-based).
///
/// Does not clamp: page 0 or a page past the end yields empty `items`.
pub fn paginate<T>(records: &[T], page_size: NonZeroUsize, page_number: usize) -> Page<'_, T> {
    let size = page_size.get();
    let total_count = records.len();

    let items = page_number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(size))
        .filter(|start| *start < total_count)
        .map(|start| &records[start..total_count.min(start.saturating_add(size))])
        .unwrap_or(&[]);

    Page {
        items,
        number: page_number,
        page_size: size,
        total_pages: total_pages(total_count, page_size),
        total_count,
    }
}

/// Entry in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageLink {
    Number { page: usize, active: bool },
    Ellipsis,
}

/// Pagination bar: first, last, and current ±1, with an ellipsis two pages
/// out from the current page wherever numbers are skipped.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    let mut links = Vec::new();

    for page in 1..=total_pages {
        let near_current = page + 1 >= current && page <= current.saturating_add(1);
        if page == 1 || page == total_pages || near_current {
            links.push(PageLink::Number {
                page,
                active: page == current,
            });
        } else if current.checked_sub(2) == Some(page) || page == current.saturating_add(2) {
            links.push(PageLink::Ellipsis);
        }
    }

    links
}
