use std::fmt;

use serde::{Serialize, Serializer};

pub const DEFAULT_MAX_PAGES: usize = 5;
pub const DEFAULT_NARROW_MAX_PAGES: usize = 3;
pub const DEFAULT_NARROW_BREAKPOINT: u32 = 640;

/// One slot of the page picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

// pages serialize as numbers, the ellipsis as the "..." string
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Builds the compact page picker for `current_page` out of `total_pages`.
///
/// When everything fits, every page is listed. Otherwise a window of exactly
/// `max_pages` pages around the current one is shown, shifted to stay inside
/// `[1, total_pages]`, with the first and last page spliced in as anchors and
/// an ellipsis wherever an anchor is not adjacent to the window.
pub fn pagination_pages(current_page: usize, total_pages: usize, max_pages: usize) -> Vec<PageToken> {
    let max_pages = max_pages.max(1);

    if total_pages <= max_pages {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let (start, end) = window_bounds(current_page, total_pages, max_pages);

    let mut pages = Vec::with_capacity(max_pages + 4);
    if start > 1 {
        pages.push(PageToken::Page(1));
        if start > 2 {
            pages.push(PageToken::Ellipsis);
        }
    }
    pages.extend((start..=end).map(PageToken::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            pages.push(PageToken::Ellipsis);
        }
        pages.push(PageToken::Page(total_pages));
    }
    pages
}

// first and last page of the sliding window, only meaningful when total_pages > max_pages
fn window_bounds(current_page: usize, total_pages: usize, max_pages: usize) -> (usize, usize) {
    let current = current_page.clamp(1, total_pages);
    let left = (max_pages - 1) / 2;

    let mut start = current.saturating_sub(left).max(1);
    let mut end = start + max_pages - 1;
    if end > total_pages {
        end = total_pages;
        start = total_pages - max_pages + 1;
    }
    (start, end)
}

/// `ceil(total_items / items_per_page)`, zero when there is nothing to show.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Picks the number of picker slots from a viewport width supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsivePager {
    pub narrow_breakpoint: u32,
    pub narrow_max_pages: usize,
    pub max_pages: usize,
}

impl Default for ResponsivePager {
    fn default() -> Self {
        Self {
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            narrow_max_pages: DEFAULT_NARROW_MAX_PAGES,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ResponsivePager {
    pub fn max_pages_for(&self, viewport_width: Option<u32>) -> usize {
        match viewport_width {
            Some(width) if width < self.narrow_breakpoint => self.narrow_max_pages,
            _ => self.max_pages,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageState {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Index range of the current page within the filtered set.
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.current_page.saturating_sub(1) * self.items_per_page).min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }
}
