//! Page windowing and page cursor logic for paged lists

use serde::{Deserialize, Serialize};

/// Number of page buttons shown at once when nothing else is configured
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Compute the contiguous run of page numbers to render around `current_page`.
///
/// The run holds exactly `min(window_size, total_pages)` pages, all inside
/// `1..=total_pages`, and always contains the (clamped) current page. Windows
/// near either edge are pinned to that edge instead of being centred.
pub fn compute_window(current_page: usize, total_pages: usize, window_size: usize) -> Vec<usize> {
    if total_pages == 0 || window_size == 0 {
        return vec![];
    }

    if total_pages <= window_size {
        return (1..=total_pages).collect();
    }

    let current = clamp_page(current_page, total_pages);
    let half = window_size / 2;

    let start = if current <= half + 1 {
        1
    } else if current >= total_pages - half {
        total_pages - window_size + 1
    } else {
        current - half
    };

    (start..start + window_size).collect()
}

/// Pull `page` into `1..=total_pages`. With no pages at all this is page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

/// How a boundary page is shown when the window does not already contain it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCue {
    /// The window touches this edge
    None,
    /// Standalone boundary button directly next to the window
    Anchor,
    /// Standalone boundary button separated from the window by an ellipsis
    AnchorWithEllipsis,
}

impl EdgeCue {
    pub fn shows_anchor(&self) -> bool {
        !matches!(self, EdgeCue::None)
    }

    pub fn shows_ellipsis(&self) -> bool {
        matches!(self, EdgeCue::AnchorWithEllipsis)
    }
}

/// One entry of the rendered page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// The visible window plus the boundary cues derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
    pub leading: EdgeCue,
    pub trailing: EdgeCue,
}

impl PageWindow {
    /// `current_page` is clamped into range, so the highlighted page is always in the window
    pub fn new(current_page: usize, total_pages: usize, window_size: usize) -> Self {
        let current_page = clamp_page(current_page, total_pages);
        let pages = compute_window(current_page, total_pages, window_size);

        let leading = match pages.first() {
            Some(&first) if first > 2 => EdgeCue::AnchorWithEllipsis,
            Some(&first) if first == 2 => EdgeCue::Anchor,
            _ => EdgeCue::None,
        };

        let trailing = match pages.last() {
            Some(&last) if last + 1 < total_pages => EdgeCue::AnchorWithEllipsis,
            Some(&last) if last + 1 == total_pages => EdgeCue::Anchor,
            _ => EdgeCue::None,
        };

        Self {
            pages,
            current_page,
            total_pages,
            leading,
            trailing,
        }
    }

    /// Flatten the window and its cues into the sequence the strip renders
    pub fn items(&self) -> Vec<PageItem> {
        let mut items = Vec::with_capacity(self.pages.len() + 4);
        let page = |number: usize| PageItem::Page {
            number,
            current: number == self.current_page,
        };

        if self.leading.shows_anchor() {
            items.push(page(1));
            if self.leading.shows_ellipsis() {
                items.push(PageItem::Ellipsis);
            }
        }

        items.extend(self.pages.iter().copied().map(page));

        if self.trailing.shows_anchor() {
            if self.trailing.shows_ellipsis() {
                items.push(PageItem::Ellipsis);
            }
            items.push(page(self.total_pages));
        }

        items
    }
}

/// Snapshot of a paged list as the pagination control sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
}

impl PageState {
    /// Current page pulled into `1..=total_pages`; every label reads this
    pub fn page(&self) -> usize {
        clamp_page(self.current_page, self.total_pages)
    }

    /// 1-based index of the first item on the current page
    pub fn start_item(&self) -> usize {
        (self.page() - 1) * self.per_page + 1
    }

    /// 1-based index of the last item on the current page
    pub fn end_item(&self) -> usize {
        (self.page() * self.per_page).min(self.total_items)
    }

    /// The control is only drawn when there is more than one page
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// "1–20 of 200" style range, with thousands separators
    pub fn range_label(&self) -> String {
        format!(
            "{}–{} of {}",
            format_count(self.start_item()),
            format_count(self.end_item()),
            format_count(self.total_items)
        )
    }

    pub fn position_label(&self) -> String {
        format!("Page {} of {}", self.page(), self.total_pages)
    }

    pub fn window(&self, window_size: usize) -> PageWindow {
        PageWindow::new(self.page(), self.total_pages, window_size)
    }
}

/// Format a count with `,` thousands separators
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Number of pages needed to hold `total_items` at `per_page` items each
pub fn total_pages_for(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Caller-side page position of a paged list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    current_page: usize,
    total_pages: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageCursor {
    pub fn new(total_pages: usize) -> Self {
        let mut cursor = Self::default();
        cursor.set_total_pages(total_pages);
        cursor
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Jump to `page`. Out-of-range requests are ignored.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages {
            tracing::debug!(page, total_pages = self.total_pages, "ignoring out-of-range page");
            return false;
        }
        let moved = page != self.current_page;
        self.current_page = page;
        moved
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Update the page count after a fetch. An empty result still has one page.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    pub fn state(&self, total_items: usize, per_page: usize) -> PageState {
        PageState {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items,
            per_page,
        }
    }
}
