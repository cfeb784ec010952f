//! Page-number window layout
//!
//! The control shows a contiguous run of page numbers centered on the
//! current page, with the first and last page always reachable and
//! ellipsis markers standing in for skipped ranges.

/// The contiguous range of page numbers to render directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First page number inside the window
    pub start: usize,
    /// Last page number inside the window
    pub end: usize,
    /// A gap of at least one page separates "1" from the window
    pub leading_ellipsis: bool,
    /// A gap of at least one page separates the window from the last page
    pub trailing_ellipsis: bool,
}

/// Compute the visible page window
///
/// The window is centered on `current_page` and re-anchored against the
/// trailing boundary when it would be clipped at the end, so it always
/// spans `min(max_visible, total_pages)` pages with
/// `1 <= start <= end <= total_pages`.
///
/// Page 1 and the last page are always rendered by the control; the
/// ellipsis flags only fire when an actual gap exists (`start > 2`,
/// `end < total_pages - 1`).
///
/// # Panics
///
/// Panics if `max_visible` is zero or `total_pages` is zero.
pub fn window(total_pages: usize, current_page: usize, max_visible: usize) -> PageWindow {
    assert!(max_visible > 0, "max_visible must be positive");
    assert!(total_pages > 0, "total_pages must be positive");

    let start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    // Window clipped at the end: re-anchor against the trailing boundary
    let start = if end - start + 1 < max_visible {
        end.saturating_sub(max_visible - 1).max(1)
    } else {
        start
    };

    PageWindow {
        start,
        end,
        leading_ellipsis: start > 2,
        trailing_ellipsis: end + 1 < total_pages,
    }
}

/// Full description of the pagination control for one render cycle
///
/// Built only when there is something to render; a single page (or an
/// empty view) hides the control entirely, arrows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// The active page
    pub current: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// The visible page-number window
    pub window: PageWindow,
    /// Previous arrow is actionable (still rendered when disabled)
    pub prev_enabled: bool,
    /// Next arrow is actionable (still rendered when disabled)
    pub next_enabled: bool,
}

impl PageControl {
    /// Build the control description, or `None` when it renders nothing
    pub fn build(total_pages: usize, current_page: usize, max_visible: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let current = current_page.clamp(1, total_pages);
        Some(Self {
            current,
            total_pages,
            window: window(total_pages, current, max_visible),
            prev_enabled: current > 1,
            next_enabled: current < total_pages,
        })
    }

    /// Page numbers inside the window, in order
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        self.window.start..=self.window.end
    }

    /// Whether the literal "1" shortcut precedes the window
    pub fn show_first(&self) -> bool {
        self.window.start > 1
    }

    /// Whether the literal last-page shortcut follows the window
    pub fn show_last(&self) -> bool {
        self.window.end < self.total_pages
    }
}
