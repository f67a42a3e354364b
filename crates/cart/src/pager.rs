//! Page-at-a-time reveal of a menu category.
//!
//! Long categories are not rendered in one go. The first page is shown
//! immediately; when the last visible item (the sentinel) scrolls into view,
//! the next page is revealed, until the whole category is visible.

use std::ops::Range;

/// Items revealed per page when no size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Visibility-driven page counter for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPager {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Default for MenuPager {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl MenuPager {
    /// Start on page 1 of a category with `total` items.
    ///
    /// A `page_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// Current page number, starting at 1.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items currently revealed.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.page.saturating_mul(self.page_size).min(self.total)
    }

    /// Whether items remain hidden.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible_count() < self.total
    }

    /// Whether the item at `index` is the sentinel that triggers the next page.
    #[must_use]
    pub fn is_sentinel(&self, index: usize) -> bool {
        index + 1 == self.visible_count()
    }

    /// Reveal the next page because the sentinel became visible.
    ///
    /// Returns `true` if more items were revealed.
    pub fn on_sentinel_visible(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        tracing::trace!(page = self.page, visible = self.visible_count(), "Revealed menu page");
        true
    }

    /// Go back to page 1 for a category that now has `total` items.
    pub const fn reset(&mut self, total: usize) {
        self.total = total;
        self.page = 1;
    }

    /// Index range of the revealed items.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        0..self.visible_count()
    }

    /// The revealed prefix of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.visible_count().min(items.len());
        items.get(..end).unwrap_or_default()
    }
}
