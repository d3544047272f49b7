//! Pagination state for GitHub issue listings.
//!
//! GitHub advertises further pages through the `Link` response header. The
//! gateway records what it saw in a [`PageInfo`], and the export driver uses
//! [`PageInfo::next_page`] to decide whether to keep going.

/// Position of one fetched page within a paginated listing.
///
/// # Example
///
/// ```
/// use ferry::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2).with_has_next(true);
/// assert_eq!(info.next_page(), Some(3));
/// assert_eq!(PageInfo::new(2).next_page(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    current_page: u32,
    has_next: bool,
}

impl PageInfo {
    /// Creates page info for `current_page` (1-based) with no known
    /// successor.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page,
            has_next: false,
        }
    }

    /// Sets whether GitHub advertised a `next` page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Returns the number of the following page, or `None` on the last page.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
