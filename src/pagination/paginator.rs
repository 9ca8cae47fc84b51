//! The paginator state machine
//!
//! Holds the page size, step change, and 1-indexed page cursor over a
//! [`PageSource`], and slices the source for the current page.

use super::source::PageSource;
use super::types::Paginate;
use crate::config::{validate_page_size, KeyBindings, PaginatorOptions, DEFAULT_STEP_CHANGE};
use crate::error::Result;
use crate::types::{NavKey, PageInfo, PagePosition};
use std::iter::{Skip, Take};
use tracing::{debug, trace, warn};

/// Iterator over the items of one page
pub type PageIter<S> = Take<Skip<<S as PageSource>::Iter>>;

/// Stateful paginator over an ordered source
///
/// The cursor starts on page 1. `set_next` and `set_prev` only step when the
/// cursor is before the last page or after the first page, and they step by
/// the full `step_change` without clamping, so a step larger than the
/// remaining distance leaves the cursor outside `1..=page_count` until the
/// next navigation brings it back. [`Paginator::set_range`] does not reclamp
/// the cursor either.
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    source: S,
    range: usize,
    step_change: i64,
    current_page: i64,
    keys: KeyBindings,
}

impl<S: PageSource> Paginator<S> {
    /// Create a paginator showing `range` items per page
    ///
    /// Fails with `InvalidArgument` when `range` is 0.
    pub fn new(source: S, range: usize) -> Result<Self> {
        Self::from_parts(source, range, DEFAULT_STEP_CHANGE, KeyBindings::default())
    }

    /// Create a paginator from construction options
    pub fn with_options(source: S, options: &PaginatorOptions) -> Result<Self> {
        Self::from_parts(source, options.page_size, options.step_change, options.keys)
    }

    pub(crate) fn from_parts(
        source: S,
        range: usize,
        step_change: i64,
        keys: KeyBindings,
    ) -> Result<Self> {
        validate_page_size(range)?;

        let paginator = Self {
            source,
            range,
            step_change,
            current_page: 1,
            keys,
        };
        debug!(
            range,
            step_change,
            page_count = paginator.page_count(),
            "Created paginator"
        );
        Ok(paginator)
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set a new number of items per page
    ///
    /// Fails with `InvalidArgument` when `range` is 0, leaving the paginator
    /// unchanged. The current page is kept even if it now lies past the
    /// last page.
    pub fn set_range(&mut self, range: usize) -> Result<()> {
        validate_page_size(range)?;

        self.range = range;
        debug!(
            range,
            current_page = self.current_page,
            page_count = self.page_count(),
            "Changed page size"
        );
        Ok(())
    }

    /// Set how many pages one navigation call moves
    ///
    /// Any value is accepted. Zero freezes navigation and a negative value
    /// reverses it.
    pub fn set_step_change(&mut self, step_change: i64) {
        if step_change <= 0 {
            warn!(step_change, "Step change is not positive, navigation will stall or reverse");
        } else {
            debug!(step_change, "Changed step change");
        }
        self.step_change = step_change;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Step forward by `step_change` pages if the cursor is before the last page
    ///
    /// Returns `true` when a step was applied.
    pub fn set_next(&mut self) -> bool {
        let page_count = self.page_count();
        if self.current_page < page_count as i64 {
            self.current_page = self.current_page.saturating_add(self.step_change);
            debug!(current_page = self.current_page, page_count, "Moved to next page");
            true
        } else {
            trace!(current_page = self.current_page, page_count, "Already at last page");
            false
        }
    }

    /// Step back by `step_change` pages if the cursor is after the first page
    ///
    /// Returns `true` when a step was applied.
    pub fn set_prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page = self.current_page.saturating_sub(self.step_change);
            debug!(current_page = self.current_page, "Moved to previous page");
            true
        } else {
            trace!(current_page = self.current_page, "Already at first page");
            false
        }
    }

    /// Jump to `page` if it lies within `1..=page_count`
    ///
    /// Out-of-range pages are ignored. Returns `true` when the cursor was set.
    pub fn set_page(&mut self, page: i64) -> bool {
        let page_count = self.page_count();
        if (1..=page_count as i64).contains(&page) {
            self.current_page = page;
            debug!(current_page = page, page_count, "Jumped to page");
            true
        } else {
            trace!(page, page_count, "Ignored jump to page out of range");
            false
        }
    }

    /// Navigate according to a key press
    ///
    /// The previous-page key steps back when not on the first page, the
    /// next-page key steps forward when not on the last page. Any other key
    /// is ignored. Returns `true` when a step was applied.
    pub fn change_page_by_key(&mut self, key: NavKey) -> bool {
        if key == self.keys.prev && self.has_prev() {
            self.set_prev()
        } else if key == self.keys.next && self.has_next() {
            self.set_next()
        } else {
            trace!(%key, current_page = self.current_page, "Key did not change page");
            false
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Items of the current page
    ///
    /// Skips `(current_page - 1) * range` items of a fresh pass over the
    /// source and takes the next `range`. A cursor past the last page yields
    /// nothing; a cursor below 1 skips nothing.
    pub fn current_state(&self) -> PageIter<S> {
        let preceding_pages = usize::try_from(self.current_page.saturating_sub(1)).unwrap_or(0);
        self.source
            .items()
            .skip(preceding_pages.saturating_mul(self.range))
            .take(self.range)
    }

    /// Current page and total number of pages
    pub fn page_state_info(&self) -> PageInfo {
        PageInfo::new(self.current_page, self.page_count())
    }

    /// Where the cursor sits relative to the first and last page
    pub fn position(&self) -> PagePosition {
        PagePosition::of(self.page_state_info())
    }

    /// Total number of pages, `ceil(item_count / range)`
    pub fn page_count(&self) -> usize {
        self.source.item_count().div_ceil(self.range)
    }

    /// Number of items currently in the source
    pub fn item_count(&self) -> usize {
        self.source.item_count()
    }

    /// Check if `set_next` would step
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count() as i64
    }

    /// Check if `set_prev` would step
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

impl<S> Paginator<S> {
    /// Items per page
    pub fn range(&self) -> usize {
        self.range
    }

    /// Pages moved per navigation call
    pub fn step_change(&self) -> i64 {
        self.step_change
    }

    /// 1-indexed current page
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Keys bound to previous and next page
    pub fn key_bindings(&self) -> KeyBindings {
        self.keys
    }

    /// The paginated source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the paginator and return its source
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: PageSource> Paginate for Paginator<S> {
    type Item = S::Item;
    type Page = PageIter<S>;

    fn set_range(&mut self, range: usize) -> Result<()> {
        Paginator::set_range(self, range)
    }

    fn set_next(&mut self) -> bool {
        Paginator::set_next(self)
    }

    fn set_prev(&mut self) -> bool {
        Paginator::set_prev(self)
    }

    fn current_state(&self) -> Self::Page {
        Paginator::current_state(self)
    }

    fn page_state_info(&self) -> PageInfo {
        Paginator::page_state_info(self)
    }
}
