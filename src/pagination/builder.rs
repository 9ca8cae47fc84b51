//! Fluent construction of a paginator
//!
//! ```
//! use paginator_tool::pagination::Paginator;
//! use paginator_tool::types::NavKey;
//!
//! let items = vec!["a", "b", "c", "d", "e"];
//! let pages = Paginator::builder()
//!     .source(&items)
//!     .range(2)
//!     .next_key(NavKey::Char('n'))
//!     .build()?;
//! assert_eq!(pages.page_count(), 3);
//! # Ok::<(), paginator_tool::Error>(())
//! ```

use super::paginator::Paginator;
use super::source::PageSource;
use crate::config::PaginatorOptions;
use crate::error::{Error, Result};
use crate::types::NavKey;

/// Builder for [`Paginator`] with named parameters
#[derive(Debug, Clone)]
pub struct PaginatorBuilder<S> {
    source: Option<S>,
    options: PaginatorOptions,
}

impl<S> Default for PaginatorBuilder<S> {
    fn default() -> Self {
        Self {
            source: None,
            options: PaginatorOptions::default(),
        }
    }
}

impl<S> PaginatorBuilder<S> {
    /// Create a builder with default options and no source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source to paginate
    #[must_use]
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the number of items per page
    #[must_use]
    pub fn range(mut self, range: usize) -> Self {
        self.options.page_size = range;
        self
    }

    /// Set the number of pages moved per navigation call
    #[must_use]
    pub fn step_change(mut self, step_change: i64) -> Self {
        self.options.step_change = step_change;
        self
    }

    /// Set the key that moves to the previous page
    #[must_use]
    pub fn prev_key(mut self, key: NavKey) -> Self {
        self.options.keys.prev = key;
        self
    }

    /// Set the key that moves to the next page
    #[must_use]
    pub fn next_key(mut self, key: NavKey) -> Self {
        self.options.keys.next = key;
        self
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: PaginatorOptions) -> Self {
        self.options = options;
        self
    }
}

impl<S: PageSource> PaginatorBuilder<S> {
    /// Build the paginator
    ///
    /// Fails with `InvalidArgument` when no source was given or the page
    /// size is 0.
    pub fn build(self) -> Result<Paginator<S>> {
        let source = self
            .source
            .ok_or_else(|| Error::invalid_argument("source", "A source is required"))?;
        Paginator::with_options(source, &self.options)
    }
}

impl<S: PageSource> Paginator<S> {
    /// Start building a paginator
    pub fn builder() -> PaginatorBuilder<S> {
        PaginatorBuilder::new()
    }
}
