//! Pagination traits
//!
//! Defines the capability set every paginator exposes.

use crate::error::Result;
use crate::types::PageInfo;

/// Core trait for paginators
///
/// [`Paginator`](super::Paginator) is the only implementation; the trait lets
/// callers such as UI loops stay generic over the page item type.
pub trait Paginate {
    /// Item yielded for each entry of a page
    type Item;

    /// Iterator over the items of the current page
    type Page: Iterator<Item = Self::Item>;

    /// Set a new number of items per page. Must be greater than 0.
    fn set_range(&mut self, range: usize) -> Result<()>;

    /// Move to the next page, if there is one
    fn set_next(&mut self) -> bool;

    /// Move to the previous page, if there is one
    fn set_prev(&mut self) -> bool;

    /// Items of the current page
    fn current_state(&self) -> Self::Page;

    /// Current page and total number of pages
    fn page_state_info(&self) -> PageInfo;
}
