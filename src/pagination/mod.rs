//! Pagination module
//!
//! Supports: slices, vectors, arrays, deques, and closure-backed live views
//!
//! # Overview
//!
//! A [`Paginator`] wraps an ordered, read-only [`PageSource`] and tracks a
//! 1-indexed page cursor over it. The page count is recomputed from the
//! source on every bounds check, and [`Paginator::current_state`] re-reads the
//! source each call, so a live source that grows or shrinks is reflected on
//! the next operation.
//!
//! Navigation never fails: moving past either boundary, jumping to a page
//! outside `1..=page_count`, or pressing an unbound key leaves the cursor
//! where it was. Only a page size of zero or a missing source is an error.
//!
//! ```
//! use paginator_tool::pagination::Paginator;
//!
//! let items: Vec<u32> = (1..=20).collect();
//! let mut pages = Paginator::new(items.as_slice(), 5)?;
//!
//! pages.set_next();
//! let page: Vec<u32> = pages.current_state().copied().collect();
//! assert_eq!(page, vec![6, 7, 8, 9, 10]);
//! # Ok::<(), paginator_tool::Error>(())
//! ```

mod builder;
mod paginator;
mod source;
mod types;

pub use builder::PaginatorBuilder;
pub use paginator::{PageIter, Paginator};
pub use source::{from_fn, FromFn, PageSource};
pub use types::Paginate;
