//! # Paginator Tool
//!
//! Stateful in-memory pagination over ordered collections.
//!
//! ## Features
//!
//! - **Page Math**: `page_count = ceil(item_count / page_size)`, recomputed from the source
//!   on demand
//! - **Cursor Navigation**: next/previous by a configurable step, explicit jumps, key bindings
//! - **Lazy Slicing**: the current page is a fresh skip/take iterator over the source
//! - **Live Sources**: closure-backed sources are re-read on every operation
//! - **Config Loading**: construction options from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use paginator_tool::{NavKey, Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let products: Vec<u32> = (1..=20).collect();
//!     let mut pages = Paginator::new(products.as_slice(), 5)?;
//!
//!     pages.change_page_by_key(NavKey::RightArrow);
//!     let info = pages.page_state_info();
//!     assert_eq!((info.current_page, info.page_count), (2, 4));
//!     assert_eq!(pages.current_state().next(), Some(&6));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Paginate (trait)                       │
//! │   set_range set_next set_prev current_state page_state_info  │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬────────────────────┐
//! │   Builder    │        Paginator         │    PageSource      │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ Options      │ Cursor + step            │ &[T], &Vec<T>      │
//! │ Key bindings │ set_page / by key        │ &[T; N]            │
//! │ YAML / JSON  │ Position queries         │ &VecDeque<T>       │
//! │              │                          │ from_fn(..)        │
//! └──────────────┴──────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the paginator
pub mod error;

/// Common types: navigation keys, page snapshots, cursor position
pub mod types;

/// Construction options and their YAML/JSON loading
pub mod config;

/// The paginator, its sources, and its builder
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{KeyBindings, PaginatorOptions};
pub use pagination::{from_fn, PageSource, Paginate, Paginator, PaginatorBuilder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
