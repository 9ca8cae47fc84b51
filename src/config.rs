//! Construction options for a paginator
//!
//! Options can be built in code or loaded from YAML/JSON. Every field has a
//! default, so an empty document yields the default options.
//!
//! ```yaml
//! page_size: 5
//! step_change: 2
//! keys:
//!   prev: page_up
//!   next: page_down
//! ```

use crate::error::{Error, Result};
use crate::types::NavKey;
use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of pages moved per navigation call
pub const DEFAULT_STEP_CHANGE: i64 = 1;

// ============================================================================
// Key Bindings
// ============================================================================

/// Keys bound to the previous-page and next-page actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    /// Key that moves to the previous page
    pub prev: NavKey,
    /// Key that moves to the next page
    pub next: NavKey,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            prev: NavKey::LeftArrow,
            next: NavKey::RightArrow,
        }
    }
}

impl KeyBindings {
    /// Create a new set of key bindings
    pub fn new(prev: NavKey, next: NavKey) -> Self {
        Self { prev, next }
    }
}

// ============================================================================
// Paginator Options
// ============================================================================

/// Options recognized when constructing a paginator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginatorOptions {
    /// Items per page (also accepted as `range`)
    #[serde(alias = "range")]
    pub page_size: usize,

    /// Pages moved per navigation call. Zero or negative values are accepted.
    pub step_change: i64,

    /// Navigation key bindings
    pub keys: KeyBindings,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            step_change: DEFAULT_STEP_CHANGE,
            keys: KeyBindings::default(),
        }
    }
}

impl PaginatorOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the step change
    #[must_use]
    pub fn with_step_change(mut self, step_change: i64) -> Self {
        self.step_change = step_change;
        self
    }

    /// Set the navigation key bindings
    #[must_use]
    pub fn with_keys(mut self, prev: NavKey, next: NavKey) -> Self {
        self.keys = KeyBindings::new(prev, next);
        self
    }

    /// Check the options a paginator cannot be built from
    pub fn validate(&self) -> Result<()> {
        validate_page_size(self.page_size)
    }

    /// Parse and validate options from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}

/// Reject a page size of zero
pub(crate) fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::invalid_argument("range", "Cannot be less than or equal to 0"));
    }
    Ok(())
}
