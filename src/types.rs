//! Common types used throughout the paginator
//!
//! This module contains the navigation key type, the page snapshot
//! returned by queries, and the logical position of the page cursor.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Navigation Keys
// ============================================================================

/// A navigation key that can be bound to "previous page" or "next page"
///
/// Serialized as a snake_case name (`left_arrow`, `page_down`, ...) or, for
/// [`NavKey::Char`], the character itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NavKey {
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Escape,
    Tab,
    Backspace,
    /// Any printable character key
    Char(char),
}

impl NavKey {
    fn name(self) -> Option<&'static str> {
        let name = match self {
            NavKey::LeftArrow => "left_arrow",
            NavKey::RightArrow => "right_arrow",
            NavKey::UpArrow => "up_arrow",
            NavKey::DownArrow => "down_arrow",
            NavKey::PageUp => "page_up",
            NavKey::PageDown => "page_down",
            NavKey::Home => "home",
            NavKey::End => "end",
            NavKey::Enter => "enter",
            NavKey::Escape => "escape",
            NavKey::Tab => "tab",
            NavKey::Backspace => "backspace",
            NavKey::Char(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavKey::Char(c) => write!(f, "{c}"),
            key => f.write_str(key.name().unwrap_or_default()),
        }
    }
}

impl FromStr for NavKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(NavKey::Char(c));
        }

        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "left_arrow" | "left" => Ok(NavKey::LeftArrow),
            "right_arrow" | "right" => Ok(NavKey::RightArrow),
            "up_arrow" | "up" => Ok(NavKey::UpArrow),
            "down_arrow" | "down" => Ok(NavKey::DownArrow),
            "page_up" | "pgup" => Ok(NavKey::PageUp),
            "page_down" | "pgdn" => Ok(NavKey::PageDown),
            "home" => Ok(NavKey::Home),
            "end" => Ok(NavKey::End),
            "enter" | "return" => Ok(NavKey::Enter),
            "escape" | "esc" => Ok(NavKey::Escape),
            "tab" => Ok(NavKey::Tab),
            "backspace" => Ok(NavKey::Backspace),
            _ => Err(Error::config(format!("Unknown navigation key '{s}'"))),
        }
    }
}

impl TryFrom<String> for NavKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NavKey> for String {
    fn from(key: NavKey) -> Self {
        key.to_string()
    }
}

impl From<char> for NavKey {
    fn from(c: char) -> Self {
        NavKey::Char(c)
    }
}

// ============================================================================
// Page State Info
// ============================================================================

/// Snapshot of the cursor: current page and total number of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-indexed current page (may sit outside `1..=page_count` after an
    /// overshooting step)
    pub current_page: i64,
    /// Total number of pages, `ceil(item_count / page_size)`
    pub page_count: usize,
}

impl PageInfo {
    /// Create a new snapshot
    pub fn new(current_page: i64, page_count: usize) -> Self {
        Self {
            current_page,
            page_count,
        }
    }

    /// Check if the current page lies within `1..=page_count`
    pub fn is_in_range(&self) -> bool {
        self.current_page >= 1 && self.current_page <= self.page_count as i64
    }
}

impl From<PageInfo> for (i64, usize) {
    fn from(info: PageInfo) -> Self {
        (info.current_page, info.page_count)
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} of {}", self.current_page, self.page_count)
    }
}

// ============================================================================
// Page Position
// ============================================================================

/// Logical state of the page cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePosition {
    /// Source has no items, so there are no pages
    Empty,
    /// Exactly one page and the cursor is on it
    Single,
    /// On page 1 with more pages after it
    First,
    /// Strictly between the first and last page
    Middle,
    /// On the last page with pages before it
    Last,
    /// Cursor overshot below 1 or past the last page
    OutOfRange,
}

impl PagePosition {
    /// Classify a snapshot
    pub fn of(info: PageInfo) -> Self {
        let PageInfo {
            current_page,
            page_count,
        } = info;
        let last = page_count as i64;

        if page_count == 0 {
            // The cursor starts at 1 even when there is nothing to show
            return if current_page == 1 {
                Self::Empty
            } else {
                Self::OutOfRange
            };
        }

        match current_page {
            p if p < 1 || p > last => Self::OutOfRange,
            1 if last == 1 => Self::Single,
            1 => Self::First,
            p if p == last => Self::Last,
            _ => Self::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("left_arrow", NavKey::LeftArrow ; "full name")]
    #[test_case("left", NavKey::LeftArrow ; "short alias")]
    #[test_case("Page-Down", NavKey::PageDown ; "mixed case with dash")]
    #[test_case("esc", NavKey::Escape ; "escape alias")]
    #[test_case("n", NavKey::Char('n') ; "single char")]
    fn test_nav_key_parse(input: &str, expected: NavKey) {
        assert_eq!(input.parse::<NavKey>().unwrap(), expected);
    }

    #[test]
    fn test_nav_key_parse_unknown() {
        let err = "sideways".parse::<NavKey>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown navigation key 'sideways'"
        );
    }

    #[test]
    fn test_nav_key_display() {
        assert_eq!(NavKey::RightArrow.to_string(), "right_arrow");
        assert_eq!(NavKey::Char('q').to_string(), "q");
    }

    #[test]
    fn test_nav_key_serde() {
        let json = serde_json::to_string(&NavKey::PageUp).unwrap();
        assert_eq!(json, "\"page_up\"");

        let key: NavKey = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(key, NavKey::Char('x'));

        assert!(serde_json::from_str::<NavKey>("\"nowhere\"").is_err());
    }

    #[test]
    fn test_page_info_tuple_and_display() {
        let info = PageInfo::new(2, 4);
        let (current, count): (i64, usize) = info.into();
        assert_eq!((current, count), (2, 4));
        assert_eq!(info.to_string(), "page 2 of 4");
        assert!(info.is_in_range());
        assert!(!PageInfo::new(5, 4).is_in_range());
        assert!(!PageInfo::new(0, 4).is_in_range());
    }

    #[test_case(1, 0, PagePosition::Empty ; "no pages")]
    #[test_case(1, 1, PagePosition::Single ; "single page")]
    #[test_case(1, 4, PagePosition::First ; "first page")]
    #[test_case(2, 4, PagePosition::Middle ; "middle page")]
    #[test_case(4, 4, PagePosition::Last ; "last page")]
    #[test_case(5, 4, PagePosition::OutOfRange ; "past last page")]
    #[test_case(-1, 4, PagePosition::OutOfRange ; "below first page")]
    #[test_case(3, 0, PagePosition::OutOfRange ; "moved with no pages")]
    fn test_page_position(current: i64, count: usize, expected: PagePosition) {
        assert_eq!(PagePosition::of(PageInfo::new(current, count)), expected);
    }
}
