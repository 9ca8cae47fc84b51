//! Sources a paginator can read from
//!
//! A source is re-read on every count and every slice. Borrowed collections
//! cannot change while a paginator holds them; a [`FromFn`] source can, and a
//! change landing between the count and the slice of one operation is not
//! detected.

use std::collections::VecDeque;
use std::fmt;

/// An ordered, read-only sequence of items
pub trait PageSource {
    /// Item yielded by the source
    type Item;

    /// Fresh iterator over the whole source
    type Iter: Iterator<Item = Self::Item>;

    /// Start a new pass over the source from its first item
    fn items(&self) -> Self::Iter;

    /// Number of items currently in the source
    fn item_count(&self) -> usize {
        self.items().count()
    }
}

impl<'a, T> PageSource for &'a [T] {
    type Item = &'a T;
    type Iter = std::slice::Iter<'a, T>;

    fn items(&self) -> Self::Iter {
        let slice: &'a [T] = *self;
        slice.iter()
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<'a, T, const N: usize> PageSource for &'a [T; N] {
    type Item = &'a T;
    type Iter = std::slice::Iter<'a, T>;

    fn items(&self) -> Self::Iter {
        let array: &'a [T; N] = *self;
        array.iter()
    }

    fn item_count(&self) -> usize {
        N
    }
}

impl<'a, T> PageSource for &'a Vec<T> {
    type Item = &'a T;
    type Iter = std::slice::Iter<'a, T>;

    fn items(&self) -> Self::Iter {
        let vec: &'a Vec<T> = *self;
        vec.iter()
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<'a, T> PageSource for &'a VecDeque<T> {
    type Item = &'a T;
    type Iter = std::collections::vec_deque::Iter<'a, T>;

    fn items(&self) -> Self::Iter {
        let deque: &'a VecDeque<T> = *self;
        deque.iter()
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// Closure-backed Source
// ============================================================================

/// Source that calls a closure for every pass
///
/// Useful for lazy sequences and live views whose length may change between
/// calls. Counting walks the whole sequence.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Create a source from a closure returning a fresh sequence on every call
///
/// ```
/// use paginator_tool::pagination::{from_fn, PageSource};
///
/// let evens = from_fn(|| (0..10).filter(|n| n % 2 == 0));
/// assert_eq!(evens.item_count(), 5);
/// ```
pub fn from_fn<F, I>(f: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { f }
}

impl<F, I> PageSource for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Iter = I::IntoIter;

    fn items(&self) -> Self::Iter {
        (self.f)().into_iter()
    }
}
