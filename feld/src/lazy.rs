//! Runtime support for lazy accessors.
//!
//! A `#[holen(lazy, init = <expr>)]` field stores its memoised value in a
//! [`Lazy`] cell. The generated accessor forces the cell through
//! [`Lazy::get_or_init`], so the initialiser runs at most once per value;
//! under concurrent first access one evaluation wins and the rest observe
//! its result.

use once_cell::sync::OnceCell;

/// Memoising cell backing a lazy accessor field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lazy<T>(OnceCell<T>);

impl<T> Lazy<T> {
    /// Creates an empty cell; the initialiser runs on first access.
    #[must_use]
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Returns the cached value, computing it with `init` when the cell is
    /// still empty. Generated accessors call this; it is public so hand
    /// written code can share a cell with a derived one.
    #[must_use]
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(init)
    }

    /// Returns the cached value without forcing evaluation.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.0.get()
    }
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Lazy<T> {
    /// Pre-seeds the cell, so the accessor's initialiser never runs.
    fn from(value: T) -> Self {
        Self(OnceCell::with_value(value))
    }
}
