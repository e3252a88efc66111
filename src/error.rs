//! Errors returned by the positional operations of [`List`][crate::list::List].
//!
//! Lookups that can simply miss (searching a tree, finding the position of a value, peeking an
//! empty deque) never produce an [`Error`]: they return `bool`, [`Option`] or an empty `Vec`.

/// Errors produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A position was outside the range accepted by the operation. Inserting accepts `0..=len`,
    /// removing accepts `0..len`.
    #[error("invalid position {position} for a list of length {len}")]
    InvalidPosition {
        /// The rejected position.
        position: usize,
        /// The length of the list when the position was rejected.
        len: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
