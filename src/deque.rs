//! A double-ended queue backed by a growable ring buffer.
//!
//! # Examples
//!
//! ```
//! use classic_collections::deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_back(10);
//! deque.push_front(5);
//! deque.push_back(20);
//!
//! assert_eq!(deque.to_vec(), vec![5, 10, 20]);
//! assert_eq!(deque.pop_front(), Some(5));
//! assert_eq!(deque.pop_back(), Some(20));
//! assert_eq!(deque.front(), Some(&10));
//! ```

use std::collections::vec_deque::{self, VecDeque};

/// A double-ended queue. Pushing and popping at either end takes amortized constant time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    /// Generates a new, empty `Deque`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds a value to the front.
    pub fn push_front(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Adds a value to the back.
    pub fn push_back(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the front value, or returns `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes the back value, or returns `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Peeks at the front value.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Peeks at the back value.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Gets the number of values in the deque.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        log::debug!("clearing deque of {} values", self.items.len());
        self.items.clear();
    }

    /// Returns an iterator over references to the values, front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Collects the values from front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
