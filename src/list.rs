//! A doubly linked list with owned nodes. Pushing and popping at either end takes constant time
//! while positional operations walk from whichever end is closer.
//!
//! # Examples
//!
//! ```
//! use classic_collections::list::List;
//!
//! let mut list = List::new();
//! list.push_back(10);
//! list.push_front(5);
//! list.insert_at(1, 7).unwrap();
//!
//! assert_eq!(list.forward(), vec![5, 7, 10]);
//! assert_eq!(list.backward(), vec![10, 7, 5]);
//!
//! // Positions past the end are rejected without touching the list.
//! assert!(list.insert_at(9, 1).is_err());
//! assert_eq!(list.len(), 3);
//!
//! assert_eq!(list.remove_at(1), Ok(7));
//! assert_eq!(list.to_string(), "List: 5 <-> 10");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and hands ownership of it to the caller as a raw pointer. It must later be
    /// reclaimed with `Box::from_raw`.
    fn new_leaked(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }
}

/// A doubly linked list. Every node is owned by the list and reachable both from `head` (through
/// `next` links) and from `tail` (through `prev` links).
pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    /// Tells the drop checker that we own `T`s.
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: The list owns its nodes exclusively, the same as `std::collections::LinkedList`, so it
// is as thread safe as the values it holds.
unsafe impl<T: Send> Send for List<T> {}
// SAFETY: Shared access to the list only hands out shared references to values.
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Adds a value to the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(10);
    /// list.push_front(5);
    ///
    /// assert_eq!(list.forward(), vec![5, 10]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_leaked(value, None, self.head);
        match self.head {
            // SAFETY: `head` points at a live node owned by this list and we hold `&mut self` so
            // nothing else is referencing it.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds a value to the back of the list.
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_leaked(value, self.tail, None);
        match self.tail {
            // SAFETY: Same as in `push_front`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first value, or returns `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is linked into this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last value, or returns `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` is linked into this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// Inserts a value so that it ends up at `position`. Positions `0..=len` are accepted; `0`
    /// pushes to the front and `len` pushes to the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position > len`. The list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::error::Error;
    /// use classic_collections::list::List;
    ///
    /// let mut list: List<_> = [10, 30].into_iter().collect();
    ///
    /// list.insert_at(1, 20).unwrap();
    /// assert_eq!(list.forward(), vec![10, 20, 30]);
    ///
    /// assert_eq!(
    ///     list.insert_at(4, 40),
    ///     Err(Error::InvalidPosition { position: 4, len: 3 })
    /// );
    /// ```
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<()> {
        if position > self.len {
            return Err(self.invalid_position(position));
        }

        match self.node_at(position) {
            // SAFETY: `node_at` only returns nodes linked into this list.
            Some(next) => unsafe { self.link_before(next, value) },
            // `node_at` misses only when `position == len`.
            None => self.push_back(value),
        }
        Ok(())
    }

    /// Removes and returns the value at `position`. Positions `0..len` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position >= len`. The list is left untouched.
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        match self.node_at(position) {
            // SAFETY: `node_at` only returns nodes linked into this list.
            Some(node) => Ok(unsafe { self.unlink(node) }),
            None => Err(self.invalid_position(position)),
        }
    }

    /// Gets the value at `position`, or `None` if the position is out of range.
    pub fn get(&self, position: usize) -> Option<&T> {
        // SAFETY: `node_at` only returns live nodes, and they live as long as `&self` since
        // removing them requires `&mut self`.
        self.node_at(position).map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Gets the position of the first value equal to `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::list::List;
    ///
    /// let list: List<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(list.position(&20), Some(1));
    /// assert_eq!(list.position(&100), None);
    /// ```
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Collects the values from front to back.
    pub fn forward(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Collects the values from back to front. This is always the reverse of [`List::forward`].
    pub fn backward(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    /// Returns a double ended iterator over references to the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Gets the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        log::debug!("clearing list of {} values", self.len);
        while self.pop_front().is_some() {}
    }

    fn invalid_position(&self, position: usize) -> Error {
        log::debug!("rejecting position {} for list of length {}", position, self.len);
        Error::InvalidPosition {
            position,
            len: self.len,
        }
    }

    /// Finds the node at `position`, walking from the closer end. Returns `None` iff
    /// `position >= len`.
    fn node_at(&self, position: usize) -> Link<T> {
        if position >= self.len {
            return None;
        }

        // SAFETY: Every link reachable from `head` or `tail` points at a live node owned by this
        // list, and `&self` prevents them from being freed while we walk.
        unsafe {
            if position < self.len / 2 {
                let mut node = self.head?;
                for _ in 0..position {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                let mut node = self.tail?;
                for _ in position + 1..self.len {
                    node = node.as_ref().prev?;
                }
                Some(node)
            }
        }
    }

    /// Links a new node holding `value` directly in front of `next`.
    ///
    /// # Safety
    ///
    /// `next` must be a node linked into this list.
    unsafe fn link_before(&mut self, mut next: NonNull<Node<T>>, value: T) {
        let prev = next.as_ref().prev;
        let node = Node::new_leaked(value, prev, Some(next));
        next.as_mut().prev = Some(node);
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        self.len += 1;
    }

    /// Unlinks `node` from its neighbours, frees it, and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must be a node linked into this list. It is dangling once this returns.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let Node { value, prev, next } = *Box::from_raw(node.as_ptr());
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        value
    }
}

impl<T> Clone for List<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> PartialEq for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for List<T> where T: Eq {}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes `Empty list` or the values joined by `<->`, e.g. `List: 10 <-> 20`.
impl<T> fmt::Display for List<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        let Some(first) = values.next() else {
            return f.write_str("Empty list");
        };

        write!(f, "List: {}", first)?;
        for value in values {
            write!(f, " <-> {}", value)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a [`List`], created by [`List::iter`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    /// Values left to yield. The two ends meet when this hits zero.
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|node| {
            // SAFETY: The list is borrowed for `'a` so its nodes stay alive and unmodified.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|node| {
            // SAFETY: Same as in `next`.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
