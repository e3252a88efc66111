//! This crate exposes three classic collections, mostly for educational purposes: a Binary Search
//! Tree ([`tree::Tree`]), a doubly linked list ([`list::List`]) and a double-ended queue
//! ([`deque::Deque`]).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! a value and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for values in the tree
//! takes `O(height)` (where `height` is defined as the longest path from the root `Node` to a
//! leaf `Node`). The tree in this crate doesn't balance itself, so its height depends on the
//! order values are inserted in. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Doubly Linked List and Deque
//!
//! The list keeps a link to both its neighbours in every node, so it can be pushed to, popped
//! from and walked from either end. Positional operations that go out of range return an
//! [`error::Error`] instead of silently doing nothing. The deque offers the same two ends with
//! amortized constant time operations on top of a ring buffer.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod deque;
pub mod error;
pub mod list;
pub mod tree;

pub use error::{Error, Result};
