//! An unbalanced Binary Search Tree of distinct values. Values are kept in the order they were
//! inserted in, so the shape of the tree depends entirely on the insertion order: inserting
//! sorted values produces a chain whose height is `len - 1`.
//!
//! Every walk over the tree (including dropping it) is done with an explicit stack or queue so
//! that degenerate chains can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use classic_collections::tree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&50));
//! assert_eq!(tree.height(), -1);
//!
//! for value in [50, 30, 70, 20, 40] {
//!     tree.insert(value);
//! }
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(30));
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.traverse(Order::In), vec![20, 30, 40, 50, 70]);
//! assert_eq!(tree.traverse(Order::Level), vec![50, 30, 70, 20, 40]);
//! assert_eq!(tree.minimum(), Some(&20));
//! assert_eq!(tree.level(&40), Some(2));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// An owning link to a subtree. `None` marks the empty spot below a leaf.
type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
}

/// The order in which [`Tree::iter`] and [`Tree::traverse`] visit values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth-first: the root, then every node one edge down (left to right), and so on.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This yields values in ascending
    /// order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// A Binary Search Tree holding distinct values. This can be used for inserting and searching
/// values and for asking questions about the shape of the tree.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the value into the tree unless an equal value is already present. Returns whether
    /// the value was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    log::trace!("ignoring duplicate value");
                    return false;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Returns whether the tree contains the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.search(&30));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find_node(value).is_some()
    }

    /// Returns an iterator over references to the values in the given [`Order`].
    pub fn iter(&self, order: Order) -> Iter<'_, T> {
        Iter {
            nodes: Nodes::new(self.root.as_deref(), order),
        }
    }

    /// Collects the values in the given [`Order`]. Every call walks the tree again, so the result
    /// always reflects the current contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::Pre), vec![50, 30, 20, 40, 70, 60, 80]);
    /// assert_eq!(tree.traverse(Order::Post), vec![20, 40, 30, 60, 80, 70, 50]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        self.iter(order).cloned().collect()
    }

    /// Gets the number of edges on the longest path from the root to a leaf. A tree with only a
    /// root has a height of `0` and an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(50);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(30);
    /// tree.insert(70);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Gets the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the smallest value in the tree, or `None` if it is empty.
    pub fn minimum(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some(&node.value)
    }

    /// Gets the largest value in the tree, or `None` if it is empty.
    pub fn maximum(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some(&node.value)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} values", self.len);
        self.release();
        self.len = 0;
    }

    /// Collects the values on the path from the root down to (but excluding) the given value.
    ///
    /// The result is empty both when the value is the root and when the value isn't in the tree
    /// at all. Use [`Tree::search`] to tell those apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20, 40, 45].into_iter().collect();
    ///
    /// assert_eq!(tree.ancestors(&45), vec![50, 30, 40]);
    /// assert_eq!(tree.ancestors(&50), Vec::<i32>::new());
    /// assert_eq!(tree.ancestors(&99), Vec::<i32>::new());
    /// ```
    pub fn ancestors(&self, value: &T) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let mut ancestors = Vec::new();
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = node.left(),
                Ordering::Equal => return ancestors,
                Ordering::Greater => link = node.right(),
            }
            ancestors.push(node.value.clone());
        }

        Vec::new()
    }

    /// Collects every value below the given value, in pre-order. The result is empty if the
    /// value is a leaf or isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20, 40, 25].into_iter().collect();
    ///
    /// assert_eq!(tree.descendants(&30), vec![20, 25, 40]);
    /// assert!(tree.descendants(&70).is_empty());
    /// ```
    pub fn descendants(&self, value: &T) -> Vec<T>
    where
        T: Ord + Clone,
    {
        match self.find_node(value) {
            // The subtree's root comes first in pre-order.
            Some(node) => Nodes::new(Some(node), Order::Pre)
                .skip(1)
                .map(|n| n.value.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Gets the depth of the value, counting the root as level `0`, or `None` if the value isn't
    /// in the tree.
    pub fn level(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut level = 0;
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = node.left(),
                Ordering::Equal => return Some(level),
                Ordering::Greater => link = node.right(),
            }
            level += 1;
        }

        None
    }

    /// Returns `true` if no node has exactly one child. An empty tree is strictly binary.
    pub fn is_strict_binary(&self) -> bool {
        Nodes::new(self.root.as_deref(), Order::Pre)
            .all(|node| node.left.is_some() == node.right.is_some())
    }

    /// Returns `true` if the tree holds exactly `2^(height + 1) - 1` values, i.e. every level is
    /// completely filled. An empty tree is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70].into_iter().collect();
    /// assert!(tree.is_full());
    ///
    /// tree.insert(20);
    /// assert!(!tree.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        u32::try_from(self.height() + 1)
            .ok()
            .and_then(|levels| 1usize.checked_shl(levels))
            .is_some_and(|capacity| self.len == capacity - 1)
    }

    /// Returns a [`Display`][fmt::Display]able drawing of the tree's structure, one value per
    /// line with right children listed above left children.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    /// let drawing = tree.pretty().to_string();
    ///
    /// assert!(drawing.starts_with("Tree structure:"));
    /// assert!(drawing.contains("└── 50"));
    /// assert!(drawing.contains("├── 70"));
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { tree: self }
    }

    fn find_node(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => link = node.right(),
            }
        }

        None
    }

    /// Drops every node without recursing, so long chains don't overflow the stack.
    fn release(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        // Re-inserting in pre-order reproduces the same shape.
        self.iter(Order::Pre).cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter(Order::In)).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    /// Iterates in ascending ([`Order::In`]) order.
    fn into_iter(self) -> Self::IntoIter {
        self.iter(Order::In)
    }
}

/// An iterator over the values of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.value)
    }
}

/// A step of a walk: either a subtree still to be split up or a node ready to be yielded.
enum Visit<'a, T> {
    Expand(&'a Node<T>),
    Yield(&'a Node<T>),
}

/// Walks the nodes of a subtree in some [`Order`]. Level order consumes `pending` as a queue,
/// the depth-first orders consume it as a stack.
struct Nodes<'a, T> {
    order: Order,
    pending: VecDeque<Visit<'a, T>>,
}

impl<'a, T> Nodes<'a, T> {
    fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            order,
            pending: root.map(Visit::Expand).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let visit = match self.order {
                Order::Level => self.pending.pop_front()?,
                Order::Pre | Order::In | Order::Post => self.pending.pop_back()?,
            };
            let node = match visit {
                Visit::Yield(node) => return Some(node),
                Visit::Expand(node) => node,
            };

            let left = node.left().map(Visit::Expand);
            let right = node.right().map(Visit::Expand);
            // Depth-first orders push in reverse since the last push is popped first.
            match self.order {
                Order::Level => {
                    self.pending.extend(left);
                    self.pending.extend(right);
                    return Some(node);
                }
                Order::Pre => {
                    self.pending.extend(right);
                    self.pending.extend(left);
                    return Some(node);
                }
                Order::In => {
                    self.pending.extend(right);
                    self.pending.push_back(Visit::Yield(node));
                    self.pending.extend(left);
                }
                Order::Post => {
                    self.pending.push_back(Visit::Yield(node));
                    self.pending.extend(right);
                    self.pending.extend(left);
                }
            }
        }
    }
}

/// A drawing of a [`Tree`], created by [`Tree::pretty`].
pub struct Pretty<'a, T> {
    tree: &'a Tree<T>,
}

impl<T> fmt::Display for Pretty<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root.as_deref() else {
            return f.write_str("Empty tree");
        };

        writeln!(f, "Tree structure:")?;
        let mut stack = vec![(root, String::new(), true)];
        while let Some((node, prefix, is_last)) = stack.pop() {
            let (branch, indent) = if is_last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            writeln!(f, "{}{}{}", prefix, branch, node.value)?;

            let child_prefix = format!("{}{}", prefix, indent);
            // The right child is drawn first so it's pushed last.
            if let Some(left) = node.left() {
                stack.push((left, child_prefix.clone(), true));
            }
            if let Some(right) = node.right() {
                stack.push((right, child_prefix, node.left.is_none()));
            }
        }

        Ok(())
    }
}
