//! A mutable, unbalanced BST. Nodes own their children outright, so every
//! operation is plain safe Rust: insertion walks a `&mut` cursor down to an
//! empty link and removal hands each subtree back to its parent.
//!
//! The tree never rebalances. Its shape is decided entirely by the order keys
//! are inserted and removed in, so inserting already sorted keys gives a
//! tree as tall as it is long.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&10));
//! assert_eq!(tree.min(), None);
//!
//! for key in [10, 12, 6, 3, 9, 14] {
//!     tree.insert(key);
//! }
//! assert!(tree.search(&9));
//! assert_eq!(tree.min(), Some(&3));
//! assert_eq!(tree.max(), Some(&14));
//!
//! // Keys are only ever stored once.
//! assert!(!tree.insert(9));
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&9), Some(9));
//! assert!(!tree.search(&9));
//!
//! let mut keys = Vec::new();
//! tree.in_order(|key| keys.push(*key));
//! assert_eq!(keys, vec![3, 6, 10, 12, 14]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::{trace, warn};

use crate::compare::{Comparator, Natural};
use crate::error::InvariantError;

type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree over keys of type `K`, ordered by the
/// comparator `C`.
///
/// A key comparing equal to one already in the tree is never stored twice.
#[derive(Clone)]
pub struct OrderedTree<K, C = Natural> {
    root: Link<K>,
    compare: C,
    len: usize,
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// Removes the node comparing equal to `key` from the subtree at `link`.
    /// Returns the subtree's new root (which the caller relinks in place of
    /// `link`) and the removed key.
    fn remove<C>(link: Link<K>, key: &K, compare: &C) -> (Link<K>, Option<K>)
    where
        C: Comparator<K>,
    {
        let mut node = match link {
            Some(node) => node,
            None => return (None, None),
        };

        match compare.compare(key, &node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), key, compare);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), key, compare);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    trace!("removing leaf node");
                    (None, Some(node.key))
                }
                (Some(child), None) | (None, Some(child)) => {
                    trace!("removing node with one child");
                    (Some(child), Some(node.key))
                }

                // With two children the in-order successor (the smallest key
                // on the right) takes this node's place. Its old node has no
                // left child so detaching it is one of the cases above.
                (Some(left), Some(right)) => {
                    trace!("removing node with two children");
                    let (right, successor) = Self::take_min(right);
                    let removed = mem::replace(&mut node.key, successor);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), Some(removed))
                }
            },
        }
    }

    /// Detaches the smallest node of this subtree. Returns the remaining
    /// subtree and the detached key.
    fn take_min(mut node: Box<Self>) -> (Link<K>, K) {
        match node.left.take() {
            None => (node.right.take(), node.key),
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
        }
    }
}

/// Depth-first walks over a subtree, one per classical order.
fn walk_in_order<'a, K, F>(link: &'a Link<K>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(node) = link {
        walk_in_order(&node.left, visit);
        visit(&node.key);
        walk_in_order(&node.right, visit);
    }
}

fn walk_pre_order<'a, K, F>(link: &'a Link<K>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(node) = link {
        visit(&node.key);
        walk_pre_order(&node.left, visit);
        walk_pre_order(&node.right, visit);
    }
}

fn walk_post_order<'a, K, F>(link: &'a Link<K>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(node) = link {
        walk_post_order(&node.left, visit);
        walk_post_order(&node.right, visit);
        visit(&node.key);
    }
}

fn height<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => height(&node.left).max(height(&node.right)) + 1,
    }
}

/// Checks that every key in the subtree lies strictly between the bounds
/// inherited from its ancestors. Returns how many nodes the subtree holds.
fn verify_subtree<K, C>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
    depth: usize,
    compare: &C,
) -> Result<usize, InvariantError>
where
    C: Comparator<K>,
{
    let node = match link {
        Some(node) => node,
        None => return Ok(0),
    };

    let above_lower = lower.map_or(true, |lower| {
        compare.compare(&node.key, lower) == Ordering::Greater
    });
    let below_upper = upper.map_or(true, |upper| {
        compare.compare(&node.key, upper) == Ordering::Less
    });
    if !(above_lower && below_upper) {
        return Err(InvariantError::OutOfOrder { depth });
    }

    let left = verify_subtree(&node.left, lower, Some(&node.key), depth + 1, compare)?;
    let right = verify_subtree(&node.right, Some(&node.key), upper, depth + 1, compare)?;
    Ok(left + right + 1)
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Drop for OrderedTree<K, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, C> fmt::Debug for OrderedTree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> OrderedTree<K> {
    /// Generates a new, empty `OrderedTree` ordered by `K`'s [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C> OrderedTree<K, C> {
    /// Generates a new, empty `OrderedTree` that orders its keys with
    /// `compare` instead of `K`'s natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// // Order plates case-insensitively.
    /// let mut tree = OrderedTree::with_comparator(|a: &&str, b: &&str| {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// });
    /// tree.insert("BUS-12");
    ///
    /// assert!(tree.search(&"bus-12"));
    /// assert!(!tree.insert("Bus-12"));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            compare,
            len: 0,
        }
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    ///
    /// Nodes are torn down with an explicit stack so a degenerate tree
    /// doesn't recurse once per level.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Gets the height of this tree: the number of nodes on the longest path
    /// from the root down to a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Calls `visit` on every key in ascending order: left subtree, then the
    /// node, then the right subtree.
    pub fn in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a K),
    {
        walk_in_order(&self.root, &mut visit);
    }

    /// Calls `visit` on every key, each node before its left and then its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![23, 15, 29, 31, 12, 3].into_iter().collect();
    ///
    /// let mut keys = Vec::new();
    /// tree.pre_order(|key| keys.push(*key));
    /// assert_eq!(keys, vec![23, 15, 12, 3, 29, 31]);
    /// ```
    pub fn pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a K),
    {
        walk_pre_order(&self.root, &mut visit);
    }

    /// Calls `visit` on every key, each node after both of its subtrees.
    pub fn post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a K),
    {
        walk_post_order(&self.root, &mut visit);
    }

    /// A lazy, in-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// A read-only handle on the root node, for callers that want to walk or
    /// print the tree's actual shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![10, 6, 12].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.key(), &10);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(6));
    /// assert!(root.right().unwrap().is_leaf());
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.as_deref().map(|node| NodeRef { node })
    }
}

impl<K, C> OrderedTree<K, C>
where
    C: Comparator<K>,
{
    /// Stores `key`. Returns `false`, leaving the tree untouched, if a key
    /// comparing equal is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(20));
    /// assert!(!tree.insert(20));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = match self.compare.compare(&key, &node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
            depth += 1;
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        trace!("inserted key at depth {}, {} keys stored", depth, self.len);
        true
    }

    /// Whether a key comparing equal to `key` is stored.
    pub fn search(&self, key: &K) -> bool {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match self.compare.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes the key comparing equal to `key` and returns the stored key.
    /// Returns `None` and leaves the tree untouched if there is no such key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = vec![20, 11, 21, 27, 55, 6, 2].into_iter().collect();
    ///
    /// // The root has two children so its successor, 21, moves up.
    /// assert_eq!(tree.remove(&20), Some(20));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(21));
    ///
    /// assert_eq!(tree.remove(&20), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let (root, removed) = Node::remove(self.root.take(), key, &self.compare);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Walks the whole tree checking that every key is ordered against all
    /// of its ancestors and that [`len`][Self::len] matches the node count.
    ///
    /// This only fails if the comparator isn't a consistent total order (or
    /// changed its mind after keys were inserted).
    pub fn verify(&self) -> Result<(), InvariantError> {
        let counted = verify_subtree(&self.root, None, None, 0, &self.compare).map_err(|err| {
            warn!("ordered tree failed verification: {}", err);
            err
        })?;

        if counted != self.len {
            let err = InvariantError::LengthMismatch {
                cached: self.len,
                counted,
            };
            warn!("ordered tree failed verification: {}", err);
            return Err(err);
        }
        Ok(())
    }
}

impl<K: Ord> std::iter::FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for OrderedTree<K, C>
where
    C: Comparator<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C> IntoIterator for &'a OrderedTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the keys of an [`OrderedTree`]. Created by
/// [`OrderedTree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose left subtree has been (or is being) yielded but which
    /// haven't been yielded themselves. The top is the next key.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

/// Manual implementation of `Clone` so we don't require `K: Clone` just to
/// copy references.
impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K> FusedIterator for Iter<'a, K> {}

/// A read-only reference to a node in an [`OrderedTree`], exposing its key
/// and its children. Obtained from [`OrderedTree::root`].
pub struct NodeRef<'a, K> {
    node: &'a Node<K>,
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K> fmt::Debug for NodeRef<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("left", &self.left().map(|n| n.key()))
            .field("right", &self.right().map(|n| n.key()))
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K> {
    /// The key stored in this node.
    pub fn key(&self) -> &'a K {
        &self.node.key
    }

    /// The left child, holding the next smaller keys.
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.node.left.as_deref().map(|node| NodeRef { node })
    }

    /// The right child, holding the next larger keys.
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.node.right.as_deref().map(|node| NodeRef { node })
    }

    /// Returns `true` if there is a left child.
    pub fn has_left(&self) -> bool {
        self.node.left.is_some()
    }

    /// Returns `true` if there is a right child.
    pub fn has_right(&self) -> bool {
        self.node.right.is_some()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }
}
