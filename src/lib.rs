//! This crate exposes an unbalanced Binary Search Tree (BST) for keeping
//! ordered keys, such as vehicle identifiers, in independent sorted sets.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one key and
//! will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate does nothing to keep that height down: inserting keys in sorted
//! order produces a tree as tall as it is long. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! "Less" and "greater" are decided by a [`Comparator`][compare::Comparator],
//! which defaults to the key's own [`Ord`] implementation.
//!
//! The tree logs structural changes at `trace` level through the [`log`]
//! facade. Nothing is printed unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod tree;


pub use compare::{Comparator, Natural};
pub use error::InvariantError;
pub use tree::OrderedTree;
