//! Errors reported when an [`OrderedTree`][crate::tree::OrderedTree] is found
//! to break its own invariants.

use thiserror::Error;

/// A broken invariant found by
/// [`OrderedTree::verify`][crate::tree::OrderedTree::verify].
///
/// Trees built through the public API with a well behaved comparator never
/// produce one of these.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    /// A key compares on the wrong side of one of its ancestors (or equal to
    /// it). `depth` counts edges from the root, so the root is at depth 0.
    #[error("key at depth {depth} is out of order with respect to an ancestor")]
    OutOfOrder {
        /// Depth of the offending node.
        depth: usize,
    },

    /// The cached length disagrees with the number of reachable nodes.
    #[error("tree records {cached} keys but {counted} are reachable from the root")]
    LengthMismatch {
        /// What `len()` reports.
        cached: usize,
        /// How many nodes the walk found.
        counted: usize,
    },
}
