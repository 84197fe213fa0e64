//! Ordering strategies for an [`OrderedTree`][crate::tree::OrderedTree].
//!
//! Every ordering decision the tree makes goes through a [`Comparator`].
//! Most trees use [`Natural`], which defers to the key's [`Ord`]
//! implementation. Any closure of the shape `Fn(&K, &K) -> Ordering` is a
//! comparator too, so a custom order doesn't need a new type:
//!
//! ```
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;

/// Decides how two keys are ordered.
///
/// Implementations must be total and consistent: antisymmetric and
/// transitive. The tree does not detect a comparator breaking these rules,
/// although [`OrderedTree::verify`][crate::tree::OrderedTree::verify] will
/// usually notice the damage afterwards.
pub trait Comparator<K: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The default comparator. Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_follows_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
        assert_eq!(Natural.compare("a", "b"), Ordering::Less);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());

        assert_eq!(by_len.compare(&"bus", &"tram"), Ordering::Less);
        assert_eq!(by_len.compare(&"van", &"car"), Ordering::Equal);
    }
}
