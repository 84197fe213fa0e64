use ordered_tree::OrderedTree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut OrderedTree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && set.iter().all(|key| tree.search(key))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.search(x))
            && still_present.iter().all(|x| tree.search(x))
    }
}

quickcheck::quickcheck! {
    fn min_and_max_bound_in_order(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        let mut keys = Vec::new();
        tree.in_order(|key| keys.push(*key));

        tree.min() == keys.first() && tree.max() == keys.last()
    }
}

quickcheck::quickcheck! {
    fn pre_and_post_order_visit_every_key(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        let mut pre = Vec::new();
        tree.pre_order(|key| pre.push(*key));
        let mut post = Vec::new();
        tree.post_order(|key| post.push(*key));

        let root = tree.root().map(|root| *root.key());
        let root_first = pre.first().copied() == root;
        let root_last = post.last().copied() == root;

        pre.sort_unstable();
        post.sort_unstable();
        let sorted: Vec<_> = tree.iter().copied().collect();

        root_first
            && root_last
            && pre == sorted
            && post == sorted
            && root == xs.first().copied()
    }
}
