use bst::ordered::OrderedTree;

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both, and that every
/// operation reported the same outcome.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
        Op::Remove(x) => tree.remove(x).is_some() == set.remove(x),
    })
}

fn is_strictly_ascending<T: Ord>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    let outcomes_match = do_ops(&ops, &mut tree, &mut set);
    let inorder = tree.inorder();

    outcomes_match
        && is_strictly_ascending(&inorder)
        && inorder.len() == tree.len()
        && inorder.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
        && is_strictly_ascending(&tree.inorder())
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    tree.insert(x);
    let len = tree.len();
    let preorder = tree.preorder();

    !tree.insert(x) && tree.len() == len && tree.preorder() == preorder
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && tree.iter().len() == distinct.len()
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let inorder = tree.inorder();
    let mut preorder = tree.preorder();
    let mut postorder = tree.postorder();
    preorder.sort_unstable();
    postorder.sort_unstable();

    preorder == inorder && postorder == inorder
}

#[quickcheck]
fn preorder_rebuild_keeps_shape(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let rebuilt: OrderedTree<_> = tree.preorder().into_iter().collect();

    rebuilt.preorder() == tree.preorder()
        && rebuilt.postorder() == tree.postorder()
        && rebuilt.height() == tree.height()
}

#[quickcheck]
fn root_is_first_in_preorder_and_last_in_postorder(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let root = tree.root().map(|n| *n.value());

    tree.preorder().first().copied() == root && tree.postorder().last().copied() == root
}
