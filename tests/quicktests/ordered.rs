use ordered_tree::OrderedTree;

use std::collections::BTreeSet;

use crate::Overwrite;

fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

fn inorder(tree: &OrderedTree<i8>) -> String {
    let mut out = String::new();
    tree.traverse_inorder(&mut out).unwrap();
    out
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
    let distinct: BTreeSet<_> = xs.iter().collect();

    build(&xs).len() == distinct.len()
}

#[quickcheck]
fn inorder_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: BTreeSet<_> = xs.iter().copied().collect();

    let expected: String = distinct.iter().map(|x| format!("{} ", x)).collect();
    tree.iter().eq(distinct.iter()) && inorder(&tree) == expected
}

#[quickcheck]
fn min_and_max_match_inorder(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => {
            tree.get(tree.min_element()) == Some(min)
                && tree.get(tree.max_element()) == Some(max)
                && tree.begin() == tree.min_element()
                && tree.successor(tree.max_element()) == tree.end()
        }
        _ => tree.min_element() == tree.end() && tree.max_element() == tree.end(),
    }
}

#[quickcheck]
fn min_greater_than_is_successor(xs: Vec<i8>, probe: i8) -> bool {
    let tree = build(&xs);
    let expected = xs.iter().filter(|x| **x > probe).min();

    match expected {
        Some(x) => tree.get(tree.min_greater_than(&probe)) == Some(x),
        None => tree.min_greater_than(&probe) == tree.end(),
    }
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == tree.end())
}

#[quickcheck]
fn ascending_inserts_make_a_chain(n: u8) -> bool {
    let ascending: OrderedTree<_> = (0..n).collect();
    let descending: OrderedTree<_> = (0..n).rev().collect();

    ascending.height() == n as usize && descending.height() == n as usize
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, overwrite: Overwrite<i8>) -> bool {
    let tree = build(&xs);
    let mut copy = tree.clone();

    let same_shape = copy.len() == tree.len()
        && copy.height() == tree.height()
        && copy.iter().eq(tree.iter())
        && copy.to_tree_string() == tree.to_tree_string();
    if tree.is_empty() {
        return same_shape && copy.end() != tree.end();
    }

    let mut cursor = copy.begin();
    for _ in 0..overwrite.position % copy.len() {
        cursor = copy.successor(cursor);
    }
    copy[cursor] = overwrite.value;

    same_shape && tree.check_sorting_invariant() && tree.iter().eq(build(&xs).iter())
}

#[quickcheck]
fn overwrite_detection_agrees_with_inorder(xs: Vec<i8>, overwrite: Overwrite<i8>) -> bool {
    let mut tree = build(&xs);
    if tree.is_empty() {
        return tree.check_sorting_invariant();
    }

    let mut cursor = tree.begin();
    for _ in 0..overwrite.position % tree.len() {
        cursor = tree.successor(cursor);
    }
    tree[cursor] = overwrite.value;

    // The invariant holds exactly when the in-order sequence is still strictly increasing.
    let values: Vec<_> = tree.iter().collect();
    let sorted = values.windows(2).all(|pair| pair[0] < pair[1]);
    tree.check_sorting_invariant() == sorted
}

#[test]
fn begin_above_second_breaks_invariant() {
    let mut tree = build(&[4, 2, 6, 1, 3]);

    let begin = tree.begin();
    tree[begin] = 3;

    assert!(!tree.check_sorting_invariant());
    assert!(tree.validate().is_err());
}
