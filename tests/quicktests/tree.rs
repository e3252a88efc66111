use classic_collections::tree::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    tree.traverse(Order::In) == expected && tree.len() == expected.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn duplicates_are_ignored(x: i8, times: u8) -> bool {
    let mut tree = Tree::new();
    for _ in 0..=times % 20 {
        tree.insert(x);
    }

    tree.len() == 1
}

#[quickcheck]
fn every_order_visits_every_value_once(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let in_order = tree.traverse(Order::In);

    [Order::Level, Order::Pre, Order::Post].iter().all(|&order| {
        let mut values = tree.traverse(order);
        values.sort_unstable();
        values == in_order
    })
}

#[quickcheck]
fn sorted_input_builds_a_chain(xs: Vec<i8>) -> bool {
    let distinct: BTreeSet<_> = xs.into_iter().collect();
    let ascending: Tree<_> = distinct.iter().copied().collect();
    let descending: Tree<_> = distinct.iter().rev().copied().collect();
    let expected = distinct.len() as isize - 1;

    ascending.height() == expected && descending.height() == expected
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let len = tree.len();
    if len == 0 {
        return tree.height() == -1;
    }

    // A tree with `levels` levels holds between `levels` and `2^levels - 1` values.
    let levels = (tree.height() + 1) as u32;
    (levels as usize) <= len && (levels >= usize::BITS || len < 1usize << levels)
}

#[quickcheck]
fn extremes_match_in_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let in_order = tree.traverse(Order::In);

    tree.minimum() == in_order.first() && tree.maximum() == in_order.last()
}

#[quickcheck]
fn level_counts_ancestors(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| {
        let ancestors = tree.ancestors(x);
        tree.level(x) == Some(ancestors.len())
            && ancestors
                .iter()
                .all(|ancestor| tree.descendants(ancestor).contains(x))
    })
}

#[quickcheck]
fn missing_values_have_no_relatives(xs: Vec<i8>, y: i8) -> bool {
    let tree = build(&xs);
    if tree.search(&y) {
        return true;
    }

    tree.level(&y).is_none() && tree.ancestors(&y).is_empty() && tree.descendants(&y).is_empty()
}

#[quickcheck]
fn clear_empties_everything(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    tree.clear();

    tree.is_empty()
        && tree.len() == 0
        && tree.height() == -1
        && [Order::Level, Order::Pre, Order::In, Order::Post]
            .iter()
            .all(|&order| tree.traverse(order).is_empty())
}

#[quickcheck]
fn full_trees_are_strictly_binary(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    !tree.is_full() || tree.is_strict_binary()
}
