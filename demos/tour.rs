//! Walks through each collection and prints what it does.
//!
//! Run with `cargo run --example tour`.

use classic_collections::deque::Deque;
use classic_collections::list::List;
use classic_collections::tree::{Order, Tree};

fn tree_tour() {
    println!("=== Binary Search Tree ===");

    let mut tree = Tree::new();
    for value in [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45] {
        tree.insert(value);
    }
    println!("len: {}, height: {}", tree.len(), tree.height());
    println!("{}", tree.pretty());

    for value in [25, 45, 100, 15] {
        println!("search {}: {}", value, tree.search(&value));
    }

    for order in [Order::Level, Order::Pre, Order::In, Order::Post] {
        println!("{:?}: {:?}", order, tree.traverse(order));
    }

    println!("minimum: {:?}, maximum: {:?}", tree.minimum(), tree.maximum());
    println!("ancestors of 45: {:?}", tree.ancestors(&45));
    println!("descendants of 30: {:?}", tree.descendants(&30));
    println!("level of 45: {:?}", tree.level(&45));
    println!(
        "strict binary: {}, full: {}",
        tree.is_strict_binary(),
        tree.is_full()
    );

    let words: Tree<_> = ["casa", "arvore", "zebra", "banana", "elefante", "agua"]
        .into_iter()
        .collect();
    println!("words in order: {:?}", words.traverse(Order::In));
    println!("words by level: {:?}", words.traverse(Order::Level));
}

fn list_tour() {
    println!("=== Doubly Linked List ===");

    let mut list = List::new();
    list.push_back(10);
    list.push_back(20);
    list.push_front(5);
    if let Err(err) = list.insert_at(2, 15) {
        println!("insert failed: {}", err);
    }
    println!("{} (len {})", list, list.len());
    println!("forward: {:?}", list.forward());
    println!("backward: {:?}", list.backward());

    println!("pop front: {:?}", list.pop_front());
    println!("pop back: {:?}", list.pop_back());
    println!("remove at 0: {:?}", list.remove_at(0));
    println!("remove at 5: {:?}", list.remove_at(5));
    println!("{} (len {})", list, list.len());

    println!("position of 15: {:?}", list.position(&15));
    println!("position of 100: {:?}", list.position(&100));

    list.clear();
    println!("after clear: {} (empty: {})", list, list.is_empty());
}

fn deque_tour() {
    println!("=== Deque ===");

    let mut deque = Deque::new();
    deque.push_back(10);
    deque.push_front(5);
    deque.push_back(20);
    println!("values: {:?}", deque.to_vec());
    println!("front: {:?}, back: {:?}", deque.front(), deque.back());
    println!("pop front: {:?}", deque.pop_front());
    println!("pop back: {:?}", deque.pop_back());
    println!("values: {:?} (len {})", deque.to_vec(), deque.len());
}

fn main() {
    tree_tour();
    println!();
    list_tour();
    println!();
    deque_tour();
}
