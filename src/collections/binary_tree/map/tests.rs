#![cfg(test)]

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::alloc::CountedDrop;

/// Builds the tree
/// ```text
///        50
///      /    \
///    30      70
///   /  \    /  \
///  20  40  60  80
/// ```
fn sample_tree() -> BinaryTreeMap<u32, char> {
    [50, 30, 70, 20, 40, 60, 80]
        .into_iter()
        .map(|key| (key, char::from_digit(key / 10, 10).unwrap()))
        .collect()
}

fn keys_of<'a>(iter: impl Iterator<Item = (&'a u32, &'a char)>) -> Vec<u32> {
    iter.map(|(key, _)| *key).collect()
}

#[test]
fn test_insert_and_get() {
    let mut map = BinaryTreeMap::new();
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("c", 3), None);
    assert_eq!(map.insert("a", 10), Some(1), "Inserting an existing key should replace its value.");
    assert_eq!(map.len(), 3, "Replacing a value shouldn't change the length.");

    assert_eq!(map.get("a"), Some(&10));
    assert_eq!(map.get_entry("c"), Some((&"c", &3)));
    assert_eq!(map.get("d"), None);
    assert!(map.contains("b"));
    assert!(!map.contains("z"));

    *map.get_mut("b").unwrap() += 5;
    assert_eq!(map.get("b"), Some(&7));
}

#[test]
fn test_traversal_orders() {
    let map = sample_tree();
    assert_eq!(keys_of(map.iter()), [20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(keys_of(map.pre_order()), [50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(keys_of(map.post_order()), [20, 40, 30, 60, 80, 70, 50]);
    assert_eq!(keys_of(map.level_order()), [50, 30, 70, 20, 40, 60, 80]);
    assert_eq!(map.values().collect::<String>(), "2345678");
    assert_eq!(map.iter().len(), 7);

    let empty = BinaryTreeMap::<u32, char>::new();
    assert_eq!(empty.iter().next(), None);
    assert_eq!(empty.pre_order().next(), None);
    assert_eq!(empty.post_order().next(), None);
    assert_eq!(empty.level_order().next(), None);
}

#[test]
fn test_remove_leaf_and_single_child() {
    let mut map = sample_tree();
    assert_eq!(map.remove(&20), Some('2'));
    assert_eq!(keys_of(map.pre_order()), [50, 30, 40, 70, 60, 80]);

    // 30 now only has a right child, which should take its place.
    assert_eq!(map.remove(&30), Some('3'));
    assert_eq!(keys_of(map.pre_order()), [50, 40, 70, 60, 80]);
    assert_eq!(map.remove(&30), None);
    assert_eq!(map.len(), 5);
    assert!(map.is_valid());
}

#[test]
fn test_remove_two_children_uses_successor() {
    let mut map = sample_tree();
    assert_eq!(map.remove_entry(&50), Some((50, '5')));
    assert_eq!(
        keys_of(map.pre_order()),
        [60, 30, 20, 40, 70, 80],
        "The in-order successor should replace the root, keeping both subtrees."
    );
    assert_eq!(map.len(), 6);
    assert!(map.is_valid());

    map.insert(65, 'x');
    map.insert(63, 'y');
    // The successor, 63, is two levels down the left side of the right subtree.
    assert_eq!(map.remove(&60), Some('6'));
    assert_eq!(keys_of(map.iter()), [20, 30, 40, 63, 65, 70, 80]);
    assert_eq!(map.pre_order().next().map(|e| *e.0), Some(63));
    assert!(map.is_valid());
}

#[test]
fn test_first_and_last() {
    let mut map = sample_tree();
    assert_eq!(map.first_entry(), Some((&20, &'2')));
    assert_eq!(map.last_entry(), Some((&80, &'8')));

    assert_eq!(map.take_first_entry(), Some((20, '2')));
    assert_eq!(map.take_last(), Some('8'));
    assert_eq!(map.take_first(), Some('3'));
    assert_eq!(keys_of(map.iter()), [40, 50, 60, 70]);
    assert_eq!(map.len(), 4);
    assert!(map.is_valid());

    let mut empty = BinaryTreeMap::<u32, u32>::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.take_last_entry(), None);
}

#[test]
fn test_take_first_keeps_right_subtree() {
    let mut map = [10, 5, 7, 6, 8].into_iter().map(|k| (k, ())).collect::<BinaryTreeMap<_, _>>();
    assert_eq!(map.take_first_entry(), Some((5, ())));
    assert_eq!(map.iter().map(|e| *e.0).collect::<Vec<_>>(), [6, 7, 8, 10]);
    assert!(map.is_valid());
}

#[test]
fn test_height() {
    assert_eq!(BinaryTreeMap::<u8, ()>::new().height(), 0);
    assert_eq!(sample_tree().height(), 3);

    let degenerate = (0..100).map(|i| (i, ())).collect::<BinaryTreeMap<_, _>>();
    assert_eq!(degenerate.height(), 100, "Sorted insertion should produce a list-shaped tree.");
}

#[test]
fn test_mutable_iteration() {
    let mut map = sample_tree();
    for (key, value) in map.iter_mut() {
        if key % 20 == 0 {
            *value = '!';
        }
    }
    map.values_mut().take(1).for_each(|value| *value = '?');
    assert_eq!(map.values().collect::<String>(), "?3!5!7!");
}

#[test]
fn test_into_iter_and_clear() {
    let map = sample_tree();
    let entries = map.into_iter().collect::<Vec<_>>();
    assert_eq!(entries.len(), 7);
    assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));

    let mut map = sample_tree();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
    map.insert(1, 'a');
    assert_eq!(map.len(), 1);
}

/// Builds the tree that inserting `0..len` in ascending order would produce, a chain of right
/// children, without paying for the quadratic insertion.
fn degenerate_tree(len: u32) -> BinaryTreeMap<u32, u32> {
    let mut branch = Branch(None);
    for key in (0..len).rev() {
        branch = Branch(Some(Box::new(Node {
            left: None.into(),
            right: branch,
            key,
            value: key,
        })));
    }

    let mut map = BinaryTreeMap::new();
    map.root = branch;
    map.len = len as usize;
    map
}

#[test]
fn test_sorted_insertion() {
    let map = (0..2_000).map(|i| (i, i)).collect::<BinaryTreeMap<u32, u32>>();
    assert_eq!(map.height(), 2_000, "Ascending keys should form a single chain.");
    assert!(map.is_valid());
    assert!(map.keys().copied().eq(0..2_000));
}

#[test]
fn test_degenerate_tree_operations() {
    let mut map = degenerate_tree(200_000);
    assert_eq!(map.height(), 200_000);
    assert!(map.is_valid());

    assert_eq!(map.insert(200_000, 0), None, "Inserting below the deepest node shouldn't recurse.");
    assert_eq!(map.insert(200_000, 1), Some(0));
    assert_eq!(map.len(), 200_001);

    assert_eq!(map.get(&199_999), Some(&199_999));
    *map.get_mut(&150_000).unwrap() = 7;
    assert_eq!(map.get(&150_000), Some(&7));
    assert!(!map.contains(&300_000));

    assert_eq!(map.remove(&150_000), Some(7));
    assert!(!map.contains(&150_000));
    assert_eq!(map.take_last_entry(), Some((200_000, 1)));
    assert_eq!(map.take_first_entry(), Some((0, 0)));
    assert_eq!(map.last_entry(), Some((&199_999, &199_999)));
    assert_eq!(map.len(), 199_998);
    assert!(map.is_valid());

    drop(map);
}

#[test]
fn test_degenerate_tree_clear_and_drop() {
    let mut map = degenerate_tree(200_000);
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);

    drop(degenerate_tree(200_000));
}

#[test]
fn test_partially_consumed_into_iter_drops() {
    let mut iter = degenerate_tree(200_000).into_iter();
    assert_eq!(iter.next(), Some((0, 0)));
    assert_eq!(iter.next(), Some((1, 1)));
    assert_eq!(iter.len(), 199_998);
    // The rest of the chain is still owned by the iterator.
    drop(iter);

    let counter = Rc::new(Cell::new(0));
    let mut map = BinaryTreeMap::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        map.insert(key, CountedDrop::new(key, &counter));
    }
    let mut iter = map.into_iter();
    iter.next();
    assert_eq!(counter.get(), 1);
    drop(iter);
    assert_eq!(counter.get(), 7, "Dropping the iterator should drop every remaining value once.");
}

#[test]
fn test_randomized_against_btree_map() {
    let mut rng = StdRng::seed_from_u64(1975);
    let mut keys = (0..500).collect::<Vec<u32>>();
    keys.shuffle(&mut rng);

    let mut map = BinaryTreeMap::new();
    let mut expected = BTreeMap::new();
    for key in keys {
        assert_eq!(map.insert(key, key * 2), expected.insert(key, key * 2));
    }

    for _ in 0..1_000 {
        let key = rng.gen_range(0..600);
        if rng.gen_bool(0.5) {
            assert_eq!(map.remove(&key), expected.remove(&key));
        } else {
            assert_eq!(map.insert(key, key), expected.insert(key, key));
        }
        assert_eq!(map.len(), expected.len());
    }

    assert!(map.is_valid());
    assert!(map.iter().eq(expected.iter()));
    assert_eq!(map.first_entry(), expected.first_key_value());
    assert_eq!(map.last_entry(), expected.last_key_value());
}

#[test]
fn test_display() {
    let map = [(2, 'b'), (1, 'a')].into_iter().collect::<BinaryTreeMap<_, _>>();
    assert_eq!(format!("{map}"), "{1: 'a', 2: 'b'}");
    assert_eq!(map, [(1, 'a'), (2, 'b')].into_iter().collect::<BinaryTreeMap<_, _>>());
}
