#![cfg(test)]

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn level_keys(map: &AvlTreeMap<u32, ()>) -> Vec<u32> {
    map.level_order().map(|(key, _)| *key).collect()
}

fn map_of(keys: &[u32]) -> AvlTreeMap<u32, ()> {
    keys.iter().map(|key| (*key, ())).collect()
}

#[test]
fn test_single_rotations() {
    // Ascending keys lean right and need a left rotation.
    let map = map_of(&[1, 2, 3]);
    assert_eq!(level_keys(&map), [2, 1, 3]);
    assert_eq!(map.height(), 2);

    // Descending keys lean left and need a right rotation.
    let map = map_of(&[3, 2, 1]);
    assert_eq!(level_keys(&map), [2, 1, 3]);
    assert!(map.is_balanced());
}

#[test]
fn test_double_rotations() {
    let map = map_of(&[3, 1, 2]);
    assert_eq!(level_keys(&map), [2, 1, 3], "Left-right case should produce a balanced root.");

    let map = map_of(&[1, 3, 2]);
    assert_eq!(level_keys(&map), [2, 1, 3], "Right-left case should produce a balanced root.");
    assert_eq!(map.balance_factor(), 0);
}

#[test]
fn test_sorted_insertion_stays_logarithmic() {
    let map = (0..1023).map(|key| (key, key)).collect::<AvlTreeMap<u32, u32>>();
    assert_eq!(map.len(), 1023);
    assert_eq!(map.height(), 10, "1023 ascending keys should form a perfect tree.");
    assert!(map.is_balanced());
    assert!(map.keys().copied().eq(0..1023));
}

#[test]
fn test_insert_get_replace() {
    let mut map = AvlTreeMap::new();
    assert_eq!(map.insert(String::from("pear"), 1), None);
    assert_eq!(map.insert(String::from("apple"), 2), None);
    assert_eq!(map.insert(String::from("pear"), 3), Some(1));
    assert_eq!(map.len(), 2);

    assert_eq!(map.get("pear"), Some(&3));
    assert!(map.contains("apple"));
    assert!(!map.contains("plum"));
    *map.get_mut("apple").unwrap() *= 10;
    assert_eq!(map.get_entry("apple"), Some((&String::from("apple"), &20)));
}

#[test]
fn test_get_or_insert_with() {
    let mut map = AvlTreeMap::new();
    *map.get_or_insert_with('a', || 0) += 1;
    *map.get_or_insert_with('a', || 100) += 1;
    *map.get_or_insert_with('b', || 100) += 1;
    assert_eq!(map.get(&'a'), Some(&2), "An existing value shouldn't be replaced by the default.");
    assert_eq!(map.get(&'b'), Some(&101));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_remove_rebalances() {
    let mut map = map_of(&[20, 10, 30, 5, 15, 25, 40, 35, 50]);
    assert!(map.is_balanced());

    // Removing the left side leaves the right side two levels deeper.
    for key in [5, 15, 10] {
        assert_eq!(map.remove_entry(&key), Some((key, ())));
        assert!(map.is_balanced(), "The tree should be balanced after removing {key}.");
    }
    assert_eq!(map.remove(&10), None);
    assert_eq!(level_keys(&map)[0], 30);
    assert!(map.keys().copied().eq([20, 25, 30, 35, 40, 50]));

    // A node with two children is replaced by its successor.
    assert_eq!(map.remove(&30), Some(()));
    assert!(map.is_balanced());
    assert!(map.keys().copied().eq([20, 25, 35, 40, 50]));
}

#[test]
fn test_first_and_last() {
    let mut map = (1..=100).map(|key| (key, key * key)).collect::<AvlTreeMap<u32, u32>>();
    assert_eq!(map.first_entry(), Some((&1, &1)));
    assert_eq!(map.last(), Some(&10_000));

    for expected in 1..=50 {
        assert_eq!(map.take_first_entry(), Some((expected, expected * expected)));
        assert!(map.is_balanced());
    }
    for expected in (51..=100).rev() {
        assert_eq!(map.take_last_entry().map(|e| e.0), Some(expected));
        assert!(map.is_balanced());
    }
    assert!(map.is_empty());
    assert_eq!(map.take_first_entry(), None);
    assert_eq!(map.height(), 0);
}

#[test]
fn test_randomized_against_btree_map() {
    let mut rng = StdRng::seed_from_u64(1962);
    let mut map = AvlTreeMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..3_000 {
        let key = rng.gen_range(0..400_u32);
        if rng.gen_bool(0.6) {
            let value = rng.r#gen::<u16>();
            assert_eq!(map.insert(key, value), expected.insert(key, value));
        } else {
            assert_eq!(map.remove(&key), expected.remove(&key));
        }
        assert!(map.is_balanced());
        assert!((-1..=1).contains(&map.balance_factor()));
    }

    assert_eq!(map.len(), expected.len());
    assert!(map.iter().eq(expected.iter()));

    // An AVL tree with n nodes is no taller than about 1.44 * log2(n + 2).
    let bound = 1.45 * ((map.len() + 2) as f64).log2();
    assert!((map.height() as f64) <= bound, "Height {} exceeds {bound}.", map.height());
}

#[test]
fn test_iterators() {
    let mut map = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect::<AvlTreeMap<_, _>>();
    for (_, value) in map.iter_mut() {
        *value = value.to_ascii_uppercase();
    }
    map.values_mut().last().into_iter().for_each(|value| *value = 'z');
    assert_eq!(map.values().collect::<String>(), "ABz");
    assert_eq!(map.iter().len(), 3);

    let cloned = map.clone();
    assert_eq!(cloned, map);
    assert!(cloned.is_balanced());
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, 'A'), (2, 'B'), (3, 'z')]);
}

#[test]
fn test_clear_and_display() {
    let mut map = map_of(&[2, 1]);
    assert_eq!(format!("{map}"), "{1: (), 2: ()}");
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
    assert_eq!(map.balance_factor(), 0);
    assert!(map.is_balanced());
}
