#![cfg(test)]

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::hash::{FixedHash, PassthroughHasherBuilder};

#[test]
fn test_insert_get_remove() {
    let mut map = HashMap::<&str, u32>::new();
    assert_eq!(map.cap(), 0, "A new HashMap shouldn't allocate any buckets.");
    assert_eq!(map.get("missing"), None, "Lookups on a map with no buckets should return None.");
    assert_eq!(map.remove("missing"), None);

    assert_eq!(map.insert("one", 1), None);
    assert_eq!(map.insert("two", 2), None);
    assert_eq!(map.insert("three", 3), None);
    assert_eq!(map.len(), 3);

    assert_eq!(map.get("two"), Some(&2));
    assert_eq!(
        map.insert("two", 22),
        Some(2),
        "Inserting an existing key should return the previous value."
    );
    assert_eq!(map.len(), 3, "Replacing a value shouldn't change the length.");

    *map.get_mut("three").unwrap() += 30;
    assert_eq!(map.get_entry("three"), Some((&"three", &33)));

    assert_eq!(map.remove("one"), Some(1));
    assert_eq!(map.remove("one"), None, "A key should only be removed once.");
    assert!(!map.contains("one"));
    assert!(map.contains("two"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_grows_within_load_factor() {
    let mut map = HashMap::<u32, u32>::new();
    for i in 0..1000 {
        map.insert(i, i * 2);
        assert!(
            map.len() * 5 <= map.cap() * 4 + 4,
            "The map should grow to keep the load factor around 4/5 (len {}, cap {}).",
            map.len(),
            map.cap()
        );
    }

    for i in 0..1000 {
        assert_eq!(map.get(&i), Some(&(i * 2)), "Every entry should survive rehashing.");
    }
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_cap_and_hasher(4, PassthroughHasherBuilder);
    map.insert(FixedHash::new(1, "zero"), 0);
    map.insert(FixedHash::new(1, "one"), 1);
    map.insert(FixedHash::new(5, "two"), 2);

    assert_eq!(map.cap(), 4);
    assert_eq!(
        map.longest_chain(),
        3,
        "Hashes 1 and 5 should share a bucket when there are 4 buckets."
    );

    assert_eq!(map.remove(&FixedHash::new(1, "zero")), Some(0));
    assert_eq!(
        map.get(&FixedHash::new(1, "one")),
        Some(&1),
        "Removing one entry from a chain shouldn't lose the others."
    );
    assert_eq!(map.get(&FixedHash::new(5, "two")), Some(&2));
    assert_eq!(
        map.get(&FixedHash::new(2, "two")),
        None,
        "A key is only searched for in the bucket its hash points to."
    );
}

#[test]
fn test_bucket_index() {
    let mut map = HashMap::<u64, (), _>::with_hasher(PassthroughHasherBuilder);
    assert_eq!(map.bucket_index(&7_u64), Err(IndexNoCap));

    map.reserve(6);
    let cap = map.cap() as u64;
    assert!(cap >= 8, "Reserving 6 entries should allocate enough buckets for the load factor.");
    assert_eq!(map.bucket_index(&7_u64), Ok((7 % cap) as usize));
    assert_eq!(map.bucket_index(&(cap + 3)), Ok(3));
}

#[test]
fn test_reserve_prevents_growth() {
    let mut map = HashMap::<u32, u32>::new();
    map.reserve(100);
    let cap = map.cap();

    for i in 0..100 {
        map.insert(i, i);
    }
    assert_eq!(cap, map.cap(), "Inserting reserved entries shouldn't reallocate.");
}

#[test]
fn test_clear() {
    let mut map: HashMap<u32, u32> = (0..10).map(|i| (i, i)).collect();
    let cap = map.cap();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.cap(), cap, "Clearing should keep the buckets.");
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.load_factor(), 0.0);
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u32, String> = (0..20).map(|i| (i, i.to_string())).collect();

    let mut keys = map.keys().copied().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, (0..20).collect::<Vec<_>>());
    assert_eq!(map.iter().len(), 20);

    for value in map.values_mut() {
        value.push('!');
    }
    assert_eq!(map.get(&3).map(String::as_str), Some("3!"));

    for (key, value) in map.iter_mut() {
        if key % 2 == 0 {
            value.clear();
        }
    }
    assert_eq!(map.values().filter(|v| v.is_empty()).count(), 10);

    let mut values = map.into_values().collect::<Vec<_>>();
    values.sort();
    assert_eq!(values.iter().filter(|v| !v.is_empty()).count(), 10);
}

#[test]
fn test_replacing_at_load_threshold_doesnt_grow() {
    let mut map = HashMap::<u32, u32>::with_cap(5);
    for key in 0..4 {
        map.insert(key, key);
    }
    assert_eq!(map.cap(), 5);

    assert_eq!(map.insert(0, 100), Some(0));
    assert_eq!(map.cap(), 5, "Replacing a value shouldn't rehash the table.");
    assert_eq!(map.len(), 4);

    assert_eq!(map.insert(4, 4), None);
    assert_eq!(map.cap(), 10, "A new entry at the load threshold should grow the table.");
    assert_eq!(map.get(&0), Some(&100));
    assert_eq!(map.len(), 5);
}

#[test]
fn test_equality_ignores_order() {
    let a: HashMap<u32, u32> = (0..50).map(|i| (i, i)).collect();
    let b: HashMap<u32, u32> = (0..50).rev().map(|i| (i, i)).collect();
    assert!(a == b);

    let c: HashMap<u32, u32> = (0..50).map(|i| (i, i + 1)).collect();
    assert!(a != c);
}

#[test]
fn test_against_btree_map() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut map = HashMap::<u16, u32>::new();
    let mut expected = BTreeMap::new();

    for _ in 0..5000 {
        let key = rng.gen_range(0..500);
        if rng.gen_bool(0.6) {
            let value = rng.r#gen();
            assert_eq!(map.insert(key, value), expected.insert(key, value));
        } else {
            assert_eq!(map.remove(&key), expected.remove(&key));
        }
        assert_eq!(map.len(), expected.len());
    }

    let mut entries = map.into_iter().collect::<Vec<_>>();
    entries.sort();
    assert_eq!(entries, expected.into_iter().collect::<Vec<_>>());
}
