#![cfg(test)]

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn sample_trie() -> Trie {
    ["car", "card", "care", "cart", "cat", "dog", "do"].into_iter().collect()
}

#[test]
fn test_insert_and_contains() {
    let mut trie = Trie::new();
    assert!(trie.insert("tea"));
    assert!(trie.insert("ten"));
    assert!(trie.insert("te"));
    assert!(!trie.insert("tea"), "Inserting a word twice should report that it was present.");
    assert_eq!(trie.len(), 3);

    assert!(trie.contains("tea"));
    assert!(trie.contains("te"));
    assert!(!trie.contains("t"), "A prefix of a word isn't a word itself.");
    assert!(!trie.contains("team"));
    assert!(!trie.contains(""));
}

#[test]
fn test_prefix_queries() {
    let trie = sample_trie();
    assert!(trie.starts_with("ca"));
    assert!(trie.starts_with("card"));
    assert!(trie.starts_with(""));
    assert!(!trie.starts_with("cb"));

    assert_eq!(trie.count_prefix("car"), 4);
    assert_eq!(trie.count_prefix("ca"), 5);
    assert_eq!(trie.count_prefix("d"), 2);
    assert_eq!(trie.count_prefix(""), 7);
    assert_eq!(trie.count_prefix("x"), 0);
}

#[test]
fn test_words_are_sorted() {
    let trie = sample_trie();
    assert_eq!(
        trie.words().collect::<Vec<_>>(),
        ["car", "card", "care", "cart", "cat", "do", "dog"]
    );
    assert_eq!(trie.words_with_prefix("car").collect::<Vec<_>>(), ["car", "card", "care", "cart"]);
    assert_eq!(trie.words_with_prefix("zebra").count(), 0);
    assert_eq!(trie.words_with_prefix("ca").len(), 5);
}

#[test]
fn test_remove_prunes_nodes() {
    let mut trie = sample_trie();
    assert!(trie.remove("card"));
    assert!(!trie.remove("card"));
    assert!(!trie.remove("ca"), "Removing a prefix that isn't a word should do nothing.");
    assert!(trie.contains("car"));
    assert!(trie.contains("care"));
    assert_eq!(trie.len(), 6);

    assert!(trie.remove("dog"));
    assert!(trie.contains("do"));
    assert!(trie.remove("do"));
    assert!(!trie.starts_with("d"), "Nodes without any words below them should be pruned.");
    assert!(!trie.root.children.contains(&'d'));

    assert!(trie.remove("car"));
    assert!(trie.starts_with("car"), "Words below a removed word should survive.");
    assert_eq!(trie.count_prefix("car"), 2);
}

#[test]
fn test_empty_word() {
    let mut trie = Trie::new();
    assert!(!trie.starts_with(""));
    assert!(trie.insert(""));
    assert!(trie.contains(""));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.words().collect::<Vec<_>>(), [""]);
    assert!(trie.remove(""));
    assert!(trie.is_empty());
}

#[test]
fn test_longest_common_prefix() {
    assert_eq!(Trie::new().longest_common_prefix(), "");
    assert_eq!(sample_trie().longest_common_prefix(), "");

    let trie = ["interview", "internet", "interval", "internal"].into_iter().collect::<Trie>();
    assert_eq!(trie.longest_common_prefix(), "inter");

    let trie = ["flow", "flower"].into_iter().collect::<Trie>();
    assert_eq!(trie.longest_common_prefix(), "flow", "A word ending should stop the prefix.");
}

#[test]
fn test_unicode_words() {
    let trie = ["日本", "日本語", "über"].into_iter().collect::<Trie>();
    assert!(trie.contains("日本語"));
    assert_eq!(trie.count_prefix("日"), 2);
    assert_eq!(trie.words().last().as_deref(), Some("日本語"));
}

#[test]
fn test_long_word() {
    let word = "a".repeat(200_000);
    let mut trie = Trie::new();
    assert!(trie.insert(&word));
    assert!(trie.insert("ab"));
    assert!(trie.contains(&word));
    assert_eq!(trie.count_prefix(&word[..100_000]), 1);

    assert!(trie.remove(&word), "Pruning a long chain of nodes shouldn't recurse.");
    assert!(!trie.starts_with("aa"));
    assert_eq!(trie.len(), 1);

    assert!(trie.insert(&word));
    trie.clear();
    assert!(trie.is_empty());

    trie.insert(&word);
    drop(trie);
}

#[test]
fn test_randomized_against_btree_set() {
    let mut rng = StdRng::seed_from_u64(1959);
    let mut trie = Trie::new();
    let mut expected = BTreeSet::new();

    for _ in 0..2_000 {
        let len = rng.gen_range(0..5);
        let word = (0..len).map(|_| rng.gen_range('a'..='c')).collect::<String>();
        if rng.gen_bool(0.6) {
            assert_eq!(trie.insert(&word), expected.insert(word));
        } else {
            assert_eq!(trie.remove(&word), expected.remove(&word));
        }
        assert_eq!(trie.len(), expected.len());
    }

    assert!(trie.words().eq(expected.iter().cloned()));
    assert_eq!(
        trie.count_prefix("ab"),
        expected.iter().filter(|word| word.starts_with("ab")).count()
    );
}

#[test]
fn test_clear_and_display() {
    let mut trie = ["b", "a"].into_iter().collect::<Trie>();
    assert_eq!(format!("{trie}"), r#"{"a", "b"}"#);
    let cloned = trie.clone();
    trie.clear();
    assert!(trie.is_empty());
    assert_ne!(trie, cloned);
    assert_eq!(cloned.len(), 2);
}
