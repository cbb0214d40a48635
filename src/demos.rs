use std::error::Error;
use std::num::TryFromIntError;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

use textbook_collections::collections::avl_tree::AvlTreeMap;
use textbook_collections::collections::binary_tree::BinaryTreeMap;
use textbook_collections::collections::hash::{HashMap, HashSet};
use textbook_collections::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use textbook_collections::collections::lru::LruCache;
use textbook_collections::collections::trie::Trie;

use crate::cli::{Command, DemoOptions};

type DemoResult = Result<(), Box<dyn Error>>;

const DEMOS: [(Command, fn(&DemoOptions) -> DemoResult); 7] = [
    (Command::Hash, hash),
    (Command::Singly, singly),
    (Command::Doubly, doubly),
    (Command::Bst, bst),
    (Command::Avl, avl),
    (Command::Trie, trie),
    (Command::Lru, lru),
];

const SENTENCE: &str = "the quick brown fox jumps over the lazy dog and the dog sleeps";

const WORDS: [&str; 10] = [
    "car", "card", "care", "careful", "cart", "cat", "dog", "dodge", "door", "do",
];

pub fn run(command: Command, options: &DemoOptions) -> DemoResult {
    for (demo, run_demo) in DEMOS {
        if command == demo || command == Command::All {
            info!(size = options.size, seed = options.seed, "running {demo:?} demonstration");
            run_demo(options)?;
            println!();
        }
    }
    Ok(())
}

/// The numbers `1..=size` in an order determined by the seed.
fn shuffled(options: &DemoOptions) -> Result<Vec<u32>, TryFromIntError> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut values = (1..=u32::try_from(options.size)?).collect::<Vec<_>>();
    values.shuffle(&mut rng);
    Ok(values)
}

fn hash(options: &DemoOptions) -> DemoResult {
    println!("[HashMap]");
    let mut counts = HashMap::<&str, usize>::new();
    for word in SENTENCE.split_whitespace() {
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => { counts.insert(word, 1); },
        }
    }
    println!("word counts: {counts}");
    println!(
        "len: {}, buckets: {}, load factor: {:.2}, longest chain: {}",
        counts.len(),
        counts.cap(),
        counts.load_factor(),
        counts.longest_chain()
    );
    println!("\"the\" lives in bucket {}", counts.bucket_index("the")?);
    println!("removed \"dog\": {:?}, get \"dog\": {:?}", counts.remove("dog"), counts.get("dog"));

    println!("[HashSet]");
    let set = shuffled(options)?.into_iter().map(|n| n % 5).collect::<HashSet<_>>();
    println!("distinct remainders mod 5: {set} ({} of {})", set.len(), options.size);
    Ok(())
}

fn singly(options: &DemoOptions) -> DemoResult {
    println!("[SinglyLinkedList]");
    let mut list = shuffled(options)?.into_iter().collect::<SinglyLinkedList<_>>();
    println!("shuffled: {list}");
    println!("middle: {:?}, second from back: {:?}", list.middle(), list.nth_from_back(1));

    list.sort();
    println!("sorted: {list}");
    list.reverse();
    println!("reversed: {list}");
    println!("removed third from back: {:?}", list.remove_nth_from_back(2));

    let evens = (0..10).step_by(2).collect::<SinglyLinkedList<u32>>();
    let odds = (1..10).step_by(2).collect::<SinglyLinkedList<u32>>();
    println!("merged: {}", evens.merge_sorted(odds));

    let mut repeated = [1, 1, 2, 3, 3, 3, 4].into_iter().collect::<SinglyLinkedList<_>>();
    repeated.dedup();
    println!("deduplicated: {repeated}");

    let mut palindrome = [1, 2, 3, 2, 1].into_iter().collect::<SinglyLinkedList<_>>();
    let is_palindrome = palindrome.is_palindrome();
    println!("{palindrome} is a palindrome: {is_palindrome}");

    if let Err(err) = list.try_get(list.len()) {
        println!("indexing past the end: {err}");
    }
    Ok(())
}

fn doubly(options: &DemoOptions) -> DemoResult {
    println!("[DoublyLinkedList]");
    let mut list = DoublyLinkedList::new();
    let handles = shuffled(options)?
        .into_iter()
        .map(|value| list.push_back(value))
        .collect::<Vec<_>>();
    println!("list: {list}");
    println!("backwards: {:?}", list.iter().rev().collect::<Vec<_>>());

    if let (Some(&first), Some(&last)) = (handles.first(), handles.last()) {
        list.move_to_front(last)?;
        println!("moved last node to the front: {list}");
        println!("removed first pushed node: {:?}", list.remove_node(first));
        println!("its handle now finds: {:?}", list.node(first));
    }

    list.reverse();
    println!("reversed: {list}");
    Ok(())
}

fn bst(options: &DemoOptions) -> DemoResult {
    println!("[BinaryTreeMap]");
    let mut map = shuffled(options)?
        .into_iter()
        .map(|key| (key, key * key))
        .collect::<BinaryTreeMap<_, _>>();
    println!("{map:?}");
    println!("height: {}", map.height());
    println!("in-order: {:?}", map.keys().collect::<Vec<_>>());
    println!("pre-order: {:?}", map.pre_order().map(|e| e.0).collect::<Vec<_>>());
    println!("post-order: {:?}", map.post_order().map(|e| e.0).collect::<Vec<_>>());
    println!("level-order: {:?}", map.level_order().map(|e| e.0).collect::<Vec<_>>());
    println!("min: {:?}, max: {:?}", map.first_entry(), map.last_entry());

    if let Some(root) = map.level_order().next().map(|e| *e.0) {
        map.remove(&root);
        println!("removed root {root}, new root: {:?}", map.level_order().next().map(|e| e.0));
    }
    println!("still ordered: {}", map.is_valid());

    let sorted = (1..=u32::try_from(options.size)?)
        .map(|key| (key, ()))
        .collect::<BinaryTreeMap<_, _>>();
    println!("height after sorted insertion: {}", sorted.height());
    Ok(())
}

fn avl(options: &DemoOptions) -> DemoResult {
    println!("[AvlTreeMap]");
    let mut map = (1..=u32::try_from(options.size)?)
        .map(|key| (key, ()))
        .collect::<AvlTreeMap<_, _>>();
    println!("{map:?}");
    println!(
        "height after sorted insertion: {}, balance factor: {}",
        map.height(),
        map.balance_factor()
    );
    println!("level-order: {:?}", map.level_order().map(|e| e.0).collect::<Vec<_>>());

    for key in shuffled(options)?.into_iter().take(options.size / 2) {
        map.remove(&key);
    }
    println!("after removing half: {map}");
    println!("height: {}, balanced: {}", map.height(), map.is_balanced());
    Ok(())
}

fn trie(_options: &DemoOptions) -> DemoResult {
    println!("[Trie]");
    let mut trie = WORDS.into_iter().collect::<Trie>();
    println!("words: {trie}");
    println!("contains \"car\": {}, contains \"ca\": {}", trie.contains("car"), trie.contains("ca"));
    println!("starts with \"do\": {}", trie.starts_with("do"));
    println!(
        "words starting with \"car\" ({}): {:?}",
        trie.count_prefix("car"),
        trie.words_with_prefix("car").collect::<Vec<_>>()
    );

    trie.remove("careful");
    println!("after removing \"careful\": {trie}");

    let common = ["interview", "internet", "interval"].into_iter().collect::<Trie>();
    println!("longest common prefix of {common}: {:?}", common.longest_common_prefix());
    Ok(())
}

fn lru(options: &DemoOptions) -> DemoResult {
    println!("[LruCache]");
    let mut cache = LruCache::try_new(options.size / 4)?;
    println!("capacity: {}", cache.cap());

    for key in shuffled(options)? {
        // Look at a few keys again so that they're protected from eviction.
        if key % 3 == 0 {
            cache.get(&(key / 3));
        }
        if let Some((evicted, _)) = cache.put(key, key * 10) {
            println!("put {key}, evicted {evicted}");
        }
    }

    println!("most to least recently used: {cache}");
    println!("next to be evicted: {:?}", cache.peek_lru());
    Ok(())
}
