use std::fmt::{self, Debug, Display, Formatter};

use super::{TrieNode, Words};
use crate::util::option::OptionExtension;

/// A set of strings stored as a prefix tree.
///
/// Each node represents a prefix, with one child per character that can follow it. Words sharing a
/// prefix share the nodes for it, so looking up a word or prefix costs `O(m log a)`, where `m` is
/// its length in characters and `a` is the number of distinct characters following any one prefix.
/// That cost doesn't depend on how many words are stored.
///
/// Every node also counts the words below it, which makes [`count_prefix`](Trie::count_prefix)
/// `O(m log a)` as well. When a word is removed, nodes that no longer lead to any word are pruned.
///
/// The empty string is a valid word, stored at the root.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
}

impl Trie {
    /// Creates a new, empty Trie.
    pub const fn new() -> Trie {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Returns the number of distinct words in the Trie.
    pub const fn len(&self) -> usize {
        self.root.words
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `word` to the Trie, returning true if it wasn't already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        let mut node = &mut self.root;
        node.words += 1;
        for c in word.chars() {
            node = node.children.get_or_insert_with(c, TrieNode::new);
            node.words += 1;
        }
        node.terminal = true;
        true
    }

    /// Returns true if `word` itself is in the Trie, as opposed to only being a prefix of a word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminal)
    }

    /// Returns true if any word in the Trie starts with `prefix`, (including `prefix` itself).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.count_prefix(prefix) > 0
    }

    /// Returns the number of words in the Trie that start with `prefix`.
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.find(prefix).map_or(0, |node| node.words)
    }

    /// Removes `word` from the Trie, returning true if it was present. Any nodes left without a word
    /// below them are removed along with it.
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.contains(word) {
            return false;
        }

        let mut node = &mut self.root;
        node.words -= 1;
        for c in word.chars() {
            if node.children.get(&c).is_some_and(|child| child.words == 1) {
                // The word being removed is the only one below this child.
                node.children.remove(&c);
                return true;
            }
            // The word is present, so every node on its path exists.
            node = node.children.get_mut(&c).unreachable();
            node.words -= 1;
        }
        node.terminal = false;
        true
    }

    /// Returns an iterator over every word in the Trie that starts with `prefix`, in ascending
    /// order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        match self.find(prefix) {
            Some(node) => Words::new(String::from(prefix), node),
            None => Words::empty(),
        }
    }

    /// Returns an iterator over every word in the Trie, in ascending order.
    pub fn words(&self) -> Words<'_> {
        self.into_iter()
    }

    /// Returns the longest prefix shared by every word in the Trie. This is empty if the Trie is.
    pub fn longest_common_prefix(&self) -> String {
        let mut prefix = String::new();
        let mut node = &self.root;

        // Stop at the first word end or branch, where the words stop agreeing.
        while !node.terminal && node.children.len() == 1 {
            let Some((c, child)) = node.children.first_entry() else {
                break;
            };
            prefix.push(*c);
            node = child;
        }

        prefix
    }

    /// Removes every word from the Trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("words", &self.words().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}
