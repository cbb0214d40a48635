use std::iter::FusedIterator;

use super::{Trie, TrieNode};

impl<'a> IntoIterator for &'a Trie {
    type Item = String;

    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Words::new(String::new(), &self.root)
    }
}

/// An iterator over the words of a [`Trie`] in ascending order, each built as the iterator reaches
/// it.
pub struct Words<'a> {
    // Each entry holds a node and the prefix it spells. Children are pushed in descending order so
    // that the smallest is visited next.
    stack: Vec<(String, &'a TrieNode)>,
    remaining: usize,
}

impl<'a> Words<'a> {
    pub(crate) fn new(prefix: String, node: &'a TrieNode) -> Words<'a> {
        Words {
            remaining: node.words,
            stack: vec![(prefix, node)],
        }
    }

    pub(crate) const fn empty() -> Words<'a> {
        Words {
            stack: Vec::new(),
            remaining: 0,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, node) = self.stack.pop()?;

            let children = node.children.iter().collect::<Vec<_>>();
            for (c, child) in children.into_iter().rev() {
                let mut word = prefix.clone();
                word.push(*c);
                self.stack.push((word, child));
            }

            if node.terminal {
                self.remaining -= 1;
                return Some(prefix);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Words<'_> {}

impl FusedIterator for Words<'_> {}
