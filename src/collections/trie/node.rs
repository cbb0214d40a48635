use crate::collections::avl_tree::AvlTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub children: AvlTreeMap<char, TrieNode>,
    /// Whether the path to this node spells a word.
    pub terminal: bool,
    /// The number of words that pass through or end at this node.
    pub words: usize,
}

impl TrieNode {
    pub const fn new() -> TrieNode {
        TrieNode {
            children: AvlTreeMap::new(),
            terminal: false,
            words: 0,
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // A long word is a long chain of nodes, so the nodes below are detached onto a stack and
        // each one is dropped once it has no children left.
        let mut stack = Vec::new();
        while let Some((_, child)) = self.children.take_first_entry() {
            stack.push(child);
        }

        while let Some(mut node) = stack.pop() {
            while let Some((_, child)) = node.children.take_first_entry() {
                stack.push(child);
            }
        }
    }
}
