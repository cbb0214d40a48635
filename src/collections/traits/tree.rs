//! Traversals over boxed binary trees.
//!
//! Both [`BinaryTreeMap`](crate::collections::binary_tree::BinaryTreeMap) and
//! [`AvlTreeMap`](crate::collections::avl_tree::AvlTreeMap) store their entries in nodes with an
//! optional boxed child on each side. Anything that only cares about that shape (iteration order,
//! height, checking the ordering) is written once here against [`BinaryNode`]. Every traversal uses
//! an explicit stack or queue, so none of them are limited by the depth of the tree.

use std::collections::VecDeque;
use std::iter::FusedIterator;

/// A node of a binary tree holding a single key-value entry.
pub(crate) trait BinaryNode: Sized {
    type Key;
    type Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    fn entry(&self) -> (&Self::Key, &Self::Value);

    /// Borrows both children and the entry at once, with the value borrowed mutably.
    fn split_mut(&mut self) -> SplitMut<'_, Self>;

    /// Consumes the node, returning its children and entry.
    fn into_parts(self) -> IntoParts<Self>;
}

pub(crate) type SplitMut<'a, N> = (
    Option<&'a mut N>,
    (&'a <N as BinaryNode>::Key, &'a mut <N as BinaryNode>::Value),
    Option<&'a mut N>,
);

pub(crate) type IntoParts<N> = (
    Option<Box<N>>,
    (<N as BinaryNode>::Key, <N as BinaryNode>::Value),
    Option<Box<N>>,
);

/// Returns the number of nodes on the longest path from `root` down to a leaf, found one level at
/// a time. An empty tree has height 0.
pub(crate) fn height<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut height = 0;
    let mut level = root.into_iter().collect::<Vec<_>>();

    while !level.is_empty() {
        height += 1;
        level = level.into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }

    height
}

/// Returns true if an in-order walk of the tree produces strictly ascending keys.
pub(crate) fn is_strictly_ascending<N>(root: Option<&N>) -> bool
where
    N: BinaryNode,
    N::Key: Ord,
{
    let mut keys = InOrder::new(root, 0).map(|(key, _)| key);
    let Some(mut prev) = keys.next() else {
        return true;
    };

    for key in keys {
        if prev >= key {
            return false;
        }
        prev = key;
    }
    true
}

/// An in-order traversal, (left subtree, node, right subtree). For a search tree this visits keys
/// in ascending order.
pub(crate) struct InOrder<'a, N> {
    stack: Vec<&'a N>,
    len: usize,
}

impl<'a, N: BinaryNode> InOrder<'a, N> {
    /// Creates a traversal starting at `root`. `len` is the number of nodes in the tree, which is
    /// only used for size hints.
    pub fn new(root: Option<&'a N>, len: usize) -> InOrder<'a, N> {
        let mut iter = InOrder {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(curr) = node {
            self.stack.push(curr);
            node = curr.left();
        }
    }
}

impl<'a, N: BinaryNode> Iterator for InOrder<'a, N> {
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.len = self.len.saturating_sub(1);
        Some(node.entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<N: BinaryNode> FusedIterator for InOrder<'_, N> {}

impl<N> Clone for InOrder<'_, N> {
    fn clone(&self) -> Self {
        InOrder {
            stack: self.stack.clone(),
            len: self.len,
        }
    }
}

/// An in-order traversal that yields values mutably. Each node is split as the traversal reaches
/// it, and only the part that is still to come (its right subtree) is kept on the stack.
pub(crate) struct InOrderMut<'a, N: BinaryNode> {
    stack: Vec<((&'a N::Key, &'a mut N::Value), Option<&'a mut N>)>,
    len: usize,
}

impl<'a, N: BinaryNode> InOrderMut<'a, N> {
    pub fn new(root: Option<&'a mut N>, len: usize) -> InOrderMut<'a, N> {
        let mut iter = InOrderMut {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a mut N>) {
        while let Some(curr) = node {
            let (left, entry, right) = curr.split_mut();
            self.stack.push((entry, right));
            node = left;
        }
    }
}

impl<'a, N: BinaryNode> Iterator for InOrderMut<'a, N> {
    type Item = (&'a N::Key, &'a mut N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let (entry, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.len = self.len.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<N: BinaryNode> FusedIterator for InOrderMut<'_, N> {}

/// An owned in-order traversal, which takes the tree apart as it goes.
pub(crate) struct IntoInOrder<N: BinaryNode> {
    stack: Vec<((N::Key, N::Value), Option<Box<N>>)>,
    len: usize,
}

impl<N: BinaryNode> IntoInOrder<N> {
    pub fn new(root: Option<Box<N>>, len: usize) -> IntoInOrder<N> {
        let mut iter = IntoInOrder {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<Box<N>>) {
        while let Some(curr) = node {
            let (left, entry, right) = curr.into_parts();
            self.stack.push((entry, right));
            node = left;
        }
    }
}

impl<N: BinaryNode> Iterator for IntoInOrder<N> {
    type Item = (N::Key, N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let (entry, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.len = self.len.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<N: BinaryNode> FusedIterator for IntoInOrder<N> {}

impl<N: BinaryNode> Drop for IntoInOrder<N> {
    fn drop(&mut self) {
        // Subtrees still on the stack are taken apart node by node instead of through the nested
        // drops of their boxes.
        self.for_each(drop);
    }
}

/// A pre-order traversal, (node, left subtree, right subtree).
pub(crate) struct PreOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> PreOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> PreOrder<'a, N> {
        PreOrder {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for PreOrder<'a, N> {
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first, so that the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.entry())
    }
}

impl<N: BinaryNode> FusedIterator for PreOrder<'_, N> {}

/// A post-order traversal, (left subtree, right subtree, node).
pub(crate) struct PostOrder<'a, N> {
    // The flag records whether the node's children have already been pushed.
    stack: Vec<(&'a N, bool)>,
}

impl<'a, N: BinaryNode> PostOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> PostOrder<'a, N> {
        PostOrder {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for PostOrder<'a, N> {
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.entry());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<N: BinaryNode> FusedIterator for PostOrder<'_, N> {}

/// A level-order (breadth first) traversal, visiting each level from left to right.
pub(crate) struct LevelOrder<'a, N> {
    queue: VecDeque<&'a N>,
}

impl<'a, N: BinaryNode> LevelOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> LevelOrder<'a, N> {
        LevelOrder {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, N: BinaryNode> Iterator for LevelOrder<'a, N> {
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.entry())
    }
}

impl<N: BinaryNode> FusedIterator for LevelOrder<'_, N> {}
