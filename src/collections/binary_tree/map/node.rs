use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::traits::{BinaryNode, IntoParts, SplitMut};
use crate::util::option::OptionExtension;

pub(crate) struct Branch<K: Ord, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K: Ord, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K: Ord, V> Node<K, V> {
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: Ord, V> Branch<K, V> {
    /// Inserts the entry below this branch, returning the old value if the key was already present.
    /// The existing key is kept in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let branch = self.seek_mut(&key);
        if let Some(node) = &mut branch.0 {
            return Some(mem::replace(&mut node.value, value));
        }

        branch.0 = Some(Box::new(Node {
            left: None.into(),
            right: None.into(),
            key,
            value,
        }));
        None
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.seek_mut(key).take_root()
    }

    /// Walks down from this branch to the one holding `key`, or the empty branch where it would be
    /// inserted.
    fn seek_mut<Q>(&mut self, key: &Q) -> &mut Branch<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        loop {
            let Some(node) = branch.0.as_deref() else {
                return branch;
            };
            let ordering = key.cmp(node.key.borrow());
            if ordering == Ordering::Equal {
                return branch;
            }

            // UNREACHABLE: The branch was just found to hold a node.
            let node = branch.0.as_deref_mut().unreachable();
            branch = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Removes the node at the top of this branch, keeping both of its subtrees. With two children,
    /// the node's in-order successor (the smallest key on its right) is moved up into its place.
    fn take_root(&mut self) -> Option<(K, V)> {
        let Node { left, mut right, key, value } = *self.0.take()?;

        self.0 = match (left.0, right.is_some()) {
            (None, _) => right.0,
            (left, false) => left,
            (left, true) => {
                // The right branch isn't empty, so it has a first node.
                let mut successor = right.take_first_node().unreachable();
                successor.left = Branch(left);
                successor.right = right;
                Some(successor)
            },
        };

        Some((key, value))
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.0.as_deref();
        while let Some(node) = curr {
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.tuple()),
            };
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.0.as_deref_mut();
        while let Some(node) = curr {
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.tuple())
    }

    /// Detaches the node with the smallest key below this branch. Its right subtree, (it can't have
    /// a left one) takes its place.
    pub fn take_first_node(&mut self) -> Option<Box<Node<K, V>>> {
        let mut branch = self;
        while branch.0.as_ref()?.left.is_some() {
            // UNREACHABLE: The loop condition has just checked that the branch holds a node.
            branch = &mut branch.0.as_deref_mut().unreachable().left;
        }

        let mut node = branch.0.take()?;
        branch.0 = node.right.0.take();
        Some(node)
    }

    /// Detaches the node with the largest key below this branch, putting its left subtree in its
    /// place.
    pub fn take_last_node(&mut self) -> Option<Box<Node<K, V>>> {
        let mut branch = self;
        while branch.0.as_ref()?.right.is_some() {
            // UNREACHABLE: The loop condition has just checked that the branch holds a node.
            branch = &mut branch.0.as_deref_mut().unreachable().right;
        }

        let mut node = branch.0.take()?;
        branch.0 = node.left.0.take();
        Some(node)
    }
}

impl<K: Ord, V> BinaryNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn entry(&self) -> (&K, &V) {
        self.tuple()
    }

    fn split_mut(&mut self) -> SplitMut<'_, Self> {
        (
            self.left.0.as_deref_mut(),
            (&self.key, &mut self.value),
            self.right.0.as_deref_mut(),
        )
    }

    fn into_parts(self) -> IntoParts<Self> {
        (self.left.0, (self.key, self.value), self.right.0)
    }
}

impl<K: Ord, V> Deref for Branch<K, V> {
    type Target = Option<Box<Node<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Ord, V> DerefMut for Branch<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Ord, V> From<Option<Box<Node<K, V>>>> for Branch<K, V> {
    fn from(value: Option<Box<Node<K, V>>>) -> Self {
        Branch(value)
    }
}

/// Draws the tree sideways, with left subtrees above their parent and right subtrees below.
impl<K: Ord + Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                indent(&node.left, "┌    "),
                node.key,
                node.value,
                indent(&node.right, "└    "),
            ),
            None => write!(f, "-"),
        }
    }
}

fn indent<K: Ord + Debug, V: Debug>(branch: &Branch<K, V>, prefix: &str) -> String {
    format!("{branch:?}")
        .lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
