use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::collections::traits::{BinaryNode, IntoParts, SplitMut};
use crate::util::option::OptionExtension;

pub(crate) struct Branch<K: Ord, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K: Ord, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
    /// The height of the subtree rooted at this node, where a leaf has a height of 1.
    pub height: usize,
}

impl<K: Ord, V> Node<K, V> {
    pub fn leaf(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
            height: 1,
        })
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Recalculates the cached height from the heights of the children, which must be up to date.
    pub fn update_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    /// The height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }
}

/// Rotates the subtree right, so that the left child becomes its root.
/// ```text
///       node            pivot
///      /    \          /     \
///   pivot    c   ->   a      node
///   /   \                   /    \
///  a     b                 b      c
/// ```
fn rotate_right<K: Ord, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };

    node.left = Branch(pivot.right.take());
    node.update_height();
    pivot.right = Branch(Some(node));
    pivot.update_height();

    trace!(height = pivot.height, "rotated avl subtree right");
    pivot
}

/// Rotates the subtree left, so that the right child becomes its root. The mirror image of
/// [`rotate_right`].
fn rotate_left<K: Ord, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };

    node.right = Branch(pivot.left.take());
    node.update_height();
    pivot.left = Branch(Some(node));
    pivot.update_height();

    trace!(height = pivot.height, "rotated avl subtree left");
    pivot
}

/// Restores the balance of a node whose children are balanced but may differ in height by two.
fn rebalanced<K: Ord, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-right case, the left child leans the other way and has to be straightened first.
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = Branch(node.left.take().map(rotate_left));
        }
        rotate_right(node)
    } else if balance < -1 {
        // Right-left case.
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = Branch(node.right.take().map(rotate_right));
        }
        rotate_left(node)
    } else {
        node
    }
}

impl<K: Ord, V> Branch<K, V> {
    pub fn height(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.height)
    }

    /// Rebalances the node at the top of this branch, if there is one.
    pub fn rebalance(&mut self) {
        if let Some(node) = self.0.take() {
            self.0 = Some(rebalanced(node));
        }
    }

    /// Inserts the entry below this branch, rebalancing every node on the way back up. Returns the
    /// old value if the key was already present, in which case the shape of the tree is unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = match &mut self.0 {
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key, value),
                Ordering::Greater => node.right.insert(key, value),
                Ordering::Equal => Some(mem::replace(&mut node.value, value)),
            },
            None => {
                self.0 = Some(Node::leaf(key, value));
                return None;
            },
        };

        if replaced.is_none() {
            self.rebalance();
        }
        replaced
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_mut()?;
        let removed = match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.remove_entry(key)?,
            Ordering::Greater => node.right.remove_entry(key)?,
            Ordering::Equal => self.take_root()?,
        };

        self.rebalance();
        Some(removed)
    }

    /// Removes the node at the top of this branch, replacing it with its in-order successor if it
    /// has two children. The replacement is left for the caller to rebalance.
    fn take_root(&mut self) -> Option<(K, V)> {
        let Node { left, mut right, key, value, .. } = *self.0.take()?;

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

    /// Detaches the node with the smallest key below this branch, rebalancing the path to it. The
    /// returned node has no children and a stale height.
    pub fn take_first_node(&mut self) -> Option<Box<Node<K, V>>> {
        let node = self.0.as_mut()?;
        let first = if node.left.is_some() {
            node.left.take_first_node()
        } else {
            let mut node = self.0.take()?;
            self.0 = node.right.0.take();
            Some(node)
        };

        self.rebalance();
        first
    }

    /// Detaches the node with the largest key below this branch, rebalancing the path to it.
    pub fn take_last_node(&mut self) -> Option<Box<Node<K, V>>> {
        let node = self.0.as_mut()?;
        let last = if node.right.is_some() {
            node.right.take_last_node()
        } else {
            let mut node = self.0.take()?;
            self.0 = node.left.0.take();
            Some(node)
        };

        self.rebalance();
        last
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

    /// Checks every node below this branch, returning its real height if the keys are ordered
    /// within `(lower, upper)`, every cached height is correct and every balance factor is within
    /// [-1, 1].
    pub fn checked_height(&self, lower: Option<&K>, upper: Option<&K>) -> Option<usize> {
        let Some(node) = &self.0 else {
            return Some(0);
        };

        if lower.is_some_and(|lower| *lower >= node.key)
            || upper.is_some_and(|upper| *upper <= node.key)
        {
            return None;
        }

        let left = node.left.checked_height(lower, Some(&node.key))?;
        let right = node.right.checked_height(Some(&node.key), upper)?;
        let height = 1 + left.max(right);

        (height == node.height && left.abs_diff(right) <= 1).then_some(height)
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

impl<K: Ord + Clone, V: Clone> Clone for Branch<K, V> {
    fn clone(&self) -> Self {
        Branch(self.0.as_ref().map(|node| {
            Box::new(Node {
                left: node.left.clone(),
                right: node.right.clone(),
                key: node.key.clone(),
                value: node.value.clone(),
                height: node.height,
            })
        }))
    }
}

/// Draws the tree sideways, with each node's height after its entry.
impl<K: Ord + Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?}) h{}\n{}",
                indent(&node.left, "┌    "),
                node.key,
                node.value,
                node.height,
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
