use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, IterMut, Keys, LevelOrder, PostOrder, PreOrder, Values, ValuesMut};
use crate::collections::traits::{self, InOrder, InOrderMut};

/// An ordered map stored as a binary search tree.
///
/// Every key in a node's left subtree is less than the node's key and every key in its right
/// subtree is greater. No rebalancing is done, so the cost of each operation depends on the height
/// of the tree: `O(log n)` for random insertion orders, but `O(n)` in the worst case, (e.g. when
/// keys are inserted in ascending order).
///
/// # Removal
/// Removing a node with two children moves its in-order successor, the smallest key in its right
/// subtree, into its place. Both subtrees are always kept.
pub struct BinaryTreeMap<K: Ord, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K: Ord, V> BinaryTreeMap<K, V> {
    /// Creates a new, empty BinaryTreeMap.
    pub const fn new() -> BinaryTreeMap<K, V> {
        BinaryTreeMap {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a new entry into the map, returning the old value if the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let result = self.root.insert(key, value);
        if result.is_none() {
            self.len += 1;
        }
        result
    }

    /// Removes the entry with the provided key, returning it if it was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let result = self.root.remove_entry(key);
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(key)
    }

    /// Returns the entry with the smallest key.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    pub fn first(&self) -> Option<&V> {
        self.first_entry().map(|e| e.1)
    }

    /// Returns the entry with the largest key.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    pub fn last(&self) -> Option<&V> {
        self.last_entry().map(|e| e.1)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_first_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    pub fn take_first(&mut self) -> Option<V> {
        self.take_first_entry().map(|e| e.1)
    }

    /// Removes and returns the entry with the largest key.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_last_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    pub fn take_last(&mut self) -> Option<V> {
        self.take_last_entry().map(|e| e.1)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree with a single node has a height of 1.
    pub fn height(&self) -> usize {
        traits::height(self.root.as_deref())
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        // Dropping the entries one at a time keeps a degenerate tree from overflowing the stack.
        traits::IntoInOrder::new(self.root.take(), self.len).for_each(drop);
        self.len = 0;
    }

    /// Checks the search tree ordering of every node, along with the stored length.
    pub fn is_valid(&self) -> bool {
        traits::is_strictly_ascending(self.root.as_deref()) && self.iter().count() == self.len
    }

    /// Returns an iterator over all entries in ascending order of their keys.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in ascending order, with mutable references to values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(InOrder::new(self.root.as_deref(), self.len))
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(InOrder::new(self.root.as_deref(), self.len))
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(InOrderMut::new(self.root.as_deref_mut(), self.len))
    }

    /// Returns an iterator visiting each node before either of its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder(traits::PreOrder::new(self.root.as_deref()))
    }

    /// Returns an iterator visiting each node after both of its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        PostOrder(traits::PostOrder::new(self.root.as_deref()))
    }

    /// Returns an iterator visiting the nodes one level at a time, starting at the root.
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder(traits::LevelOrder::new(self.root.as_deref()))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BinaryTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinaryTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> Default for BinaryTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Drop for BinaryTreeMap<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Ord, V: PartialEq> PartialEq for BinaryTreeMap<K, V> {
    /// Two maps are equal if they hold the same entries, regardless of the shape of their trees.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for BinaryTreeMap<K, V> {}

impl<K: Ord + Debug, V: Debug> Debug for BinaryTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeMap")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Debug, V: Debug> Display for BinaryTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
