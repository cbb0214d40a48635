use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, IterMut, Keys, LevelOrder, Values, ValuesMut};
use crate::collections::traits::{self, InOrder, InOrderMut};
use crate::util::option::OptionExtension;

/// An ordered map stored as an AVL tree, a binary search tree that rebalances itself.
///
/// Every node stores the height of its subtree. After an insertion or removal, each node on the
/// path back to the root is checked, and if its two subtrees differ in height by more than one, it
/// is fixed with a single or double rotation. This keeps the height of the tree at most roughly
/// `1.44 * log2(n)`, so lookups, insertions and removals are all `O(log n)`.
///
/// Rotations are reported through `tracing` at the `trace` level.
pub struct AvlTreeMap<K: Ord, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates a new, empty AvlTreeMap.
    pub const fn new() -> AvlTreeMap<K, V> {
        AvlTreeMap {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a new entry into the map, returning the old value if the key was already present.
    /// The tree is rebalanced if the entry is new.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let result = self.root.insert(key, value);
        if result.is_none() {
            self.len += 1;
        }
        result
    }

    /// Removes the entry with the provided key and rebalances the tree, returning the entry if it
    /// was present.
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
        self.get_entry(key).is_some()
    }

    /// Returns a mutable reference to the value for `key`, inserting the result of `default` first
    /// if the key isn't present.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V
    where
        K: Clone,
    {
        if !self.contains(&key) {
            self.insert(key.clone(), default());
        }
        // The key was either already present or has just been inserted.
        self.get_mut(&key).unreachable()
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

    /// Removes and returns the entry with the largest key.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_last_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    /// Returns the height of the tree, read from the root in `O(1)`. An empty tree has a height of
    /// 0.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns the height of the root's left subtree minus the height of its right subtree. This is
    /// always within [-1, 1].
    pub fn balance_factor(&self) -> isize {
        self.root.as_ref().map_or(0, |root| root.balance_factor())
    }

    /// Walks the whole tree, checking the search tree ordering, every cached height and every
    /// balance factor, along with the stored length.
    pub fn is_balanced(&self) -> bool {
        self.root.checked_height(None, None).is_some() && self.iter().count() == self.len
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns an iterator over all entries in ascending order of their keys.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

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

    /// Returns an iterator visiting the nodes one level at a time, starting at the root. Useful for
    /// seeing the shape the rotations have produced.
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder(traits::LevelOrder::new(self.root.as_deref()))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AvlTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for AvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        AvlTreeMap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: Ord, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K: Ord + Debug, V: Debug> Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTreeMap")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Debug, V: Debug> Display for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
