use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::mem;
use std::num::NonZero;

use tracing::debug;

use super::{Iter, ZeroCapacity};
use crate::collections::hash::HashMap;
use crate::collections::linked::{DoublyLinkedList, NodeIndex};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A cache holding at most `cap` entries, which evicts the least recently used entry to make room
/// for a new one.
///
/// Entries are kept in a [`DoublyLinkedList`] ordered from most to least recently used, while a
/// [`HashMap`] maps each key to the [`NodeIndex`] of its entry. A hit moves the entry's node to the
/// front of the list and an eviction pops the back, all without searching the list.
///
/// Keys are stored twice, once in each structure, so they have to be [`Clone`].
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `get/peek` | `O(1)`* |
/// | `put` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `iter` | `O(n)` |
///
/// \* Expected, depending on the quality of the hash.
pub struct LruCache<K: Hash + Eq + Clone, V> {
    pub(crate) map: HashMap<K, NodeIndex>,
    pub(crate) order: DoublyLinkedList<(K, V)>,
    pub(crate) cap: NonZero<usize>,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Creates a new, empty LruCache able to hold `cap` entries.
    ///
    /// # Panics
    /// Panics if `cap` is zero.
    pub fn new(cap: usize) -> LruCache<K, V> {
        Self::try_new(cap).throw()
    }

    /// Creates a new, empty LruCache able to hold `cap` entries, returning an [`Err`] rather than
    /// panicking if `cap` is zero.
    pub fn try_new(cap: usize) -> Result<LruCache<K, V>, ZeroCapacity> {
        let cap = NonZero::new(cap).ok_or(ZeroCapacity)?;
        Ok(LruCache {
            map: HashMap::new(),
            order: DoublyLinkedList::new(),
            cap,
        })
    }

    /// Returns the maximum number of entries the cache can hold.
    pub const fn cap(&self) -> usize {
        self.cap.get()
    }

    pub const fn len(&self) -> usize {
        self.order.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns a reference to the value for `key`, marking it as the most recently used entry.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.touch(key)?;
        self.order.node(index).map(|entry| &entry.1)
    }

    /// Returns a mutable reference to the value for `key`, marking it as the most recently used
    /// entry.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.touch(key)?;
        self.order.node_mut(index).map(|entry| &mut entry.1)
    }

    /// Returns a reference to the value for `key` without changing how recently it was used.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.map.get(key)?;
        self.order.node(index).map(|entry| &entry.1)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains(key)
    }

    /// Inserts an entry as the most recently used one.
    ///
    /// If `key` is already present, its entry is replaced and the old one is returned. Otherwise, if
    /// the cache is full, the least recently used entry is evicted to make room and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(index) = self.touch(&key) {
            // The index came from the map, so its node is still in the list.
            let entry = self.order.node_mut(index).unreachable();
            return Some(mem::replace(entry, (key, value)));
        }

        let evicted = if self.len() >= self.cap() {
            self.pop_lru()
        } else {
            None
        };

        let index = self.order.push_front((key.clone(), value));
        self.map.insert(key, index);
        evicted
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.map.remove(key)?;
        self.order.remove_node(index).map(|entry| entry.1)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.pop_back()?;
        self.map.remove(&key);
        debug!(len = self.len(), cap = self.cap(), "evicted least recently used cache entry");
        Some((key, value))
    }

    /// Returns the least recently used entry, the next one to be evicted, without changing its
    /// position.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.back().map(|(key, value)| (key, value))
    }

    /// Removes every entry from the cache.
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    /// Returns an iterator over the entries of the cache from most to least recently used. Iterating
    /// doesn't change the order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Moves the entry for `key` to the front of the list, returning its index.
    fn touch<Q>(&mut self, key: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.map.get(key)?;
        // UNREACHABLE: Every index in the map refers to a node in the list.
        self.order.move_to_front(index).throw();
        Some(index)
    }
}

impl<K: Hash + Eq + Clone + Debug, V: Debug> Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("entries", &self.order)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K: Hash + Eq + Clone + Debug, V: Debug> Display for LruCache<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        write!(f, "]")
    }
}
