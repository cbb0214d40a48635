use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use tracing::debug;

use super::{IndexNoCap, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Collisions are resolved with separate chaining: each bucket holds every entry whose key hashes
/// to it, so a bucket can hold any number of entries and removal never has to shuffle entries
/// between buckets. A custom load factor is not supported at this point, with the default being
/// 4/5 entries per bucket.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `c`: The length of the chain in the bucket for the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// With a reasonable hasher, `c` stays close to the load factor, making these operations `O(1)`
/// on average.
///
/// \* If the HashMap doesn't have enough capacity for the new element, `insert` will take `O(n)` to
/// rehash every entry into a larger bucket array.
///
/// \** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Box<[Chain<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

/// All entries which hash to the same bucket.
pub(crate) type Chain<K, V> = Vec<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }

    /// Creates a new HashMap with the provided `cap`acity (the number of buckets). The default
    /// hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(0, hasher)
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: empty_buckets(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap, which is the number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the average number of entries per bucket, or 0 if there are no buckets.
    pub fn load_factor(&self) -> f64 {
        match self.cap() {
            0 => 0.0,
            cap => self.len as f64 / cap as f64,
        }
    }

    /// Returns the length of the longest chain in the HashMap. With a good hasher this stays
    /// small, a long chain means that many keys are colliding.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            // Replace the value with the provided one.
            return Some(mem::replace(existing, value));
        }

        if self.should_grow() {
            self.grow()
        }

        // UNREACHABLE: We've just grown if necessary, so the capacity isn't 0.
        let index = self.bucket_index(&key).throw();
        // Add a new entry to the end of the chain.
        self.buckets[index].push((key, value));
        self.len += 1;
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chain_for(key)?
            .iter()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key).ok()?;

        self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key).ok()?;
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|(existing, _)| existing.borrow() == key)?;

        // Order within a chain doesn't matter, so the last entry can fill the gap.
        self.len -= 1;
        Some(chain.swap_remove(position))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a `usize`.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len
            .checked_add(extra)
            .and_then(|total| total.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .ok_or(CapacityOverflow)
            .throw()
            / LOAD_FACTOR_NUMERATOR
            + 1;
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Removes every entry from the HashMap, keeping the allocated buckets.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Calculates the index of the bucket that the provided `key` belongs in, returning an
    /// [`Err`] if the HashMap has no buckets yet.
    pub fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> Result<usize, IndexNoCap> {
        let key_hash = self.hasher.hash_one(key);
        key_hash.checked_rem(self.cap() as u64)
            .map(|i| i as usize)
            .ok_or(IndexNoCap)
    }

    /// Returns and iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns and iterator over all key-value pairs in the HashMap, with the values as mutable
    /// references.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns and iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns and iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns and iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length has reached the load capacity, suggesting that it
    /// should grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.cap() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_ALLOCATED_CAP,
        );

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have `new_cap` buckets, rehashing every entry into its new
    /// bucket. Shrinking to 0 buckets isn't possible while entries remain.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap == 0 && self.len > 0 { return; }

        debug!(old_cap = self.cap(), new_cap, len = self.len, "rehashing hash map");

        // Replace the buckets first so that we can consume the old ones.
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_cap));

        for (key, value) in old_buckets.into_iter().flatten() {
            // UNREACHABLE: If the new capacity is 0, there are no entries and we can't enter this
            // loop.
            let index = self.bucket_index(&key).throw();

            self.buckets[index].push((key, value));
        }
    }

    /// Returns the chain that `key` would be stored in, or None if there are no buckets.
    pub(crate) fn chain_for<Q: Hash + ?Sized>(&self, key: &Q) -> Option<&Chain<K, V>> {
        let index = self.bucket_index(key).ok()?;
        Some(&self.buckets[index])
    }
}

fn empty_buckets<K, V>(cap: usize) -> Box<[Chain<K, V>]> {
    iter::repeat_with(Vec::new).take(cap).collect()
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter()
            .map(|chain| DebugRaw(match chain.is_empty() {
                true => "-".into(),
                false => chain.iter()
                    .map(|(k, v)| format!("({k:?}: {v:?})"))
                    .collect::<Vec<_>>()
                    .join(" -> "),
            }))
            .collect::<Vec<_>>();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
