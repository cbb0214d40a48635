use std::hash::{BuildHasher, Hash, Hasher};

/// A value with a hash chosen by the caller, used to force collisions in hash-based collections.
/// Equality still compares the wrapped value, so two `FixedHash`es with the same hash are distinct
/// keys in the same bucket.
#[derive(Debug, Clone)]
pub struct FixedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> FixedHash<T> {
    /// Wraps `value`, pretending that it hashes to `hash`.
    pub const fn new(hash: u64, value: T) -> FixedHash<T> {
        FixedHash {
            hash,
            value,
        }
    }

    /// Returns the wrapped value.
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for FixedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for FixedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for FixedHash<T> {}

/// A hasher that returns the last integer written to it unchanged, so bucket positions are fully
/// predictable in tests.
#[derive(Debug, Default)]
pub struct PassthroughHasher {
    state: u64,
}

impl Hasher for PassthroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

/// Builds [`PassthroughHasher`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughHasherBuilder;

impl BuildHasher for PassthroughHasherBuilder {
    type Hasher = PassthroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassthroughHasher::default()
    }
}
