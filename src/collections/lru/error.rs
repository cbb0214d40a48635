use derive_more::{Display, Error};

/// An [`LruCache`](super::LruCache) was created with a capacity of zero, which could never hold an
/// entry.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to create a cache with capacity 0!")]
pub struct ZeroCapacity;
