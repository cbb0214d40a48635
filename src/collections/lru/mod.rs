//! A module containing [`LruCache`], a fixed capacity cache that evicts the least recently used
//! entry, and its associated types.
//!
//! The cache is built from two of the other collections: a [`HashMap`](crate::collections::hash::HashMap)
//! finds an entry's node in `O(1)` and a [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList)
//! keeps the entries in order of use, so that both lookups and reordering are `O(1)`.

mod error;
mod iter;
mod lru_cache;

pub use error::*;
pub use iter::*;
pub use lru_cache::*;
