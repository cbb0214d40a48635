//! A set of textbook data structures, each written from scratch as interview preparation.
//!
//! # Purpose
//! Every structure here is a standard data-structures-course exercise: a hash table with separate
//! chaining, singly and doubly linked lists (with the usual two-pointer tricks), a binary search
//! tree, an AVL tree, a trie and an LRU cache built out of two of the others. Writing them helps me
//! to understand them properly rather than just knowing their complexity tables.
//!
//! # Method
//! Each collection is a leaf: it doesn't share live state with any other and can be read on its
//! own. The few places where one structure is built out of another (the trie's children are an
//! [`AvlTreeMap`](collections::avl_tree::AvlTreeMap), the LRU cache combines a
//! [`HashMap`](collections::hash::HashMap) with a
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList)) only use the public API.
//!
//! Node-based structures own their nodes. Trees and the singly linked list use `Box`ed links,
//! while the doubly linked list keeps its nodes in an index arena so that no raw pointers or
//! reference counting are needed to express links in both directions.
//!
//! # Error Handling
//! Looking up something that isn't there is not an error, it returns [`None`]. Positional methods
//! come in pairs: `try_get` returns a [`Result`] with a strongly typed error, while `get` panics
//! with that error's message. The error types are small structs implementing
//! [`Error`](std::error::Error), mostly generated with `derive_more`.
//!
//! # Logging
//! Structural events (hash table growth, AVL rotations, cache evictions) are emitted through
//! `tracing` at `debug` or `trace` level. The library never installs a subscriber, that is left to
//! the binary or the user.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CapacityOverflow, IndexOutOfBounds};
