//! The collection types themselves, one module per structure.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also about
//! ownership of node-based structures, iterators and hashing in Rust.

#[cfg(feature = "avl-tree")]
pub mod avl_tree;
#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "lru")]
pub mod lru;
#[cfg(feature = "traits")]
pub(crate) mod traits;
#[cfg(feature = "trie")]
pub mod trie;
