//! A module containing [`Trie`], a prefix tree of strings, and its iterator.
//!
//! Each node's children are kept in an [`AvlTreeMap`](crate::collections::avl_tree::AvlTreeMap)
//! keyed by `char`, so words always come out in ascending order.

mod iter;
mod node;
mod tests;
mod trie;

pub use iter::*;
pub(crate) use node::*;
pub use trie::*;
