//! A plain (unbalanced) binary search tree, [`BinaryTreeMap`].
//!
//! Nothing is done to keep the tree balanced, so inserting keys in sorted order produces a tree
//! that is really a linked list. See [`avl_tree`](crate::collections::avl_tree) for the balanced
//! version.

pub mod map;

#[doc(inline)]
pub use map::BinaryTreeMap;
