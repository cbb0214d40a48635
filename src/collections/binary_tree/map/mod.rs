//! A module containing [`BinaryTreeMap`], its nodes and its iterators.
//!
//! The iterators cover the four usual traversals: in-order ([`Iter`], also used for
//! [`Keys`]/[`Values`] and owned iteration), [`PreOrder`], [`PostOrder`] and [`LevelOrder`].

mod binary_tree_map;
mod iter;
mod node;
mod tests;

pub use binary_tree_map::*;
pub use iter::*;
pub(crate) use node::*;
