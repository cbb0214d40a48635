//! A module containing [`AvlTreeMap`], its nodes and its iterators.

mod avl_tree_map;
mod iter;
mod node;
mod tests;

pub use avl_tree_map::*;
pub use iter::*;
pub(crate) use node::*;
