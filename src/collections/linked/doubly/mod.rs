//! A module containing [`DoublyLinkedList`], its node handles and iterators.
//!
//! Nodes are stored in an arena owned by the list and refer to each other by [`NodeIndex`] rather
//! than by pointer. A NodeIndex handed out by the list stays valid until its node is removed, which
//! allows O(1) removal and reordering of a known node, (see [`DoublyLinkedList::move_to_front`]).

mod arena;
mod doubly_linked_list;
mod iter;
mod length;
mod tests;

pub use arena::{NodeIndex, StaleNodeIndex};
pub(crate) use arena::{Arena, Node, SplitNode};
pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
