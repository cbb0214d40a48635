//! Linked collection types: a [`SinglyLinkedList`] built out of owned boxes, with the classic
//! pointer-manipulation algorithms that come up in interviews, and a [`DoublyLinkedList`] whose
//! nodes live in an index arena.

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::{DoublyLinkedList, NodeIndex};
#[doc(inline)]
pub use singly::SinglyLinkedList;
