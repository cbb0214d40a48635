use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::{Display, Error};

use crate::util::result::ResultExtension;

/// A handle to a node of a [`DoublyLinkedList`](super::DoublyLinkedList).
///
/// Each handle records the generation of the slot it was issued for, so a handle to a node that has
/// since been removed is rejected, even after the slot has been reused for another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex {
    pub(crate) slot: usize,
    pub(crate) generation: u32,
}

/// A [`NodeIndex`] was used after its node was removed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Node index {index:?} refers to a removed node!")]
pub struct StaleNodeIndex {
    pub index: NodeIndex,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeIndex>,
    pub next: Option<NodeIndex>,
}

impl<T> Node<T> {
    pub const fn detached(value: T) -> Node<T> {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}

/// A mutable reference to a node's value, with copies of its links.
pub(crate) type SplitNode<'a, T> = (&'a mut T, Option<NodeIndex>, Option<NodeIndex>);

enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Storage for the nodes of a list. Removed slots form a free list and are reused by later
/// insertions, so the arena only grows when every slot is occupied.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    pub fn with_cap(cap: usize) -> Arena<T> {
        Arena {
            slots: Vec::with_capacity(cap),
            free: None,
            occupied: 0,
        }
    }

    #[cfg(test)]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn insert(&mut self, node: Node<T>) -> NodeIndex {
        self.occupied += 1;

        match self.free {
            Some(slot) => {
                let reused = &mut self.slots[slot];
                let previous = mem::replace(&mut reused.entry, Entry::Occupied(node));
                if let Entry::Vacant { next_free } = previous {
                    self.free = next_free;
                }
                NodeIndex {
                    slot,
                    generation: reused.generation,
                }
            },
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                NodeIndex {
                    slot: self.slots.len() - 1,
                    generation: 0,
                }
            },
        }
    }

    pub fn remove(&mut self, index: NodeIndex) -> Option<Node<T>> {
        self.get(index)?;

        let slot = &mut self.slots[index.slot];
        // Bumping the generation invalidates every outstanding handle to this slot.
        slot.generation = slot.generation.wrapping_add(1);
        let entry = mem::replace(&mut slot.entry, Entry::Vacant { next_free: self.free });
        self.free = Some(index.slot);
        self.occupied -= 1;

        match entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node<T>> {
        match self.slots.get(index.slot) {
            Some(Slot { generation, entry: Entry::Occupied(node) })
                if *generation == index.generation => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node<T>> {
        match self.slots.get_mut(index.slot) {
            Some(Slot { generation, entry: Entry::Occupied(node) })
                if *generation == index.generation => Some(node),
            _ => None,
        }
    }

    /// Drops every node, keeping the slots for reuse. Every outstanding handle is invalidated.
    pub fn clear(&mut self) {
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Entry::Occupied(_) = slot.entry {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = Entry::Vacant { next_free: free };
            free = Some(index);
        }
        self.free = free;
        self.occupied = 0;
    }

    /// Returns mutable references to the contents of every occupied slot, indexed by slot, along
    /// with their links. This is how disjoint mutable access to many nodes is handed out at once.
    pub fn split_values_mut(&mut self) -> Vec<Option<SplitNode<'_, T>>> {
        self.slots.iter_mut()
            .map(|slot| match &mut slot.entry {
                Entry::Occupied(Node { value, prev, next }) => Some((value, *prev, *next)),
                Entry::Vacant { .. } => None,
            })
            .collect()
    }
}

impl<T> Index<NodeIndex> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        self.get(index).ok_or(StaleNodeIndex { index }).throw()
    }
}

impl<T> IndexMut<NodeIndex> for Arena<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        self.get_mut(index).ok_or(StaleNodeIndex { index }).throw()
    }
}
