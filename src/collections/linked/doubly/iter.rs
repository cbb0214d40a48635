use std::iter::FusedIterator;

use super::{Arena, DoublyLinkedList, ListContents, ListState, SplitNode};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            arena: &self.arena,
            state: self.state,
        }
    }
}

/// A borrowing iterator over a [`DoublyLinkedList`]. The remaining range is tracked as a copy of
/// the list's own state, which is shrunk from either end.
pub struct Iter<'a, T> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) state: ListState,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ListState::Full(contents) = &mut self.state else {
            return None;
        };

        let node = &self.arena[contents.head];
        match contents.len.checked_sub(1) {
            None => self.state = ListState::Empty,
            Some(len) => {
                contents.len = len;
                // There are nodes left in range, so the head isn't the last node.
                contents.head = node.next.unreachable();
            },
        }
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ListState::Full(contents) = &mut self.state else {
            return None;
        };

        let node = &self.arena[contents.tail];
        match contents.len.checked_sub(1) {
            None => self.state = ListState::Empty,
            Some(len) => {
                contents.len = len;
                contents.tail = node.prev.unreachable();
            },
        }
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            state: self.state,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state,
            nodes: self.arena.split_values_mut(),
        }
    }
}

/// A mutable iterator over a [`DoublyLinkedList`]. Mutable references to every node are split out
/// of the arena up front, then each one is taken as the iterator reaches it, so no node can be
/// yielded twice.
pub struct IterMut<'a, T> {
    pub(crate) nodes: Vec<Option<SplitNode<'a, T>>>,
    pub(crate) state: ListState,
}

impl<'a, T> IterMut<'a, T> {
    fn take_node(&mut self, back: bool) -> Option<&'a mut T> {
        let ListState::Full(ListContents { len, head, tail }) = &mut self.state else {
            return None;
        };

        let index = if back { *tail } else { *head };
        let (value, prev, next) = self.nodes[index.slot].take().unreachable();
        match len.checked_sub(1) {
            None => self.state = ListState::Empty,
            Some(new_len) => {
                *len = new_len;
                if back {
                    *tail = prev.unreachable();
                } else {
                    *head = next.unreachable();
                }
            },
        }
        Some(value)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_node(false)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.state.len(), Some(self.state.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.take_node(true)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
