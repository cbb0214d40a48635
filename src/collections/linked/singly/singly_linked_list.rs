use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in one direction only, from the front to the back. Each node owns the next,
/// so the whole list is a chain of [`Box`]es hanging off of `head`.
///
/// Alongside the usual list methods, the algorithms that are traditionally asked about singly
/// linked lists are implemented directly on the nodes: in-place reversal, finding the middle with
/// slow and fast pointers, finding the nth node from the back with two pointers a fixed gap apart,
/// merging sorted lists and merge sort.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `push_back/pop_back` | `O(n)` |
/// | `get/insert/remove` | `O(i)` |
/// | `reverse` | `O(n)` |
/// | `middle` | `O(n)` |
/// | `merge_sorted` | `O(n)` |
/// | `sort` | `O(n log n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element in the list, if it exists. This has to walk the
    /// whole list.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().last()
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    /// Add the provided element to the back of the SinglyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let last = self.last_link_mut();
        *last = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => Some(self.remove(len - 1)),
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.iter_mut().nth(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Inserts `value` so that it ends up at `index`, shifting all following elements back.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the SinglyLinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than panicking if
    /// `index` is greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        let link = self.link_at_mut(index).ok_or(IndexOutOfBounds { index, len })?;

        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        let error = IndexOutOfBounds { index, len };
        let link = self.link_at_mut(index).ok_or(error)?;

        let Node { value, next } = *link.take().ok_or(error)?;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Splits the list in two at `at`. `self` keeps the elements before `at` and the elements from
    /// `at` onwards are returned as a new list.
    ///
    /// # Panics
    /// Panics if `at` is greater than the length of the SinglyLinkedList.
    pub fn split_off(&mut self, at: usize) -> SinglyLinkedList<T> {
        self.try_split_off(at).throw()
    }

    /// Splits the list in two at `at`, returning an [`Err`] rather than panicking if `at` is
    /// greater than the length.
    pub fn try_split_off(&mut self, at: usize) -> Result<SinglyLinkedList<T>, IndexOutOfBounds> {
        let len = self.len;
        let link = self.link_at_mut(at).ok_or(IndexOutOfBounds { index: at, len })?;

        let tail = SinglyLinkedList {
            head: link.take(),
            len: len - at,
        };
        self.len = at;
        Ok(tail)
    }

    /// Moves all elements from `other` onto the back of `self`.
    pub fn append(&mut self, mut other: SinglyLinkedList<T>) {
        let last = self.last_link_mut();
        *last = other.head.take();
        self.len += mem::take(&mut other.len);
    }

    /// Removes every element from the SinglyLinkedList.
    pub fn clear(&mut self) {
        *self = SinglyLinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> SinglyLinkedList<T> {
    /// Returns the link which points at the node with the provided `index`, or None if `index` is
    /// greater than the length. For `index == len`, this is the empty link after the last node.
    pub(crate) fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Returns the empty link after the last node.
    pub(crate) fn last_link_mut(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once, rather than once per pushed element.
        let mut link = self.last_link_mut();
        let mut added = 0;
        for value in iter {
            let node = link.insert(Node::boxed(value, None));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so that dropping a long list doesn't recurse through every
        // Box.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
