use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Arena, Iter, IterMut, Length, Node, NodeIndex, ONE, StaleNodeIndex};
use crate::util::error::CapacityOverflow;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// Rather than allocating each node separately and linking them with pointers, nodes live in an
/// arena owned by the list and link to each other with [`NodeIndex`] handles. Pushing or inserting
/// returns the handle of the new node, which can later be used to access, remove or reorder that
/// node in `O(1)`. This is the building block for structures like an LRU cache, where a separate
/// map keeps track of where each entry is in the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the other list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `node/remove_node` | `O(1)` |
/// | `move_to_front/back` | `O(1)` |
/// | `append` | `O(m)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized, the arena occasionally has to grow.
pub struct DoublyLinkedList<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: Length,
    pub head: NodeIndex,
    pub tail: NodeIndex,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            arena: Arena::new(),
            state: Empty,
        }
    }

    /// Creates a new DoublyLinkedList with room for `cap` nodes before the arena reallocates.
    pub fn with_cap(cap: usize) -> DoublyLinkedList<T> {
        DoublyLinkedList {
            arena: Arena::with_cap(cap),
            state: Empty,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the handle of the first node in the list, if it exists.
    pub const fn front_index(&self) -> Option<NodeIndex> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        }
    }

    /// Returns the handle of the last node in the list, if it exists.
    pub const fn back_index(&self) -> Option<NodeIndex> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail),
        }
    }

    /// Returns the handle of the node after the one at `index`, if there is one.
    pub fn next_index(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.arena.get(index)?.next
    }

    /// Returns the handle of the node before the one at `index`, if there is one.
    pub fn prev_index(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.arena.get(index)?.prev
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.node(self.front_index()?)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.node_mut(self.front_index()?)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.node(self.back_index()?)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.node_mut(self.back_index()?)
    }

    /// Add the provided element to the front of the DoublyLinkedList, returning the handle of its
    /// node.
    pub fn push_front(&mut self, value: T) -> NodeIndex {
        let index = self.arena.insert(Node::detached(value));
        self.link_front(index);
        index
    }

    /// Add the provided element to the back of the DoublyLinkedList, returning the handle of its
    /// node.
    pub fn push_back(&mut self, value: T) -> NodeIndex {
        let index = self.arena.insert(Node::detached(value));
        self.link_back(index);
        index
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_node(self.front_index()?)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove_node(self.back_index()?)
    }

    /// Returns a reference to the element of the node with the provided handle, or None if that
    /// node has been removed.
    pub fn node(&self, index: NodeIndex) -> Option<&T> {
        self.arena.get(index).map(|node| &node.value)
    }

    /// Returns a mutable reference to the element of the node with the provided handle, or None if
    /// that node has been removed.
    pub fn node_mut(&mut self, index: NodeIndex) -> Option<&mut T> {
        self.arena.get_mut(index).map(|node| &mut node.value)
    }

    /// Removes the node with the provided handle from the list, returning its element. Returns None
    /// if the node has already been removed.
    pub fn remove_node(&mut self, index: NodeIndex) -> Option<T> {
        self.arena.get(index)?;
        self.unlink(index);
        self.arena.remove(index).map(|node| node.value)
    }

    /// Moves the node with the provided handle to the front of the list. The handle remains valid.
    pub fn move_to_front(&mut self, index: NodeIndex) -> Result<(), StaleNodeIndex> {
        self.arena.get(index).ok_or(StaleNodeIndex { index })?;
        if self.front_index() != Some(index) {
            self.unlink(index);
            self.link_front(index);
        }
        Ok(())
    }

    /// Moves the node with the provided handle to the back of the list. The handle remains valid.
    pub fn move_to_back(&mut self, index: NodeIndex) -> Result<(), StaleNodeIndex> {
        self.arena.get(index).ok_or(StaleNodeIndex { index })?;
        if self.back_index() != Some(index) {
            self.unlink(index);
            self.link_back(index);
        }
        Ok(())
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(&self.arena[node].value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(&mut self.arena[node].value)
    }

    /// Inserts `value` so that it ends up at `index`, returning the handle of its node.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the DoublyLinkedList.
    pub fn insert(&mut self, index: usize, value: T) -> NodeIndex {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than panicking if
    /// `index` is greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<NodeIndex, IndexOutOfBounds> {
        let len = self.len();
        match index {
            0 => Ok(self.push_front(value)),
            val if val == len => Ok(self.push_back(value)),
            val if val > len => Err(IndexOutOfBounds { index, len }),
            val => {
                let at = self.checked_seek(val)?;
                let node = self.arena.insert(Node::detached(value));
                self.link_before(at, node);
                Ok(node)
            },
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        self.unlink(node);
        // The node was just found by walking the links, so it must still be in the arena.
        Ok(self.arena.remove(node).unreachable().value)
    }

    /// Replaces the element at `index` with `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning an [`Err`] rather than panicking
    /// if `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Moves all elements of `other` onto the back of `self`. Because the two lists have separate
    /// arenas, each element has to be moved into a new node, so this is `O(m)` rather than the
    /// `O(1)` of a pointer-based list.
    pub fn append(&mut self, other: DoublyLinkedList<T>) {
        self.extend(other);
    }

    /// Reverses the order of the list in place by swapping the links of every node.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut curr = Some(contents.head);
            while let Some(index) = curr {
                let node = &mut self.arena[index];
                mem::swap(&mut node.prev, &mut node.next);
                // Following prev, which was next before the swap.
                curr = node.prev;
            }
            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Removes every element from the DoublyLinkedList. All handles are invalidated.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.state = Empty;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Finds the node at the provided position, starting from whichever end is closer.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeIndex, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index(index)?;
        let last_index = contents.last_index();

        if index <= last_index / 2 {
            Ok(self.seek_fwd(index, contents.head))
        } else {
            Ok(self.seek_bwd(last_index - index, contents.tail))
        }
    }

    pub(crate) fn seek_fwd(&self, count: usize, mut node: NodeIndex) -> NodeIndex {
        for _ in 0..count {
            match self.arena[node].next {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }

    pub(crate) fn seek_bwd(&self, count: usize, mut node: NodeIndex) -> NodeIndex {
        for _ in 0..count {
            match self.arena[node].prev {
                Some(prev) => node = prev,
                None => break,
            }
        }
        node
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<ListContents, IndexOutOfBounds> {
        match self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Links an allocated but detached node in as the new head.
    pub(crate) fn link_front(&mut self, index: NodeIndex) {
        match &mut self.state {
            Empty => self.link_only(index),
            Full(contents) => {
                let old_head = contents.head;
                let node = &mut self.arena[index];
                node.prev = None;
                node.next = Some(old_head);
                self.arena[old_head].prev = Some(index);

                contents.head = index;
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
            },
        }
    }

    /// Links an allocated but detached node in as the new tail.
    pub(crate) fn link_back(&mut self, index: NodeIndex) {
        match &mut self.state {
            Empty => self.link_only(index),
            Full(contents) => {
                let old_tail = contents.tail;
                let node = &mut self.arena[index];
                node.prev = Some(old_tail);
                node.next = None;
                self.arena[old_tail].next = Some(index);

                contents.tail = index;
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
            },
        }
    }

    /// Links an allocated but detached node in directly before the linked node `at`.
    pub(crate) fn link_before(&mut self, at: NodeIndex, index: NodeIndex) {
        match &mut self.state {
            Empty => self.link_only(index),
            Full(contents) => {
                let prev = self.arena[at].prev;
                let node = &mut self.arena[index];
                node.prev = prev;
                node.next = Some(at);
                self.arena[at].prev = Some(index);

                match prev {
                    Some(prev) => self.arena[prev].next = Some(index),
                    None => contents.head = index,
                }
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
            },
        }
    }

    fn link_only(&mut self, index: NodeIndex) {
        let node = &mut self.arena[index];
        node.prev = None;
        node.next = None;
        self.state = Full(ListContents {
            len: ONE,
            head: index,
            tail: index,
        });
    }

    /// Detaches a linked node from its neighbours, leaving it allocated in the arena.
    pub(crate) fn unlink(&mut self, index: NodeIndex) {
        let (prev, next) = {
            let node = &mut self.arena[index];
            (node.prev.take(), node.next.take())
        };

        match &mut self.state {
            Empty => {},
            Full(contents) => match contents.len.checked_sub(1) {
                None => self.state = Empty,
                Some(new_len) => {
                    contents.len = new_len;

                    // A node with no prev is the head, so the next node takes its place. There
                    // must be a next node because the list has more than one element.
                    match prev {
                        Some(prev) => self.arena[prev].next = next,
                        None => if let Some(next) = next { contents.head = next },
                    }
                    match next {
                        Some(next) => self.arena[next].prev = prev,
                        None => if let Some(prev) = prev { contents.tail = prev },
                    }
                },
            },
        }
    }

    /// Walks the list in both directions, checking that every link is mirrored and that the length
    /// matches.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => assert_eq!(self.arena.occupied(), 0),
            Full(ListContents { head, tail, len }) => {
                assert!(self.arena[head].prev.is_none());
                assert!(self.arena[tail].next.is_none());

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.arena[curr].next {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(self.arena[next].prev.unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(count, len.get());
                assert_eq!(self.arena.occupied(), len.get());
            },
        }
    }
}

impl ListContents {
    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl ListState {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
