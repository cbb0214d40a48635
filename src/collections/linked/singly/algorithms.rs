//! The classic singly linked list exercises. Everything here works by relinking the existing
//! nodes rather than allocating new ones.

use super::{Link, SinglyLinkedList};

impl<T> SinglyLinkedList<T> {
    /// Reverses the order of the list in place by pointing every node at its predecessor.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
    }

    /// Returns the middle element of the list, found with a slow pointer that moves one node at a
    /// time and a fast pointer that moves two. For an even length, this is the second of the two
    /// middle elements, (the element at index `len / 2`).
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();

        while let Some(after_fast) = fast.and_then(|node| node.next.as_deref()) {
            slow = match slow.next.as_deref() {
                Some(next) => next,
                None => break,
            };
            fast = after_fast.next.as_deref();
        }

        Some(&slow.value)
    }

    /// Returns the element `n` places from the back of the list, where 0 is the last element. A
    /// leading pointer is moved `n + 1` nodes ahead first, then both pointers advance together
    /// until the leading one runs off the end.
    pub fn nth_from_back(&self, n: usize) -> Option<&T> {
        let mut lead = self.head.as_deref();
        for _ in 0..=n {
            lead = lead?.next.as_deref();
        }

        let mut trail = self.head.as_deref()?;
        while let Some(node) = lead {
            lead = node.next.as_deref();
            trail = trail.next.as_deref()?;
        }

        Some(&trail.value)
    }

    /// Removes and returns the element `n` places from the back of the list, where 0 is the last
    /// element. Returns None if the list has `n` or fewer elements.
    pub fn remove_nth_from_back(&mut self, n: usize) -> Option<T> {
        let index = self.len.checked_sub(n.checked_add(1)?)?;
        self.try_remove(index).ok()
    }

    /// Moves the nodes of two lists, each sorted in ascending order, into one sorted list. Equal
    /// elements from `self` come before those from `other`.
    pub fn merge_sorted(mut self, mut other: SinglyLinkedList<T>) -> SinglyLinkedList<T>
    where
        T: Ord,
    {
        let len = self.len + other.len;
        let mut left = self.head.take();
        let mut right = other.head.take();

        let mut head: Link<T> = None;
        let mut tail = &mut head;

        loop {
            let source = match (&left, &right) {
                (Some(l), Some(r)) if l.value <= r.value => &mut left,
                (Some(_), Some(_)) => &mut right,
                // One side has run out, the rest of the other can be attached as-is.
                _ => {
                    *tail = left.or(right);
                    break;
                },
            };

            if let Some(mut node) = source.take() {
                *source = node.next.take();
                tail = &mut tail.insert(node).next;
            }
        }

        SinglyLinkedList {
            head,
            len,
        }
    }

    /// Sorts the list in ascending order with a merge sort, splitting at the middle and merging the
    /// sorted halves. The sort is stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        if self.len < 2 { return; }

        let mut back = self.split_off(self.len / 2);
        back.sort();

        let mut front = std::mem::take(self);
        front.sort();

        *self = front.merge_sorted(back);
    }

    /// Removes consecutive repeated elements, keeping the first of each run. On a sorted list this
    /// removes all duplicates.
    pub fn dedup(&mut self)
    where
        T: PartialEq,
    {
        let mut curr = self.head.as_deref_mut();

        while let Some(node) = curr {
            while node.next.as_ref().is_some_and(|next| next.value == node.value) {
                let removed = node.next.take();
                node.next = removed.and_then(|mut removed| removed.next.take());
                self.len -= 1;
            }
            curr = node.next.as_deref_mut();
        }
    }

    /// Returns true if the list reads the same forwards and backwards. The second half of the list
    /// is split off and reversed so that both halves can be walked from the front, then everything
    /// is put back the way it was.
    pub fn is_palindrome(&mut self) -> bool
    where
        T: PartialEq,
    {
        let mut back = self.split_off(self.len.div_ceil(2));
        back.reverse();

        let result = self.iter().zip(back.iter()).all(|(a, b)| a == b);

        back.reverse();
        self.append(back);
        result
    }
}
