use std::iter::FusedIterator;

use super::{BinaryTreeMap, Node};
use crate::collections::traits::{self, InOrder, InOrderMut, IntoInOrder};

impl<K: Ord, V> IntoIterator for BinaryTreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        self.len = 0;
        IntoIter(IntoInOrder::new(self.root.take(), len))
    }
}

/// An owned iterator over the entries of a [`BinaryTreeMap`], in ascending order.
pub struct IntoIter<K: Ord, V>(IntoInOrder<Node<K, V>>);

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Ord, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Ord, V> IntoIterator for &'a BinaryTreeMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(InOrder::new(self.root.as_deref(), self.len))
    }
}

/// A borrowing iterator over the entries of a [`BinaryTreeMap`], in ascending order.
pub struct Iter<'a, K: Ord, V>(pub(crate) InOrder<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Ord, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Ord, V> FusedIterator for Iter<'_, K, V> {}

impl<K: Ord, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a mut BinaryTreeMap<K, V> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut(InOrderMut::new(self.root.as_deref_mut(), self.len))
    }
}

/// A borrowing iterator over the entries of a [`BinaryTreeMap`] in ascending order, with mutable
/// access to values.
pub struct IterMut<'a, K: Ord, V>(pub(crate) InOrderMut<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Ord, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K: Ord, V> FusedIterator for IterMut<'_, K, V> {}

pub struct Keys<'a, K: Ord, V>(pub(crate) InOrder<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Ord, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K: Ord, V> FusedIterator for Keys<'_, K, V> {}

pub struct Values<'a, K: Ord, V>(pub(crate) InOrder<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Ord, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K: Ord, V> FusedIterator for Values<'_, K, V> {}

pub struct ValuesMut<'a, K: Ord, V>(pub(crate) InOrderMut<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Ord, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K: Ord, V> FusedIterator for ValuesMut<'_, K, V> {}

/// An iterator over the entries of a [`BinaryTreeMap`] in pre-order, (node, left, right).
pub struct PreOrder<'a, K: Ord, V>(pub(crate) traits::PreOrder<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<K: Ord, V> FusedIterator for PreOrder<'_, K, V> {}

/// An iterator over the entries of a [`BinaryTreeMap`] in post-order, (left, right, node).
pub struct PostOrder<'a, K: Ord, V>(pub(crate) traits::PostOrder<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<K: Ord, V> FusedIterator for PostOrder<'_, K, V> {}

/// An iterator over the entries of a [`BinaryTreeMap`] one level at a time.
pub struct LevelOrder<'a, K: Ord, V>(pub(crate) traits::LevelOrder<'a, Node<K, V>>);

impl<'a, K: Ord, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<K: Ord, V> FusedIterator for LevelOrder<'_, K, V> {}
