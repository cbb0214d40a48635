#![cfg(test)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn list_of(values: &[i32]) -> DoublyLinkedList<i32> {
    values.iter().copied().collect()
}

fn to_vec<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_links();
    assert_eq!(to_vec(&list), [1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    list.verify_links();
    assert_eq!(list.pop_back(), Some(2));
    assert!(list.is_empty());
    list.verify_links();
}

#[test]
fn test_positional_access() {
    let mut list = list_of(&[10, 20, 30, 40, 50]);
    assert_eq!(list[0], 10);
    assert_eq!(list[3], 40, "Indices past the middle should be found from the back.");
    list[4] = 55;
    assert_eq!(list.replace(1, 25), 20);
    assert_eq!(to_vec(&list), [10, 25, 30, 40, 55]);

    assert_eq!(list.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(
        DoublyLinkedList::<i32>::new().try_get(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
    assert_panics!({
        list.get(5);
    });
}

#[test]
fn test_insert_remove() {
    let mut list = list_of(&[1, 4]);
    list.insert(1, 2);
    list.insert(2, 3);
    list.insert(4, 5);
    list.insert(0, 0);
    list.verify_links();
    assert_eq!(to_vec(&list), [0, 1, 2, 3, 4, 5]);
    assert!(list.try_insert(7, 7).is_err());

    assert_eq!(list.remove(3), 3);
    assert_eq!(list.remove(0), 0);
    assert_eq!(list.remove(3), 5);
    list.verify_links();
    assert_eq!(to_vec(&list), [1, 2, 4]);
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
}

#[test]
fn test_node_handles() {
    let mut list = DoublyLinkedList::new();
    let a = list.push_back('a');
    let b = list.push_back('b');
    let c = list.push_back('c');

    assert_eq!(list.node(b), Some(&'b'));
    *list.node_mut(c).unwrap() = 'C';
    assert_eq!(list.next_index(a), Some(b));
    assert_eq!(list.prev_index(a), None);

    assert_eq!(list.remove_node(b), Some('b'));
    assert_eq!(list.remove_node(b), None, "A handle shouldn't work once its node is removed.");
    assert_eq!(list.node(b), None);
    list.verify_links();

    // The freed slot is reused, but the old handle must not see the new node.
    let d = list.push_front('d');
    assert_ne!(d, b);
    assert_eq!(list.node(b), None);
    assert_eq!(list.node(d), Some(&'d'));
    assert_eq!(to_vec(&list), ['d', 'a', 'C']);
}

#[test]
fn test_move_to_front_and_back() {
    let mut list = DoublyLinkedList::new();
    let handles = (0..5).map(|i| list.push_back(i)).collect::<Vec<_>>();

    list.move_to_front(handles[3]).unwrap();
    assert_eq!(to_vec(&list), [3, 0, 1, 2, 4]);
    list.move_to_back(handles[0]).unwrap();
    assert_eq!(to_vec(&list), [3, 1, 2, 4, 0]);
    list.move_to_front(handles[3]).unwrap();
    list.move_to_back(handles[0]).unwrap();
    assert_eq!(to_vec(&list), [3, 1, 2, 4, 0], "Moving a node to where it is should do nothing.");
    list.verify_links();

    assert_eq!(list.node(handles[4]), Some(&4), "Moving nodes shouldn't invalidate handles.");

    list.remove_node(handles[2]);
    assert_eq!(
        list.move_to_front(handles[2]),
        Err(StaleNodeIndex { index: handles[2] })
    );
}

#[test]
fn test_reverse() {
    let mut list = list_of(&[1, 2, 3, 4]);
    list.reverse();
    list.verify_links();
    assert_eq!(to_vec(&list), [4, 3, 2, 1]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);

    let mut single = list_of(&[1]);
    single.reverse();
    single.verify_links();
    assert_eq!(to_vec(&single), [1]);
}

#[test]
fn test_append_and_clear() {
    let mut list = list_of(&[1, 2]);
    list.append(list_of(&[3, 4]));
    list.append(DoublyLinkedList::new());
    list.verify_links();
    assert_eq!(to_vec(&list), [1, 2, 3, 4]);

    let handle = list.front_index().unwrap();
    list.clear();
    list.verify_links();
    assert!(list.is_empty());
    assert_eq!(list.node(handle), None, "Clearing should invalidate every handle.");

    list.push_back(9);
    assert_eq!(to_vec(&list), [9]);
}

#[test]
fn test_iterators_meet_in_the_middle() {
    let list = list_of(&[1, 2, 3, 4, 5]);
    let mut iter = list.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut list = list;
    for value in list.iter_mut().rev().take(2) {
        *value *= 10;
    }
    assert_eq!(to_vec(&list), [1, 2, 3, 40, 50]);

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next_back(), Some(50));
    assert_eq!(into_iter.collect::<Vec<_>>(), [1, 2, 3, 40]);
}

#[test]
fn test_contains_and_index_of() {
    let list = list_of(&[5, 6, 7, 6]);
    assert!(list.contains(&7));
    assert!(!list.contains(&8));
    assert_eq!(list.index_of(&6), Some(1));
    assert_eq!(list.index_of(&8), None);
}

#[test]
fn test_randomized_against_vec_deque() {
    let mut rng = StdRng::seed_from_u64(214);
    let mut list = DoublyLinkedList::new();
    let mut expected = VecDeque::new();

    for step in 0..2_000 {
        match rng.gen_range(0..6) {
            0 => {
                list.push_front(step);
                expected.push_front(step);
            },
            1 => {
                list.push_back(step);
                expected.push_back(step);
            },
            2 => assert_eq!(list.pop_front(), expected.pop_front()),
            3 => assert_eq!(list.pop_back(), expected.pop_back()),
            4 => {
                let index = rng.gen_range(0..=expected.len());
                list.insert(index, step);
                expected.insert(index, step);
            },
            _ => if !expected.is_empty() {
                let index = rng.gen_range(0..expected.len());
                assert_eq!(list.remove(index), expected.remove(index).unwrap());
            },
        }
        assert_eq!(list.len(), expected.len());
    }

    list.verify_links();
    assert!(list.iter().eq(expected.iter()));
}

#[test]
fn test_drops_every_element_once() {
    let counter = Rc::new(Cell::new(0));
    let mut list = (0..10)
        .map(|id| CountedDrop::new(id, &counter))
        .collect::<DoublyLinkedList<_>>();

    let back = list.back_index().unwrap();
    drop(list.remove_node(back));
    assert_eq!(counter.get(), 1);

    drop(list.remove(2));
    assert_eq!(counter.get(), 2);

    drop(list);
    assert_eq!(counter.get(), 10);
}

#[test]
fn test_display_and_equality() {
    assert_eq!(format!("{}", list_of(&[1, 2, 3])), "(1) <-> (2) <-> (3)");
    assert_eq!(list_of(&[1, 2]), list_of(&[1, 2]).clone());
    assert_ne!(list_of(&[1, 2]), list_of(&[2, 1]));
}
