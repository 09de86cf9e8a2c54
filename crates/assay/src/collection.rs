// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Membership and length capabilities used by collection checks.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Native membership test of a collection.
pub trait Contains<N: ?Sized> {
    fn contains_item(&self, item: &N) -> bool;
}

impl<N: ?Sized, C: Contains<N> + ?Sized> Contains<N> for &C {
    fn contains_item(&self, item: &N) -> bool {
        (**self).contains_item(item)
    }
}

impl<E: PartialEq> Contains<E> for [E] {
    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: PartialEq, const N: usize> Contains<E> for [E; N] {
    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: PartialEq> Contains<E> for Vec<E> {
    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: PartialEq> Contains<E> for VecDeque<E> {
    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: Eq + Hash> Contains<E> for HashSet<E> {
    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: Ord> Contains<E> for BTreeSet<E> {
    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl Contains<&str> for str {
    fn contains_item(&self, item: &&str) -> bool {
        self.contains(*item)
    }
}

impl Contains<char> for str {
    fn contains_item(&self, item: &char) -> bool {
        self.contains(*item)
    }
}

impl Contains<&str> for String {
    fn contains_item(&self, item: &&str) -> bool {
        self.contains(*item)
    }
}

impl Contains<char> for String {
    fn contains_item(&self, item: &char) -> bool {
        self.contains(*item)
    }
}

/// Number of elements (or bytes, for strings).
pub trait Length {
    fn length(&self) -> usize;
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E> Length for [E] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E, const N: usize> Length for [E; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<E> Length for Vec<E> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E> Length for VecDeque<E> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E, S> Length for HashSet<E, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<E> Length for BTreeSet<E> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// Whether every element of each side appears in the other.
///
/// Order and duplicate counts are ignored: `[1, 1, 2]` and `[2, 1]` have the
/// same elements.
pub fn have_same_elements<E: PartialEq>(left: &[E], right: &[E]) -> bool {
    left.iter().all(|item| right.contains(item)) && right.iter().all(|item| left.contains(item))
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
