//! Indexed, insertion-ordered set.

use std::hash::Hash;

use indexmap::IndexSet;
use interop_core::capability::{Sink, Source};

/// Unique items in insertion order, each addressable by its position.
///
/// The index of an item is fixed once assigned: adding an item that is already
/// present returns its existing index and leaves the set untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedSet<T: Hash + Eq> {
    items: IndexSet<T>,
}

impl<T: Hash + Eq> Default for NumberedSet<T> {
    fn default() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }
}

impl<T: Hash + Eq> NumberedSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexSet::with_capacity(capacity),
        }
    }

    /// Adds `item` if absent and returns its index.
    pub fn add(&mut self, item: T) -> usize {
        self.items.insert_full(item).0
    }

    /// Position of `item`, if present.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.get_index_of(item)
    }

    /// Item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in index order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> FromIterator<T> for NumberedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a NumberedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Hash + Eq> Source for NumberedSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<T: Hash + Eq> Sink for NumberedSet<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        NumberedSet::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        NumberedSet::add(self, item);
    }
}
