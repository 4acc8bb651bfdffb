//! Hashed and insertion-ordered sets.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexSet;
use interop_core::capability::{Sink, Source};

/// Unordered set of unique items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSet<T: Hash + Eq> {
    items: HashSet<T>,
}

/// Set of unique items that iterates in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T: Hash + Eq> {
    items: IndexSet<T>,
}

impl<T: Hash + Eq> Default for ObjectSet<T> {
    fn default() -> Self {
        Self {
            items: HashSet::new(),
        }
    }
}

impl<T: Hash + Eq> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }
}

impl<T: Hash + Eq> ObjectSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// Adds `item`; returns `false` if it was already present.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes `item`; returns whether it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> OrderedSet<T> {
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

    /// Adds `item` at the end; an item already present keeps its position.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes `item` and closes the gap; returns whether it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.shift_remove(item)
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// First item in order.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Item at position `index`.
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ObjectSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Source for ObjectSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<T: Hash + Eq> Sink for ObjectSet<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        ObjectSet::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.items.insert(item);
    }
}

impl<T: Hash + Eq> Source for OrderedSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<T: Hash + Eq> Sink for OrderedSet<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        OrderedSet::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.items.insert(item);
    }
}
