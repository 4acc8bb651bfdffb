//! Unordered list with constant-time removal.

use interop_core::capability::{Sink, Source};

/// Growable list that does not promise to keep its order.
///
/// Removing an item moves the last item into the hole instead of shifting
/// everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Bag<T> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bag with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends `item`.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Removes the item at `index`, filling the hole with the last item.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.swap_remove(index))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bag holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in their current storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Items in their current storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Bag<T> {
    /// Removes one occurrence of `item`; returns whether it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> From<Vec<T>> for Bag<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Source for Bag<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<T> Sink for Bag<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Bag::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        Bag::add(self, item);
    }
}
