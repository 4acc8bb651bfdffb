//! Ordered growable containers.

use std::collections::VecDeque;

use interop_core::capability::{Sink, Source};

/// Growable, indexable array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array<T> {
    items: Vec<T>,
}

impl<T> Array<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends `item`.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        self.items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// First item.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last item.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes and returns the last item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Source for Array<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<T> Sink for Array<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Array::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.items.push(item);
    }
}

/// Double-ended queue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Pushes `item` at the tail.
    pub fn add_last(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Pushes `item` at the head.
    pub fn add_first(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Pops from the head.
    pub fn remove_first(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Pops from the tail.
    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Head item.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Tail item.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Item at `index` counted from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Source for Queue<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}

impl<T> Sink for Queue<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Queue::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }
}
