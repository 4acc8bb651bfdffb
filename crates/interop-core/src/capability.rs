//! Capability contract shared by both collection ecosystems.
//!
//! The interop layer never reaches into a container's internals. A container that
//! can report its size and iterate its elements is a [`Source`]; one that can be
//! preallocated and grown one element at a time is a [`Sink`]. Maps use the
//! [`PairSource`]/[`PairSink`] pair.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// Anything that exposes an element count and an iteration sequence.
pub trait Source {
    /// Element type yielded by the container.
    type Item;

    /// Returns the number of elements the container holds.
    fn size(&self) -> usize;

    /// Iterates the elements in the container's own iteration order.
    fn items(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;
}

/// Key/value flavoured [`Source`].
pub trait PairSource {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Returns the number of entries.
    fn size(&self) -> usize;

    /// Iterates the entries in the map's own iteration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;
}

/// A container that can be preallocated and grown by insertion.
///
/// Set-like sinks keep the first occurrence of a duplicate and ignore later ones.
pub trait Sink: Sized {
    /// Element type accepted by the container.
    type Item;

    /// Allocates an empty container sized for `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// Inserts one element at the logical end of the container.
    fn add(&mut self, item: Self::Item);
}

/// Key/value flavoured [`Sink`].
///
/// Putting a key that is already present overwrites its value in place.
pub trait PairSink: Sized {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Allocates an empty map sized for `capacity` entries.
    fn with_capacity(capacity: usize) -> Self;

    /// Associates `value` with `key`.
    fn put(&mut self, key: Self::Key, value: Self::Value);
}

impl<T> Source for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Source for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Sink for Vec<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Source for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Sink for VecDeque<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Eq + Hash> Source for HashSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Eq + Hash> Sink for HashSet<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> Source for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Ord> Sink for BTreeSet<T> {
    type Item = T;

    fn with_capacity(_capacity: usize) -> Self {
        BTreeSet::new()
    }

    fn add(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Eq + Hash> Source for IndexSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Eq + Hash> Sink for IndexSet<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        IndexSet::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        // IndexSet::insert leaves an existing item where it is.
        self.insert(item);
    }
}

// Heaps iterate in storage order; only the first item is defined (the greatest).
impl<T: Ord> Source for BinaryHeap<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Ord> Sink for BinaryHeap<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        BinaryHeap::with_capacity(capacity)
    }

    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<K: Eq + Hash, V> PairSource for HashMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Eq + Hash, V> PairSink for HashMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity(capacity)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> PairSource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> PairSink for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Eq + Hash, V> PairSource for IndexMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Eq + Hash, V> PairSink for IndexMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        IndexMap::with_capacity(capacity)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}
