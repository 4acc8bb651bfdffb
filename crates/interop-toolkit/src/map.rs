//! Hashed, insertion-ordered and array-backed maps.

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;
use interop_core::capability::{PairSink, PairSource};

/// Unordered hashed map.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMap<K: Hash + Eq, V> {
    entries: HashMap<K, V>,
}

/// Hashed map that iterates in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K: Hash + Eq, V> {
    entries: IndexMap<K, V>,
}

/// Map stored as parallel key/value order with linear lookup.
///
/// Keys only need equality, so any map can be captured without loss of order.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Hash + Eq, V> Default for ObjectMap<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq, V> ObjectMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Associates `value` with `key`, returning the value it replaced.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Associates `value` with `key`; an existing key keeps its position.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Removes `key` and closes the gap in the order.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: PartialEq, V> ArrayMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(candidate, _)| candidate == key)
    }

    /// Associates `value` with `key`; an existing key keeps its position.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Key at position `index`.
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.entries.get(index).map(|(key, _)| key)
    }

    /// Value at position `index`.
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.entries.get(index).map(|(_, value)| value)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ObjectMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

impl<K: Hash + Eq, V> PairSource for ObjectMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.entries.iter())
    }
}

impl<K: Hash + Eq, V> PairSink for ObjectMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        ObjectMap::with_capacity(capacity)
    }

    fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }
}

impl<K: Hash + Eq, V> PairSource for OrderedMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.entries.iter())
    }
}

impl<K: Hash + Eq, V> PairSink for OrderedMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        OrderedMap::with_capacity(capacity)
    }

    fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }
}

impl<K: PartialEq, V> PairSource for ArrayMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.entries.iter().map(|(key, value)| (key, value)))
    }
}

impl<K: PartialEq, V> PairSink for ArrayMap<K, V> {
    type Key = K;
    type Value = V;

    fn with_capacity(capacity: usize) -> Self {
        ArrayMap::with_capacity(capacity)
    }

    fn put(&mut self, key: K, value: V) {
        ArrayMap::put(self, key, value);
    }
}
