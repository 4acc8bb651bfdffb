//! String sets and maps that compare keys ignoring case.
//!
//! Keys are folded with Unicode lowercase mapping for hashing and equality. The
//! spelling seen on first insertion is the one that is stored and iterated.

use std::collections::HashMap;

use indexmap::IndexMap;
use interop_core::capability::{PairSink, PairSource, Sink, Source};

fn fold(text: &str) -> String {
    text.to_lowercase()
}

macro_rules! case_insensitive_set {
    ($(#[$meta:meta])* $name:ident, $backing:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            entries: $backing<String, String>,
        }

        impl $name {
            /// Creates an empty set.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates an empty set with room for `capacity` items.
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    entries: $backing::with_capacity(capacity),
                }
            }

            /// Adds `item` unless a case variant is present; returns whether it was added.
            pub fn add(&mut self, item: impl Into<String>) -> bool {
                let item = item.into();
                let folded = fold(&item);
                if self.entries.contains_key(&folded) {
                    return false;
                }
                self.entries.insert(folded, item);
                true
            }

            /// Whether any case variant of `item` is present.
            pub fn contains(&self, item: &str) -> bool {
                self.entries.contains_key(&fold(item))
            }

            /// The stored spelling matching `item`.
            pub fn get(&self, item: &str) -> Option<&str> {
                self.entries.get(&fold(item)).map(String::as_str)
            }

            /// Number of items.
            pub fn len(&self) -> usize {
                self.entries.len()
            }

            /// Whether the set holds no items.
            pub fn is_empty(&self) -> bool {
                self.entries.is_empty()
            }

            /// Iterates stored spellings.
            pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
                self.entries.values().map(String::as_str)
            }
        }

        impl<S: Into<String>> FromIterator<S> for $name {
            fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
                let mut set = Self::new();
                for item in iter {
                    set.add(item);
                }
                set
            }
        }

        impl Source for $name {
            type Item = String;

            fn size(&self) -> usize {
                self.len()
            }

            fn items(&self) -> Box<dyn Iterator<Item = &String> + '_> {
                Box::new(self.entries.values())
            }
        }

        impl Sink for $name {
            type Item = String;

            fn with_capacity(capacity: usize) -> Self {
                $name::with_capacity(capacity)
            }

            fn add(&mut self, item: String) {
                $name::add(self, item);
            }
        }
    };
}

macro_rules! case_insensitive_map {
    ($(#[$meta:meta])* $name:ident, $backing:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name<V> {
            entries: $backing<String, (String, V)>,
        }

        impl<V> Default for $name<V> {
            fn default() -> Self {
                Self {
                    entries: $backing::default(),
                }
            }
        }

        impl<V> $name<V> {
            /// Creates an empty map.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates an empty map with room for `capacity` entries.
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    entries: $backing::with_capacity(capacity),
                }
            }

            /// Associates `value` with `key`, returning the value it replaced.
            ///
            /// An existing case variant keeps its spelling and position.
            pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
                let key = key.into();
                let folded = fold(&key);
                match self.entries.get_mut(&folded) {
                    Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
                    None => {
                        self.entries.insert(folded, (key, value));
                        None
                    }
                }
            }

            /// Value stored under any case variant of `key`.
            pub fn get(&self, key: &str) -> Option<&V> {
                self.entries.get(&fold(key)).map(|(_, value)| value)
            }

            /// Whether any case variant of `key` is present.
            pub fn contains_key(&self, key: &str) -> bool {
                self.entries.contains_key(&fold(key))
            }

            /// Number of entries.
            pub fn len(&self) -> usize {
                self.entries.len()
            }

            /// Whether the map holds no entries.
            pub fn is_empty(&self) -> bool {
                self.entries.is_empty()
            }

            /// Iterates entries with their stored key spelling.
            pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
                self.entries.values().map(|(key, value)| (key.as_str(), value))
            }
        }

        impl<K: Into<String>, V> FromIterator<(K, V)> for $name<V> {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                let mut map = Self::new();
                for (key, value) in iter {
                    map.put(key, value);
                }
                map
            }
        }

        impl<V> PairSource for $name<V> {
            type Key = String;
            type Value = V;

            fn size(&self) -> usize {
                self.len()
            }

            fn entries(&self) -> Box<dyn Iterator<Item = (&String, &V)> + '_> {
                Box::new(self.entries.values().map(|(key, value)| (key, value)))
            }
        }

        impl<V> PairSink for $name<V> {
            type Key = String;
            type Value = V;

            fn with_capacity(capacity: usize) -> Self {
                $name::with_capacity(capacity)
            }

            fn put(&mut self, key: String, value: V) {
                $name::put(self, key, value);
            }
        }
    };
}

case_insensitive_set!(
    /// Case-insensitive string set without a defined order.
    CaseInsensitiveSet,
    HashMap
);
case_insensitive_set!(
    /// Case-insensitive string set iterating in insertion order.
    CaseInsensitiveOrderedSet,
    IndexMap
);
case_insensitive_map!(
    /// Case-insensitive string-keyed map without a defined order.
    CaseInsensitiveMap,
    HashMap
);
case_insensitive_map!(
    /// Case-insensitive string-keyed map iterating in insertion order.
    CaseInsensitiveOrderedMap,
    IndexMap
);
