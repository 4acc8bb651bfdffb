#![deny(missing_docs)]
#![doc = "The ds collection ecosystem: std and indexmap containers under JDK-style names, plus the bag, offset bit set, numbered set and case-insensitive containers that have no std counterpart."]

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};
use interop_core::identity::Identity;

pub mod bag;
pub mod case_insensitive;
pub mod numbered;
pub mod offset_bit_set;

pub use bag::Bag;
pub use case_insensitive::{
    CaseInsensitiveMap, CaseInsensitiveOrderedMap, CaseInsensitiveOrderedSet, CaseInsensitiveSet,
};
pub use numbered::NumberedSet;
pub use offset_bit_set::OffsetBitSet;

/// Growable list of arbitrary items.
pub type ObjectList<T> = Vec<T>;
/// List of `i32`.
pub type IntList = Vec<i32>;
/// List of `i64`.
pub type LongList = Vec<i64>;
/// List of `f32`.
pub type FloatList = Vec<f32>;
/// List of `f64`.
pub type DoubleList = Vec<f64>;
/// List of `i8`.
pub type ByteList = Vec<i8>;
/// List of `i16`.
pub type ShortList = Vec<i16>;
/// List of `char`.
pub type CharList = Vec<char>;
/// List of `bool`.
pub type BooleanList = Vec<bool>;

/// Unordered list of arbitrary items.
pub type ObjectBag<T> = Bag<T>;
/// Bag of `i32`.
pub type IntBag = Bag<i32>;
/// Bag of `i64`.
pub type LongBag = Bag<i64>;
/// Bag of `f32`.
pub type FloatBag = Bag<f32>;
/// Bag of `f64`.
pub type DoubleBag = Bag<f64>;
/// Bag of `i8`.
pub type ByteBag = Bag<i8>;
/// Bag of `i16`.
pub type ShortBag = Bag<i16>;
/// Bag of `char`.
pub type CharBag = Bag<char>;
/// Bag of `bool`.
pub type BooleanBag = Bag<bool>;

/// Double-ended queue of arbitrary items.
pub type ObjectDeque<T> = VecDeque<T>;
/// Deque of `i32`.
pub type IntDeque = VecDeque<i32>;
/// Deque of `i64`.
pub type LongDeque = VecDeque<i64>;
/// Deque of `f32`.
pub type FloatDeque = VecDeque<f32>;
/// Deque of `f64`.
pub type DoubleDeque = VecDeque<f64>;
/// Deque of `i8`.
pub type ByteDeque = VecDeque<i8>;
/// Deque of `i16`.
pub type ShortDeque = VecDeque<i16>;
/// Deque of `char`.
pub type CharDeque = VecDeque<char>;
/// Deque of `bool`.
pub type BooleanDeque = VecDeque<bool>;

/// Hashed set without a defined order.
pub type ObjectSet<T> = HashSet<T>;
/// Set iterating in insertion order.
pub type ObjectOrderedSet<T> = IndexSet<T>;
/// Hashed set of `i32`.
pub type IntSet = HashSet<i32>;
/// Insertion-ordered set of `i32`.
pub type IntOrderedSet = IndexSet<i32>;
/// Hashed set of `i64`.
pub type LongSet = HashSet<i64>;
/// Insertion-ordered set of `i64`.
pub type LongOrderedSet = IndexSet<i64>;

/// Hashed map without a defined order.
pub type ObjectObjectMap<K, V> = HashMap<K, V>;
/// Map iterating in insertion order.
pub type ObjectObjectOrderedMap<K, V> = IndexMap<K, V>;
/// Object keys to `i32` values.
pub type ObjectIntMap<K> = HashMap<K, i32>;
/// Insertion-ordered object keys to `i32` values.
pub type ObjectIntOrderedMap<K> = IndexMap<K, i32>;
/// Object keys to `i64` values.
pub type ObjectLongMap<K> = HashMap<K, i64>;
/// Insertion-ordered object keys to `i64` values.
pub type ObjectLongOrderedMap<K> = IndexMap<K, i64>;
/// Object keys to `f32` values.
pub type ObjectFloatMap<K> = HashMap<K, f32>;
/// Insertion-ordered object keys to `f32` values.
pub type ObjectFloatOrderedMap<K> = IndexMap<K, f32>;
/// `i32` keys to object values.
pub type IntObjectMap<V> = HashMap<i32, V>;
/// Insertion-ordered `i32` keys to object values.
pub type IntObjectOrderedMap<V> = IndexMap<i32, V>;
/// `i32` keys to `i32` values.
pub type IntIntMap = HashMap<i32, i32>;
/// Insertion-ordered `i32` keys to `i32` values.
pub type IntIntOrderedMap = IndexMap<i32, i32>;
/// `i32` keys to `i64` values.
pub type IntLongMap = HashMap<i32, i64>;
/// Insertion-ordered `i32` keys to `i64` values.
pub type IntLongOrderedMap = IndexMap<i32, i64>;
/// `i32` keys to `f32` values.
pub type IntFloatMap = HashMap<i32, f32>;
/// Insertion-ordered `i32` keys to `f32` values.
pub type IntFloatOrderedMap = IndexMap<i32, f32>;
/// `i64` keys to object values.
pub type LongObjectMap<V> = HashMap<i64, V>;
/// Insertion-ordered `i64` keys to object values.
pub type LongObjectOrderedMap<V> = IndexMap<i64, V>;
/// `i64` keys to `i32` values.
pub type LongIntMap = HashMap<i64, i32>;
/// Insertion-ordered `i64` keys to `i32` values.
pub type LongIntOrderedMap = IndexMap<i64, i32>;
/// `i64` keys to `i64` values.
pub type LongLongMap = HashMap<i64, i64>;
/// Insertion-ordered `i64` keys to `i64` values.
pub type LongLongOrderedMap = IndexMap<i64, i64>;
/// `i64` keys to `f32` values.
pub type LongFloatMap = HashMap<i64, f32>;
/// Insertion-ordered `i64` keys to `f32` values.
pub type LongFloatOrderedMap = IndexMap<i64, f32>;

/// Keys compared by allocation, in no defined order.
pub type IdentityObjectMap<K, V> = HashMap<Identity<K>, V>;
/// Keys compared by allocation, in insertion order.
pub type IdentityObjectOrderedMap<K, V> = IndexMap<Identity<K>, V>;
