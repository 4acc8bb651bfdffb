#![deny(missing_docs)]
#![doc = "The toolkit collection ecosystem: growable arrays, queues, hashed and ordered sets and maps with a game-toolkit style API."]

pub mod array;
pub mod map;
pub mod set;

use interop_core::identity::Identity;

pub use array::{Array, Queue};
pub use map::{ArrayMap, ObjectMap, OrderedMap};
pub use set::{ObjectSet, OrderedSet};

/// Growable array of `i32`.
pub type IntArray = Array<i32>;
/// Growable array of `i64`.
pub type LongArray = Array<i64>;
/// Growable array of `f32`.
pub type FloatArray = Array<f32>;
/// Growable array of `f64`.
pub type DoubleArray = Array<f64>;
/// Growable array of `i8`.
pub type ByteArray = Array<i8>;
/// Growable array of `i16`.
pub type ShortArray = Array<i16>;
/// Growable array of `char`.
pub type CharArray = Array<char>;
/// Growable array of `bool`.
pub type BooleanArray = Array<bool>;

/// Queue of `i32`.
pub type IntQueue = Queue<i32>;
/// Queue of `i64`.
pub type LongQueue = Queue<i64>;

/// Hashed set of `i32`.
pub type IntSet = ObjectSet<i32>;

/// `i32` keys to object values.
pub type IntMap<V> = ObjectMap<i32, V>;
/// `i64` keys to object values.
pub type LongMap<V> = ObjectMap<i64, V>;
/// `i32` keys to `i32` values.
pub type IntIntMap = ObjectMap<i32, i32>;
/// `i32` keys to `f32` values.
pub type IntFloatMap = ObjectMap<i32, f32>;
/// Object keys to `i32` values.
pub type ObjectIntMap<K> = ObjectMap<K, i32>;
/// Object keys to `i64` values.
pub type ObjectLongMap<K> = ObjectMap<K, i64>;
/// Object keys to `f32` values.
pub type ObjectFloatMap<K> = ObjectMap<K, f32>;
/// Keys compared by allocation rather than by value.
pub type IdentityMap<K, V> = ObjectMap<Identity<K>, V>;
