//! Conversions into the toolkit ecosystem.

use std::hash::Hash;

use interop_core::capability::{PairSource, Source};
use interop_core::errors::InteropError;
use interop_core::identity::IdentityKey;
use interop_toolkit::{
    Array, ArrayMap, BooleanArray, ByteArray, CharArray, DoubleArray, FloatArray, IdentityMap,
    IntArray, IntFloatMap, IntIntMap, IntMap, IntSet, LongArray, LongMap, LongQueue, ObjectFloatMap,
    ObjectIntMap, ObjectLongMap, ObjectMap, ObjectSet, OrderedMap, OrderedSet, Queue, ShortArray,
};

use crate::generic::{convert, convert_pairs, convert_pairs_with, convert_with};

macro_rules! widening_sequences {
    ($($(#[$meta:meta])* $name:ident -> $target:ty, $prim:ty;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<'a, S>(source: impl Into<Option<&'a S>>) -> Result<$target, InteropError>
            where
                S: Source + ?Sized + 'a,
                S::Item: Copy + Into<$prim>,
            {
                convert_with(source, |item| (*item).into())
            }
        )+
    };
}

widening_sequences! {
    /// Builds an [`IntArray`].
    to_int_array -> IntArray, i32;
    /// Builds a [`LongArray`].
    to_long_array -> LongArray, i64;
    /// Builds a [`FloatArray`].
    to_float_array -> FloatArray, f32;
    /// Builds a [`DoubleArray`].
    to_double_array -> DoubleArray, f64;
    /// Builds a [`ByteArray`].
    to_byte_array -> ByteArray, i8;
    /// Builds a [`ShortArray`].
    to_short_array -> ShortArray, i16;
    /// Builds a [`CharArray`].
    to_char_array -> CharArray, char;
    /// Builds a [`BooleanArray`].
    to_boolean_array -> BooleanArray, bool;
    /// Builds a [`LongQueue`].
    to_long_queue -> LongQueue, i64;
    /// Builds an [`IntSet`]; duplicates collapse.
    to_int_set -> IntSet, i32;
}

/// Builds an [`Array`] holding clones of every item.
pub fn to_array<'a, S>(source: impl Into<Option<&'a S>>) -> Result<Array<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone,
{
    convert(source)
}

/// Builds a [`Queue`] holding clones of every item, head first.
pub fn to_queue<'a, S>(source: impl Into<Option<&'a S>>) -> Result<Queue<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone,
{
    convert(source)
}

/// Builds an [`ObjectSet`]; duplicates collapse.
pub fn to_object_set<'a, S>(source: impl Into<Option<&'a S>>) -> Result<ObjectSet<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone + Hash + Eq,
{
    convert(source)
}

/// Builds an [`OrderedSet`]; the first occurrence keeps its position.
pub fn to_ordered_set<'a, S>(source: impl Into<Option<&'a S>>) -> Result<OrderedSet<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone + Hash + Eq,
{
    convert(source)
}

/// Builds an [`ArrayMap`] preserving the source's entry order.
pub fn to_array_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<ArrayMap<M::Key, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone + PartialEq,
    M::Value: Clone,
{
    convert_pairs(source)
}

/// Builds an [`ObjectMap`].
pub fn to_object_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<ObjectMap<M::Key, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone + Hash + Eq,
    M::Value: Clone,
{
    convert_pairs(source)
}

/// Builds an [`OrderedMap`] preserving the source's entry order.
pub fn to_ordered_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<OrderedMap<M::Key, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone + Hash + Eq,
    M::Value: Clone,
{
    convert_pairs(source)
}

/// Builds an [`IdentityMap`] keyed by the allocations behind the source's keys.
///
/// Two source keys collapse only when they share one allocation.
pub fn to_identity_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<IdentityMap<<M::Key as IdentityKey>::Target, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: IdentityKey,
    M::Value: Clone,
{
    convert_pairs_with(source, |key| key.identity(), |value| value.clone())
}

macro_rules! object_keyed_maps {
    ($($(#[$meta:meta])* $name:ident -> $target:ident, $prim:ty;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<'a, M>(
                source: impl Into<Option<&'a M>>,
            ) -> Result<$target<M::Key>, InteropError>
            where
                M: PairSource + ?Sized + 'a,
                M::Key: Clone + Hash + Eq,
                M::Value: Copy + Into<$prim>,
            {
                convert_pairs_with(source, |key| key.clone(), |value| (*value).into())
            }
        )+
    };
}

object_keyed_maps! {
    /// Builds an [`ObjectIntMap`].
    to_object_int_map -> ObjectIntMap, i32;
    /// Builds an [`ObjectLongMap`].
    to_object_long_map -> ObjectLongMap, i64;
    /// Builds an [`ObjectFloatMap`].
    to_object_float_map -> ObjectFloatMap, f32;
}

/// Builds an [`IntMap`] from any map with keys that widen to `i32`.
pub fn to_int_map<'a, M>(source: impl Into<Option<&'a M>>) -> Result<IntMap<M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Copy + Into<i32>,
    M::Value: Clone,
{
    convert_pairs_with(source, |key| (*key).into(), |value| value.clone())
}

/// Builds a [`LongMap`] from any map with keys that widen to `i64`.
pub fn to_long_map<'a, M>(source: impl Into<Option<&'a M>>) -> Result<LongMap<M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Copy + Into<i64>,
    M::Value: Clone,
{
    convert_pairs_with(source, |key| (*key).into(), |value| value.clone())
}

/// Builds an [`IntIntMap`].
pub fn to_int_int_map<'a, M>(source: impl Into<Option<&'a M>>) -> Result<IntIntMap, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Copy + Into<i32>,
    M::Value: Copy + Into<i32>,
{
    convert_pairs_with(source, |key| (*key).into(), |value| (*value).into())
}

/// Builds an [`IntFloatMap`].
pub fn to_int_float_map<'a, M>(source: impl Into<Option<&'a M>>) -> Result<IntFloatMap, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Copy + Into<i32>,
    M::Value: Copy + Into<f32>,
{
    convert_pairs_with(source, |key| (*key).into(), |value| (*value).into())
}
