//! Conversions into the ds ecosystem.
//!
//! Sources are anything implementing the capability traits, so toolkit
//! containers, std containers and other ds containers all qualify. Primitive
//! targets accept any element type that widens losslessly (`i16` into an
//! [`IntList`], `f32` into a [`DoubleList`]).

use std::hash::Hash;

use interop_core::capability::{PairSource, Source};
use interop_core::errors::{require, InteropError};
use interop_core::identity::IdentityKey;
use interop_ds::{
    BooleanBag, BooleanDeque, BooleanList, ByteBag, ByteDeque, ByteList, CaseInsensitiveMap,
    CaseInsensitiveOrderedMap, CaseInsensitiveOrderedSet, CaseInsensitiveSet, CharBag, CharDeque,
    CharList, DoubleBag, DoubleDeque, DoubleList, FloatBag, FloatDeque, FloatList, IdentityObjectMap,
    IdentityObjectOrderedMap, IntBag, IntDeque, IntFloatMap, IntFloatOrderedMap, IntIntMap,
    IntIntOrderedMap, IntList, IntObjectMap, IntObjectOrderedMap, IntOrderedSet, IntSet, LongBag,
    LongDeque, LongList, LongObjectMap, LongObjectOrderedMap, LongOrderedSet, LongSet,
    NumberedSet, ObjectBag, ObjectDeque, ObjectFloatMap, ObjectFloatOrderedMap, ObjectIntMap,
    ObjectIntOrderedMap, ObjectList, ObjectLongMap, ObjectLongOrderedMap, ObjectObjectMap,
    ObjectObjectOrderedMap, ObjectOrderedSet, ObjectSet, OffsetBitSet, ShortBag, ShortDeque,
    ShortList,
};

use crate::generic::{convert, convert_keys, convert_pairs, convert_pairs_with, convert_with};

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
    /// Builds an [`IntList`].
    to_int_list -> IntList, i32;
    /// Builds a [`LongList`].
    to_long_list -> LongList, i64;
    /// Builds a [`FloatList`].
    to_float_list -> FloatList, f32;
    /// Builds a [`DoubleList`].
    to_double_list -> DoubleList, f64;
    /// Builds a [`ByteList`].
    to_byte_list -> ByteList, i8;
    /// Builds a [`ShortList`].
    to_short_list -> ShortList, i16;
    /// Builds a [`CharList`].
    to_char_list -> CharList, char;
    /// Builds a [`BooleanList`].
    to_boolean_list -> BooleanList, bool;
    /// Builds an [`IntDeque`].
    to_int_deque -> IntDeque, i32;
    /// Builds a [`LongDeque`].
    to_long_deque -> LongDeque, i64;
    /// Builds a [`FloatDeque`].
    to_float_deque -> FloatDeque, f32;
    /// Builds a [`DoubleDeque`].
    to_double_deque -> DoubleDeque, f64;
    /// Builds a [`ByteDeque`].
    to_byte_deque -> ByteDeque, i8;
    /// Builds a [`ShortDeque`].
    to_short_deque -> ShortDeque, i16;
    /// Builds a [`CharDeque`].
    to_char_deque -> CharDeque, char;
    /// Builds a [`BooleanDeque`].
    to_boolean_deque -> BooleanDeque, bool;
    /// Builds an [`IntBag`].
    to_int_bag -> IntBag, i32;
    /// Builds a [`LongBag`].
    to_long_bag -> LongBag, i64;
    /// Builds a [`FloatBag`].
    to_float_bag -> FloatBag, f32;
    /// Builds a [`DoubleBag`].
    to_double_bag -> DoubleBag, f64;
    /// Builds a [`ByteBag`].
    to_byte_bag -> ByteBag, i8;
    /// Builds a [`ShortBag`].
    to_short_bag -> ShortBag, i16;
    /// Builds a [`CharBag`].
    to_char_bag -> CharBag, char;
    /// Builds a [`BooleanBag`].
    to_boolean_bag -> BooleanBag, bool;
    /// Builds an [`IntSet`]; duplicates collapse.
    to_int_set -> IntSet, i32;
    /// Builds an [`IntOrderedSet`]; the first occurrence keeps its position.
    to_int_ordered_set -> IntOrderedSet, i32;
    /// Builds a [`LongSet`]; duplicates collapse.
    to_long_set -> LongSet, i64;
    /// Builds a [`LongOrderedSet`]; the first occurrence keeps its position.
    to_long_ordered_set -> LongOrderedSet, i64;
}

/// Builds an [`ObjectList`] holding clones of every item.
pub fn to_object_list<'a, S>(source: impl Into<Option<&'a S>>) -> Result<ObjectList<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone,
{
    convert(source)
}

/// Builds an [`ObjectDeque`] holding clones of every item.
pub fn to_object_deque<'a, S>(source: impl Into<Option<&'a S>>) -> Result<ObjectDeque<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone,
{
    convert(source)
}

/// Builds an [`ObjectBag`] holding clones of every item.
pub fn to_object_bag<'a, S>(source: impl Into<Option<&'a S>>) -> Result<ObjectBag<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone,
{
    convert(source)
}

/// Builds an [`OffsetBitSet`] whose offset is the smallest item.
///
/// Unlike the sinks, the whole source is seen before the first bit is set, so no
/// item can fall below the offset.
pub fn to_offset_bit_set<'a, S>(source: impl Into<Option<&'a S>>) -> Result<OffsetBitSet, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Copy + Into<i32>,
{
    let source = require(source.into(), "source")?;
    Ok(source.items().map(|item| -> i32 { (*item).into() }).collect())
}

/// Builds an [`ObjectSet`]; duplicates collapse.
pub fn to_object_set<'a, S>(source: impl Into<Option<&'a S>>) -> Result<ObjectSet<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone + Hash + Eq,
{
    convert(source)
}

/// Builds an [`ObjectOrderedSet`]; the first occurrence keeps its position.
pub fn to_object_ordered_set<'a, S>(
    source: impl Into<Option<&'a S>>,
) -> Result<ObjectOrderedSet<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone + Hash + Eq,
{
    convert(source)
}

/// Builds a [`NumberedSet`], numbering items by first occurrence.
pub fn to_numbered_set<'a, S>(source: impl Into<Option<&'a S>>) -> Result<NumberedSet<S::Item>, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone + Hash + Eq,
{
    convert(source)
}

/// Builds a [`NumberedSet`] from the keys of a map, numbering them in iteration order.
pub fn to_numbered_set_of_keys<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<NumberedSet<M::Key>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone + Hash + Eq,
{
    convert_keys(source)
}

/// Builds a [`CaseInsensitiveSet`] from any string-like items.
pub fn to_case_insensitive_set<'a, S>(
    source: impl Into<Option<&'a S>>,
) -> Result<CaseInsensitiveSet, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: AsRef<str>,
{
    convert_with(source, |item| item.as_ref().to_owned())
}

/// Builds a [`CaseInsensitiveOrderedSet`]; the first spelling keeps its position.
pub fn to_case_insensitive_ordered_set<'a, S>(
    source: impl Into<Option<&'a S>>,
) -> Result<CaseInsensitiveOrderedSet, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: AsRef<str>,
{
    convert_with(source, |item| item.as_ref().to_owned())
}

/// Builds a [`CaseInsensitiveMap`] from any string-keyed map.
pub fn to_case_insensitive_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<CaseInsensitiveMap<M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: AsRef<str>,
    M::Value: Clone,
{
    convert_pairs_with(source, |key| key.as_ref().to_owned(), |value| value.clone())
}

/// Builds a [`CaseInsensitiveOrderedMap`]; colliding keys keep the first position.
pub fn to_case_insensitive_ordered_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<CaseInsensitiveOrderedMap<M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: AsRef<str>,
    M::Value: Clone,
{
    convert_pairs_with(source, |key| key.as_ref().to_owned(), |value| value.clone())
}

/// Builds an [`ObjectObjectMap`].
pub fn to_object_object_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<ObjectObjectMap<M::Key, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone + Hash + Eq,
    M::Value: Clone,
{
    convert_pairs(source)
}

/// Builds an [`ObjectObjectOrderedMap`] preserving the source's entry order.
pub fn to_object_object_ordered_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<ObjectObjectOrderedMap<M::Key, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone + Hash + Eq,
    M::Value: Clone,
{
    convert_pairs(source)
}

/// Builds an [`IdentityObjectMap`] keyed by the allocations behind the source's keys.
///
/// Keys that are equal by value but live in different allocations stay distinct.
pub fn to_identity_object_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<IdentityObjectMap<<M::Key as IdentityKey>::Target, M::Value>, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: IdentityKey,
    M::Value: Clone,
{
    convert_pairs_with(source, |key| key.identity(), |value| value.clone())
}

/// Builds an [`IdentityObjectOrderedMap`] preserving the source's entry order.
pub fn to_identity_object_ordered_map<'a, M>(
    source: impl Into<Option<&'a M>>,
) -> Result<IdentityObjectOrderedMap<<M::Key as IdentityKey>::Target, M::Value>, InteropError>
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
    /// Builds an [`ObjectIntOrderedMap`].
    to_object_int_ordered_map -> ObjectIntOrderedMap, i32;
    /// Builds an [`ObjectLongMap`].
    to_object_long_map -> ObjectLongMap, i64;
    /// Builds an [`ObjectLongOrderedMap`].
    to_object_long_ordered_map -> ObjectLongOrderedMap, i64;
    /// Builds an [`ObjectFloatMap`].
    to_object_float_map -> ObjectFloatMap, f32;
    /// Builds an [`ObjectFloatOrderedMap`].
    to_object_float_ordered_map -> ObjectFloatOrderedMap, f32;
}

macro_rules! primitive_keyed_object_maps {
    ($($(#[$meta:meta])* $name:ident -> $target:ident, $key:ty;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<'a, M>(
                source: impl Into<Option<&'a M>>,
            ) -> Result<$target<M::Value>, InteropError>
            where
                M: PairSource + ?Sized + 'a,
                M::Key: Copy + Into<$key>,
                M::Value: Clone,
            {
                convert_pairs_with(source, |key| (*key).into(), |value| value.clone())
            }
        )+
    };
}

primitive_keyed_object_maps! {
    /// Builds an [`IntObjectMap`].
    to_int_object_map -> IntObjectMap, i32;
    /// Builds an [`IntObjectOrderedMap`].
    to_int_object_ordered_map -> IntObjectOrderedMap, i32;
    /// Builds a [`LongObjectMap`].
    to_long_object_map -> LongObjectMap, i64;
    /// Builds a [`LongObjectOrderedMap`].
    to_long_object_ordered_map -> LongObjectOrderedMap, i64;
}

macro_rules! primitive_maps {
    ($($(#[$meta:meta])* $name:ident -> $target:ty, $key:ty, $value:ty;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<'a, M>(source: impl Into<Option<&'a M>>) -> Result<$target, InteropError>
            where
                M: PairSource + ?Sized + 'a,
                M::Key: Copy + Into<$key>,
                M::Value: Copy + Into<$value>,
            {
                convert_pairs_with(source, |key| (*key).into(), |value| (*value).into())
            }
        )+
    };
}

primitive_maps! {
    /// Builds an [`IntIntMap`].
    to_int_int_map -> IntIntMap, i32, i32;
    /// Builds an [`IntIntOrderedMap`].
    to_int_int_ordered_map -> IntIntOrderedMap, i32, i32;
    /// Builds an [`IntFloatMap`].
    to_int_float_map -> IntFloatMap, i32, f32;
    /// Builds an [`IntFloatOrderedMap`].
    to_int_float_ordered_map -> IntFloatOrderedMap, i32, f32;
}

