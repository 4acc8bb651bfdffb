//! Capability-driven conversion primitives.
//!
//! Every named entry point in [`crate::to_ds`] and [`crate::to_toolkit`] is one of
//! these functions with its types pinned. A conversion validates its argument
//! first, allocates the target once at the source's size, and never mutates the
//! source.

use interop_core::capability::{PairSink, PairSource, Sink, Source};
use interop_core::errors::{require, InteropError};

/// Copies every item of `source` into a fresh `T`, in iteration order.
pub fn convert<'a, S, T>(source: impl Into<Option<&'a S>>) -> Result<T, InteropError>
where
    S: Source + ?Sized + 'a,
    S::Item: Clone,
    T: Sink<Item = S::Item>,
{
    convert_with(source, |item| item.clone())
}

/// Like [`convert`], passing each item through `map`.
pub fn convert_with<'a, S, T, F>(
    source: impl Into<Option<&'a S>>,
    mut map: F,
) -> Result<T, InteropError>
where
    S: Source + ?Sized + 'a,
    T: Sink,
    F: FnMut(&S::Item) -> T::Item,
{
    let source = require(source.into(), "source")?;
    let mut target = T::with_capacity(source.size());
    for item in source.items() {
        target.add(map(item));
    }
    Ok(target)
}

/// Copies every entry of `source` into a fresh `T`, in iteration order.
pub fn convert_pairs<'a, M, T>(source: impl Into<Option<&'a M>>) -> Result<T, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone,
    M::Value: Clone,
    T: PairSink<Key = M::Key, Value = M::Value>,
{
    convert_pairs_with(source, |key| key.clone(), |value| value.clone())
}

/// Like [`convert_pairs`], passing keys and values through their own mappings.
pub fn convert_pairs_with<'a, M, T, FK, FV>(
    source: impl Into<Option<&'a M>>,
    mut map_key: FK,
    mut map_value: FV,
) -> Result<T, InteropError>
where
    M: PairSource + ?Sized + 'a,
    T: PairSink,
    FK: FnMut(&M::Key) -> T::Key,
    FV: FnMut(&M::Value) -> T::Value,
{
    let source = require(source.into(), "source")?;
    let mut target = T::with_capacity(source.size());
    for (key, value) in source.entries() {
        target.put(map_key(key), map_value(value));
    }
    Ok(target)
}

/// Collects the keys of `source` into a fresh `T`, in iteration order.
pub fn convert_keys<'a, M, T>(source: impl Into<Option<&'a M>>) -> Result<T, InteropError>
where
    M: PairSource + ?Sized + 'a,
    M::Key: Clone,
    T: Sink<Item = M::Key>,
{
    let source = require(source.into(), "source")?;
    let mut target = T::with_capacity(source.size());
    for (key, _) in source.entries() {
        target.add(key.clone());
    }
    Ok(target)
}
