//! Codec installers for every ds container, generator, distribution and [`Base`].
//!
//! Each public `register_*` call installs one codec on a [`Json`]. The generic
//! families are instantiated by the caller; [`register_all`] instantiates them for
//! `String` elements, keys and values.

use std::collections::BinaryHeap;
use std::hash::Hash;

use interop_core::base::{Base, NumberFormat};
use interop_core::capability::{PairSource, Source};
use interop_core::errors::{require, ErrorInfo, InteropError};
use interop_ds::{
    BooleanBag, BooleanDeque, BooleanList, ByteBag, ByteDeque, ByteList, CaseInsensitiveMap,
    CaseInsensitiveOrderedMap, CaseInsensitiveOrderedSet, CaseInsensitiveSet, CharBag, CharDeque,
    CharList, DoubleBag, DoubleDeque, DoubleList, FloatBag, FloatDeque, FloatList, IntBag,
    IntDeque, IntFloatMap, IntFloatOrderedMap, IntIntMap, IntIntOrderedMap, IntList, IntLongMap,
    IntLongOrderedMap, IntObjectMap, IntObjectOrderedMap, IntOrderedSet, IntSet, LongBag,
    LongDeque, LongFloatMap, LongFloatOrderedMap, LongIntMap, LongIntOrderedMap, LongList,
    LongLongMap, LongLongOrderedMap, LongObjectMap, LongObjectOrderedMap, LongOrderedSet, LongSet,
    NumberedSet, ObjectBag, ObjectDeque, ObjectFloatMap, ObjectFloatOrderedMap, ObjectIntMap,
    ObjectIntOrderedMap, ObjectList, ObjectLongMap, ObjectLongOrderedMap, ObjectObjectMap,
    ObjectObjectOrderedMap, ObjectOrderedSet, ObjectSet, OffsetBitSet, ShortBag, ShortDeque,
    ShortList,
};
use interop_random::{
    deserialize_distribution, deserialize_random, Bernoulli, Cauchy, ContinuousUniform,
    DistinctRandom, Distribution, EnhancedRandom, Exponential, Geometric, GoldenQuasiRandom,
    Kumaraswamy, Laplace, Logistic, Normal, Pareto, Poisson, Rayleigh, RomuTrioRandom,
    Sfc64Random, Triangular, Weibull, Xoroshiro128StarStarRandom, Xoshiro256StarStarRandom,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::json::Json;

/// Element, key or value type usable in the generic container families.
pub trait Element: Serialize + DeserializeOwned + 'static {}

impl<T: Serialize + DeserializeOwned + 'static> Element for T {}

/// A single codec installation step.
pub type Installer = fn(&mut Json);

fn payload_error(reason: &str) -> InteropError {
    InteropError::Codec(ErrorInfo::new("payload-shape", reason))
}

fn install_codec<T, W, R>(json: &mut Json, tag: &str, write: W, read: R)
where
    T: 'static,
    W: Fn(&Json, &T) -> Result<Value, InteropError> + Send + Sync + 'static,
    R: Fn(&Json, &Value) -> Result<T, InteropError> + Send + Sync + 'static,
{
    json.set_serializer(write, read);
    if json.add_class_tags() {
        json.add_class_tag::<T>(tag);
    }
}

fn registering<'a>(
    json: impl Into<Option<&'a mut Json>>,
    installer: Installer,
) -> Result<(), InteropError> {
    installer(require(json.into(), "json")?);
    Ok(())
}

fn items_payload(items: Value) -> Value {
    json!({ "items": items })
}

fn items_member(value: &Value) -> Result<&Value, InteropError> {
    value
        .get("items")
        .ok_or_else(|| payload_error("missing `items` member"))
}

fn text(value: &Value) -> Result<&str, InteropError> {
    value
        .as_str()
        .ok_or_else(|| payload_error("expected a string"))
}

fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T, InteropError> {
    T::try_from(value).map_err(|_| {
        InteropError::Codec(
            ErrorInfo::new("number-range", "value does not fit the element type")
                .with_context("value", value.to_string()),
        )
    })
}

/// Primitive element written as part of one joined string.
trait Joined: Copy + 'static {
    fn join<I: Iterator<Item = Self>>(format: &NumberFormat, values: I) -> String;
    fn split(format: &NumberFormat, text: &str) -> Result<Vec<Self>, InteropError>;
}

macro_rules! joined_integers {
    ($($prim:ty),+) => {
        $(
            impl Joined for $prim {
                fn join<I: Iterator<Item = Self>>(format: &NumberFormat, values: I) -> String {
                    format.join_i64(values.map(i64::from))
                }

                fn split(format: &NumberFormat, text: &str) -> Result<Vec<Self>, InteropError> {
                    format.split_i64(text)?.into_iter().map(narrow).collect()
                }
            }
        )+
    };
}

joined_integers!(i8, i16, i32, i64);

impl Joined for f32 {
    fn join<I: Iterator<Item = Self>>(format: &NumberFormat, values: I) -> String {
        format.join_f32(values)
    }

    fn split(format: &NumberFormat, text: &str) -> Result<Vec<Self>, InteropError> {
        format.split_f32(text)
    }
}

impl Joined for f64 {
    fn join<I: Iterator<Item = Self>>(format: &NumberFormat, values: I) -> String {
        format.join_f64(values)
    }

    fn split(format: &NumberFormat, text: &str) -> Result<Vec<Self>, InteropError> {
        format.split_f64(text)
    }
}

// Booleans are dense digits, one per element.
impl Joined for bool {
    fn join<I: Iterator<Item = Self>>(_: &NumberFormat, values: I) -> String {
        values.map(|value| if value { '1' } else { '0' }).collect()
    }

    fn split(_: &NumberFormat, text: &str) -> Result<Vec<Self>, InteropError> {
        text.chars()
            .map(|digit| match digit {
                '1' => Ok(true),
                '0' => Ok(false),
                _ => Err(payload_error("boolean digits must be 0 or 1")),
            })
            .collect()
    }
}

impl Joined for char {
    fn join<I: Iterator<Item = Self>>(_: &NumberFormat, values: I) -> String {
        values.collect()
    }

    fn split(_: &NumberFormat, text: &str) -> Result<Vec<Self>, InteropError> {
        Ok(text.chars().collect())
    }
}

fn install_joined<C, E>(json: &mut Json, tag: &str)
where
    C: Source<Item = E> + FromIterator<E> + 'static,
    E: Joined,
{
    install_codec::<C, _, _>(
        json,
        tag,
        |json, items: &C| {
            let joined = E::join(&json.number_format(), items.items().copied());
            Ok(items_payload(Value::String(joined)))
        },
        |json, value| {
            let values = E::split(&json.number_format(), text(items_member(value)?)?)?;
            Ok(values.into_iter().collect())
        },
    );
}

fn install_items<C, T>(json: &mut Json, tag: &str)
where
    C: Source<Item = T> + FromIterator<T> + 'static,
    T: Element,
{
    install_codec::<C, _, _>(
        json,
        tag,
        |json, items: &C| {
            let values = items
                .items()
                .map(|item| json.write_element(item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(items_payload(Value::Array(values)))
        },
        |json, value| {
            items_member(value)?
                .as_array()
                .ok_or_else(|| payload_error("`items` must be an array"))?
                .iter()
                .map(|item| json.read_element::<T>(item))
                .collect()
        },
    );
}

struct KeyCodec<K> {
    write: fn(&Json, &K) -> Result<String, InteropError>,
    read: fn(&Json, &str) -> Result<K, InteropError>,
}

struct ValueCodec<V> {
    write: fn(&Json, &V) -> Result<Value, InteropError>,
    read: fn(&Json, &Value) -> Result<V, InteropError>,
}

fn object_key<K: Element>() -> KeyCodec<K> {
    KeyCodec {
        write: |json, key| json.write_key(key),
        read: |json, text| json.read_key(text),
    }
}

fn numeral_key<K>() -> KeyCodec<K>
where
    K: Copy + Into<i64> + TryFrom<i64> + 'static,
{
    KeyCodec {
        write: |json, key| Ok(json.number_format().write_i64((*key).into())),
        read: |json, text| narrow(json.number_format().read_i64(text)?),
    }
}

fn object_value<V: Element>() -> ValueCodec<V> {
    ValueCodec {
        write: |json, value| json.write_element(value),
        read: |json, value| json.read_element(value),
    }
}

fn numeral_value<V>() -> ValueCodec<V>
where
    V: Copy + Into<i64> + TryFrom<i64> + 'static,
{
    ValueCodec {
        write: |json, value| Ok(Value::String(json.number_format().write_i64((*value).into()))),
        read: |json, value| narrow(json.number_format().read_i64(text(value)?)?),
    }
}

fn float_value() -> ValueCodec<f32> {
    ValueCodec {
        write: |json, value| Ok(Value::String(json.number_format().write_f32(*value))),
        read: |json, value| json.number_format().read_f32(text(value)?),
    }
}

fn install_map<M>(json: &mut Json, tag: &str, key: KeyCodec<M::Key>, value: ValueCodec<M::Value>)
where
    M: PairSource + FromIterator<(M::Key, M::Value)> + 'static,
    M::Key: 'static,
    M::Value: 'static,
{
    let KeyCodec {
        write: write_key,
        read: read_key,
    } = key;
    let ValueCodec {
        write: write_value,
        read: read_value,
    } = value;
    install_codec::<M, _, _>(
        json,
        tag,
        move |json, map: &M| {
            let mut members = Map::new();
            for (key, value) in map.entries() {
                members.insert(write_key(json, key)?, write_value(json, value)?);
            }
            Ok(Value::Object(members))
        },
        move |json, value| {
            value
                .as_object()
                .ok_or_else(|| payload_error("expected an object"))?
                .iter()
                .map(|(key, value)| -> Result<_, InteropError> {
                    Ok((read_key(json, key)?, read_value(json, value)?))
                })
                .collect()
        },
    );
}

fn read_offset_bit_set(value: &Value) -> Result<OffsetBitSet, InteropError> {
    let number = |member: &Value| {
        member
            .as_i64()
            .ok_or_else(|| payload_error("expected an integer"))
            .and_then(narrow::<i32>)
    };
    let offset = number(
        value
            .get("offset")
            .ok_or_else(|| payload_error("missing `offset` member"))?,
    )?;
    let values = value
        .get("values")
        .and_then(Value::as_array)
        .ok_or_else(|| payload_error("`values` must be an array"))?;
    let mut bits = OffsetBitSet::with_offset(offset);
    for member in values {
        let item = number(member)?;
        if item < offset {
            return Err(InteropError::Codec(
                ErrorInfo::new("payload-shape", "value lies below the offset")
                    .with_context("value", item.to_string())
                    .with_context("offset", offset.to_string()),
            ));
        }
        bits.add(item);
    }
    Ok(bits)
}

fn install_generator<G: EnhancedRandom + 'static>(
    json: &mut Json,
    tag: &str,
    read: fn(&str) -> Result<G, InteropError>,
) {
    install_codec::<G, _, _>(
        json,
        tag,
        |json, random: &G| Ok(Value::String(random.string_serialize(&json.numeral_base()))),
        move |_, value| read(text(value)?),
    );
}

fn install_distribution<D: Distribution + 'static>(
    json: &mut Json,
    tag: &str,
    read: fn(&str) -> Result<D, InteropError>,
) {
    install_codec::<D, _, _>(
        json,
        tag,
        |json, distribution: &D| {
            Ok(Value::String(distribution.string_serialize(&json.number_format())))
        },
        move |_, value| read(text(value)?),
    );
}

macro_rules! registrations {
    ($($(#[$meta:meta])* $register:ident, $install:ident => |$json:ident| $body:expr;)+) => {
        $(
            fn $install($json: &mut Json) {
                $body
            }

            $(#[$meta])*
            pub fn $register<'a>(json: impl Into<Option<&'a mut Json>>) -> Result<(), InteropError> {
                registering(json, $install)
            }
        )+
    };
}

macro_rules! generic_registrations {
    ($(
        $(#[$meta:meta])*
        $register:ident, $install:ident<$t:ident: $($bound:path),+> => |$json:ident| $body:expr;
    )+) => {
        $(
            fn $install<$t>($json: &mut Json)
            where
                $($t: $bound,)+
            {
                $body
            }

            $(#[$meta])*
            pub fn $register<'a, $t>(json: impl Into<Option<&'a mut Json>>) -> Result<(), InteropError>
            where
                $($t: $bound,)+
            {
                registering(json, $install::<$t>)
            }
        )+
    };
}

registrations! {
    /// Registers [`IntList`] as a joined numeral-base string.
    register_int_list, install_int_list => |json| install_joined::<IntList, i32>(json, "iL");
    /// Registers [`LongList`] as a joined numeral-base string.
    register_long_list, install_long_list => |json| install_joined::<LongList, i64>(json, "lL");
    /// Registers [`FloatList`] in the configured float format.
    register_float_list, install_float_list => |json| install_joined::<FloatList, f32>(json, "fL");
    /// Registers [`DoubleList`] in the configured float format.
    register_double_list, install_double_list => |json| install_joined::<DoubleList, f64>(json, "dL");
    /// Registers [`ByteList`] as a joined numeral-base string.
    register_byte_list, install_byte_list => |json| install_joined::<ByteList, i8>(json, "bL");
    /// Registers [`ShortList`] as a joined numeral-base string.
    register_short_list, install_short_list => |json| install_joined::<ShortList, i16>(json, "sL");
    /// Registers [`CharList`] as one string.
    register_char_list, install_char_list => |json| install_joined::<CharList, char>(json, "cL");
    /// Registers [`BooleanList`] as dense `0`/`1` digits.
    register_boolean_list, install_boolean_list => |json| install_joined::<BooleanList, bool>(json, "tL");

    /// Registers [`IntDeque`].
    register_int_deque, install_int_deque => |json| install_joined::<IntDeque, i32>(json, "iQ");
    /// Registers [`LongDeque`].
    register_long_deque, install_long_deque => |json| install_joined::<LongDeque, i64>(json, "lQ");
    /// Registers [`FloatDeque`].
    register_float_deque, install_float_deque => |json| install_joined::<FloatDeque, f32>(json, "fQ");
    /// Registers [`DoubleDeque`].
    register_double_deque, install_double_deque => |json| install_joined::<DoubleDeque, f64>(json, "dQ");
    /// Registers [`ByteDeque`].
    register_byte_deque, install_byte_deque => |json| install_joined::<ByteDeque, i8>(json, "bQ");
    /// Registers [`ShortDeque`].
    register_short_deque, install_short_deque => |json| install_joined::<ShortDeque, i16>(json, "sQ");
    /// Registers [`CharDeque`].
    register_char_deque, install_char_deque => |json| install_joined::<CharDeque, char>(json, "cQ");
    /// Registers [`BooleanDeque`].
    register_boolean_deque, install_boolean_deque => |json| install_joined::<BooleanDeque, bool>(json, "tQ");

    /// Registers [`IntBag`] as a joined numeral-base string.
    register_int_bag, install_int_bag => |json| install_joined::<IntBag, i32>(json, "iB");
    /// Registers [`LongBag`].
    register_long_bag, install_long_bag => |json| install_joined::<LongBag, i64>(json, "lB");
    /// Registers [`FloatBag`].
    register_float_bag, install_float_bag => |json| install_joined::<FloatBag, f32>(json, "fB");
    /// Registers [`DoubleBag`].
    register_double_bag, install_double_bag => |json| install_joined::<DoubleBag, f64>(json, "dB");
    /// Registers [`ByteBag`].
    register_byte_bag, install_byte_bag => |json| install_joined::<ByteBag, i8>(json, "bB");
    /// Registers [`ShortBag`].
    register_short_bag, install_short_bag => |json| install_joined::<ShortBag, i16>(json, "sB");
    /// Registers [`CharBag`].
    register_char_bag, install_char_bag => |json| install_joined::<CharBag, char>(json, "cB");
    /// Registers [`BooleanBag`] as dense `0`/`1` digits.
    register_boolean_bag, install_boolean_bag => |json| install_joined::<BooleanBag, bool>(json, "tB");

    /// Registers [`IntSet`] as an array of numbers.
    register_int_set, install_int_set => |json| install_items::<IntSet, i32>(json, "iS");
    /// Registers [`IntOrderedSet`] as an array of numbers in insertion order.
    register_int_ordered_set, install_int_ordered_set => |json| install_items::<IntOrderedSet, i32>(json, "iOS");
    /// Registers [`LongSet`] as an array of numbers.
    register_long_set, install_long_set => |json| install_items::<LongSet, i64>(json, "lS");
    /// Registers [`LongOrderedSet`] as an array of numbers in insertion order.
    register_long_ordered_set, install_long_ordered_set => |json| install_items::<LongOrderedSet, i64>(json, "lOS");

    /// Registers [`CaseInsensitiveSet`].
    register_case_insensitive_set, install_case_insensitive_set =>
        |json| install_items::<CaseInsensitiveSet, String>(json, "oCS");
    /// Registers [`CaseInsensitiveOrderedSet`].
    register_case_insensitive_ordered_set, install_case_insensitive_ordered_set =>
        |json| install_items::<CaseInsensitiveOrderedSet, String>(json, "oCOS");

    /// Registers [`IntIntMap`].
    register_int_int_map, install_int_int_map =>
        |json| install_map::<IntIntMap>(json, "iiM", numeral_key(), object_value());
    /// Registers [`IntIntOrderedMap`].
    register_int_int_ordered_map, install_int_int_ordered_map =>
        |json| install_map::<IntIntOrderedMap>(json, "iiOM", numeral_key(), object_value());
    /// Registers [`IntLongMap`].
    register_int_long_map, install_int_long_map =>
        |json| install_map::<IntLongMap>(json, "ilM", numeral_key(), object_value());
    /// Registers [`IntLongOrderedMap`].
    register_int_long_ordered_map, install_int_long_ordered_map =>
        |json| install_map::<IntLongOrderedMap>(json, "ilOM", numeral_key(), object_value());
    /// Registers [`IntFloatMap`]; values use the float format.
    register_int_float_map, install_int_float_map =>
        |json| install_map::<IntFloatMap>(json, "ifM", numeral_key(), float_value());
    /// Registers [`IntFloatOrderedMap`].
    register_int_float_ordered_map, install_int_float_ordered_map =>
        |json| install_map::<IntFloatOrderedMap>(json, "ifOM", numeral_key(), float_value());
    /// Registers [`LongIntMap`].
    register_long_int_map, install_long_int_map =>
        |json| install_map::<LongIntMap>(json, "liM", numeral_key(), object_value());
    /// Registers [`LongIntOrderedMap`].
    register_long_int_ordered_map, install_long_int_ordered_map =>
        |json| install_map::<LongIntOrderedMap>(json, "liOM", numeral_key(), object_value());
    /// Registers [`LongLongMap`].
    register_long_long_map, install_long_long_map =>
        |json| install_map::<LongLongMap>(json, "llM", numeral_key(), object_value());
    /// Registers [`LongLongOrderedMap`].
    register_long_long_ordered_map, install_long_long_ordered_map =>
        |json| install_map::<LongLongOrderedMap>(json, "llOM", numeral_key(), object_value());
    /// Registers [`LongFloatMap`]; values use the float format.
    register_long_float_map, install_long_float_map =>
        |json| install_map::<LongFloatMap>(json, "lfM", numeral_key(), float_value());
    /// Registers [`LongFloatOrderedMap`].
    register_long_float_ordered_map, install_long_float_ordered_map =>
        |json| install_map::<LongFloatOrderedMap>(json, "lfOM", numeral_key(), float_value());

    /// Registers [`DistinctRandom`].
    register_distinct_random, install_distinct_random =>
        |json| install_generator(json, DistinctRandom::TAG, DistinctRandom::from_string);
    /// Registers [`GoldenQuasiRandom`].
    register_golden_quasi_random, install_golden_quasi_random =>
        |json| install_generator(json, GoldenQuasiRandom::TAG, GoldenQuasiRandom::from_string);
    /// Registers [`Xoshiro256StarStarRandom`].
    register_xoshiro256_star_star_random, install_xoshiro256_star_star_random =>
        |json| install_generator(json, Xoshiro256StarStarRandom::TAG, Xoshiro256StarStarRandom::from_string);
    /// Registers [`Xoroshiro128StarStarRandom`].
    register_xoroshiro128_star_star_random, install_xoroshiro128_star_star_random =>
        |json| install_generator(json, Xoroshiro128StarStarRandom::TAG, Xoroshiro128StarStarRandom::from_string);
    /// Registers [`RomuTrioRandom`].
    register_romu_trio_random, install_romu_trio_random =>
        |json| install_generator(json, RomuTrioRandom::TAG, RomuTrioRandom::from_string);
    /// Registers [`Sfc64Random`].
    register_sfc64_random, install_sfc64_random =>
        |json| install_generator(json, Sfc64Random::TAG, Sfc64Random::from_string);

    /// Registers `Box<dyn EnhancedRandom>`, reading whichever generator the tag names.
    register_enhanced_random, install_enhanced_random => |json| install_codec::<Box<dyn EnhancedRandom>, _, _>(
        json,
        "EnhR",
        |json, random: &Box<dyn EnhancedRandom>| {
            Ok(Value::String(random.string_serialize(&json.numeral_base())))
        },
        |_, value| deserialize_random(text(value)?),
    );

    /// Registers [`Bernoulli`].
    register_bernoulli, install_bernoulli =>
        |json| install_distribution(json, Bernoulli::TAG, Bernoulli::from_string);
    /// Registers [`Cauchy`].
    register_cauchy, install_cauchy =>
        |json| install_distribution(json, Cauchy::TAG, Cauchy::from_string);
    /// Registers [`ContinuousUniform`].
    register_continuous_uniform, install_continuous_uniform =>
        |json| install_distribution(json, ContinuousUniform::TAG, ContinuousUniform::from_string);
    /// Registers [`Exponential`].
    register_exponential, install_exponential =>
        |json| install_distribution(json, Exponential::TAG, Exponential::from_string);
    /// Registers [`Geometric`].
    register_geometric, install_geometric =>
        |json| install_distribution(json, Geometric::TAG, Geometric::from_string);
    /// Registers [`Kumaraswamy`].
    register_kumaraswamy, install_kumaraswamy =>
        |json| install_distribution(json, Kumaraswamy::TAG, Kumaraswamy::from_string);
    /// Registers [`Laplace`].
    register_laplace, install_laplace =>
        |json| install_distribution(json, Laplace::TAG, Laplace::from_string);
    /// Registers [`Logistic`].
    register_logistic, install_logistic =>
        |json| install_distribution(json, Logistic::TAG, Logistic::from_string);
    /// Registers [`Normal`].
    register_normal, install_normal =>
        |json| install_distribution(json, Normal::TAG, Normal::from_string);
    /// Registers [`Pareto`].
    register_pareto, install_pareto =>
        |json| install_distribution(json, Pareto::TAG, Pareto::from_string);
    /// Registers [`Poisson`].
    register_poisson, install_poisson =>
        |json| install_distribution(json, Poisson::TAG, Poisson::from_string);
    /// Registers [`Rayleigh`].
    register_rayleigh, install_rayleigh =>
        |json| install_distribution(json, Rayleigh::TAG, Rayleigh::from_string);
    /// Registers [`Triangular`].
    register_triangular, install_triangular =>
        |json| install_distribution(json, Triangular::TAG, Triangular::from_string);
    /// Registers [`Weibull`].
    register_weibull, install_weibull =>
        |json| install_distribution(json, Weibull::TAG, Weibull::from_string);

    /// Registers `Box<dyn Distribution>`, reading whichever family the tag names.
    register_distribution, install_boxed_distribution => |json| install_codec::<Box<dyn Distribution>, _, _>(
        json,
        "Dist",
        |json, distribution: &Box<dyn Distribution>| {
            Ok(Value::String(distribution.string_serialize(&json.number_format())))
        },
        |_, value| deserialize_distribution(text(value)?),
    );

    /// Registers [`OffsetBitSet`] as `{"offset": n, "values": [ascending numbers]}`.
    register_offset_bit_set, install_offset_bit_set => |json| install_codec::<OffsetBitSet, _, _>(
        json,
        "iBS",
        |_, bits: &OffsetBitSet| {
            Ok(json!({ "offset": bits.offset(), "values": bits.iter().collect::<Vec<_>>() }))
        },
        |_, value| read_offset_bit_set(value),
    );

    /// Registers [`Base`] as `{"radix": n, "uppercase": b}`.
    register_base, install_base => |json| install_codec::<Base, _, _>(
        json,
        "Base",
        |_, base: &Base| serde_json::to_value(base).map_err(|err| InteropError::codec("base-serialize", err)),
        |_, value| Base::deserialize(value).map_err(|err| InteropError::codec("base-deserialize", err)),
    );
}

generic_registrations! {
    /// Registers [`ObjectList`] of `T` as `{"items": [...]}`.
    register_object_list, install_object_list<T: Element> =>
        |json| install_items::<ObjectList<T>, T>(json, "oL");
    /// Registers [`ObjectBag`] of `T`.
    register_object_bag, install_object_bag<T: Element> =>
        |json| install_items::<ObjectBag<T>, T>(json, "oB");
    /// Registers [`ObjectDeque`] of `T`.
    register_object_deque, install_object_deque<T: Element> =>
        |json| install_items::<ObjectDeque<T>, T>(json, "oQ");
    /// Registers [`ObjectSet`] of `T`.
    register_object_set, install_object_set<T: Element, Hash, Eq> =>
        |json| install_items::<ObjectSet<T>, T>(json, "oS");
    /// Registers [`ObjectOrderedSet`] of `T`, keeping insertion order.
    register_object_ordered_set, install_object_ordered_set<T: Element, Hash, Eq> =>
        |json| install_items::<ObjectOrderedSet<T>, T>(json, "oOS");
    /// Registers [`BinaryHeap`] of `T` as `{"max": true, "items": [...]}`.
    ///
    /// Items are written in storage order and reheaped on read. A std heap is
    /// always max-ordered, so `max` is written as `true` and not consulted on read.
    register_binary_heap, install_binary_heap<T: Element, Ord> => |json| install_codec::<BinaryHeap<T>, _, _>(
        json,
        "oBQ",
        |json, heap: &BinaryHeap<T>| {
            let items = heap
                .iter()
                .map(|item| json.write_element(item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(json!({ "max": true, "items": items }))
        },
        |json, value| {
            items_member(value)?
                .as_array()
                .ok_or_else(|| payload_error("`items` must be an array"))?
                .iter()
                .map(|item| json.read_element::<T>(item))
                .collect()
        },
    );
    /// Registers [`NumberedSet`] of `T`; decoding renumbers items in payload order.
    register_numbered_set, install_numbered_set<T: Element, Hash, Eq> =>
        |json| install_items::<NumberedSet<T>, T>(json, "oNS");

    /// Registers [`CaseInsensitiveMap`] with values of `V`.
    register_case_insensitive_map, install_case_insensitive_map<V: Element> =>
        |json| install_map::<CaseInsensitiveMap<V>>(json, "ooCM", object_key(), object_value());
    /// Registers [`CaseInsensitiveOrderedMap`] with values of `V`.
    register_case_insensitive_ordered_map, install_case_insensitive_ordered_map<V: Element> =>
        |json| install_map::<CaseInsensitiveOrderedMap<V>>(json, "ooCOM", object_key(), object_value());

    /// Registers [`ObjectIntMap`] with keys of `K`; values are numeral-base strings.
    register_object_int_map, install_object_int_map<K: Element, Hash, Eq> =>
        |json| install_map::<ObjectIntMap<K>>(json, "oiM", object_key(), numeral_value());
    /// Registers [`ObjectIntOrderedMap`] with keys of `K`.
    register_object_int_ordered_map, install_object_int_ordered_map<K: Element, Hash, Eq> =>
        |json| install_map::<ObjectIntOrderedMap<K>>(json, "oiOM", object_key(), numeral_value());
    /// Registers [`ObjectLongMap`] with keys of `K`; values are numeral-base strings.
    register_object_long_map, install_object_long_map<K: Element, Hash, Eq> =>
        |json| install_map::<ObjectLongMap<K>>(json, "olM", object_key(), numeral_value());
    /// Registers [`ObjectLongOrderedMap`] with keys of `K`.
    register_object_long_ordered_map, install_object_long_ordered_map<K: Element, Hash, Eq> =>
        |json| install_map::<ObjectLongOrderedMap<K>>(json, "olOM", object_key(), numeral_value());
    /// Registers [`ObjectFloatMap`] with keys of `K`; values use the float format.
    register_object_float_map, install_object_float_map<K: Element, Hash, Eq> =>
        |json| install_map::<ObjectFloatMap<K>>(json, "ofM", object_key(), float_value());
    /// Registers [`ObjectFloatOrderedMap`] with keys of `K`.
    register_object_float_ordered_map, install_object_float_ordered_map<K: Element, Hash, Eq> =>
        |json| install_map::<ObjectFloatOrderedMap<K>>(json, "ofOM", object_key(), float_value());

    /// Registers [`IntObjectMap`] with values of `V`; keys are numeral-base strings.
    register_int_object_map, install_int_object_map<V: Element> =>
        |json| install_map::<IntObjectMap<V>>(json, "ioM", numeral_key(), object_value());
    /// Registers [`IntObjectOrderedMap`] with values of `V`.
    register_int_object_ordered_map, install_int_object_ordered_map<V: Element> =>
        |json| install_map::<IntObjectOrderedMap<V>>(json, "ioOM", numeral_key(), object_value());
    /// Registers [`LongObjectMap`] with values of `V`; keys are numeral-base strings.
    register_long_object_map, install_long_object_map<V: Element> =>
        |json| install_map::<LongObjectMap<V>>(json, "loM", numeral_key(), object_value());
    /// Registers [`LongObjectOrderedMap`] with values of `V`.
    register_long_object_ordered_map, install_long_object_ordered_map<V: Element> =>
        |json| install_map::<LongObjectOrderedMap<V>>(json, "loOM", numeral_key(), object_value());
}

fn install_object_object_map<K, V>(json: &mut Json)
where
    K: Element + Hash + Eq,
    V: Element,
{
    install_map::<ObjectObjectMap<K, V>>(json, "ooM", object_key(), object_value());
}

fn install_object_object_ordered_map<K, V>(json: &mut Json)
where
    K: Element + Hash + Eq,
    V: Element,
{
    install_map::<ObjectObjectOrderedMap<K, V>>(json, "ooOM", object_key(), object_value());
}

/// Registers [`ObjectObjectMap`] with keys of `K` and values of `V`.
pub fn register_object_object_map<'a, K, V>(
    json: impl Into<Option<&'a mut Json>>,
) -> Result<(), InteropError>
where
    K: Element + Hash + Eq,
    V: Element,
{
    registering(json, install_object_object_map::<K, V>)
}

/// Registers [`ObjectObjectOrderedMap`] with keys of `K` and values of `V`.
pub fn register_object_object_ordered_map<'a, K, V>(
    json: impl Into<Option<&'a mut Json>>,
) -> Result<(), InteropError>
where
    K: Element + Hash + Eq,
    V: Element,
{
    registering(json, install_object_object_ordered_map::<K, V>)
}

/// Every installer applied by [`register_all`], in application order.
///
/// Generic families appear once, instantiated for `String`.
pub fn default_installers() -> Vec<Installer> {
    vec![
        install_object_list::<String> as Installer,
        install_int_list,
        install_long_list,
        install_float_list,
        install_double_list,
        install_byte_list,
        install_short_list,
        install_char_list,
        install_boolean_list,
        install_object_bag::<String>,
        install_int_bag,
        install_long_bag,
        install_float_bag,
        install_double_bag,
        install_byte_bag,
        install_short_bag,
        install_char_bag,
        install_boolean_bag,
        install_object_deque::<String>,
        install_int_deque,
        install_long_deque,
        install_float_deque,
        install_double_deque,
        install_byte_deque,
        install_short_deque,
        install_char_deque,
        install_boolean_deque,
        install_object_set::<String>,
        install_object_ordered_set::<String>,
        install_int_set,
        install_int_ordered_set,
        install_long_set,
        install_long_ordered_set,
        install_binary_heap::<String>,
        install_numbered_set::<String>,
        install_case_insensitive_set,
        install_case_insensitive_ordered_set,
        install_case_insensitive_map::<String>,
        install_case_insensitive_ordered_map::<String>,
        install_object_object_map::<String, String>,
        install_object_object_ordered_map::<String, String>,
        install_object_int_map::<String>,
        install_object_int_ordered_map::<String>,
        install_object_long_map::<String>,
        install_object_long_ordered_map::<String>,
        install_object_float_map::<String>,
        install_object_float_ordered_map::<String>,
        install_int_object_map::<String>,
        install_int_object_ordered_map::<String>,
        install_int_int_map,
        install_int_int_ordered_map,
        install_int_long_map,
        install_int_long_ordered_map,
        install_int_float_map,
        install_int_float_ordered_map,
        install_long_object_map::<String>,
        install_long_object_ordered_map::<String>,
        install_long_int_map,
        install_long_int_ordered_map,
        install_long_long_map,
        install_long_long_ordered_map,
        install_long_float_map,
        install_long_float_ordered_map,
        install_offset_bit_set,
        install_distinct_random,
        install_golden_quasi_random,
        install_xoshiro256_star_star_random,
        install_xoroshiro128_star_star_random,
        install_romu_trio_random,
        install_sfc64_random,
        install_enhanced_random,
        install_bernoulli,
        install_cauchy,
        install_continuous_uniform,
        install_exponential,
        install_geometric,
        install_kumaraswamy,
        install_laplace,
        install_logistic,
        install_normal,
        install_pareto,
        install_poisson,
        install_rayleigh,
        install_triangular,
        install_weibull,
        install_boxed_distribution,
        install_base,
    ]
}

/// Applies `installers` to `json` in order.
pub fn install<'a>(
    json: impl Into<Option<&'a mut Json>>,
    installers: &[Installer],
) -> Result<(), InteropError> {
    let json = require(json.into(), "json")?;
    for installer in installers {
        installer(json);
    }
    debug!(installers = installers.len(), "applied codec installers");
    Ok(())
}

/// Registers every codec in [`default_installers`].
pub fn register_all<'a>(json: impl Into<Option<&'a mut Json>>) -> Result<(), InteropError> {
    install(json, &default_installers())
}
