use std::collections::BinaryHeap;

use indexmap::IndexMap;
use interop_core::base::Base;
use interop_core::errors::InteropError;
use interop_ds::{
    BooleanBag, BooleanList, CaseInsensitiveMap, CharDeque, DoubleList, IntFloatMap, IntIntMap,
    IntList, LongFloatOrderedMap, LongObjectMap, NumberedSet, ObjectBag, ObjectIntMap, ObjectList,
    ObjectObjectOrderedMap, OffsetBitSet, ShortBag, ShortList,
};
use interop_json::{
    default_installers, install, register_all, register_binary_heap, register_boolean_bag,
    register_boolean_list, register_case_insensitive_map, register_char_deque,
    register_double_list, register_int_float_map, register_int_int_map, register_int_list,
    register_long_float_ordered_map, register_long_object_map, register_numbered_set,
    register_object_bag, register_object_int_map, register_object_list,
    register_object_object_ordered_map, register_offset_bit_set, register_short_bag,
    register_short_list, Json,
};
use serde_json::json;

#[test]
fn registering_twice_encodes_like_registering_once() {
    let sample: IntList = vec![3, -1, 4, 1, 5];

    let mut once = Json::new();
    register_int_list(&mut once).unwrap();

    let mut twice = Json::new();
    register_int_list(&mut twice).unwrap();
    register_int_list(&mut twice).unwrap();

    assert_eq!(once.to_json(&sample).unwrap(), twice.to_json(&sample).unwrap());
    assert_eq!(twice.serializer_count(), 1);
}

#[test]
fn hexadecimal_base_writes_marked_digits() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE16);
    register_int_list(&mut json).unwrap();

    let list: IntList = vec![255];
    let text = json.to_json(&list).unwrap();
    assert_eq!(text, r#"{"items":"16rff"}"#);
    assert!(!text.contains("255"));
    assert_eq!(json.from_json::<IntList>(&text).unwrap(), vec![255]);
}

#[test]
fn decoding_follows_the_marker_not_the_current_base() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE36);
    register_int_list(&mut json).unwrap();
    let text = json.to_json(&vec![255, -7]).unwrap();

    json.set_numeral_base(Base::BASE2);
    assert_eq!(json.from_json::<IntList>(&text).unwrap(), vec![255, -7]);
    assert_eq!(json.from_json::<IntList>(r#"{"items":"10 20"}"#).unwrap(), vec![10, 20]);
}

#[test]
fn absent_serializer_is_rejected() {
    assert!(matches!(register_int_list(None), Err(InteropError::InvalidArgument(_))));
    assert!(matches!(
        register_object_list::<String>(None),
        Err(InteropError::InvalidArgument(_))
    ));
    let err = register_all(None).unwrap_err();
    assert_eq!(err.info().code, "missing-argument");
    assert!(install(None, &default_installers()).is_err());
}

#[test]
fn register_all_installs_every_default_codec() {
    let mut json = Json::new();
    register_all(&mut json).unwrap();
    assert_eq!(json.serializer_count(), default_installers().len());
    assert!(json.has_serializer::<ObjectList<String>>());
    assert!(json.has_serializer::<IntIntMap>());
    assert!(json.has_serializer::<Base>());
    assert!(json.has_serializer::<OffsetBitSet>());
    assert!(json.has_serializer::<BinaryHeap<String>>());
    assert_eq!(json.class_tag::<IntList>(), Some("iL"));
    assert_eq!(json.class_tag::<ShortBag>(), Some("sB"));
    assert_eq!(json.class_tag::<ObjectList<String>>(), Some("oL"));
}

#[test]
fn custom_installer_lists_apply_in_order() {
    let mut json = Json::new();
    let installers = default_installers();
    install(&mut json, &installers[..3]).unwrap();
    assert_eq!(json.serializer_count(), 3);
    assert!(json.has_serializer::<ObjectList<String>>());
    assert!(!json.has_serializer::<Base>());
}

#[test]
fn class_tags_can_be_disabled() {
    let mut json = Json::new();
    json.set_add_class_tags(false);
    register_int_list(&mut json).unwrap();
    assert!(json.has_serializer::<IntList>());
    assert_eq!(json.class_tag::<IntList>(), None);
}

#[test]
fn primitive_sequences_use_compact_strings() {
    let mut json = Json::new();
    register_boolean_list(&mut json).unwrap();
    register_char_deque(&mut json).unwrap();
    register_short_list(&mut json).unwrap();

    let flags: BooleanList = vec![true, false, true, true];
    assert_eq!(json.to_value(&flags).unwrap(), json!({ "items": "1011" }));
    assert_eq!(json.from_value::<BooleanList>(&json!({ "items": "1011" })).unwrap(), flags);

    let letters: CharDeque = "héllo".chars().collect();
    assert_eq!(json.to_value(&letters).unwrap(), json!({ "items": "héllo" }));

    let shorts: ShortList = vec![i16::MIN, 0, i16::MAX];
    let text = json.to_json(&shorts).unwrap();
    assert_eq!(json.from_json::<ShortList>(&text).unwrap(), shorts);
    let err = json.from_value::<ShortList>(&json!({ "items": "70000" })).unwrap_err();
    assert_eq!(err.info().code, "number-range");
}

#[test]
fn doubles_roundtrip_in_both_float_modes() {
    let values: DoubleList = vec![0.1, -2.5, 1e300, f64::MIN_POSITIVE];
    let mut json = Json::new();
    register_double_list(&mut json).unwrap();
    let legible = json.to_json(&values).unwrap();
    assert!(legible.contains("0.1"));
    assert_eq!(json.from_json::<DoubleList>(&legible).unwrap(), values);

    json.set_legible_floats(false);
    json.set_numeral_base(Base::BASE16);
    let compact = json.to_json(&values).unwrap();
    assert!(compact.contains("16r"));
    assert_eq!(json.from_json::<DoubleList>(&compact).unwrap(), values);
}

#[test]
fn object_lists_carry_elements_as_an_array() {
    let mut json = Json::new();
    register_object_list::<String>(&mut json).unwrap();
    let list: ObjectList<String> = vec!["a".into(), "b".into(), "c".into()];
    assert_eq!(json.to_value(&list).unwrap(), json!({ "items": ["a", "b", "c"] }));
}

#[test]
fn nested_containers_use_their_registered_codecs() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE16);
    register_int_list(&mut json).unwrap();
    register_object_list::<IntList>(&mut json).unwrap();

    let nested: ObjectList<IntList> = vec![vec![255], vec![1, 2]];
    let value = json.to_value(&nested).unwrap();
    assert_eq!(
        value,
        json!({ "items": [{ "items": "16rff" }, { "items": "16r1 2" }] })
    );
    assert_eq!(json.from_value::<ObjectList<IntList>>(&value).unwrap(), nested);
}

#[test]
fn numbered_sets_keep_their_numbering() {
    let mut json = Json::new();
    register_numbered_set::<String>(&mut json).unwrap();
    let set: NumberedSet<String> = ["x", "y", "z"].into_iter().map(String::from).collect();
    let back: NumberedSet<String> = json.from_json(&json.to_json(&set).unwrap()).unwrap();
    assert_eq!(back.index_of(&"z".to_string()), Some(2));
    assert_eq!(back.get(0).map(String::as_str), Some("x"));
}

#[test]
fn case_insensitive_maps_keep_first_spelling() {
    let mut json = Json::new();
    register_case_insensitive_map::<i32>(&mut json).unwrap();
    let mut map = CaseInsensitiveMap::new();
    map.put("Alpha", 1);
    map.put("ALPHA", 2);
    map.put("beta", 3);

    let back: CaseInsensitiveMap<i32> = json.from_json(&json.to_json(&map).unwrap()).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back.get("alpha"), Some(&2));
    assert!(back.iter().any(|(key, _)| key == "Alpha"));
}

#[test]
fn primitive_keyed_maps_use_numeral_base_keys() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE16);
    register_int_int_map(&mut json).unwrap();
    register_long_object_map::<String>(&mut json).unwrap();

    let ints: IntIntMap = [(255, 1)].into_iter().collect();
    assert_eq!(json.to_value(&ints).unwrap(), json!({ "16rff": 1 }));
    assert_eq!(json.from_value::<IntIntMap>(&json!({ "16rff": 1 })).unwrap(), ints);

    let names: LongObjectMap<String> = [(-16, "neg".to_string())].into_iter().collect();
    assert_eq!(json.to_value(&names).unwrap(), json!({ "16r-10": "neg" }));
}

#[test]
fn primitive_keyed_float_values_survive_non_finite_numbers() {
    let mut json = Json::new();
    register_int_float_map(&mut json).unwrap();
    register_long_float_ordered_map(&mut json).unwrap();

    let ints: IntFloatMap = [(1, f32::INFINITY), (2, f32::NEG_INFINITY), (3, 0.5)].into_iter().collect();
    let text = json.to_json(&ints).unwrap();
    assert!(!text.contains("null"));
    assert_eq!(json.from_json::<IntFloatMap>(&text).unwrap(), ints);

    let longs: LongFloatOrderedMap = [(-1, f32::NAN), (7, f32::MAX)].into_iter().collect();
    for legible in [true, false] {
        json.set_legible_floats(legible);
        let back: LongFloatOrderedMap = json.from_json(&json.to_json(&longs).unwrap()).unwrap();
        assert!(back[&-1i64].is_nan());
        assert_eq!(back[&7i64], f32::MAX);
    }
}

#[test]
fn object_int_maps_write_values_in_the_numeral_base() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE16);
    register_object_int_map::<String>(&mut json).unwrap();
    let map: ObjectIntMap<String> = [("a".to_string(), 255)].into_iter().collect();
    assert_eq!(json.to_value(&map).unwrap(), json!({ "a": "16rff" }));
    assert_eq!(json.from_value::<ObjectIntMap<String>>(&json!({ "a": "16rff" })).unwrap(), map);
}

#[test]
fn ordered_maps_preserve_entry_order() {
    let mut json = Json::new();
    register_object_object_ordered_map::<String, String>(&mut json).unwrap();
    let mut map: ObjectObjectOrderedMap<String, String> = IndexMap::new();
    map.insert("b".into(), "1".into());
    map.insert("a".into(), "2".into());
    let text = json.to_json(&map).unwrap();
    assert_eq!(text, r#"{"b":"1","a":"2"}"#);
    let back: ObjectObjectOrderedMap<String, String> = json.from_json(&text).unwrap();
    assert_eq!(back.keys().collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn base_codec_uses_radix_and_case() {
    let mut json = Json::new();
    register_all(&mut json).unwrap();
    let base = Base::BASE36.with_uppercase(true);
    let value = json.to_value(&base).unwrap();
    assert_eq!(value, json!({ "radix": 36, "uppercase": true }));
    assert_eq!(json.from_value::<Base>(&value).unwrap(), base);
    assert!(json.from_value::<Base>(&json!({ "radix": 1 })).is_err());
}

#[test]
fn bags_share_the_list_formats() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE8);
    register_short_bag(&mut json).unwrap();
    register_boolean_bag(&mut json).unwrap();
    register_object_bag::<String>(&mut json).unwrap();

    let shorts: ShortBag = vec![8, -9].into();
    assert_eq!(json.to_value(&shorts).unwrap(), json!({ "items": "8r10 -11" }));
    assert_eq!(json.from_value::<ShortBag>(&json!({ "items": "8r10 -11" })).unwrap(), shorts);

    let flags: BooleanBag = vec![false, true].into();
    assert_eq!(json.to_value(&flags).unwrap(), json!({ "items": "01" }));

    let words: ObjectBag<String> = vec!["x".to_string()].into();
    let tagged = json.to_tagged_value(&words).unwrap();
    assert_eq!(tagged, json!({ "class": "oB", "items": ["x"] }));
    assert_eq!(json.from_value::<ObjectBag<String>>(&tagged).unwrap(), words);
}

#[test]
fn heaps_reheap_their_items_on_read() {
    let mut json = Json::new();
    register_binary_heap::<i32>(&mut json).unwrap();
    let heap: BinaryHeap<i32> = [3, 11, 7].into_iter().collect();

    let value = json.to_value(&heap).unwrap();
    assert_eq!(value["max"], json!(true));
    assert_eq!(value["items"].as_array().map(Vec::len), Some(3));

    let shuffled = json!({ "max": true, "items": [7, 3, 11] });
    let back: BinaryHeap<i32> = json.from_value(&shuffled).unwrap();
    assert_eq!(back.into_sorted_vec(), vec![3, 7, 11]);
    assert_eq!(json.class_tag::<BinaryHeap<i32>>(), Some("oBQ"));
}

#[test]
fn offset_bit_sets_record_their_offset() {
    let mut json = Json::new();
    register_offset_bit_set(&mut json).unwrap();
    let mut bits = OffsetBitSet::with_offset(-2);
    bits.add(5);
    bits.add(-1);

    let value = json.to_value(&bits).unwrap();
    assert_eq!(value, json!({ "offset": -2, "values": [-1, 5] }));
    let back: OffsetBitSet = json.from_value(&value).unwrap();
    assert_eq!(back, bits);
    assert_eq!(back.offset(), -2);

    let err = json
        .from_value::<OffsetBitSet>(&json!({ "offset": 4, "values": [1] }))
        .unwrap_err();
    assert_eq!(err.info().code, "payload-shape");
    assert!(json.from_value::<OffsetBitSet>(&json!({ "values": [] })).is_err());
}
