use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;

use interop_core::base::Base;
use interop_core::errors::InteropError;
use interop_ds::{IntList, LongList, ObjectObjectOrderedMap};
use interop_json::{register_all, register_int_list, register_long_list, Json, CLASS_MEMBER};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn missing_codec_is_a_codec_error() {
    let json = Json::new();
    let err = json.to_value(&vec![1i32]).unwrap_err();
    assert!(matches!(err, InteropError::Codec(_)));
    assert_eq!(err.info().code, "missing-codec");
    assert!(json.from_json::<IntList>(r#"{"items":"1"}"#).is_err());
}

#[test]
fn custom_serializers_replace_in_place() {
    let mut json = Json::new();
    let replaced = json.set_serializer::<u8, _, _>(
        |_, value| Ok(json!(*value)),
        |_, value| {
            value
                .as_u64()
                .and_then(|raw| u8::try_from(raw).ok())
                .ok_or_else(|| InteropError::codec("byte", "not a byte"))
        },
    );
    assert!(!replaced);
    assert_eq!(json.to_value(&7u8).unwrap(), json!(7));

    let replaced = json.set_serializer::<u8, _, _>(
        |_, value| Ok(json!(value.to_string())),
        |_, value| Ok(value.as_str().and_then(|text| text.parse().ok()).unwrap_or(0)),
    );
    assert!(replaced);
    assert_eq!(json.to_value(&7u8).unwrap(), json!("7"));
    assert_eq!(json.serializer_count(), 1);
}

#[test]
fn tagged_values_strip_their_class_on_read() {
    let mut json = Json::new();
    register_int_list(&mut json).unwrap();
    let list: IntList = vec![1, 2, 3];

    let tagged = json.to_tagged_value(&list).unwrap();
    assert_eq!(tagged[CLASS_MEMBER], json!("iL"));
    assert_eq!(json.type_name_for_tag("iL"), Some(std::any::type_name::<IntList>()));
    assert_eq!(json.from_value::<IntList>(&tagged).unwrap(), list);
}

#[test]
fn unknown_class_members_are_left_alone() {
    let mut json = Json::new();
    register_int_list(&mut json).unwrap();
    let payload = json!({ "items": "4 5", "class": "somethingElse" });
    assert_eq!(json.from_value::<IntList>(&payload).unwrap(), vec![4, 5]);
}

#[test]
fn class_members_naming_other_types_are_data() {
    let mut json = Json::new();
    register_all(&mut json).unwrap();
    let payload = json!({ "class": "iL", "x": "y" });

    let map: ObjectObjectOrderedMap<String, String> = json.from_value(&payload).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(CLASS_MEMBER).map(String::as_str), Some("iL"));
    assert_eq!(json.to_value(&map).unwrap(), payload);

    let list: IntList = json.from_value(&json!({ "class": "iL", "items": "1 2" })).unwrap();
    assert_eq!(list, vec![1, 2]);
}

#[test]
fn untagged_types_fall_back_to_the_type_name() {
    let mut json = Json::new();
    json.set_add_class_tags(false);
    register_long_list(&mut json).unwrap();
    let tagged = json.to_tagged_value(&vec![9i64]).unwrap();
    assert_eq!(tagged[CLASS_MEMBER], json!(std::any::type_name::<LongList>()));
    assert_eq!(json.from_value::<LongList>(&tagged).unwrap(), vec![9]);
}

#[test]
fn bytes_wrap_the_json_text() {
    let mut json = Json::new();
    register_all(&mut json).unwrap();
    let list: IntList = vec![i32::MIN, 0, i32::MAX];
    let bytes = json.to_bytes(&list).unwrap();
    assert_eq!(json.from_bytes::<IntList>(&bytes).unwrap(), list);
    assert!(json.from_bytes::<IntList>(&[0xff]).is_err());
}

#[test]
fn serializer_reads_its_config_from_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "numeral_base:\n  radix: 16\n  uppercase: true").unwrap();

    let mut json = Json::from_config_path(file.path()).unwrap();
    assert_eq!(json.numeral_base(), Base::BASE16.with_uppercase(true));
    register_int_list(&mut json).unwrap();
    assert_eq!(json.to_json(&vec![255]).unwrap(), r#"{"items":"16rFF"}"#);
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Json::from_config_path(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, InteropError::Config(_)));
}

#[test]
fn shared_serializer_encodes_from_many_threads() {
    let mut json = Json::new();
    register_all(&mut json).unwrap();
    let json = Arc::new(Mutex::new(json));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let json = Arc::clone(&json);
            thread::spawn(move || {
                let list: IntList = vec![worker, worker * 10];
                let guard = json.lock().unwrap();
                let text = guard.to_json(&list).unwrap();
                guard.from_json::<IntList>(&text).unwrap()
            })
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let worker = worker as i32;
        assert_eq!(handle.join().unwrap(), vec![worker, worker * 10]);
    }
}

proptest! {
    #[test]
    fn long_lists_roundtrip_in_any_base(values in proptest::collection::vec(any::<i64>(), 0..32), radix in 2u32..=36) {
        let mut json = Json::new();
        json.set_numeral_base(Base::new(radix).unwrap());
        register_long_list(&mut json).unwrap();
        let text = json.to_json(&values).unwrap();
        prop_assert_eq!(json.from_json::<LongList>(&text).unwrap(), values);
    }
}
