use interop_core::base::Base;
use interop_json::{
    register_all, register_distribution, register_enhanced_random, register_normal,
    register_xoshiro256_star_star_random, Json,
};
use interop_random::{
    Distribution, EnhancedRandom, Normal, RomuTrioRandom, Triangular, Xoshiro256StarStarRandom,
};
use rand::RngCore;
use serde_json::Value;

#[test]
fn generators_resume_where_they_left_off() {
    let mut json = Json::new();
    json.set_numeral_base(Base::BASE36);
    register_xoshiro256_star_star_random(&mut json).unwrap();

    let mut original = Xoshiro256StarStarRandom::from_seed(2024);
    original.next_u64();
    let text = json.to_json(&original).unwrap();
    assert!(text.contains("36rXSSR`"));

    let mut restored: Xoshiro256StarStarRandom = json.from_json(&text).unwrap();
    assert_eq!(restored.states(), original.states());
    for _ in 0..8 {
        assert_eq!(restored.next_u64(), original.next_u64());
    }
}

#[test]
fn boxed_generators_dispatch_on_their_tag() {
    let mut json = Json::new();
    register_enhanced_random(&mut json).unwrap();

    let boxed: Box<dyn EnhancedRandom> = Box::new(RomuTrioRandom::from_seed(5));
    let value = json.to_value(&boxed).unwrap();
    let mut restored: Box<dyn EnhancedRandom> = json.from_value(&value).unwrap();
    assert_eq!(restored.tag(), "RTrR");

    let mut reference = RomuTrioRandom::from_seed(5);
    assert_eq!(restored.next_u64(), reference.next_u64());
}

#[test]
fn distributions_roundtrip_in_both_float_modes() {
    let mut json = Json::new();
    register_normal(&mut json).unwrap();
    let normal = Normal::new(1.5, 0.1).unwrap();

    let legible = json.to_value(&normal).unwrap();
    assert_eq!(legible, Value::String("Normal`1.5~0.1`".to_string()));
    assert_eq!(json.from_value::<Normal>(&legible).unwrap(), normal);

    json.set_legible_floats(false);
    json.set_numeral_base(Base::BASE16);
    let compact = json.to_value(&normal).unwrap();
    assert!(compact.as_str().unwrap().starts_with("16rNormal`"));
    assert_eq!(json.from_value::<Normal>(&compact).unwrap(), normal);
}

#[test]
fn boxed_distributions_dispatch_on_their_tag() {
    let mut json = Json::new();
    register_distribution(&mut json).unwrap();
    let boxed: Box<dyn Distribution> = Box::new(Triangular::new(0.0, 4.0, 1.0).unwrap());

    let text = json.to_json(&boxed).unwrap();
    let restored: Box<dyn Distribution> = json.from_json(&text).unwrap();
    assert_eq!(restored.tag(), "Triangular");
    assert_eq!(restored.parameters(), vec![0.0, 4.0, 1.0]);
}

#[test]
fn mismatched_tags_are_rejected() {
    let mut json = Json::new();
    register_all(&mut json).unwrap();
    let err = json
        .from_value::<Normal>(&Value::String("Cauchy`0~1`".to_string()))
        .unwrap_err();
    assert_eq!(err.info().code, "tag-mismatch");
    assert!(json
        .from_value::<Xoshiro256StarStarRandom>(&Value::String("XSSR`1~2`".to_string()))
        .is_err());
}
