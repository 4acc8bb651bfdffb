use criterion::{criterion_group, criterion_main, Criterion};
use interop_core::base::Base;
use interop_ds::{IntList, ObjectObjectOrderedMap};
use interop_json::{register_all, Json};

fn bench_int_lists(c: &mut Criterion) {
    let values: IntList = (0..10_000).map(|idx| (idx * 7919) % 65_536 - 32_768).collect();
    let mut json = Json::new();
    register_all(&mut json).unwrap();

    c.bench_function("int_list_encode_base10", |b| {
        b.iter(|| {
            let _ = json.to_json(&values).unwrap();
        })
    });

    json.set_numeral_base(Base::BASE36);
    let text = json.to_json(&values).unwrap();
    c.bench_function("int_list_decode_base36", |b| {
        b.iter(|| {
            let _ = json.from_json::<IntList>(&text).unwrap();
        })
    });
}

fn bench_maps(c: &mut Criterion) {
    let map: ObjectObjectOrderedMap<String, String> = (0..2_000)
        .map(|idx| (format!("key{idx}"), format!("value{idx}")))
        .collect();
    let mut json = Json::new();
    register_all(&mut json).unwrap();

    c.bench_function("ordered_map_bytes_roundtrip", |b| {
        b.iter(|| {
            let bytes = json.to_bytes(&map).unwrap();
            let _ = json
                .from_bytes::<ObjectObjectOrderedMap<String, String>>(&bytes)
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_int_lists, bench_maps);
criterion_main!(benches);
