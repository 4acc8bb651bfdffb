use interop_core::capability::{Sink, Source};
use interop_ds::NumberedSet;
use proptest::prelude::*;

#[test]
fn indices_follow_first_insertion() {
    let mut set = NumberedSet::new();
    assert_eq!(set.add("zero"), 0);
    assert_eq!(set.add("one"), 1);
    assert_eq!(set.add("zero"), 0);
    assert_eq!(set.add("two"), 2);
    assert_eq!(set.len(), 3);
    assert_eq!(set.index_of(&"two"), Some(2));
    assert_eq!(set.get(1), Some(&"one"));
    assert_eq!(set.get(3), None);
}

#[test]
fn sink_and_source_agree() {
    let mut set = <NumberedSet<i32> as Sink>::with_capacity(4);
    for value in [5, 3, 5, 9] {
        Sink::add(&mut set, value);
    }
    assert_eq!(set.size(), 3);
    assert_eq!(set.items().copied().collect::<Vec<_>>(), vec![5, 3, 9]);
}

proptest! {
    #[test]
    fn index_of_inverts_get(values in proptest::collection::vec(0u8..32, 0..64)) {
        let set: NumberedSet<u8> = values.iter().copied().collect();
        for index in 0..set.len() {
            let item = set.get(index).copied().unwrap();
            prop_assert_eq!(set.index_of(&item), Some(index));
        }
    }
}
