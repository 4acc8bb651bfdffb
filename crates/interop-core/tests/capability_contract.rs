use std::collections::{BTreeSet, BinaryHeap, HashMap, VecDeque};

use indexmap::{IndexMap, IndexSet};
use interop_core::capability::{PairSink, PairSource, Sink, Source};

fn drain_into<S, T>(source: &S) -> T
where
    S: Source + ?Sized,
    S::Item: Clone,
    T: Sink<Item = S::Item>,
{
    let mut sink = T::with_capacity(source.size());
    for item in source.items() {
        sink.add(item.clone());
    }
    sink
}

#[test]
fn slices_and_deques_preserve_order() {
    let data = [3, 1, 2];
    let deque: VecDeque<i32> = drain_into(&data[..]);
    assert_eq!(deque, VecDeque::from(vec![3, 1, 2]));
    let back: Vec<i32> = drain_into(&deque);
    assert_eq!(back, vec![3, 1, 2]);
}

#[test]
fn index_set_keeps_first_occurrence() {
    let data = vec!["b", "a", "b", "c", "a"];
    let set: IndexSet<&str> = drain_into(&data);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    let sorted: BTreeSet<&str> = drain_into(&data);
    assert_eq!(sorted.size(), 3);
}

#[test]
fn pair_sink_overwrites_in_place() {
    let mut map = <IndexMap<&str, i32> as PairSink>::with_capacity(3);
    map.put("a", 1);
    map.put("b", 2);
    map.put("a", 3);
    let entries: Vec<_> = map.entries().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, vec![("a", 3), ("b", 2)]);

    let mut hashed = <HashMap<i32, i32> as PairSink>::with_capacity(0);
    hashed.put(1, 1);
    assert_eq!(PairSource::size(&hashed), 1);
}

#[test]
fn heaps_pop_greatest_first_whatever_the_input_order() {
    let data = vec![4, 9, 1, 9, 3];
    let mut heap: BinaryHeap<i32> = drain_into(&data);
    assert_eq!(heap.size(), 5);
    assert_eq!(heap.items().next(), Some(&9));
    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![9, 9, 4, 3, 1]);
}
