use crate::entry::{Entry, Pet};
use crate::index::{
    build_sorted_by_value, find_by_value, is_sorted_by, ByValue, SecondaryKeyIndex,
};
use crate::map::MapOps;
use crate::records::{load_records, write_records};
use crate::sequence::SequenceOps;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::{BTreeMap, HashMap};

fn nullable_map_strategy() -> impl Strategy<Value = HashMap<u16, Option<u8>>> {
    // Narrow value range so duplicate values are common.
    prop::collection::hash_map(any::<u16>(), prop::option::of(0u8..32), 0..=200)
}

#[derive(Debug, Clone, Arbitrary)]
enum MapOp {
    Insert(
        #[proptest(strategy = "0u8..24")] u8,
        #[proptest(strategy = "0u8..8")] u8,
    ),
    RemoveKey(#[proptest(strategy = "0u8..24")] u8),
    RemoveValue(#[proptest(strategy = "0u8..8")] u8),
    FindKey(#[proptest(strategy = "0u8..24")] u8),
    FindValue(#[proptest(strategy = "0u8..8")] u8),
}

#[derive(Debug, Clone, Arbitrary)]
enum SequenceOp {
    Sort,
    Find,
    MinMax,
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_projection_is_sorted(map in nullable_map_strategy()) {
        let index = SecondaryKeyIndex::by_nullable_value(&map);
        prop_assert_eq!(index.len(), map.len());
        prop_assert!(is_sorted_by(index.entries(), &ByValue));
    }

    #[test]
    fn prop_every_value_is_found(map in nullable_map_strategy()) {
        let index = SecondaryKeyIndex::by_nullable_value(&map);
        for value in map.values() {
            let found = index.find_value(value.as_ref());
            prop_assert!(found.is_some());
            let found = found.unwrap();
            prop_assert_eq!(found.value, value.as_ref());
            let key = found.key.unwrap();
            prop_assert_eq!(&map[key], value);
        }
    }

    #[test]
    fn prop_absent_value_not_found(map in nullable_map_strategy(), target in 0u8..40) {
        let index = SecondaryKeyIndex::by_nullable_value(&map);
        let present = map.values().any(|v| *v == Some(target));
        prop_assert_eq!(index.find_value(Some(&target)).is_some(), present);
        let has_null = map.values().any(Option::is_none);
        prop_assert_eq!(index.find_value(None).is_some(), has_null);
    }

    #[test]
    fn prop_rebuild_from_projection_keeps_order(map in prop::collection::hash_map(any::<u16>(), 0u8..32, 0..=200)) {
        let first = build_sorted_by_value(&map);
        // Reinterpret the projection as an order-preserving mapping.
        let pairs: Vec<(u16, u8)> = first
            .iter()
            .map(|e| (*e.key.unwrap(), *e.value.unwrap()))
            .collect();
        let second = build_sorted_by_value(pairs.iter().map(|(k, v)| (k, v)));

        let flatten = |entries: &[Entry<'_, u16, u8>]| -> Vec<(u16, u8)> {
            entries
                .iter()
                .map(|e| (*e.key.unwrap(), *e.value.unwrap()))
                .collect()
        };
        prop_assert_eq!(&flatten(&second), &pairs);

        // A mapping with its own key order still yields the same value order.
        let reordered: BTreeMap<u16, u8> = pairs.iter().copied().collect();
        let third = build_sorted_by_value(&reordered);
        let values = |entries: &[Entry<'_, u16, u8>]| -> Vec<u8> {
            entries.iter().map(|e| *e.value.unwrap()).collect()
        };
        prop_assert_eq!(values(&third), values(&first));
    }

    #[test]
    fn prop_map_ops_equivalence(ops in prop::collection::vec(any::<MapOp>(), 0..=300)) {
        let mut hashed: MapOps<HashMap<u8, u8>> = MapOps::new(HashMap::new());
        let mut ordered: MapOps<BTreeMap<u8, u8>> = MapOps::new(BTreeMap::new());
        let mut model: BTreeMap<u8, u8> = BTreeMap::new();

        for op in ops {
            match op {
                MapOp::Insert(k, v) => {
                    let expected = model.insert(k, v);
                    prop_assert_eq!(hashed.add(k, v), expected);
                    prop_assert_eq!(ordered.add(k, v), expected);
                }
                MapOp::RemoveKey(k) => {
                    let expected = model.remove(&k);
                    prop_assert_eq!(hashed.remove_by_key(&k), expected);
                    prop_assert_eq!(ordered.remove_by_key(&k), expected);
                }
                MapOp::RemoveValue(v) => {
                    let before = model.len();
                    model.retain(|_, x| *x != v);
                    let expected = before - model.len();
                    prop_assert_eq!(hashed.remove_by_value(&v), expected);
                    prop_assert_eq!(ordered.remove_by_value(&v), expected);
                }
                MapOp::FindKey(k) => {
                    let expected = model.get(&k);
                    prop_assert_eq!(hashed.find_by_key(&k), expected);
                    prop_assert_eq!(ordered.find_by_key(&k), expected);
                }
                MapOp::FindValue(v) => {
                    let present = model.values().any(|x| *x == v);
                    for found in [hashed.find_by_value(&v), ordered.find_by_value(&v)] {
                        prop_assert_eq!(found.is_some(), present);
                        if let Some(entry) = found {
                            prop_assert_eq!(model.get(entry.key.unwrap()), Some(&v));
                        }
                    }
                }
            }
            prop_assert_eq!(hashed.map().len(), model.len());
            prop_assert_eq!(ordered.map().len(), model.len());
        }

        let got: Vec<(u8, u8)> = ordered
            .sorted_by_key()
            .iter()
            .map(|e| (*e.key.unwrap(), *e.value.unwrap()))
            .collect();
        let expected: Vec<(u8, u8)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_sequence_find_matches_contains(
        items in prop::collection::vec(any::<i8>(), 0..=100),
        target in any::<i8>(),
        ops in prop::collection::vec(any::<SequenceOp>(), 0..=8),
    ) {
        let mut seq = SequenceOps::new(target, items.clone());
        let present = items.contains(&target);

        for op in ops {
            match op {
                SequenceOp::Sort => {
                    seq.sort();
                    prop_assert!(seq.as_slice().windows(2).all(|w| w[0] <= w[1]));
                }
                SequenceOp::Find => {
                    let pos = seq.find();
                    prop_assert_eq!(pos.is_some(), present);
                    if let Some(pos) = pos {
                        prop_assert_eq!(seq.as_slice()[pos], target);
                    }
                }
                SequenceOp::MinMax => {
                    let expected = items.iter().min().copied().zip(items.iter().max().copied());
                    prop_assert_eq!(seq.min_max(), expected);
                }
            }
        }
    }

    #[test]
    fn prop_records_round_trip(items in prop::collection::vec(any::<i8>(), 0..=200)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.txt");
        write_records(&items, &path).unwrap();
        prop_assert_eq!(load_records(&path).unwrap(), items);
    }
}

#[test]
fn owners_end_to_end() {
    let owners: HashMap<Pet, String> = [("Luna", "Irina"), ("Miro", "Olena"), ("Nala", "Olena")]
        .into_iter()
        .map(|(p, o)| (Pet::new(p), o.to_string()))
        .collect();

    let sorted = build_sorted_by_value(&owners);
    let values: Vec<&str> = sorted.iter().filter_map(|e| e.value.map(String::as_str)).collect();
    assert_eq!(values, vec!["Irina", "Olena", "Olena"]);
    assert_eq!(sorted[0].key, Some(&Pet::new("Luna")));

    let olena = "Olena".to_string();
    let found = find_by_value(&sorted, Some(&olena)).expect("Olena is present");
    let key = found.key.expect("keyed entry");
    assert!(*key == Pet::new("Miro") || *key == Pet::new("Nala"));

    let bohdan = "Bohdan".to_string();
    assert_eq!(find_by_value(&sorted, Some(&bohdan)), None);
}
