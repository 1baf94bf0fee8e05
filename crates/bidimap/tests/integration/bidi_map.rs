use bidimap::{
    bidi_map,
    errors::{Conflict, DuplicateAssociation, NotFound},
    internal::ValidateCompact,
    BidiMap, DupPolicy, Duplication, OnDup, PutOutcome,
};
use bidimap_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    naive_map::NaiveMap,
    test_item::{
        key_strategy, new_map, permutation_strategy, value_strategy,
        HashBuilder, TestKey, TestMap, TestPolicy, TestValue,
    },
};
use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};

fn sorted_contents(map: &TestMap) -> Vec<(TestKey, TestValue)> {
    let mut contents: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    contents.sort_unstable();
    contents
}

#[test]
fn debug_impls() {
    let mut map = new_map();
    assert_eq!(format!("{map:?}"), "{}");

    map.insert(1, 'a').unwrap();
    assert_eq!(format!("{map:?}"), "{1: 'a'}");
}

#[test]
fn with_capacity() {
    let map = TestMap::with_capacity_and_hasher(1024, HashBuilder::default());
    assert!(map.capacity() >= 1024);
    assert!(map.is_empty());
}

#[test]
fn reserve_and_shrink() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    map.reserve(512);
    assert!(map.capacity() >= 514);

    map.shrink_to_fit();
    assert!(map.capacity() >= 2);
    assert_eq!(map.get(&1), Some(&'a'));
    assert_eq!(map.get_inverse(&'b'), Some(&2));
    map.validate(ValidateCompact::Compact).expect("map should be valid");
}

#[test]
fn insert_and_lookup_both_ways() {
    let mut map = new_map();
    assert_eq!(map.insert(1, 'a').unwrap(), PutOutcome::Inserted);
    assert_eq!(map.insert(2, 'b').unwrap(), PutOutcome::Inserted);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&1), Some(&'a'));
    assert_eq!(map.get_inverse(&'a'), Some(&1));
    assert_eq!(map.get(&2), Some(&'b'));
    assert_eq!(map.get_inverse(&'b'), Some(&2));
    assert_eq!(map.get(&3), None);
    assert_eq!(map.get_inverse(&'c'), None);

    assert!(map.contains_key(&1));
    assert!(!map.contains_key(&3));
    assert!(map.contains_value(&'b'));
    assert!(!map.contains_value(&'c'));

    let mut keys: Vec<_> = map.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, [1, 2]);
    let mut values: Vec<_> = map.values().copied().collect();
    values.sort_unstable();
    assert_eq!(values, ['a', 'b']);

    map.validate(ValidateCompact::Compact).expect("map should be valid");
}

#[test]
fn borrowed_lookups() {
    let mut map: BidiMap<String, String, HashBuilder> =
        BidiMap::with_hasher(HashBuilder::default());
    map.insert("H".to_owned(), "hydrogen".to_owned()).unwrap();

    assert_eq!(map.get("H").map(String::as_str), Some("hydrogen"));
    assert_eq!(map.get_inverse("hydrogen").map(String::as_str), Some("H"));
    assert!(map.contains_value("hydrogen"));
    assert_eq!(
        map.remove_inverse("hydrogen"),
        Ok(("H".to_owned(), "hydrogen".to_owned()))
    );
    assert!(map.is_empty());
}

#[test]
fn both_sided_collision_is_rejected_atomically() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    let before = map.clone();

    let err = map
        .put(1, 'b', DupPolicy::PUT.with_on_value(OnDup::Raise))
        .unwrap_err();
    assert_eq!(err.conflict(), Conflict::KeyAndValue);
    assert!(err.conflict().is_value_duplication());
    assert!(err.conflict().is_key_duplication());
    assert_eq!(err.new_association(), (&1, &'b'));
    assert_eq!(err.duplicates(), [(&1, &'a'), (&2, &'b')]);
    assert_eq!(
        err.to_string(),
        "new association 1 => 'b' has a duplicate key and value with \
         existing: [(1, 'a'), (2, 'b')]"
    );

    assert_eq!(map, before);
    map.validate(ValidateCompact::Compact).expect("map should be valid");
}

#[test]
fn both_sided_collision_overwrites_both() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };

    let outcome =
        map.put(1, 'b', DupPolicy::PUT.with_on_value(OnDup::Overwrite)).unwrap();
    assert_eq!(
        outcome,
        PutOutcome::Overwrote { by_key: Some((1, 'a')), by_value: Some((2, 'b')) }
    );
    assert_eq!(
        outcome.into_evicted().collect::<Vec<_>>(),
        [(1, 'a'), (2, 'b')]
    );

    assert_eq!(map, bidi_map! { HashBuilder; 1 => 'b' });
    assert_eq!(map.get_inverse(&'a'), None);
    assert!(!map.contains_key(&2));
    map.validate(ValidateCompact::NonCompact).expect("map should be valid");
}

#[test]
fn on_both_can_differ_from_on_value() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    let policy = DupPolicy::OVERWRITE.with_on_both(OnDup::DropNew);

    assert_eq!(map.put(1, 'b', policy).unwrap(), PutOutcome::Dropped(1, 'b'));
    assert_eq!(map.len(), 2);

    // A one-sided collision still follows on_value.
    assert_eq!(
        map.put(3, 'b', policy).unwrap(),
        PutOutcome::Overwrote { by_key: None, by_value: Some((2, 'b')) }
    );
    assert_eq!(map, bidi_map! { HashBuilder; 1 => 'a', 3 => 'b' });
}

#[test]
fn default_policy() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    assert_eq!(map.policy(), DupPolicy::PUT);

    // A key may be re-pointed.
    assert_eq!(
        map.insert(1, 'c').unwrap(),
        PutOutcome::Overwrote { by_key: Some((1, 'a')), by_value: None }
    );

    // A value may not be stolen.
    let err = map.insert(3, 'b').unwrap_err();
    assert_eq!(err.conflict(), Conflict::Value);
    assert_eq!(err.duplicates(), [(&2, &'b')]);

    map.set_policy(DupPolicy::RAISE);
    let err = map.insert(1, 'd').unwrap_err();
    assert_eq!(err.conflict(), Conflict::Key);
    assert_eq!(err.into_owned().duplicates(), [(1, 'c')]);

    assert_eq!(map, bidi_map! { HashBuilder; 1 => 'c', 2 => 'b' });
}

#[test]
fn identical_association_is_unchanged_under_any_policy() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a' };
    for policy in [
        DupPolicy::PUT,
        DupPolicy::RAISE,
        DupPolicy::OVERWRITE,
        DupPolicy::DROP_NEW,
    ] {
        let cursor = map.cursor();
        assert_eq!(map.put(1, 'a', policy).unwrap(), PutOutcome::Unchanged);
        assert!(cursor.is_valid_for(&map), "no-op puts are not modifications");
    }
    map.validate(ValidateCompact::Compact).expect("map should be valid");
}

#[test]
fn drop_new_leaves_map_unchanged() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    let before = map.clone();

    let outcome = map.put(1, 'z', DupPolicy::DROP_NEW).unwrap();
    assert!(!outcome.is_modified());
    assert_eq!(outcome, PutOutcome::Dropped(1, 'z'));
    assert_eq!(map.put(9, 'a', DupPolicy::DROP_NEW).unwrap(), PutOutcome::Dropped(9, 'a'));
    assert_eq!(map, before);
}

#[test]
fn classify() {
    let map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    assert_eq!(map.classify(&3, &'c'), Duplication::None);
    assert_eq!(map.classify(&1, &'c'), Duplication::Key);
    assert_eq!(map.classify(&3, &'a'), Duplication::Value);
    assert_eq!(map.classify(&1, &'a'), Duplication::Identical);
    assert_eq!(map.classify(&1, &'b'), Duplication::KeyAndValue);

    assert_eq!(Duplication::Identical.conflict(), None);
    assert_eq!(Duplication::KeyAndValue.conflict(), Some(Conflict::KeyAndValue));
}

#[test]
fn remove() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b', 3 => 'c' };

    assert_eq!(map.remove(&1), Ok((1, 'a')));
    assert_eq!(map.remove(&1), Err(NotFound::Key));
    assert_eq!(map.get_inverse(&'a'), None);

    assert_eq!(map.remove_inverse(&'c'), Ok((3, 'c')));
    assert_eq!(map.remove_inverse(&'c'), Err(NotFound::Value));
    assert_eq!(map.get(&3), None);

    assert_eq!(map.len(), 1);
    map.validate(ValidateCompact::NonCompact).expect("map should be valid");

    assert_eq!(NotFound::Key.to_string(), "key not found");
    assert_eq!(NotFound::Value.to_string(), "value not found");
}

#[test]
fn clear() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.get(&1), None);
    assert_eq!(map.get_inverse(&'b'), None);
    map.validate(ValidateCompact::Compact).expect("map should be valid");

    // The map is usable after clearing.
    map.insert(2, 'a').unwrap();
    assert_eq!(map, bidi_map! { HashBuilder; 2 => 'a' });
}

#[test]
fn put_all_stops_at_first_rejection() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a' };

    let err = map
        .put_all([(2, 'b'), (3, 'a'), (4, 'd')], DupPolicy::RAISE)
        .unwrap_err();
    assert_eq!(err.new_association(), (&3, &'a'));
    assert_eq!(err.conflict(), Conflict::Value);
    assert_eq!(err.duplicates(), [(1, 'a')]);

    // Earlier associations were kept, later ones never put.
    assert_eq!(map, bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' });

    map.put_all([(4, 'd'), (5, 'e')], DupPolicy::RAISE).unwrap();
    assert_eq!(map.len(), 4);
}

#[test]
fn put_all_collecting_reports_every_rejection() {
    let mut map = bidi_map! { HashBuilder; 1 => 'a' };

    let errors = map.put_all_collecting(
        [(2, 'a'), (3, 'c'), (1, 'd'), (4, 'e')],
        DupPolicy::RAISE,
    );
    let rejected: Vec<_> = errors
        .iter()
        .map(|error| {
            let (key, value) = error.new_association();
            (*key, *value, error.conflict())
        })
        .collect();
    assert_eq!(rejected, [(2, 'a', Conflict::Value), (1, 'd', Conflict::Key)]);

    assert_eq!(map, bidi_map! { HashBuilder; 1 => 'a', 3 => 'c', 4 => 'e' });
    assert!(map
        .put_all_collecting([(5, 'f')], DupPolicy::RAISE)
        .is_empty());
}

#[test]
fn try_from_iter() {
    let map = TestMap::try_from_iter_with_hasher(
        [(1, 'a'), (2, 'b'), (1, 'a')],
        HashBuilder::default(),
    )
    .unwrap();
    assert_eq!(map, bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' });

    let err = TestMap::try_from_iter_with_hasher(
        [(1, 'a'), (2, 'b'), (2, 'a')],
        HashBuilder::default(),
    )
    .unwrap_err();
    assert_eq!(err.conflict(), Conflict::KeyAndValue);
    let (new, conflict, duplicates) = err.into_parts();
    assert_eq!(new, (2, 'a'));
    assert_eq!(conflict, Conflict::KeyAndValue);
    assert_eq!(duplicates, [(2, 'b'), (1, 'a')]);
}

#[test]
fn from_iter_and_extend_overwrite() {
    let mut map: TestMap = [(1, 'a'), (2, 'a'), (3, 'c')].into_iter().collect();
    assert_eq!(map, bidi_map! { HashBuilder; 2 => 'a', 3 => 'c' });

    map.extend([(3, 'a'), (4, 'd')]);
    assert_eq!(map, bidi_map! { HashBuilder; 3 => 'a', 4 => 'd' });
    map.validate(ValidateCompact::NonCompact).expect("map should be valid");
}

#[test]
fn into_iter() {
    let map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };

    let mut borrowed: Vec<_> = (&map).into_iter().collect();
    borrowed.sort_unstable();
    assert_eq!(borrowed, [(&1, &'a'), (&2, &'b')]);
    assert_eq!(map.iter().len(), 2);

    let mut owned: Vec<_> = map.into_iter().collect();
    owned.sort_unstable();
    assert_eq!(owned, [(1, 'a'), (2, 'b')]);
}

#[test]
fn into_inverse() {
    let map = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' }
        .with_policy(DupPolicy::PUT);
    let mut inverted = map.clone().into_inverse();

    inverted.validate(ValidateCompact::Compact).expect("map should be valid");
    assert_eq!(inverted.get(&'a'), Some(&1));
    assert_eq!(inverted.get_inverse(&2), Some(&'b'));
    assert_eq!(inverted.policy(), DupPolicy::PUT.swapped());
    assert_eq!(inverted, *map.inverse());

    // The inverted map keeps working after the swap.
    inverted.insert('c', 3).unwrap();
    assert_eq!(inverted.remove(&'a'), Ok(('a', 1)));
    inverted.validate(ValidateCompact::NonCompact).expect("map should be valid");
    assert_eq!(inverted.into_inverse(), bidi_map! { HashBuilder; 2 => 'b', 3 => 'c' });
}

#[test]
fn equality_ignores_policy_and_hasher() {
    let map1 = bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' };
    let map2 = bidi_map! { std::hash::RandomState; 2 => 'b', 1 => 'a' }
        .with_policy(DupPolicy::DROP_NEW);
    assert!(map1 == map2);
    assert!(map2 == map1);

    let map3 = bidi_map! { std::hash::RandomState; 1 => 'b', 2 => 'a' };
    assert!(map1 != map3);
}

#[test]
fn macro_allows_identical_repeats() {
    let map = bidi_map! { HashBuilder; 1 => 'a', 1 => 'a', };
    assert_eq!(map.len(), 1);

    let empty: TestMap = bidi_map! { HashBuilder; };
    assert!(empty.is_empty());
}

#[test]
#[should_panic(expected = "DuplicateAssociation")]
fn macro_panics_on_duplicate_value() {
    let _ = bidi_map! { HashBuilder; 1 => 'a', 2 => 'a' };
}

#[test]
#[should_panic(expected = "DuplicateAssociation")]
fn macro_panics_on_duplicate_key() {
    let _ = bidi_map! { HashBuilder; 1 => 'a', 1 => 'b' };
}

#[derive(Debug, Arbitrary)]
enum Operation {
    // Make puts a bit more common to try and fill up the map.
    #[weight(4)]
    Put(
        #[strategy(key_strategy())] TestKey,
        #[strategy(value_strategy())] TestValue,
        TestPolicy,
    ),
    #[weight(2)]
    Insert(
        #[strategy(key_strategy())] TestKey,
        #[strategy(value_strategy())] TestValue,
    ),
    PutAll(
        #[strategy(batch_strategy())] Vec<(TestKey, TestValue)>,
        TestPolicy,
    ),
    PutAllCollecting(
        #[strategy(batch_strategy())] Vec<(TestKey, TestValue)>,
        TestPolicy,
    ),
    #[weight(2)]
    InversePut(
        #[strategy(value_strategy())] TestValue,
        #[strategy(key_strategy())] TestKey,
        TestPolicy,
    ),
    Get(#[strategy(key_strategy())] TestKey),
    GetInverse(#[strategy(value_strategy())] TestValue),
    Remove(#[strategy(key_strategy())] TestKey),
    RemoveInverse(#[strategy(value_strategy())] TestValue),
    Clear,
}

impl Operation {
    fn remains_compact(&self) -> bool {
        match self {
            Operation::Get(_) | Operation::GetInverse(_) => true,
            // Overwrites remove associations, and any removal can make the
            // map non-compact.
            Operation::Put(..)
            | Operation::Insert(..)
            | Operation::PutAll(..)
            | Operation::PutAllCollecting(..)
            | Operation::InversePut(..)
            | Operation::Remove(_)
            | Operation::RemoveInverse(_)
            | Operation::Clear => false,
        }
    }
}

fn batch_strategy() -> impl Strategy<Value = Vec<(TestKey, TestValue)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..6)
}

/// Reduces an owned rejection to what the naive map reports.
fn owned_rejection(
    error: DuplicateAssociation<TestKey, TestValue>,
) -> (Conflict, Vec<(TestKey, TestValue)>) {
    let (_, conflict, duplicates) = error.into_parts();
    (conflict, duplicates)
}

#[proptest(cases = 16)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..1024))] ops: Vec<
        Operation,
    >,
) {
    let mut map = new_map();
    let mut naive_map = NaiveMap::new();

    let mut compactness = ValidateCompact::Compact;

    // Now perform the operations on both maps.
    for op in ops {
        if compactness == ValidateCompact::Compact && !op.remains_compact() {
            compactness = ValidateCompact::NonCompact;
        }

        match op {
            Operation::Put(key, value, policy) => {
                let policy = policy.to_policy();
                let map_res = map.put(key, value, policy).map_err(|error| {
                    let duplicates: Vec<_> = error
                        .duplicates()
                        .iter()
                        .map(|(k, v)| (**k, **v))
                        .collect();
                    (error.conflict(), duplicates)
                });
                let naive_res = naive_map.put(key, value, policy);

                assert_eq!(
                    map_res, naive_res,
                    "map and naive map should agree on put result"
                );
            }
            Operation::Insert(key, value) => {
                let map_res = map.insert(key, value).map_err(|error| {
                    let duplicates: Vec<_> = error
                        .duplicates()
                        .iter()
                        .map(|(k, v)| (**k, **v))
                        .collect();
                    (error.conflict(), duplicates)
                });
                let naive_res = naive_map.put(key, value, DupPolicy::PUT);

                assert_eq!(
                    map_res, naive_res,
                    "map and naive map should agree on insert result"
                );
            }
            Operation::PutAll(batch, policy) => {
                let policy = policy.to_policy();
                let map_res = map
                    .put_all(batch.iter().copied(), policy)
                    .map_err(owned_rejection);
                let naive_res = batch.iter().try_for_each(|&(key, value)| {
                    naive_map.put(key, value, policy).map(|_| ())
                });

                assert_eq!(
                    map_res, naive_res,
                    "map and naive map should agree on put_all result"
                );
            }
            Operation::PutAllCollecting(batch, policy) => {
                let policy = policy.to_policy();
                let map_res: Vec<_> = map
                    .put_all_collecting(batch.iter().copied(), policy)
                    .into_iter()
                    .map(owned_rejection)
                    .collect();
                let naive_res: Vec<_> = batch
                    .iter()
                    .filter_map(|&(key, value)| {
                        naive_map.put(key, value, policy).err()
                    })
                    .collect();

                assert_eq!(
                    map_res, naive_res,
                    "map and naive map should agree on put_all_collecting \
                     result"
                );
            }
            Operation::InversePut(value, key, policy) => {
                let policy = policy.to_policy();
                let map_res = map
                    .inverse_mut()
                    .put(value, key, policy)
                    .map_err(|error| {
                        let duplicates: Vec<_> = error
                            .duplicates()
                            .iter()
                            .map(|(v, k)| (**v, **k))
                            .collect();
                        (error.conflict(), duplicates)
                    });
                // The naive map only knows the forward direction, so flip the
                // put into it and flip the result back.
                let naive_res = naive_map
                    .put(key, value, policy.swapped())
                    .map(PutOutcome::flip)
                    .map_err(|(conflict, duplicates)| {
                        let duplicates: Vec<_> = duplicates
                            .into_iter()
                            .rev()
                            .map(|(k, v)| (v, k))
                            .collect();
                        (conflict.flip(), duplicates)
                    });

                assert_eq!(
                    map_res, naive_res,
                    "map and naive map should agree on inverse put result"
                );
            }
            Operation::Get(key) => {
                assert_eq!(map.get(&key).copied(), naive_map.get(key));
            }
            Operation::GetInverse(value) => {
                assert_eq!(
                    map.get_inverse(&value).copied(),
                    naive_map.get_inverse(value)
                );
            }
            Operation::Remove(key) => {
                assert_eq!(map.remove(&key), naive_map.remove(key));
            }
            Operation::RemoveInverse(value) => {
                assert_eq!(
                    map.remove_inverse(&value),
                    naive_map.remove_inverse(value)
                );
            }
            Operation::Clear => {
                map.clear();
                naive_map.clear();
            }
        }

        map.validate(compactness).expect("map should be valid");
        assert_eq!(map.len(), naive_map.len());
        assert_eq!(sorted_contents(&map), naive_map.sorted());
    }
}

#[proptest(cases = 64)]
fn proptest_permutation_eq(
    #[strategy(permutation_strategy(0..256))] associations: (
        Vec<(TestKey, TestValue)>,
        Vec<(TestKey, TestValue)>,
    ),
) {
    let (associations1, associations2) = associations;
    let mut map1 = new_map();
    let mut map2 = new_map();

    for (key, value) in associations1 {
        map1.put(key, value, DupPolicy::RAISE).unwrap();
    }
    for (key, value) in associations2 {
        map2.put(key, value, DupPolicy::RAISE).unwrap();
    }

    assert_eq_props(map1, map2);
}

// Test various conditions for non-equality.
//
// It's a bit difficult to capture mutations in a proptest, so this is a small
// example-based test.
#[test]
fn test_permutation_eq_examples() {
    let mut map1 = new_map();
    let mut map2 = new_map();

    // Two empty maps are equal.
    assert_eq!(map1, map2);

    map1.insert(0, 'a').unwrap();
    assert_ne_props(&map1, &map2);

    map2.insert(0, 'a').unwrap();
    assert_eq_props(&map1, &map2);

    {
        // Same key, different value.
        let mut map1 = map1.clone();
        map1.insert(1, 'b').unwrap();
        let mut map2 = map2.clone();
        map2.insert(1, 'c').unwrap();
        assert_ne_props(&map1, &map2);
    }

    {
        // Same value, different key.
        let mut map1 = map1.clone();
        map1.insert(1, 'b').unwrap();
        let mut map2 = map2.clone();
        map2.insert(2, 'b').unwrap();
        assert_ne_props(&map1, &map2);
    }

    {
        // The same associations reached through different histories.
        let mut map1 = map1.clone();
        map1.insert(1, 'b').unwrap();
        map1.insert(1, 'c').unwrap();
        let mut map2 = map2.clone();
        map2.insert(5, 'c').unwrap();
        map2.put(1, 'c', DupPolicy::OVERWRITE).unwrap();
        assert_eq_props(&map1, &map2);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use bidimap_test_utils::{
        serde_utils::assert_serialize_roundtrip, test_item::associations_strategy,
    };

    #[proptest]
    fn proptest_serialize_roundtrip(
        #[strategy(associations_strategy(32))] associations: Vec<(
            TestKey,
            TestValue,
        )>,
    ) {
        assert_serialize_roundtrip(associations);
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let err = serde_json::from_str::<TestMap>(r#"{"1":"a","2":"a"}"#)
            .unwrap_err();
        assert!(
            err.to_string().contains("has a duplicate value"),
            "unexpected error: {err}"
        );

        let map: TestMap = serde_json::from_str(r#"{"1":"a","2":"b"}"#).unwrap();
        assert_eq!(map, bidi_map! { HashBuilder; 1 => 'a', 2 => 'b' });
    }
}

#[cfg(feature = "proptest")]
#[proptest(cases = 16)]
fn proptest_arbitrary_map(map: TestMap) {
    // Test that the arbitrarily generated map is valid.
    map.validate(ValidateCompact::NonCompact).expect("map should be valid");

    // Each association should be findable from both sides.
    let mut count = 0;
    for (key, value) in &map {
        count += 1;
        assert_eq!(map.get(key), Some(value));
        assert_eq!(map.get_inverse(value), Some(key));
    }
    assert_eq!(count, map.len());
}

#[cfg(feature = "proptest")]
#[proptest(cases = 64)]
fn proptest_arbitrary_policy(policy: DupPolicy) {
    assert_eq!(policy.swapped().swapped(), policy);
    assert_eq!(policy.swapped().on_both(), policy.on_both());
}
