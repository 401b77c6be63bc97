use std::collections::BTreeSet;

use avl_forest::OrderedTree;
use proptest::prelude::*;

proptest! {
    #[test]
    fn insert_keeps_avl_invariants(keys in prop::collection::vec(-500i32..500, 0..400)) {
        let mut tree = OrderedTree::<i32>::new();
        for k in keys {
            tree.insert(k).unwrap();
            prop_assert!(tree.assert_valid().is_ok(), "{:?}", tree.assert_valid());
        }
    }

    #[test]
    fn iteration_matches_sorted_set(keys in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut tree = OrderedTree::<i32>::new();
        let mut model = BTreeSet::new();
        for k in keys {
            prop_assert_eq!(tree.insert(k).unwrap(), model.insert(k));
        }
        let listed: Vec<i32> = tree.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(tree.size(), model.len());
    }

    #[test]
    fn floor_and_ceiling_match_model(
        keys in prop::collection::vec(-1000i32..1000, 0..200),
        queries in prop::collection::vec(-1100i32..1100, 1..50),
    ) {
        let mut tree = OrderedTree::<i32>::new();
        let mut model = BTreeSet::new();
        for k in keys {
            tree.insert(k).unwrap();
            model.insert(k);
        }
        for q in queries {
            prop_assert_eq!(tree.floor(&q), model.range(..=q).next_back());
            prop_assert_eq!(tree.ceiling(&q), model.range(q..).next());
        }
    }

    #[test]
    fn inserted_key_is_its_own_floor_and_ceiling(keys in prop::collection::vec(any::<i64>(), 1..100)) {
        let mut tree = OrderedTree::<i64>::new();
        for k in &keys {
            tree.insert(*k).unwrap();
        }
        for k in &keys {
            prop_assert_eq!(tree.floor(k), Some(k));
            prop_assert_eq!(tree.ceiling(k), Some(k));
        }
    }
}
