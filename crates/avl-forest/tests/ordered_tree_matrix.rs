use avl_forest::OrderedTree;

fn tree_of(keys: &[i32]) -> OrderedTree<i32> {
    let mut tree = OrderedTree::new();
    for &k in keys {
        tree.insert(k).unwrap();
    }
    tree
}

#[test]
fn ordered_tree_scenario_matrix() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

    let keys: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(keys, vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.floor(&6), Some(&5));
    assert_eq!(tree.ceiling(&6), Some(&7));
    assert_eq!(tree.floor(&0), None);
    assert_eq!(tree.ceiling(&10), None);
    assert_eq!(tree.height(), 2);
    tree.assert_valid().unwrap();
}

#[test]
fn exact_match_satisfies_floor_and_ceiling() {
    let tree = tree_of(&[10, 20, 30, 40, 50]);
    for k in [10, 20, 30, 40, 50] {
        assert_eq!(tree.floor(&k), Some(&k));
        assert_eq!(tree.ceiling(&k), Some(&k));
        assert!(tree.has(&k));
    }
    assert_eq!(tree.floor(&25), Some(&20));
    assert_eq!(tree.ceiling(&25), Some(&30));
    assert_eq!(tree.floor(&55), Some(&50));
    assert_eq!(tree.ceiling(&5), Some(&10));
    assert!(!tree.has(&25));
}

#[test]
fn empty_tree_matrix() {
    let tree = OrderedTree::<i32>::default();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.floor(&1), None);
    assert_eq!(tree.ceiling(&1), None);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.iter().count(), 0);
    tree.assert_valid().unwrap();
}

#[test]
fn ascending_and_descending_ladders_stay_balanced() {
    let mut up = OrderedTree::<i32>::new();
    let mut down = OrderedTree::<i32>::new();
    for i in 0..1024 {
        up.insert(i).unwrap();
        down.insert(1023 - i).unwrap();
        up.assert_valid().unwrap();
        down.assert_valid().unwrap();
    }
    // A perfectly balanced tree of 1024 keys has height 10; AVL allows a
    // little more but never a chain.
    assert!(up.height() <= 14, "height {}", up.height());
    assert!(down.height() <= 14, "height {}", down.height());
    assert_eq!(up.size(), 1024);
    assert_eq!(up.first(), Some(&0));
    assert_eq!(up.last(), Some(&1023));
}

#[test]
fn zig_zag_insertions_stay_balanced() {
    let mut tree = OrderedTree::<i32>::new();
    let (mut lo, mut hi) = (0, 500);
    while lo < hi {
        tree.insert(lo).unwrap();
        tree.insert(hi).unwrap();
        tree.assert_valid().unwrap();
        lo += 1;
        hi -= 1;
    }
    for k in [250, 125, 375, 62, 437] {
        tree.insert(k).unwrap();
        tree.assert_valid().unwrap();
    }
    let keys: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(keys, (0..=500).collect::<Vec<_>>());
}

#[test]
fn duplicates_are_ignored() {
    let mut tree = tree_of(&[3, 1, 2]);
    assert!(!tree.insert(2).unwrap());
    assert!(!tree.insert(3).unwrap());
    assert!(tree.insert(4).unwrap());
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn list_is_restartable() {
    let tree = tree_of(&[2, 1, 3]);
    let first: Vec<i32> = tree.list().copied().collect();
    let second: Vec<i32> = (&tree).into_iter().copied().collect();
    assert_eq!(first, second);
    assert_eq!(tree.iter().len(), 3);
}

#[test]
fn custom_comparator_matrix() {
    // Reverse order: "floor" becomes the nearest key that is numerically >=.
    let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a) as i32);
    for k in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(k).unwrap();
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![9, 8, 7, 5, 4, 3, 1]);
    assert_eq!(tree.floor(&6), Some(&7));
    assert_eq!(tree.ceiling(&6), Some(&5));
    tree.assert_valid().unwrap();
}

#[test]
fn string_keys_matrix() {
    let mut tree = OrderedTree::<String>::new();
    for w in ["09:30", "12:00", "08:15", "17:45", "12:00"] {
        tree.insert(w.to_string()).unwrap();
    }
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.floor(&"12:30".to_string()), Some(&"12:00".to_string()));
    assert_eq!(tree.ceiling(&"12:30".to_string()), Some(&"17:45".to_string()));
    assert_eq!(tree.floor(&"08:00".to_string()), None);
}

#[test]
fn leaf_insertion_can_break_balance() {
    let mut tree = OrderedTree::<i32>::new();
    for k in 1..=4 {
        tree.insert_leaf(k).unwrap();
    }
    assert_eq!(tree.height(), 3);
    let err = tree.assert_valid().unwrap_err();
    assert!(err.contains("balance"), "{err}");
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(tree.floor(&10), Some(&4));
}
