use std::collections::BTreeMap;

use algorithms::data_structures::Treap;

#[test]
fn orders_by_id_and_answers_lookups() {
    let mut orders = Treap::with_seed(7);
    orders.insert("1001", "u001");
    orders.insert("1003", "u002");
    orders.insert("1002", "u003");
    assert_eq!(orders.get(&"1001"), Some(&"u001"));
    assert_eq!(orders.get(&"1009"), None);

    orders.insert("1004", "u004");
    assert_eq!(
        orders.range(&"1002", &"1004"),
        vec![(&"1002", &"u003"), (&"1003", &"u002"), (&"1004", &"u004")]
    );

    assert_eq!(orders.remove(&"1003"), Some("u002"));
    assert_eq!(orders.remove(&"1003"), None);
    assert_eq!(orders.len(), 3);
    assert!(orders.is_valid());
}

#[test]
fn insert_overwrites_existing_key() {
    let mut t = Treap::with_seed(1);
    assert_eq!(t.insert(5, "a"), None);
    assert_eq!(t.insert(5, "b"), Some("a"));
    assert_eq!(t.len(), 1);
    assert_eq!(t.get(&5), Some(&"b"));
}

#[test]
fn rank_counts_smaller_keys() {
    let mut t = Treap::with_seed(3);
    for k in [50, 10, 40, 20, 30] {
        t.insert(k, ());
    }
    assert_eq!(t.rank(&10), 0);
    assert_eq!(t.rank(&30), 2);
    assert_eq!(t.rank(&35), 3);
    assert_eq!(t.rank(&99), 5);
    assert_eq!(t.rank(&0), 0);
}

#[test]
fn mixed_operations_keep_invariants_and_match_btreemap() {
    let mut t = Treap::with_seed(42);
    let mut model = BTreeMap::new();
    // deterministic pseudo-random key stream
    let mut state: u64 = 0x9e37_79b9;
    for step in 0..3_000u64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let key = (state >> 40) % 500;
        if step % 3 == 2 {
            assert_eq!(t.remove(&key), model.remove(&key));
        } else {
            assert_eq!(t.insert(key, step), model.insert(key, step));
        }
        if step % 100 == 0 {
            assert!(t.is_valid(), "invariants broken at step {step}");
        }
    }
    assert!(t.is_valid());
    assert_eq!(t.len(), model.len());
    for key in 0..500u64 {
        assert_eq!(t.get(&key), model.get(&key));
        assert_eq!(t.rank(&key), model.range(..key).count());
    }
    let all: Vec<_> = t.range(&0, &499).into_iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<_> = model.into_iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn same_seed_builds_the_same_tree() {
    let build = || {
        let mut t = Treap::with_seed(9);
        for k in 0..200 {
            t.insert(k, k * 2);
        }
        for k in (0..200).step_by(3) {
            t.remove(&k);
        }
        t
    };
    let (a, b) = (build(), build());
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
    assert!(a.is_valid());
}

#[test]
fn empty_treap() {
    let mut t: Treap<u32, ()> = Treap::default();
    assert!(t.is_empty());
    assert!(t.is_valid());
    assert_eq!(t.remove(&1), None);
    assert!(!t.contains_key(&1));
    assert!(t.range(&0, &10).is_empty());
}
