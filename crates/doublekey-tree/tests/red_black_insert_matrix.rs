use doublekey_tree::util::{first, height, next, size};
use doublekey_tree::{check_invariants, insert, lookup, DkNode, InsertError, NodeStore};
use doublekey_util::KeyFuzzer;

fn insert_value(arena: &mut Vec<DkNode<f64>>, root: Option<u32>, key: f64) -> Option<u32> {
    arena.push(DkNode::new(key, key * 2.0));
    let idx = (arena.len() - 1) as u32;
    let root = match insert(arena, root, idx) {
        Ok(root) => Some(root),
        Err(err) => panic!("insert({key}) failed: {err}"),
    };
    if let Err(err) = check_invariants(arena, root) {
        panic!("invalid red-black tree after insert({key}): {err}");
    }
    root
}

fn keys_in_order(arena: &[DkNode<f64>], root: Option<u32>) -> Vec<f64> {
    let mut keys = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        keys.push(arena[i as usize].key);
        curr = next(arena, i);
    }
    keys
}

#[test]
fn rb_insert_five_keys_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for key in [5.0, 2.0, 8.0, 1.0, 3.0] {
        root = insert_value(&mut arena, root, key);
    }

    assert_eq!(lookup(&arena, root, 3.0), Some(&6.0));
    assert_eq!(lookup(&arena, root, 9.0), None);
    assert_eq!(keys_in_order(&arena, root), vec![1.0, 2.0, 3.0, 5.0, 8.0]);
}

#[test]
fn rb_duplicate_keeps_first_payload_matrix() {
    let mut store = NodeStore::new();
    let a = store.create_node(5.0, "first").unwrap();
    let root = insert(store.arena_mut(), None, a).unwrap();

    let b = store.create_node(5.0, "second").unwrap();
    assert_eq!(
        insert(store.arena_mut(), Some(root), b),
        Err(InsertError::DuplicateKey { key: 5.0 })
    );
    let c = store.create_node(5.0, "first").unwrap();
    assert!(insert(store.arena_mut(), Some(root), c).is_err());

    assert_eq!(lookup(store.arena(), Some(root), 5.0), Some(&"first"));
    assert_eq!(size(store.arena(), Some(root)), 1);
    assert_eq!(store.node(b).p, None);
}

#[test]
fn rb_numbers_from_0_to_100_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for i in 0..=100 {
        root = insert_value(&mut arena, root, f64::from(i));
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        let key = f64::from(i);
        assert_eq!(lookup(&arena, root, key), Some(&(key * 2.0)));
    }
}

#[test]
fn rb_numbers_from_100_down_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for i in (0..=100).rev() {
        root = insert_value(&mut arena, root, f64::from(i) / 4.0);
    }
    assert_eq!(size(&arena, root), 101);
    assert_eq!(keys_in_order(&arena, root).first(), Some(&0.0));
}

#[test]
fn rb_numbers_both_directions_from_50_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    root = insert_value(&mut arena, root, 50.0);
    for i in 1..=100 {
        root = insert_value(&mut arena, root, 50.0 + f64::from(i));
        root = insert_value(&mut arena, root, 50.0 - f64::from(i));
        assert_eq!(size(&arena, root), (i * 2 + 1) as usize);
    }
}

#[test]
fn rb_random_100_keys_matrix() {
    let fuzzer = KeyFuzzer::from_u64(0xdead_beef);
    let keys = fuzzer.distinct_keys(100, 1000.0);

    let mut arena = Vec::new();
    let mut root = None;
    for &key in &keys {
        root = insert_value(&mut arena, root, key);
    }
    for &key in &keys {
        assert_eq!(lookup(&arena, root, key), Some(&(key * 2.0)));
    }
}

#[test]
fn rb_height_stays_logarithmic_matrix() {
    let mut arena = Vec::new();
    let mut root = None;
    for i in 0..1024 {
        arena.push(DkNode::new(f64::from(i), 0.0));
        root = Some(insert(&mut arena, root, i as u32).unwrap());
    }
    check_invariants(&arena, root).unwrap();
    // 2 * log2(n + 1) bound for red-black trees.
    assert!(height(&arena, root) <= 20);
}

#[test]
fn rb_pool_nodes_insert_matrix() {
    let mut store = NodeStore::new();
    store.create_node_pool(16).unwrap();
    let mut root = None;
    for i in 0..16 {
        let n = store.acquire(f64::from(i) * 1.5, i).unwrap();
        root = Some(insert(store.arena_mut(), root, n).unwrap());
        check_invariants(store.arena(), root).unwrap();
    }
    assert_eq!(store.len(), 16);
    assert_eq!(lookup(store.arena(), root, 4.5), Some(&3));
}

#[test]
fn rb_shuffled_ladder_matrix() {
    let fuzzer = KeyFuzzer::from_u64(31);
    let mut keys: Vec<f64> = (0..500).map(f64::from).collect();
    fuzzer.shuffle(&mut keys);

    let mut arena = Vec::new();
    let mut root = None;
    for &key in &keys {
        root = insert_value(&mut arena, root, key);
    }
    assert_eq!(keys_in_order(&arena, root), (0..500).map(f64::from).collect::<Vec<_>>());

    for _ in 0..100 {
        let key = *fuzzer.pick(&keys);
        assert_eq!(lookup(&arena, root, key), Some(&(key * 2.0)));
    }
}
