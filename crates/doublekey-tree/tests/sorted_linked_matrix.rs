use doublekey_tree::{
    check_invariants, check_sorted_list, convert_to_sorted_linked, insert, DkNode, DoubleKeyTree,
    LinearizeError, SortedLinks,
};
use doublekey_util::KeyFuzzer;

fn build(keys: &[f64]) -> (Vec<DkNode<usize>>, Option<u32>) {
    let mut arena = Vec::new();
    let mut root = None;
    for (i, &key) in keys.iter().enumerate() {
        arena.push(DkNode::new(key, i));
        root = Some(insert(&mut arena, root, i as u32).unwrap());
    }
    (arena, root)
}

fn walk_up(arena: &[DkNode<usize>], links: SortedLinks) -> Vec<f64> {
    std::iter::successors(Some(links.tail), |&i| arena[i as usize].large)
        .map(|i| arena[i as usize].key)
        .collect()
}

fn walk_down(arena: &[DkNode<usize>], links: SortedLinks) -> Vec<f64> {
    std::iter::successors(Some(links.head), |&i| arena[i as usize].small)
        .map(|i| arena[i as usize].key)
        .collect()
}

#[test]
fn linked_five_keys_matrix() {
    let (mut arena, root) = build(&[5.0, 2.0, 8.0, 1.0, 3.0]);
    let links = convert_to_sorted_linked(&mut arena, root).unwrap();

    assert_eq!(walk_up(&arena, links), vec![1.0, 2.0, 3.0, 5.0, 8.0]);
    assert_eq!(walk_down(&arena, links), vec![8.0, 5.0, 3.0, 2.0, 1.0]);
    assert_eq!(check_sorted_list(&arena, links), Ok(5));
}

#[test]
fn linked_empty_tree_matrix() {
    let mut arena = Vec::<DkNode<usize>>::new();
    assert_eq!(
        convert_to_sorted_linked(&mut arena, None),
        Err(LinearizeError::EmptyTree)
    );
}

#[test]
fn linked_ladders_matrix() {
    for n in [1usize, 2, 3, 7, 8, 31, 64, 100] {
        let up: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();

        for keys in [&up, &down] {
            let (mut arena, root) = build(keys);
            check_invariants(&arena, root).unwrap();
            let links = convert_to_sorted_linked(&mut arena, root).unwrap();
            assert_eq!(check_sorted_list(&arena, links), Ok(n));
            assert_eq!(walk_up(&arena, links), up);
            assert_eq!(walk_down(&arena, links), down);
        }
    }
}

#[test]
fn linked_random_keys_matrix() {
    let fuzzer = KeyFuzzer::from_u64(2024);
    let keys = fuzzer.distinct_keys(1000, 1000.0);
    let (mut arena, root) = build(&keys);
    check_invariants(&arena, root).unwrap();

    let links = convert_to_sorted_linked(&mut arena, root).unwrap();
    assert_eq!(check_sorted_list(&arena, links), Ok(keys.len()));

    let mut sorted = keys.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(walk_up(&arena, links), sorted);
    assert_eq!(arena[links.tail as usize].key, sorted[0]);
    assert_eq!(arena[links.head as usize].key, sorted[sorted.len() - 1]);
}

#[test]
fn linked_tree_wrapper_matrix() {
    let fuzzer = KeyFuzzer::from_u64(11);
    let mut tree = DoubleKeyTree::new();
    let mut accepted = Vec::new();
    for i in 0..500 {
        let key = fuzzer.random_int(0, 300) as f64;
        if tree.insert(key, i).is_ok() {
            accepted.push(key);
        }
    }
    tree.check_invariants().unwrap();
    assert_eq!(tree.len(), accepted.len());

    let list = tree.into_sorted_list().unwrap();
    assert_eq!(list.check(), Ok(accepted.len()));

    accepted.sort_by(|a, b| a.total_cmp(b));
    let keys: Vec<f64> = list.ascending().map(|(k, _)| k).collect();
    assert_eq!(keys, accepted);
    let reversed: Vec<f64> = list.descending().map(|(k, _)| k).collect();
    assert_eq!(reversed, accepted.iter().rev().copied().collect::<Vec<_>>());
}
