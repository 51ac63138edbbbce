#![cfg_attr(feature = "bench", feature(test))]

mod common;
use common::*;

use splay_rope::*;

#[test]
fn cut_and_paste_scenarios() {
    let mut rope = Rope::from("abcdef");
    rope.cut_and_paste(1, 2, 3).unwrap();
    assert_eq!(rope.to_string(), "adebcf");

    let mut rope = Rope::from("abcdef");
    rope.cut_and_paste(0, 5, 0).unwrap();
    assert_eq!(rope.to_string(), "abcdef");
    assert_eq!(rope.len(), 6);
}

#[test]
fn rejected_cuts_leave_the_rope_unmodified() {
    let mut rope = Rope::from("abcdef");
    rope.cut_and_paste(3, 4, 1).unwrap();
    let before = rope.to_vec();

    let n = rope.len();
    for (i, j, k) in [(2, 1, 0), (0, 1, n + 1), (0, n, 0), (4, 5, 5), (n, n, 0)] {
        let res = rope.cut_and_paste(i, j, k);
        assert!(
            matches!(res, Err(RopeError::IndexOutOfRange { .. })),
            "({}, {}, {}) gave {:?}",
            i,
            j,
            k,
            res
        );
        assert_eq!(rope.to_vec(), before);
        rope.as_tree().assert_correctness();
    }
}

#[test]
fn identity_transform_on_many_lengths() {
    for len in 1..60 {
        let mut tree: SplayTree<usize> = (0..len).collect();
        tree.cut_and_paste(0, len - 1, 0).unwrap();
        assert_sequence(&tree, &(0..len).collect::<Vec<_>>());
    }
}

#[test]
fn every_cut_of_a_small_sequence() {
    let len = 9;
    let original: Vec<usize> = (0..len).collect();
    for i in 0..len {
        for j in i..len {
            for k in 0..=len - (j - i + 1) {
                let cut = Cut { i, j, k };
                let mut tree: SplayTree<usize> = original.iter().cloned().collect();
                let mut model = original.clone();
                tree.cut_and_paste(i, j, k).unwrap();
                model_cut_and_paste(&mut model, cut);
                assert_sequence(&tree, &model);
            }
        }
    }
}

#[test]
fn random_cuts_agree_with_the_model() {
    check_against_model(1, 50);
    check_against_model(2, 200);
    check_against_model(200, 2_000);
}

#[test]
fn repeated_cuts_on_a_single_rope() {
    // splits and concatenations keep reusing the same nodes
    let text = "the quick brown fox jumps over the lazy dog";
    let mut rope = Rope::from(text);
    let mut model = text.as_bytes().to_vec();
    let mut rng = rand::thread_rng();
    for _ in 0..1_000 {
        let cut = random_cut(&mut rng, model.len());
        rope.cut_and_paste(cut.i, cut.j, cut.k).unwrap();
        model_cut_and_paste(&mut model, cut);
    }
    assert_eq!(rope.to_vec(), model);
    let mut sorted = rope.to_vec();
    sorted.sort_unstable();
    let mut expected = text.as_bytes().to_vec();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn merge_with_empty_operand() {
    let tree: SplayTree<char> = "splay".chars().collect();
    let tree = SplayTree::new().concatenate(tree);
    assert_sequence(&tree, &['s', 'p', 'l', 'a', 'y']);
    let tree = tree.concatenate(SplayTree::new());
    assert_sequence(&tree, &['s', 'p', 'l', 'a', 'y']);
}

#[test]
fn split_then_concatenate_restores_the_sequence() {
    let len = 100;
    let mut tree: SplayTree<usize> = (0..len).collect();
    let mut parts = vec![];
    for rank in (0..len - 1).rev().step_by(9) {
        parts.push(tree.split_after(rank).unwrap());
        tree.assert_correctness();
    }
    for part in parts.into_iter().rev() {
        tree.concatenate_right(part);
        tree.assert_correctness();
    }
    assert_sequence(&tree, &(0..len).collect::<Vec<_>>());
}

#[test]
fn splaying_any_node_keeps_the_order() {
    let len = 127;
    for target in 0..len {
        let mut tree: SplayTree<usize> = (0..len).collect();
        let mut walker = tree.walker();
        // walk down by rank, without the help of `select`
        loop {
            let rank = walker.rank().unwrap();
            if rank == target {
                break;
            } else if rank > target {
                walker.go_left().unwrap();
            } else {
                walker.go_right().unwrap();
            }
        }
        drop(walker);
        assert_eq!(tree.root_value(), Some(&target));
        assert_sequence(&tree, &(0..len).collect::<Vec<_>>());
    }
}

#[test]
fn deep_trees_are_traversed_and_dropped_iteratively() {
    // accessing the values in order leaves the tree as a long path
    let len = 200_000;
    let mut tree: SplayTree<usize> = (0..len).collect();
    for rank in 0..len {
        assert_eq!(tree.select(rank), Ok(&rank));
    }
    assert_eq!(tree.iter().len(), len);
    assert!(tree.iter().cloned().eq(0..len));
    tree.assert_correctness();
    drop(tree);
}

#[test]
fn round_trip_of_empty_text() {
    let rope = Rope::build(b"");
    assert!(rope.is_empty());
    assert_eq!(rope.to_vec(), Vec::<u8>::new());
    assert_eq!(rope.to_string(), "");
}
