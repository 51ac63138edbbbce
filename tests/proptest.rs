#![cfg_attr(feature = "bench", feature(test))]

pub mod common;
pub use common::*;

use proptest::prelude::*;
use splay_rope::*;

/// A text, together with a list of cuts that are all valid for it.
fn text_and_cuts() -> impl Strategy<Value = (Vec<u8>, Vec<Cut>)> {
    proptest::collection::vec(b'a'..=b'z', 1..150).prop_flat_map(|text| {
        let len = text.len();
        let cut = (0..len, 0..len)
            .prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
            .prop_flat_map(move |(i, j)| {
                (Just(i), Just(j), 0..=len - (j - i + 1)).prop_map(|(i, j, k)| Cut { i, j, k })
            });
        (Just(text), proptest::collection::vec(cut, 0..100))
    })
}

const NUM_CASES: u32 = if cfg!(not(miri)) { 256 } else { 10 }; // miri is too slow

proptest::proptest! {
    #![proptest_config(ProptestConfig {
        cases: NUM_CASES, .. ProptestConfig::default()
    })]

    #[test]
    fn round_trip(text in proptest::collection::vec(any::<u8>(), 0..300)) {
        let rope = Rope::build(&text);
        prop_assert_eq!(rope.len(), text.len());
        prop_assert_eq!(rope.to_vec(), text);
    }

    #[test]
    fn cuts_agree_with_the_model((text, cuts) in text_and_cuts()) {
        let mut rope = Rope::build(&text);
        let mut model = text.clone();
        for cut in cuts {
            rope.cut_and_paste(cut.i, cut.j, cut.k).unwrap();
            model_cut_and_paste(&mut model, cut);
            prop_assert_eq!(rope.len(), text.len());
        }
        rope.as_tree().assert_correctness();
        prop_assert_eq!(rope.to_vec(), model);
    }

    #[test]
    fn invalid_cuts_are_rejected(text in "[a-z]{1,40}", i in 0..50usize, j in 0..50usize, k in 0..50usize) {
        let mut rope = Rope::from(text.as_str());
        let len = text.len();
        let valid = i <= j && j < len && k <= len - (j - i + 1);
        let res = rope.cut_and_paste(i, j, k);
        prop_assert_eq!(res.is_ok(), valid);
        if !valid {
            let is_out_of_range = matches!(res, Err(RopeError::IndexOutOfRange { .. }));
            prop_assert!(is_out_of_range);
            prop_assert_eq!(rope.to_string(), text);
        }
    }

    #[test]
    fn select_finds_every_rank(len in 1..200usize, ranks in proptest::collection::vec(0..200usize, 1..50)) {
        let mut tree: SplayTree<usize> = (0..len).collect();
        for rank in ranks {
            let res = tree.select(rank).map(|value| *value);
            if rank < len {
                prop_assert_eq!(res, Ok(rank));
                prop_assert_eq!(tree.root_value(), Some(&rank));
            } else {
                prop_assert!(res.is_err());
            }
            tree.assert_correctness();
        }
        prop_assert!(tree.iter().cloned().eq(0..len));
    }
}
