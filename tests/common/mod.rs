#![allow(dead_code)]

#[cfg(feature = "bench")]
pub mod bench;

use rand::{self, Rng};
use splay_rope::*;

/// One cut-and-paste: the span `i..=j` goes right after the first `k` remaining values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cut {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

/// The straightforward implementation, on a vector.
pub fn model_cut_and_paste<T: Clone>(vec: &mut Vec<T>, cut: Cut) {
    let span: Vec<T> = vec.drain(cut.i..=cut.j).collect();
    let tail = vec.split_off(cut.k);
    vec.extend(span);
    vec.extend(tail);
}

/// A random cut that is valid for a sequence of length `len`. `len` must be positive.
pub fn random_cut(rng: &mut impl Rng, len: usize) -> Cut {
    let i = rng.gen_range(0..len);
    let j = rng.gen_range(i..len);
    let k = rng.gen_range(0..=len - (j - i + 1));
    Cut { i, j, k }
}

/// Runs `num_rounds` random cuts on a tree and on the vector model, checking after each
/// round that they agree and that the tree's sizes are correct.
pub fn check_against_model(len: usize, num_rounds: usize) {
    let mut rng = rand::thread_rng();
    let mut model: Vec<usize> = (0..len).collect();
    let mut tree: SplayTree<usize> = model.iter().cloned().collect();

    for _ in 0..num_rounds {
        let cut = random_cut(&mut rng, len);
        tree.cut_and_paste(cut.i, cut.j, cut.k).unwrap();
        model_cut_and_paste(&mut model, cut);

        assert_eq!(tree.len(), len);
        // This check takes `O(n)` time. However, the trees in these tests are small.
        tree.assert_correctness();
        assert_eq!(tree.to_vec(), model, "after {:?}", cut);
    }
}

/// Checks that a tree holds exactly `expected`, and that its sizes are correct.
pub fn assert_sequence<T: Clone + PartialEq + std::fmt::Debug>(tree: &SplayTree<T>, expected: &[T]) {
    tree.assert_correctness();
    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.to_vec(), expected);
}
