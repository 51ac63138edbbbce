//! Methods module
//! This module composes the splitting and concatenation of splay trees into
//! the cut-and-paste operation, which moves a segment of the sequence to another place.

use crate::error::RopeError;
use crate::trees::splay::SplayTree;

/// Checks the bounds of a cut-and-paste on a sequence of length `len`:
/// `i <= j < len`, and `k <= len - (j - i + 1)`.
pub fn check_cut(len: usize, i: usize, j: usize, k: usize) -> Result<(), RopeError> {
    if j >= len {
        return Err(RopeError::out_of_range("span end", j, len));
    }
    if i > j {
        return Err(RopeError::out_of_range("span start", i, j + 1));
    }
    let remaining = len - (j - i + 1);
    if k > remaining {
        return Err(RopeError::out_of_range("paste position", k, remaining + 1));
    }
    Ok(())
}

/// Cuts the values at ranks `i..=j` out of the tree, and pastes them back right after
/// the first `k` values of the rest. If `k == 0` they are pasted at the beginning.
///
/// Nodes are only moved between trees, never allocated or copied, so the size of
/// the tree doesn't change. If the bounds are invalid (see [`check_cut`]), an error is
/// returned and the tree is left as it was.
pub fn cut_and_paste<T>(tree: &mut SplayTree<T>, i: usize, j: usize, k: usize) -> Result<(), RopeError> {
    if let Err(err) = check_cut(tree.len(), i, j, k) {
        log::debug!("rejected cut and paste of [{}, {}] to {}: {}", i, j, k, err);
        return Err(err);
    }
    log::trace!("cut and paste of [{}, {}] to {}", i, j, k);

    // all the splits below are in range, since the bounds were checked
    let mut left = std::mem::take(tree);
    let right = left.split_after_unchecked(j);
    let span = if i > 0 {
        left.split_after_unchecked(i - 1)
    } else {
        std::mem::take(&mut left)
    };

    // the rest of the sequence, without the span
    left.concatenate_right(right);
    let after = if k > 0 {
        left.split_after_unchecked(k - 1)
    } else {
        std::mem::take(&mut left)
    };

    *tree = left.concatenate(span).concatenate(after);
    Ok(())
}
