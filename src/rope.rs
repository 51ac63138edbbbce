//! A text stored as a [`SplayTree`] of bytes.
//!
//! The rope is built once from its text, and then reshaped by moving segments around
//! with [`Rope::cut_and_paste`]. Bytes are never added or removed after the rope is built.

use crate::error::RopeError;
use crate::trees::splay::SplayTree;

/// A text, one node per byte.
///
///```
/// use splay_rope::Rope;
///
/// let mut rope = Rope::build(b"abcdef");
/// rope.cut_and_paste(1, 2, 3).unwrap();
/// assert_eq!(rope.to_string(), "adebcf");
///
/// // invalid bounds leave the rope as it was
/// assert!(rope.cut_and_paste(2, 1, 0).is_err());
/// assert_eq!(rope.to_vec(), b"adebcf");
///```
#[derive(Default)]
pub struct Rope {
    tree: SplayTree<u8>,
}

impl Rope {
    /// Creates an empty rope.
    pub fn new() -> Rope {
        Rope::default()
    }

    /// Builds a rope holding `text`.
    pub fn build(text: &[u8]) -> Rope {
        let rope: Rope = text.iter().cloned().collect();
        log::debug!("built a rope of {} bytes", rope.len());
        rope
    }

    /// The number of bytes in the text.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the byte at `rank`, counting from 0.
    /// The byte's node gets splayed to the root, like on every access.
    pub fn byte_at(&mut self, rank: usize) -> Result<u8, RopeError> {
        self.tree.select(rank).map(|byte| *byte)
    }

    /// Moves the bytes at ranks `i..=j` so that they begin right after the first `k` bytes
    /// of the text that remains once they are cut out. `k == 0` moves them to the front.
    ///
    /// Requires `i <= j < self.len()` and `k <= self.len() - (j - i + 1)`.
    /// Otherwise returns [`RopeError::IndexOutOfRange`], and the rope isn't modified.
    pub fn cut_and_paste(&mut self, i: usize, j: usize, k: usize) -> Result<(), RopeError> {
        self.tree.cut_and_paste(i, j, k)
    }

    /// Iterates over the bytes of the text.
    pub fn bytes(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.tree.iter().cloned()
    }

    /// Returns the current text.
    pub fn to_vec(&self) -> Vec<u8> {
        self.tree.to_vec()
    }

    /// Returns the current text, or an error if its buffer couldn't be allocated.
    pub fn try_to_vec(&self) -> Result<Vec<u8>, RopeError> {
        self.tree.try_to_vec()
    }

    /// The underlying tree.
    pub fn as_tree(&self) -> &SplayTree<u8> {
        &self.tree
    }

    /// Releases all the nodes of the rope.
    /// Dropping the rope does the same; this only makes it explicit.
    pub fn destroy(mut self) {
        self.tree.clear();
    }
}

impl std::iter::FromIterator<u8> for Rope {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Rope {
            tree: iter.into_iter().collect(),
        }
    }
}

impl From<&[u8]> for Rope {
    fn from(text: &[u8]) -> Rope {
        Rope::build(text)
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Rope {
        Rope::build(text.as_bytes())
    }
}

/// Bytes that aren't valid UTF-8 are shown as `U+FFFD`.
impl std::fmt::Display for Rope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_vec()))
    }
}

impl std::fmt::Debug for Rope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rope({:?})", String::from_utf8_lossy(&self.to_vec()))
    }
}
