//! This module contains the tree types of the crate.
//!
//! [`basic_tree`] is the unbalanced, position-ordered tree that everything is built on,
//! together with its walker. [`splay`] wraps it into a self-adjusting splay tree
//! supporting order statistics, splitting and concatenation.

pub mod basic_tree;
pub mod splay;

/// Which child of a node a position is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;
    fn not(self) -> Side {
        self.flip()
    }
}
