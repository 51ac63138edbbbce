//! Implementation of splay trees, ordered by position.
//!
//! Every access splays the accessed node to the root. The amortized cost of an access is
//! `O(log n)`, whatever the shape of the tree, which is what makes repeatedly cutting
//! and pasting segments cheap.
//!
//! The tree supports order statistics ([`SplayTree::select`]), splitting
//! ([`SplayTree::split_after`]) and concatenation ([`SplayTree::concatenate_right`]).
//! Splitting and concatenating only move existing nodes around: nothing is allocated
//! and no value is copied.

use super::basic_tree::*;
use super::Side;
use crate::error::RopeError;
use crate::methods;

/// A splay tree whose order is the order of insertion, rather than an order on keys.
///
///```
/// use splay_rope::trees::splay::SplayTree;
///
/// let mut tree: SplayTree<char> = "rope".chars().collect();
/// assert_eq!(tree.select(2), Ok(&'p'));
///
/// let tail = tree.split_after(1).unwrap();
/// assert_eq!(tree.to_vec(), vec!['r', 'o']);
/// assert_eq!(tail.to_vec(), vec!['p', 'e']);
///
/// let tree = tail.concatenate(tree);
/// assert_eq!(tree.iter().collect::<String>(), "pero");
///```
pub struct SplayTree<T> {
    tree: BasicTree<T>,
}

impl<T> SplayTree<T> {
    pub fn new() -> Self {
        SplayTree {
            tree: BasicTree::Empty,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the underlying [`BasicTree`].
    pub fn inner(&self) -> &BasicTree<T> {
        &self.tree
    }

    /// Returns the value at the root, if there is one.
    pub fn root_value(&self) -> Option<&T> {
        self.tree.node().map(BasicNode::value)
    }

    /// Note: moving this walker around without splaying may cause the tree to lose its
    /// amortized complexity guarantees. It can't break the tree's invariants.
    pub fn basic_walker(&mut self) -> BasicWalker<'_, T> {
        BasicWalker::new(&mut self.tree)
    }

    /// Returns a walker that splays the node it is at when it is dropped.
    pub fn walker(&mut self) -> SplayWalker<'_, T> {
        SplayWalker::new(self.basic_walker())
    }

    /// Iterates over the values, in order. Doesn't change the shape of the tree.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// Returns a vector of all the values in the tree, in order.
    /// The vector is allocated with exactly the tree's size.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut res = Vec::with_capacity(self.len());
        res.extend(self.iter().cloned());
        res
    }

    /// Like [`SplayTree::to_vec`], but reports a failure to reserve the buffer
    /// instead of aborting.
    pub fn try_to_vec(&self) -> Result<Vec<T>, RopeError>
    where
        T: Clone,
    {
        let mut res = Vec::new();
        res.try_reserve_exact(self.len())?;
        res.extend(self.iter().cloned());
        Ok(res)
    }

    /// Checks that the cached sizes are correct throughout the tree.
    /// If they are not, panics.
    pub fn assert_correctness(&self) {
        self.tree.assert_correctness();
    }

    /// Deallocates all the nodes, leaving an empty tree.
    /// Works iteratively, so deep trees can't overflow the stack.
    pub fn clear(&mut self) {
        let freed = deallocate_iteratively(&mut self.tree);
        if freed > 0 {
            log::debug!("freed {} nodes", freed);
        }
    }

    /// Finds the node at `rank` (counting from 0) and splays it to the root.
    /// The rank must be in range. If it isn't, the walk stops at the last node on the path,
    /// and that node is splayed instead.
    fn splay_rank(&mut self, rank: usize) {
        let mut walker = self.walker();
        let mut k = rank;
        loop {
            let (s, has_left, has_right) = match walker.node() {
                Some(node) => (node.left().size(), !node.left().is_empty(), !node.right().is_empty()),
                None => break,
            };
            if k == s {
                break;
            } else if k < s && has_left {
                if walker.go_left().is_err() {
                    break;
                }
            } else if k > s && has_right {
                k -= s + 1;
                if walker.go_right().is_err() {
                    break;
                }
            } else {
                // the son we need is missing
                break;
            }
        }
        // the walker splays the node when dropped
    }

    fn check_rank(&self, rank: usize) -> Result<(), RopeError> {
        if rank < self.len() {
            Ok(())
        } else {
            Err(RopeError::out_of_range("rank", rank, self.len()))
        }
    }

    /// Returns the value at `rank`, counting from 0, and splays its node to the root.
    /// Returns an error, without changing the tree, if `rank` is out of range.
    ///```
    /// use splay_rope::trees::splay::SplayTree;
    ///
    /// let mut tree: SplayTree<u32> = (10..20).collect();
    /// assert_eq!(tree.select(3), Ok(&13));
    /// assert_eq!(tree.root_value(), Some(&13));
    /// assert!(tree.select(10).is_err());
    ///```
    pub fn select(&mut self, rank: usize) -> Result<&T, RopeError> {
        self.check_rank(rank)?;
        self.splay_rank(rank);
        self.tree
            .node()
            .map(BasicNode::value)
            .ok_or_else(|| RopeError::out_of_range("rank", rank, 0))
    }

    /// Splits the tree right after the node at `rank`: `self` keeps the values at ranks
    /// `0..=rank`, and the values after it are returned as a new tree, which
    /// may be empty.
    /// Returns an error, without changing the tree, if `rank` is out of range.
    pub fn split_after(&mut self, rank: usize) -> Result<SplayTree<T>, RopeError> {
        self.check_rank(rank)?;
        Ok(self.split_after_unchecked(rank))
    }

    /// Same as [`SplayTree::split_after`], for a rank that is known to be in range.
    pub(crate) fn split_after_unchecked(&mut self, rank: usize) -> SplayTree<T> {
        self.splay_rank(rank);
        match self.tree.node_mut() {
            Some(root) => {
                let right = root.right.take();
                root.rebuild();
                SplayTree { tree: right }
            }
            None => SplayTree::new(),
        }
    }

    /// Concatenates `other` to the right of this tree. `other` is consumed: its nodes now
    /// belong to `self`.
    ///
    /// If either tree is empty, no node is moved. Otherwise, the last node of `self`
    /// is splayed to the root, and `other` becomes its right subtree.
    pub fn concatenate_right(&mut self, mut other: SplayTree<T>) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            std::mem::swap(&mut self.tree, &mut other.tree);
            return;
        }

        let mut walker = self.walker();
        while walker.go_right().is_ok() {}
        // we are now at the empty position to the right of the last node
        walker.go_up().ok();
        walker.splay();
        if let Some(root) = walker.node_mut() {
            root.right = other.tree.take();
            root.rebuild();
        }
    }

    /// Concatenates two trees, consuming both, and returns the tree containing
    /// the values of `self` followed by the values of `other`.
    pub fn concatenate(mut self, other: SplayTree<T>) -> SplayTree<T> {
        self.concatenate_right(other);
        self
    }

    /// Moves the values at ranks `i..=j` so that they begin right after the first `k`
    /// values of what remains once they are cut out. `k == 0` moves them to the front.
    ///
    /// Requires `i <= j < self.len()` and `k <= self.len() - (j - i + 1)`. Otherwise
    /// an error is returned and the tree isn't modified.
    ///```
    /// use splay_rope::trees::splay::SplayTree;
    ///
    /// let mut tree: SplayTree<u32> = (0..6).collect();
    /// tree.cut_and_paste(1, 2, 3).unwrap();
    /// assert_eq!(tree.to_vec(), vec![0, 3, 4, 1, 2, 5]);
    ///```
    pub fn cut_and_paste(&mut self, i: usize, j: usize, k: usize) -> Result<(), RopeError> {
        methods::cut_and_paste(self, i, j, k)
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        SplayTree::new()
    }
}

impl<T> Drop for SplayTree<T> {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.tree);
    }
}

impl<T> std::iter::FromIterator<T> for SplayTree<T> {
    /// Builds a tree of logarithmic depth, in `O(n)` time.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SplayTree {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplayTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SplayTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A walker for a [`SplayTree`]. When it is dropped, the node it is at gets splayed to the
/// root. If it is at an empty position, its parent gets splayed instead.
pub struct SplayWalker<'a, T> {
    walker: BasicWalker<'a, T>,
}

impl<'a, T> SplayWalker<'a, T> {
    pub fn new(walker: BasicWalker<'a, T>) -> Self {
        SplayWalker { walker }
    }

    pub fn go_left(&mut self) -> Result<(), ()> {
        self.walker.go_left()
    }

    pub fn go_right(&mut self) -> Result<(), ()> {
        self.walker.go_right()
    }

    /// Goes up without splaying. Fails at the root.
    pub fn go_up(&mut self) -> Result<Side, ()> {
        self.walker.go_up()
    }

    pub fn is_root(&self) -> bool {
        self.walker.is_root()
    }

    pub fn depth(&self) -> usize {
        self.walker.depth()
    }

    pub fn value(&self) -> Option<&T> {
        self.walker.value()
    }

    /// The rank of the current node, see [`BasicWalker::rank`].
    pub fn rank(&self) -> Option<usize> {
        self.walker.rank()
    }

    // about the amortized computational complexity of using splay steps:
    // the amortized cost of any splay step, except the zig step near the root, is at most
    // 3*(log(new_node.size) - log(old_node.size)) - 1
    // the -1 covers the complexity of going down the tree in the first place,
    // and therefore you pay for at most log the size of the node where you stop splaying

    /// If at the root, do nothing.
    /// Otherwise, do a splay step upwards: a zig, zig-zig or zig-zag step,
    /// depending on the current node's parent and grandparent.
    pub fn splay_step(&mut self) {
        let b1 = match self.walker.go_up() {
            Err(()) => return, // already the root
            Ok(b1) => b1,
        };

        let b2 = match self.walker.is_left_son() {
            None => {
                // the parent was the root - zig step
                self.walker.rot_side(!b1);
                return;
            }
            Some(b2) => b2,
        };

        if b1 == b2 {
            // zig-zig case: rotate the grandparent, then the parent
            self.walker.rot_up().ok();
            self.walker.rot_side(!b1);
        } else {
            // zig-zag case: rotate the parent, then the grandparent
            self.walker.rot_side(!b1);
            self.walker.rot_up().ok();
        }
    }

    /// Splays the current node to the root of the tree.
    /// If the walker is at an empty position, splays its parent.
    pub fn splay(&mut self) {
        if self.walker.is_empty() {
            self.walker.go_up().ok();
        }
        while !self.walker.is_root() {
            self.splay_step();
        }
    }
}

impl<'a, T> Drop for SplayWalker<'a, T> {
    fn drop(&mut self) {
        self.splay();
    }
}

impl<'a, T> std::ops::Deref for SplayWalker<'a, T> {
    type Target = BasicWalker<'a, T>;
    fn deref(&self) -> &BasicWalker<'a, T> {
        &self.walker
    }
}

impl<'a, T> std::ops::DerefMut for SplayWalker<'a, T> {
    fn deref_mut(&mut self) -> &mut BasicWalker<'a, T> {
        &mut self.walker
    }
}
