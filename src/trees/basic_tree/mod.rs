//! The basic tree module
//! This module implements basic unbalanced trees, ordered by position.
//!
//! Nodes carry no keys: the order of the values is the in-order order of the tree,
//! and the position (rank) of a value is never stored. Instead, every node caches
//! the size of its subtree, which is enough to locate the value at any rank.

// these should not be public as they are merely separate files
// for some of the functions of this module
mod iterative_deallocator;
mod iterators;
mod walker;

pub use iterative_deallocator::*;
pub use iterators::*;
pub use walker::*;

/// A basic tree. might be empty.
pub enum BasicTree<T> {
    Empty,
    Root(Box<BasicNode<T>>),
}
use BasicTree::*;

impl<T> BasicTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Empty
    }

    /// Constructs a new non-empty tree from a node.
    pub fn from_node(node: BasicNode<T>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Empty => 0,
            Root(node) => node.size,
        }
    }

    pub fn node(&self) -> Option<&BasicNode<T>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut BasicNode<T>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub(crate) fn into_node_boxed(self) -> Option<Box<BasicNode<T>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Takes the tree out, leaving an empty tree in its place.
    pub(crate) fn take(&mut self) -> BasicTree<T> {
        std::mem::replace(self, Empty)
    }

    /// Recomputes the size of the root from its children.
    pub fn rebuild(&mut self) {
        if let Root(node) = self {
            node.rebuild();
        }
    }

    /// Iterates over the values of the tree, in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a walker positioned at the root.
    pub fn walker(&mut self) -> BasicWalker<'_, T> {
        BasicWalker::new(self)
    }

    /// Checks that every node's size is one more than the sizes of its children.
    /// If it is not, panics.
    /// The check walks the tree with an explicit stack, so it works for trees of any depth.
    pub fn assert_correctness(&self) {
        let mut stack: Vec<&BasicNode<T>> = self.node().into_iter().collect();
        let mut visited = 0;
        while let Some(node) = stack.pop() {
            node.assert_correctness_locally();
            visited += 1;
            stack.extend(node.left.node());
            stack.extend(node.right.node());
        }
        assert_eq!(visited, self.size(), "the root's size doesn't match the node count");
    }
}

impl<T> Default for BasicTree<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> std::iter::FromIterator<T> for BasicTree<T> {
    /// Builds a [`BasicTree`] of logarithmic depth from an iterator of values,
    /// without knowing the number of values in advance.
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> Self {
        // The stack holds nodes, each of which has no right son, and a left son which is
        // a perfect binary tree. The trees correspond to the binary digits of `count`:
        // the i'th digit of `count` is `1` iff there is a node in the stack whose
        // left son has size `2^i - 1`.
        let mut stack: Vec<BasicNode<T>> = vec![];
        for (count, value) in into_iter.into_iter().enumerate() {
            let mut tree = Empty;
            let mut digits = count;
            while digits & 1 == 1 {
                let mut prev_node = match stack.pop() {
                    Some(node) => node,
                    None => break,
                };
                prev_node.right = tree;
                prev_node.rebuild();
                tree = BasicTree::from_node(prev_node);
                digits >>= 1;
            }
            let mut node = BasicNode::new(value);
            node.left = tree;
            node.rebuild();
            stack.push(node);
        }

        let mut tree = Empty;
        for mut prev_node in stack.into_iter().rev() {
            prev_node.right = tree;
            prev_node.rebuild();
            tree = BasicTree::from_node(prev_node);
        }
        tree
    }
}

/// A basic node. can be viewed as a non-empty basic tree: it always has at least one value.
pub struct BasicNode<T> {
    value: T,
    size: usize,
    pub(crate) left: BasicTree<T>,
    pub(crate) right: BasicTree<T>,
}

impl<T> BasicNode<T> {
    /// Creates a node with no children.
    pub fn new(value: T) -> BasicNode<T> {
        BasicNode {
            value,
            size: 1,
            left: Empty,
            right: Empty,
        }
    }

    /// Returns the value stored in this node specifically.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The number of nodes in this node's subtree, including itself.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn left(&self) -> &BasicTree<T> {
        &self.left
    }

    pub fn right(&self) -> &BasicTree<T> {
        &self.right
    }

    /// Remakes the size that is stored in this node, based on its sons.
    /// This is necessary whenever the sons might have changed.
    pub fn rebuild(&mut self) {
        self.size = 1 + self.left.size() + self.right.size();
    }

    /// Asserts that the size was calculated correctly at the current node.
    /// Otherwise, panics.
    pub fn assert_correctness_locally(&self) {
        assert_eq!(
            self.size,
            1 + self.left.size() + self.right.size(),
            "size invariant violated"
        );
    }
}
