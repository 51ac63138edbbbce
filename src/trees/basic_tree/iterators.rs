use super::*;

/// In-order iterator over the values of a [`BasicTree`].
///
/// The traversal keeps an explicit stack of the nodes whose left subtree is being
/// visited, instead of recursing, so that skewed trees of any depth can be iterated.
pub struct Iter<'a, T> {
    stack: Vec<&'a BasicNode<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(tree: &'a BasicTree<T>) -> Self {
        let mut res = Iter {
            stack: vec![],
            remaining: tree.size(),
        };
        res.push_left_spine(tree);
        res
    }

    // pushes the node, its left son, its left son's left son, and so on.
    fn push_left_spine(&mut self, mut tree: &'a BasicTree<T>) {
        while let Some(node) = tree.node() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a BasicTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[test]
fn iterates_a_right_spine() {
    let mut tree = BasicTree::Empty;
    for value in (0..100_000u32).rev() {
        let mut node = BasicNode::new(value);
        node.right = tree;
        node.rebuild();
        tree = BasicTree::from_node(node);
    }
    let iter = tree.iter();
    assert_eq!(iter.len(), 100_000);
    assert!(iter.cloned().eq(0..100_000));
    deallocate_iteratively(&mut tree);
}
