use super::*;

/// The auto-generated deallocation code for [`BasicTree`] is recursive.
/// Since splay trees can have arbitrary depth, deallocating a large
/// tree that way could overflow the stack.
///
/// Therefore, this struct deallocates a [`BasicTree`] with an explicit stack of
/// detached nodes. Every node is pushed once, when its parent is freed.
struct IterativeDeallocator<T> {
    stack: Vec<Box<BasicNode<T>>>,
    freed: usize,
}

impl<T> IterativeDeallocator<T> {
    fn step(&mut self) -> Option<()> {
        let mut node = self.stack.pop()?;
        let left = node.left.take();
        let right = node.right.take();
        drop(node);
        self.freed += 1;
        self.push(left);
        self.push(right);
        Some(())
    }

    fn push(&mut self, tree: BasicTree<T>) {
        if let Some(node) = tree.into_node_boxed() {
            self.stack.push(node);
        }
    }
}

/// Replaces the tree with an empty tree, and deallocates the tree iteratively.
/// Returns the number of nodes that were freed.
/// Input is a reference and not an owned value so that this function can get
/// called in `Drop` implementations.
pub fn deallocate_iteratively<T>(tree: &mut BasicTree<T>) -> usize {
    let my_tree = tree.take();
    let mut deallocator = IterativeDeallocator {
        stack: vec![],
        freed: 0,
    };
    deallocator.push(my_tree);
    while deallocator.step().is_some() {}
    deallocator.freed
}

#[test]
fn frees_every_node_of_a_deep_tree() {
    // a left spine, deep enough to overflow the stack if dropped recursively
    let mut tree = BasicTree::Empty;
    for value in 0..200_000u32 {
        let mut node = BasicNode::new(value);
        node.left = tree;
        node.rebuild();
        tree = BasicTree::from_node(node);
    }
    assert_eq!(deallocate_iteratively(&mut tree), 200_000);
    assert!(tree.is_empty());
    assert_eq!(deallocate_iteratively(&mut tree), 0);
}
