// This is a private module, so no documentation for it directly.
// instead look for documentation of the `BasicWalker` struct.

use super::*;
use crate::trees::Side;
use recursive_reference::*;

const NO_VALUE_ERROR: &str = "invariant violated: RecRef can't be empty";

// Invariant: only nodes on the path from the root to the current node (exclusive)
// may have incorrect sizes. They are rebuilt when the walker goes back up.

/// This struct implements a walker for the [`BasicTree`] type.
/// It is struct that has a mutable reference of the tree, and allows you to walk up and down on it.
/// The walker may also be in a position which is the son of a node, but doesn't contain
/// a node by itself, and then it is said to be in an empty position.
///
/// Nodes don't store their parents. Instead, the walker remembers the path it took from
/// the root, which is all that is needed in order to go back up. The path only
/// borrows the subtrees, it never owns them.
///
/// The walker will automatically go back up the tree to the root when dropped,
/// in order to rebuild all the nodes.
///
/// Internally, [`recursive_reference::RecRef`] is used, in order to be able to dynamically
/// go up and down the tree without upsetting the borrow checker.
pub struct BasicWalker<'a, T> {
    /// The telescope, holding references to all the subtrees from the root to the
    /// current position.
    rec_ref: RecRef<'a, BasicTree<T>>,

    /// For every subtree from the root to the current position, the number of
    /// nodes of the whole tree that are to the left of that subtree.
    offsets: Vec<usize>,

    /// This array holds for every node, whether the next subtree in the walker
    /// is its left son or the right son.
    /// This array is always one shorter than [`BasicWalker::rec_ref`] and [`BasicWalker::offsets`],
    /// because the last node has no son in the walker.
    is_left: Vec<Side>,
}

impl<'a, T> BasicWalker<'a, T> {
    pub fn new(tree: &'a mut BasicTree<T>) -> BasicWalker<'a, T> {
        BasicWalker {
            rec_ref: RecRef::new(tree),
            offsets: vec![0],
            is_left: vec![],
        }
    }

    /// Returns true if at an empty position.
    pub fn is_empty(&self) -> bool {
        self.rec_ref.is_empty()
    }

    /// Returns true if at the root of the tree.
    /// Note: even if you are the root, the root might still be empty.
    pub fn is_root(&self) -> bool {
        self.is_left.is_empty()
    }

    /// If the current position is the left son of a node, returns [`Some(Left)`].
    /// If the current position is the right son of a node, returns [`Some(Right)`].
    /// If at the root, returns [`None`].
    pub fn is_left_son(&self) -> Option<Side> {
        self.is_left.last().cloned()
    }

    /// The number of steps from the root to the current position.
    pub fn depth(&self) -> usize {
        self.is_left.len()
    }

    pub fn inner(&self) -> &BasicTree<T> {
        &*self.rec_ref
    }

    pub fn node(&self) -> Option<&BasicNode<T>> {
        self.rec_ref.node()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut BasicNode<T>> {
        self.rec_ref.node_mut()
    }

    /// Returns the value at the current position, if it isn't empty.
    pub fn value(&self) -> Option<&T> {
        self.node().map(BasicNode::value)
    }

    /// The number of nodes in the whole tree that are to the left of the current subtree.
    pub fn far_left_size(&self) -> usize {
        *self.offsets.last().expect(NO_VALUE_ERROR)
    }

    /// The rank of the current node in the whole tree, computed from the path.
    /// Returns [`None`] at an empty position.
    pub fn rank(&self) -> Option<usize> {
        let node = self.node()?;
        Some(self.far_left_size() + node.left.size())
    }

    /// Goes to the left son of the current node.
    /// Fails if at an empty position.
    pub fn go_left(&mut self) -> Result<(), ()> {
        let offset = self.far_left_size();
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| match tree.node_mut() {
            Some(node) => Ok(&mut node.left),
            None => Err(()),
        });
        if res.is_ok() {
            self.is_left.push(Side::Left); // went left
            self.offsets.push(offset);
        }
        res
    }

    /// Goes to the right son of the current node.
    /// Fails if at an empty position.
    pub fn go_right(&mut self) -> Result<(), ()> {
        let mut offset = self.far_left_size();
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| match tree.node_mut() {
            Some(node) => {
                offset += node.left.size() + 1;
                Ok(&mut node.right)
            }
            None => Err(()),
        });
        if res.is_ok() {
            self.is_left.push(Side::Right); // went right
            self.offsets.push(offset);
        }
        res
    }

    /// Goes up to the parent, rebuilding it on the way.
    /// Returns the side of the parent that the walker came from.
    /// Fails if at the root.
    pub fn go_up(&mut self) -> Result<Side, ()> {
        match self.is_left.pop() {
            None => Err(()),
            Some(side) => {
                RecRef::pop(&mut self.rec_ref).expect(NO_VALUE_ERROR);
                self.offsets.pop().expect(NO_VALUE_ERROR);
                self.rec_ref.rebuild();
                Ok(side)
            }
        }
    }

    pub fn go_to_root(&mut self) {
        while self.go_up().is_ok() {}
    }

    /// Performs a left rotation at the current node: its right son takes its place,
    /// and the current node becomes that son's left son.
    /// Only the sizes of these two nodes are recomputed; the in-order sequence is unchanged.
    /// Returns [`None`] and does nothing if this is an empty position or if it has no right son.
    pub fn rot_left(&mut self) -> Option<()> {
        let mut bn1: Box<BasicNode<T>> = self.rec_ref.take().into_node_boxed()?;
        let mut bn2: Box<BasicNode<T>> = match bn1.right.take().into_node_boxed() {
            Some(node) => node,
            None => {
                *self.rec_ref = Root(bn1); // restore the node back
                return None;
            }
        };

        bn1.right = bn2.left.take();
        bn2.size = bn1.size; // this is instead of bn2.rebuild(), since we already know the result
        bn1.rebuild();
        bn2.left = Root(bn1);

        *self.rec_ref = Root(bn2);
        Some(())
    }

    /// Performs a right rotation at the current node: its left son takes its place,
    /// and the current node becomes that son's right son.
    /// Only the sizes of these two nodes are recomputed; the in-order sequence is unchanged.
    /// Returns [`None`] and does nothing if this is an empty position or if it has no left son.
    pub fn rot_right(&mut self) -> Option<()> {
        let mut bn1: Box<BasicNode<T>> = self.rec_ref.take().into_node_boxed()?;
        let mut bn2: Box<BasicNode<T>> = match bn1.left.take().into_node_boxed() {
            Some(node) => node,
            None => {
                *self.rec_ref = Root(bn1); // restore the node back
                return None;
            }
        };

        bn1.left = bn2.right.take();
        bn2.size = bn1.size; // this is instead of bn2.rebuild(), since we already know the result
        bn1.rebuild();
        bn2.right = Root(bn1);

        *self.rec_ref = Root(bn2);
        Some(())
    }

    /// Performs rot_left if `side` is [`Side::Left`]
    /// rot_right otherwise
    pub fn rot_side(&mut self, side: Side) -> Option<()> {
        match side {
            Side::Left => self.rot_left(),
            Side::Right => self.rot_right(),
        }
    }

    /// Rotates so that the current node moves up.
    /// Basically moves up and then calls rot_side.
    /// Afterwards the walker is at the same node, one level higher.
    /// Fails if the current node is the root, or if the current position is empty.
    pub fn rot_up(&mut self) -> Result<Side, ()> {
        if self.is_empty() {
            return Err(());
        }
        let side = self.go_up()?;
        match self.rot_side(side.flip()) {
            Some(()) => Ok(side),
            // we just came up from this son, so it exists
            None => Err(()),
        }
    }
}

/// This implementation exists in order to rebuild the nodes
/// when the walker gets dropped
impl<'a, T> Drop for BasicWalker<'a, T> {
    fn drop(&mut self) {
        self.go_to_root();
    }
}
