use super::{Leaf, Node, NormalNode, VoxelPos};
use crate::constants::limits::RANGE_SHIFT;

/// Produces the node variant that covers a region at a given depth.
///
/// Supplied by the owner of the world; the tree calls it whenever a write
/// reaches an absent child slot.
pub trait NodeFactory {
    /// Shift of the dense leaves this factory produces
    fn leaf_shift(&self) -> u8;

    /// Create the node anchored at `origin` covering a cube of side
    /// `2^remaining_shift`. `range_shift` is the per-axis subdivision of the
    /// parent, always 1 for a binary octree.
    fn create(&self, origin: VoxelPos, range_shift: u8, remaining_shift: u8) -> Node;
}

/// Standard factory: dense leaf at `leaf_shift`, interior node above it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultNodeFactory {
    leaf_shift: u8,
}

impl DefaultNodeFactory {
    pub fn new(leaf_shift: u8) -> Self {
        Self { leaf_shift }
    }
}

impl NodeFactory for DefaultNodeFactory {
    fn leaf_shift(&self) -> u8 {
        self.leaf_shift
    }

    fn create(&self, origin: VoxelPos, range_shift: u8, remaining_shift: u8) -> Node {
        debug_assert_eq!(range_shift, RANGE_SHIFT);
        debug_assert!(remaining_shift >= self.leaf_shift);
        if remaining_shift == self.leaf_shift {
            Node::Leaf(Leaf::new(origin, remaining_shift))
        } else {
            Node::Normal(NormalNode::new(origin, remaining_shift))
        }
    }
}
