use std::convert::Infallible;
use std::mem::size_of;

use super::{Leaf, NormalNode, Visitor};

/// Octree statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub normal_nodes: usize,
    pub leaves: usize,
    /// Leaves that exist but hold no non-zero voxel
    pub empty_leaves: usize,
    /// Deepest level reached, root = 0
    pub max_depth: usize,
    /// Approximate heap bytes held by the tree
    pub memory_bytes: usize,
}

impl WorldStats {
    pub fn memory_usage_mb(&self) -> f32 {
        self.memory_bytes as f32 / (1024.0 * 1024.0)
    }
}

/// Gathers [`WorldStats`] during an unculled walk
#[derive(Debug, Default)]
pub(crate) struct StatsVisitor {
    pub stats: WorldStats,
    root_shift: u8,
}

impl StatsVisitor {
    pub fn new(root_shift: u8) -> Self {
        Self {
            stats: WorldStats::default(),
            root_shift,
        }
    }

    fn record_depth(&mut self, shift: u8) {
        let depth = (self.root_shift - shift) as usize;
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }
}

impl Visitor for StatsVisitor {
    type Error = Infallible;

    fn visit_normal(&mut self, node: &NormalNode) -> Result<(), Infallible> {
        self.stats.normal_nodes += 1;
        self.stats.memory_bytes += size_of::<super::Node>();
        self.record_depth(node.shift());
        Ok(())
    }

    fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), Infallible> {
        self.stats.leaves += 1;
        if leaf.is_empty() {
            self.stats.empty_leaves += 1;
        }
        self.stats.memory_bytes += size_of::<super::Node>() + leaf.voxels().len();
        self.record_depth(leaf.shift());
        Ok(())
    }
}
