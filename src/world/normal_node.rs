//! Interior octree node with up to eight lazily created children.

use super::{Node, NodeFactory, VoxelPos};
use crate::constants::limits::{OCTANT_COUNT, RANGE_SHIFT};

pub struct NormalNode {
    origin: VoxelPos,
    shift: u8,
    /// Absent slot means the whole octant is empty
    children: [Option<Box<Node>>; OCTANT_COUNT],
}

impl NormalNode {
    pub fn new(origin: VoxelPos, shift: u8) -> Self {
        debug_assert!(shift >= 1, "interior node needs at least one level below it");
        Self {
            origin,
            shift,
            children: Default::default(),
        }
    }

    pub fn origin(&self) -> VoxelPos {
        self.origin
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub fn side(&self) -> i32 {
        1 << self.shift
    }

    #[inline]
    fn half(&self) -> i32 {
        1 << (self.shift - 1)
    }

    /// Octant that contains `pos`. `pos` must lie inside this node.
    #[inline]
    pub fn octant_of(&self, pos: VoxelPos) -> usize {
        pos.octant_in(self.origin, self.half())
    }

    /// Origin of the child that would occupy `octant`
    pub fn child_origin(&self, octant: usize) -> VoxelPos {
        self.origin.octant_origin(octant, self.half())
    }

    pub fn child(&self, octant: usize) -> Option<&Node> {
        self.children[octant].as_deref()
    }

    pub fn child_mut(&mut self, octant: usize) -> Option<&mut Node> {
        self.children[octant].as_deref_mut()
    }

    /// Populated children with their octant index, in octant order
    pub fn children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(octant, child)| child.as_deref().map(|node| (octant, node)))
    }

    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Read without side effects; an absent child reads as empty
    pub fn get(&self, pos: VoxelPos) -> u8 {
        match self.child(self.octant_of(pos)) {
            Some(child) => child.get(pos),
            None => 0,
        }
    }

    pub fn put<F: NodeFactory + ?Sized>(&mut self, pos: VoxelPos, value: u8, factory: &F) {
        self.child_or_create(pos, factory).put(pos, value, factory);
    }

    /// Child covering `pos`, created through `factory` if the slot is empty
    pub fn child_or_create<F: NodeFactory + ?Sized>(
        &mut self,
        pos: VoxelPos,
        factory: &F,
    ) -> &mut Node {
        let octant = self.octant_of(pos);
        let child_origin = self.child_origin(octant);
        let child_shift = self.shift - RANGE_SHIFT;
        self.children[octant].get_or_insert_with(|| {
            log::trace!(
                "[NormalNode::child_or_create] octant {} at {} (shift {})",
                octant,
                child_origin,
                child_shift
            );
            Box::new(factory.create(child_origin, RANGE_SHIFT, child_shift))
        })
    }
}

impl std::fmt::Debug for NormalNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalNode")
            .field("origin", &self.origin)
            .field("shift", &self.shift)
            .field("children", &self.child_count())
            .finish()
    }
}
