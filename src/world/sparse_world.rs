//! Sparse world - one byte per voxel over a `2^global_shift` cube.
//!
//! Nothing is allocated until a write touches a region. The root and every
//! node on a written path come from the world's [`NodeFactory`]; reads never
//! allocate. The tree only grows.

use super::error::{WorldError, WorldResult};
use super::stats::{StatsVisitor, WorldStats};
use super::traversal::{walk, AcceptAll, LeafVisitor, NodePredicate, Visitor};
use super::{DefaultNodeFactory, Leaf, Node, NodeFactory, VoxelPos};
use crate::config::WorldConfig;
use crate::constants::limits::{MAX_GLOBAL_SHIFT, MAX_LEAF_SHIFT, MIN_LEAF_SHIFT, RANGE_SHIFT};
use crate::error::EngineResult;

pub struct World<F: NodeFactory = DefaultNodeFactory> {
    factory: F,
    global_shift: u8,
    root: Option<Box<Node>>,
}

impl World<DefaultNodeFactory> {
    /// Build an empty world with the default factory from a validated config
    pub fn from_config(config: &WorldConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(World::new(
            DefaultNodeFactory::new(config.leaf_shift),
            config.global_shift,
        )?)
    }
}

impl<F: NodeFactory> World<F> {
    /// Create an empty world. The root is created on the first write.
    pub fn new(factory: F, global_shift: u8) -> WorldResult<Self> {
        let leaf_shift = factory.leaf_shift();
        let invalid = |reason: &str| WorldError::InvalidShift {
            global_shift,
            leaf_shift,
            reason: reason.to_string(),
        };

        if !(MIN_LEAF_SHIFT..=MAX_LEAF_SHIFT).contains(&leaf_shift) {
            return Err(invalid("leaf shift outside supported range"));
        }
        if global_shift < leaf_shift {
            return Err(invalid("global shift smaller than leaf shift"));
        }
        if global_shift > MAX_GLOBAL_SHIFT {
            return Err(invalid("global shift exceeds coordinate range"));
        }

        log::debug!(
            "[World::new] global_shift={}, leaf_shift={}",
            global_shift,
            leaf_shift
        );

        Ok(Self {
            factory,
            global_shift,
            root: None,
        })
    }

    pub fn global_shift(&self) -> u8 {
        self.global_shift
    }

    pub fn leaf_shift(&self) -> u8 {
        self.factory.leaf_shift()
    }

    /// Side length of the whole world cube
    pub fn side(&self) -> i64 {
        1i64 << self.global_shift
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// True until the first write
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, pos: VoxelPos) -> bool {
        pos.is_within_shift(self.global_shift)
    }

    /// Voxel at `pos`; 0 outside the world or in an unwritten region
    pub fn get(&self, pos: VoxelPos) -> u8 {
        if !self.contains(pos) {
            return 0;
        }
        match &self.root {
            Some(root) => root.get(pos),
            None => 0,
        }
    }

    /// Store `value` at `pos`, creating the root and any missing path nodes
    pub fn put(&mut self, pos: VoxelPos, value: u8) -> WorldResult<()> {
        if !self.contains(pos) {
            return Err(WorldError::OutOfBounds {
                pos,
                side: self.side(),
            });
        }

        let factory = &self.factory;
        let global_shift = self.global_shift;
        let root = self.root.get_or_insert_with(|| {
            log::debug!("[World::put] creating root (shift {})", global_shift);
            Box::new(factory.create(VoxelPos::ORIGIN, RANGE_SHIFT, global_shift))
        });
        root.put(pos, value, factory);
        Ok(())
    }

    /// Leaf owning `pos`.
    ///
    /// Without `create_if_missing` this never mutates the tree and returns
    /// `None` as soon as a node on the path is absent. With it, every missing
    /// node down to the leaf is created. Coordinates outside the world always
    /// give `None`.
    pub fn leaf_for_indices(&mut self, pos: VoxelPos, create_if_missing: bool) -> Option<&mut Leaf> {
        if !self.contains(pos) {
            return None;
        }
        if !create_if_missing {
            return self.root.as_deref_mut()?.find_leaf_mut(pos);
        }

        let factory = &self.factory;
        let global_shift = self.global_shift;
        let root = self.root.get_or_insert_with(|| {
            Box::new(factory.create(VoxelPos::ORIGIN, RANGE_SHIFT, global_shift))
        });
        Some(root.leaf_or_create(pos, factory))
    }

    /// Read-only, non-creating leaf lookup
    pub fn leaf_at(&self, pos: VoxelPos) -> Option<&Leaf> {
        if !self.contains(pos) {
            return None;
        }
        self.root.as_deref()?.find_leaf(pos)
    }

    /// Pre-order traversal from the root, pruned by `predicate`
    pub fn visit<P, V>(&self, predicate: &mut P, visitor: &mut V) -> Result<(), V::Error>
    where
        P: NodePredicate + ?Sized,
        V: Visitor + ?Sized,
    {
        match &self.root {
            Some(root) => walk(root, predicate, visitor),
            None => Ok(()),
        }
    }

    /// Call `f` for every leaf the predicate lets through
    pub fn visit_leaves<P, C>(&self, predicate: &mut P, f: C)
    where
        P: NodePredicate + ?Sized,
        C: FnMut(&Leaf),
    {
        if let Err(never) = self.visit(predicate, &mut LeafVisitor(f)) {
            match never {}
        }
    }

    pub fn stats(&self) -> WorldStats {
        let mut visitor = StatsVisitor::new(self.global_shift);
        if let Err(never) = self.visit(&mut AcceptAll, &mut visitor) {
            match never {}
        }
        visitor.stats
    }
}

impl<F: NodeFactory + std::fmt::Debug> std::fmt::Debug for World<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("factory", &self.factory)
            .field("global_shift", &self.global_shift)
            .field("empty", &self.is_empty())
            .finish()
    }
}
