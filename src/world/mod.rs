//! Sparse Octree World Module
//!
//! A power-of-two aligned octree storing one byte per integer coordinate.
//!
//! # Architecture Overview
//!
//! - **Node**: two kinds, [`NormalNode`] (up to 8 lazy children) and [`Leaf`]
//!   (dense cube of raw voxel bytes)
//! - **Factory**: [`NodeFactory`] picks the kind for a given depth
//! - **World**: owns the root and validates coordinates once at the boundary
//! - **Traversal**: [`NodePredicate`] prunes subtrees, [`Visitor`] reacts to
//!   the node kinds it cares about
//!
//! # Addressing
//!
//! Octant bit 0 selects the upper x half, bit 1 the upper y half and bit 2
//! the upper z half. A child of a node at origin `O` with side `2^T` sits at
//! `O + (b0, b1, b2) * 2^(T-1)`.

pub mod error;
pub mod factory;
pub mod leaf;
pub mod node;
pub mod normal_node;
pub mod position;
pub mod sparse_world;
pub mod stats;
pub mod traversal;

pub use error::{WorldError, WorldErrorContext, WorldResult};
pub use factory::{DefaultNodeFactory, NodeFactory};
pub use leaf::Leaf;
pub use node::Node;
pub use normal_node::NormalNode;
pub use position::VoxelPos;
pub use sparse_world::World;
pub use stats::WorldStats;
pub use traversal::{
    walk, AcceptAll, CountingPredicate, LeafVisitor, LoggingPredicate, NodePredicate, Visitor,
};
