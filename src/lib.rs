// Hearth World - sparse voxel octree storage
//
// - world: the octree, its node factory and the pruned traversal protocol
// - culling: view frustum planes and the clipping predicate used by renderers
// - persistence: the little-endian world file and the storage it lives in
//
// Coordinates are validated once at the World boundary; everything below
// assumes in-range input.

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Systems
pub mod culling;
pub mod persistence;
pub mod world;

pub use config::{TrailingChunkPolicy, WorldConfig};
pub use error::{EngineError, EngineResult, ErrorContext};

// === Core World Types ===
pub use world::{
    AcceptAll, CountingPredicate, DefaultNodeFactory, Leaf, LoggingPredicate, Node, NodeFactory,
    NodePredicate, NormalNode, Visitor, VoxelPos, World, WorldError, WorldResult, WorldStats,
};

// === Culling ===
pub use culling::{BoundingSphere, Frustum, FrustumClippingPredicate, FrustumUniform, Halfspace, Plane};

// === Persistence ===
pub use persistence::{
    DirectoryStorage, MemoryStorage, PersistenceError, PersistenceResult, SaveSummary,
    WorldFileHeader, WorldStorage,
};
