//! View frustum culling for world traversal
//!
//! [`Frustum`] extracts six planes from a projection or view-projection
//! matrix. [`FrustumClippingPredicate`] plugs into [`crate::world::World::visit`]
//! and skips every subtree whose bounding sphere is fully outside one plane.
//!
//! Plane coefficients are stored unnormalized; point classification uses
//! them directly, sphere tests divide by the normal length.

pub mod bounding_sphere;
pub mod clipping_predicate;
pub mod frustum;
pub mod plane;

pub use bounding_sphere::BoundingSphere;
pub use clipping_predicate::FrustumClippingPredicate;
pub use frustum::{Frustum, FrustumUniform, BOTTOM, FAR, LEFT, NEAR, RIGHT, TOP};
pub use plane::{Halfspace, Plane};
