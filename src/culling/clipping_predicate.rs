use cgmath::{Matrix4, Point3};

use super::bounding_sphere::BoundingSphere;
use super::frustum::Frustum;
use crate::world::{Node, NodePredicate};

/// Prunes subtrees whose bounding sphere lies outside the view frustum.
///
/// Node coordinates are multiplied by `scale` to bring them into the space
/// the frustum was built in.
#[derive(Debug, Clone)]
pub struct FrustumClippingPredicate {
    frustum: Frustum,
    scale: f32,
}

impl FrustumClippingPredicate {
    pub fn new(frustum: Frustum, scale: f32) -> Self {
        Self { frustum, scale }
    }

    pub fn from_matrix(view_proj: &Matrix4<f32>, scale: f32) -> Self {
        Self::new(Frustum::from_matrix(view_proj), scale)
    }

    /// Refresh the planes, typically once per frame
    pub fn update(&mut self, view_proj: &Matrix4<f32>) {
        self.frustum.update(view_proj);
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn bounding_sphere(&self, node: &Node) -> BoundingSphere {
        let origin = node.origin();
        let min = Point3::new(
            origin.x as f32 * self.scale,
            origin.y as f32 * self.scale,
            origin.z as f32 * self.scale,
        );
        BoundingSphere::around_cube(min, node.side() as f32 * self.scale)
    }
}

impl NodePredicate for FrustumClippingPredicate {
    fn test(&mut self, node: &Node) -> bool {
        self.bounding_sphere(node).intersects(&self.frustum)
    }
}
