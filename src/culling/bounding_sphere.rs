use cgmath::Point3;

use super::frustum::Frustum;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Point3<f32>,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere circumscribing an axis-aligned cube
    pub fn around_cube(min: Point3<f32>, side: f32) -> Self {
        let half = side * 0.5;
        Self {
            center: Point3::new(min.x + half, min.y + half, min.z + half),
            radius: half * 3.0_f32.sqrt(),
        }
    }

    /// False only when the sphere lies entirely outside at least one plane.
    /// Spheres straddling a corner may be kept even if they miss the volume.
    pub fn intersects(&self, frustum: &Frustum) -> bool {
        frustum
            .planes()
            .iter()
            .all(|plane| plane.signed_distance(self.center) >= -self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Matrix4, SquareMatrix};

    #[test]
    fn test_around_cube() {
        let sphere = BoundingSphere::around_cube(Point3::new(2.0, 2.0, 2.0), 2.0);
        assert_eq!(sphere.center, Point3::new(3.0, 3.0, 3.0));
        assert!((sphere.radius - 3.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_intersects_unit_cube_frustum() {
        let frustum = Frustum::from_matrix(&Matrix4::identity());
        assert!(BoundingSphere::new(Point3::new(0.0, 0.0, 0.0), 0.1).intersects(&frustum));
        // Centre outside, but the radius reaches back in
        assert!(BoundingSphere::new(Point3::new(1.5, 0.0, 0.0), 0.6).intersects(&frustum));
        assert!(!BoundingSphere::new(Point3::new(1.5, 0.0, 0.0), 0.4).intersects(&frustum));
        assert!(!BoundingSphere::new(Point3::new(0.0, -5.0, 0.0), 1.0).intersects(&frustum));
    }

    #[test]
    fn test_distance_uses_normalized_planes() {
        // x' = 4x squeezes the volume to |x| <= 0.25, planes have normal length 4
        let proj = Matrix4::from_nonuniform_scale(4.0, 1.0, 1.0);
        let frustum = Frustum::from_matrix(&proj);
        // centre is 0.25 beyond the right plane; the raw equation would say 1.0
        assert!(!BoundingSphere::new(Point3::new(0.5, 0.0, 0.0), 0.2).intersects(&frustum));
        assert!(BoundingSphere::new(Point3::new(0.5, 0.0, 0.0), 0.3).intersects(&frustum));
    }
}
