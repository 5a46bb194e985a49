use bytemuck::{Pod, Zeroable};
use cgmath::{Matrix4, Point3, Vector4};

use super::plane::{Halfspace, Plane};

pub const LEFT: usize = 0;
pub const RIGHT: usize = 1;
pub const TOP: usize = 2;
pub const BOTTOM: usize = 3;
pub const NEAR: usize = 4;
pub const FAR: usize = 5;

/// Six clip planes derived from a projection (or view-projection) matrix
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frustum {
    planes: [Plane; 6],
}

/// Frustum planes laid out for a GPU uniform buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrustumUniform {
    pub planes: [[f32; 4]; 6], // left, right, top, bottom, near, far
}

impl Frustum {
    pub fn from_matrix(m: &Matrix4<f32>) -> Self {
        let mut frustum = Self::default();
        frustum.update(m);
        frustum
    }

    /// Re-derive the planes using the Gribb-Hartmann method: each plane is
    /// row 4 plus or minus row 1..3. The result is not normalized.
    pub fn update(&mut self, m: &Matrix4<f32>) {
        // cgmath is column-major, so row r is (m.x[r], m.y[r], m.z[r], m.w[r])
        let row = |r: usize| Vector4::new(m.x[r], m.y[r], m.z[r], m.w[r]);
        let (r1, r2, r3, r4) = (row(0), row(1), row(2), row(3));

        self.planes[LEFT] = Plane::from(r4 + r1);
        self.planes[RIGHT] = Plane::from(r4 - r1);
        self.planes[TOP] = Plane::from(r4 - r2);
        self.planes[BOTTOM] = Plane::from(r4 + r2);
        self.planes[NEAR] = Plane::from(r4 + r3);
        self.planes[FAR] = Plane::from(r4 - r3);
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn plane(&self, side: usize) -> &Plane {
        &self.planes[side]
    }

    /// True if no plane puts the point outside
    pub fn is_inside(&self, point: Point3<f32>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.classify_point(point) != Halfspace::Outside)
    }

    pub fn to_uniform(&self) -> FrustumUniform {
        FrustumUniform {
            planes: self.planes.map(<[f32; 4]>::from),
        }
    }
}
