use cgmath::{Point3, Vector4};

/// Which side of a plane a point lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halfspace {
    Outside,
    OnPlane,
    Inside,
}

/// Plane `a*x + b*y + c*z + d = 0`, positive side is inside.
///
/// Coefficients are kept exactly as given; they are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    pub fn set(&mut self, a: f32, b: f32, c: f32, d: f32) {
        *self = Self::new(a, b, c, d);
    }

    /// Raw plane equation at `(x, y, z)`
    #[inline]
    pub fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        self.a * x + self.b * y + self.c * z + self.d
    }

    /// Sign of the raw plane equation. Exact for point tests regardless of
    /// normalization.
    pub fn classify(&self, x: f32, y: f32, z: f32) -> Halfspace {
        let value = self.evaluate(x, y, z);
        if value < 0.0 {
            Halfspace::Outside
        } else if value > 0.0 {
            Halfspace::Inside
        } else {
            Halfspace::OnPlane
        }
    }

    pub fn classify_point(&self, point: Point3<f32>) -> Halfspace {
        self.classify(point.x, point.y, point.z)
    }

    pub fn normal_length(&self) -> f32 {
        (self.a * self.a + self.b * self.b + self.c * self.c).sqrt()
    }

    /// Euclidean signed distance from the plane. Divides out the normal
    /// length so radii can be compared against it; a degenerate plane
    /// falls back to the raw equation.
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        let value = self.evaluate(point.x, point.y, point.z);
        let length = self.normal_length();
        if length > 0.0 {
            value / length
        } else {
            value
        }
    }
}

impl From<Vector4<f32>> for Plane {
    fn from(v: Vector4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Plane> for [f32; 4] {
    fn from(p: Plane) -> Self {
        [p.a, p.b, p.c, p.d]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_against_x_half_plane() {
        let mut plane = Plane::default();
        plane.set(1.0, 0.0, 0.0, -0.5);
        assert_eq!(plane.classify(1.0, 0.5, 0.5), Halfspace::Inside);
        assert_eq!(plane.classify(0.5, 0.5, 0.5), Halfspace::OnPlane);
        assert_eq!(plane.classify(0.3, 0.5, 0.5), Halfspace::Outside);
    }

    #[test]
    fn test_signed_distance_ignores_scale() {
        let unit = Plane::new(0.0, 1.0, 0.0, -2.0);
        let scaled = Plane::new(0.0, 4.0, 0.0, -8.0);
        let point = Point3::new(3.0, 5.0, -1.0);
        assert!((unit.signed_distance(point) - 3.0).abs() < 1e-6);
        assert!((scaled.signed_distance(point) - 3.0).abs() < 1e-6);
        // raw classification agrees for both
        assert_eq!(unit.classify_point(point), scaled.classify_point(point));
    }
}
