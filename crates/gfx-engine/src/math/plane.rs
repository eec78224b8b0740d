use super::{Vec3, EPSILON};

/// Oriented plane `normal · p + d = 0`. The half-space the normal points into
/// is "inside".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalized();
        Self { normal, d: -normal.dot(point) }
    }

    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }

    #[inline]
    pub fn is_inside(&self, p: Vec3) -> bool {
        self.signed_distance(p) >= 0.0
    }

    /// Point where segment `a → b` crosses the plane.
    ///
    /// Callers pass one endpoint on each side; a segment parallel to the plane
    /// returns `a`.
    pub fn intersect_segment(&self, a: Vec3, b: Vec3) -> Vec3 {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);
        let denom = db - da;
        if denom.abs() <= EPSILON {
            return a;
        }
        let t = -da / denom;
        a + (b - a) * t
    }
}
