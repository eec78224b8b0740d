use super::{Mat3, Vec3};

/// Triangle with an optional world-space face normal.
///
/// The normal is computed once in world space and carried through view
/// transform and clipping so shading does not depend on the camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub normal: Option<Vec3>,
}

impl Triangle {
    #[inline]
    pub const fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { points: [p1, p2, p3], normal: None }
    }

    #[inline]
    pub const fn with_normal(points: [Vec3; 3], normal: Option<Vec3>) -> Self {
        Self { points, normal }
    }

    /// Unit normal by the winding `p1 → p2 → p3`: `(p2 − p1) × (p3 − p1)`.
    pub fn face_normal(&self) -> Vec3 {
        let [p1, p2, p3] = self.points;
        (p2 - p1).cross(p3 - p1).normalized()
    }

    /// Applies `rotation` then `translation` to every vertex. The stored normal
    /// is left untouched.
    pub fn transformed(&self, rotation: Mat3, translation: Vec3) -> Triangle {
        Triangle {
            points: self.points.map(|p| rotation * p + translation),
            normal: self.normal,
        }
    }
}

/// Triangle soup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
