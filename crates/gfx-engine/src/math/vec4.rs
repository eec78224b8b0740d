use super::Vec3;

/// Homogeneous point (clip space).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts a 3D point (w = 1).
    #[inline]
    pub const fn point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    #[inline]
    pub fn dot(self, rhs: Vec4) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Divides by `w`. Callers clip against the near plane first, so `w > 0`.
    #[inline]
    pub fn perspective_divide(self) -> Vec3 {
        Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }
}
