use core::ops::Mul;

use super::{Vec3, Vec4};

/// Row-major 4×4 matrix, applied to column vectors.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    /// Perspective projection onto NDC depth [0, 1].
    ///
    /// `vertical_fov_deg` is the full vertical opening angle; `aspect` is
    /// width / height. The fourth row copies view-space Z into W.
    pub fn perspective(vertical_fov_deg: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
        let tan_half = (vertical_fov_deg.to_radians() / 2.0).tan();
        let depth = z_far - z_near;

        let mut m = Mat4::default();
        m.rows[0][0] = 1.0 / (tan_half * aspect);
        m.rows[1][1] = 1.0 / tan_half;
        m.rows[2][2] = z_far / depth;
        m.rows[2][3] = -z_far * z_near / depth;
        m.rows[3][2] = 1.0;
        m
    }

    /// Projects a view-space point to NDC.
    #[inline]
    pub fn project(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::point(p)).perspective_divide()
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        let row = |i: usize| Vec4::new(self.rows[i][0], self.rows[i][1], self.rows[i][2], self.rows[i][3]).dot(v);
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}
