use core::ops::Mul;

use super::Vec3;

/// Row-major 3×3 matrix, applied to column vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub rows: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn rotation_x(deg: f32) -> Mat3 {
        let (s, c) = deg.to_radians().sin_cos();
        Mat3 { rows: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]] }
    }

    pub fn rotation_y(deg: f32) -> Mat3 {
        let (s, c) = deg.to_radians().sin_cos();
        Mat3 { rows: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]] }
    }

    pub fn rotation_z(deg: f32) -> Mat3 {
        let (s, c) = deg.to_radians().sin_cos();
        Mat3 { rows: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]] }
    }

    /// Euler rotation `Rz · Ry · Rx`: X is applied first.
    pub fn rotation(euler_deg: Vec3) -> Mat3 {
        Mat3::rotation_z(euler_deg.z) * Mat3::rotation_y(euler_deg.y) * Mat3::rotation_x(euler_deg.x)
    }

    /// Inverse for pure rotations.
    pub fn transpose(self) -> Mat3 {
        let r = self.rows;
        Mat3 {
            rows: [
                [r[0][0], r[1][0], r[2][0]],
                [r[0][1], r[1][1], r[2][1]],
                [r[0][2], r[1][2], r[2][2]],
            ],
        }
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Mat3 { rows }
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }
}
