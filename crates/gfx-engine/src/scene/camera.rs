use crate::math::{Mat3, Mat4, Vec3};

/// Perspective fly camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Full vertical opening angle in degrees.
    pub vertical_fov: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            vertical_fov: 60.0,
            z_near: 0.1,
            z_far: 5.0,
            position: Vec3::new(0.0, 0.0, -1.0),
            rotation: Vec3::zero(),
        }
    }
}

impl Camera {
    /// Camera orientation (view space → world space).
    #[inline]
    pub fn orientation(&self) -> Mat3 {
        Mat3::rotation(self.rotation)
    }

    /// World-space point to view space.
    #[inline]
    pub fn to_view(&self, world_to_view: Mat3, p: Vec3) -> Vec3 {
        world_to_view * (p - self.position)
    }

    /// Half of the horizontal opening angle, in degrees.
    pub fn half_horizontal_fov(&self, aspect: f32) -> f32 {
        ((self.vertical_fov / 2.0).to_radians().tan() * aspect).atan().to_degrees()
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.vertical_fov, aspect, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_fov_widens_with_aspect() {
        let cam = Camera::default();
        assert!((cam.half_horizontal_fov(1.0) - 30.0).abs() < 1e-4);
        assert!(cam.half_horizontal_fov(16.0 / 9.0) > 30.0);
    }

    #[test]
    fn view_space_is_relative_to_camera() {
        let cam = Camera::default();
        let v = cam.to_view(cam.orientation().transpose(), Vec3::new(0.0, 0.0, 1.0));
        assert!((v - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
    }
}
