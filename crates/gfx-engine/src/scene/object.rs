use crate::math::{Mat3, Mesh, Vec3};

/// Mesh placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
}

impl SceneObject {
    pub fn new(mesh: Mesh, position: Vec3) -> Self {
        Self { mesh, position, rotation: Vec3::zero() }
    }

    #[inline]
    pub fn model_rotation(&self) -> Mat3 {
        Mat3::rotation(self.rotation)
    }
}
