//! Scene state: one camera, one directional light, a handful of meshes.

mod camera;
mod object;
mod update;

use crate::math::{Mesh, Vec3};

pub use camera::Camera;
pub use object::SceneObject;
pub use update::update_scene;

/// Everything drawn in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Camera,

    /// Euler rotation (degrees) of the direction the light travels, applied
    /// to +Z.
    pub light_rotation: Vec3,

    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Default stage: camera at `(0, 0, -1)` looking down +Z, light pitched
    /// by -30°, `mesh` placed at `(0, 0, -1)`.
    pub fn new(mesh: Mesh) -> Self {
        Self {
            camera: Camera::default(),
            light_rotation: Vec3::new(-30.0, 0.0, 0.0),
            objects: vec![SceneObject::new(mesh, Vec3::new(0.0, 0.0, -1.0))],
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.len()).sum()
    }
}
