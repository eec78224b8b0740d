//! Geometry types for the software rasterizer.
//!
//! Conventions:
//! - left-handed view space: +X right, +Y up, +Z forward (into the screen)
//! - angles are Euler degrees, applied X first, then Y, then Z
//! - NDC after projection: x, y in [-1, 1], depth in [0, 1] (near to far)

mod mat3;
mod mat4;
mod mesh;
mod plane;
mod vec2;
mod vec3;
mod vec4;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use mesh::{Mesh, Triangle};
pub use plane::Plane;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Tolerance used for degenerate-geometry checks.
pub const EPSILON: f32 = 1e-6;
