//! CPU rasterizer.
//!
//! Convention:
//! - geometry arrives in world space and leaves as NDC (x, y in [-1, 1], +Y up,
//!   depth in [0, 1])
//! - the depth buffer addresses pixels bottom-up and stores rows top-down, so
//!   the finished frame is row-major with the top row first

mod clip;
mod depth_buffer;
mod pipeline;
mod raster;
mod settings;
mod wireframe;

pub use clip::{clip_triangle, Frustum};
pub use depth_buffer::DepthBuffer;
pub use pipeline::render_scene;
pub use raster::fill_triangle;
pub use settings::RenderSettings;
pub use wireframe::{draw_line, draw_point};
