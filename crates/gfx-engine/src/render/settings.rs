use crate::paint::Palette;

/// Per-frame rasterizer options.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderSettings {
    pub palette: Palette,

    /// Overlay triangle edges and vertices on the shaded fill.
    pub wireframe: bool,

    /// Half-size, in pixels, of the square drawn at each vertex.
    pub point_radius: i32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            wireframe: true,
            point_radius: 3,
        }
    }
}
