use super::Color;

/// Colors used by the rasterizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Clear color of every frame.
    pub background: Color,
    /// Color of a face lit head-on.
    pub model: Color,
    /// Color of a face facing away from the light.
    pub shadow: Color,
    pub wire_line: Color,
    pub wire_point: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(200, 50, 0),
            model: Color::rgb(200, 200, 0),
            shadow: Color::BLACK,
            wire_line: Color::rgb(50, 50, 50),
            wire_point: Color::rgb(50, 50, 50),
        }
    }
}
