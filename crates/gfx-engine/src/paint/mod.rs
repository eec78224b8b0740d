//! Pixel colors and the palette the rasterizer paints with.

pub mod color;
mod palette;

pub use color::Color;
pub use palette::Palette;
