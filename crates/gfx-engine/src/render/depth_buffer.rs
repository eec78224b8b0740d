use crate::math::Vec2;
use crate::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Texel {
    color: Color,
    depth: f32,
}

/// Color + depth target.
///
/// Pixel coordinates passed in are `(x, y)` with `y = 0` at the bottom row.
pub struct DepthBuffer {
    width: i32,
    height: i32,
    texels: Vec<Texel>,
}

impl DepthBuffer {
    /// Buffer cleared to `clear` at the far plane (depth 1).
    ///
    /// Negative sizes are treated as empty.
    pub fn new(width: i32, height: i32, clear: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let texel = Texel { color: clear, depth: 1.0 };
        Self {
            width,
            height,
            texels: vec![texel; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Width over height; 1 for an empty buffer.
    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Pixel containing the NDC point. May lie outside the buffer.
    #[inline]
    pub fn ndc_to_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        let px = ((x + 1.0) / 2.0 * self.width as f32).floor() as i32;
        let py = ((y + 1.0) / 2.0 * self.height as f32).floor() as i32;
        (px, py)
    }

    /// NDC position of the center of pixel `(x, y)`.
    #[inline]
    pub fn pixel_center(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32 * 2.0 - 1.0,
            (y as f32 + 0.5) / self.height as f32 * 2.0 - 1.0,
        )
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        let row = (self.height - 1 - y) as usize;
        Some(row * self.width as usize + x as usize)
    }

    /// Depth-tested write. Out-of-bounds pixels and depths below the near
    /// plane are dropped; equal depth overwrites.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, depth: f32) {
        if depth < 0.0 {
            return;
        }
        let Some(i) = self.index(x, y) else { return };
        let texel = &mut self.texels[i];
        if depth <= texel.depth {
            *texel = Texel { color, depth };
        }
    }

    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.texels[i].color)
    }

    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.texels[i].depth)
    }

    /// Finished frame, row-major, top row first.
    pub fn into_colors(self) -> Box<[Color]> {
        self.texels.into_iter().map(|t| t.color).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn starts_cleared_at_far_plane() {
        let buf = DepthBuffer::new(3, 2, BLUE);
        assert_eq!(buf.color_at(2, 1), Some(BLUE));
        assert_eq!(buf.depth_at(0, 0), Some(1.0));
    }

    #[test]
    fn nearer_write_wins() {
        let mut buf = DepthBuffer::new(2, 2, BLUE);
        buf.set_pixel(1, 1, RED, 0.5);
        buf.set_pixel(1, 1, BLUE, 0.7);
        assert_eq!(buf.color_at(1, 1), Some(RED));
        buf.set_pixel(1, 1, BLUE, 0.5);
        assert_eq!(buf.color_at(1, 1), Some(BLUE));
    }

    #[test]
    fn rejects_out_of_bounds_and_negative_depth() {
        let mut buf = DepthBuffer::new(2, 2, BLUE);
        buf.set_pixel(-1, 0, RED, 0.1);
        buf.set_pixel(2, 0, RED, 0.1);
        buf.set_pixel(0, 2, RED, 0.1);
        buf.set_pixel(0, 0, RED, -0.01);
        assert!(buf.into_colors().iter().all(|&c| c == BLUE));
    }

    #[test]
    fn bottom_row_is_last_in_output() {
        let mut buf = DepthBuffer::new(2, 3, BLUE);
        buf.set_pixel(1, 0, RED, 0.0);
        let out = buf.into_colors();
        assert_eq!(out.len(), 6);
        assert_eq!(out[5], RED);
        assert_eq!(out.iter().filter(|&&c| c == RED).count(), 1);
    }

    #[test]
    fn ndc_corners_map_to_edge_pixels() {
        let buf = DepthBuffer::new(4, 2, BLUE);
        assert_eq!(buf.ndc_to_pixel(-1.0, -1.0), (0, 0));
        assert_eq!(buf.ndc_to_pixel(0.99, 0.99), (3, 1));
        assert_eq!(buf.ndc_to_pixel(1.0, 1.0), (4, 2));
    }

    #[test]
    fn pixel_center_round_trips() {
        let buf = DepthBuffer::new(5, 7, BLUE);
        for (x, y) in [(0, 0), (4, 6), (2, 3)] {
            let c = buf.pixel_center(x, y);
            assert_eq!(buf.ndc_to_pixel(c.x, c.y), (x, y));
        }
    }
}
