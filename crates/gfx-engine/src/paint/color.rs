use bytemuck::{Pod, Zeroable};

/// One framebuffer texel: straight 8-bit RGBA.
///
/// Layout is part of the C ABI: four `u8` channels in `red, green, blue, alpha`
/// order, 4 bytes, no padding. A frame is a row-major `[Color]` and can be
/// viewed as raw RGBA bytes with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    /// Channel-wise linear interpolation from `self` (t = 0) to `other` (t = 1).
    ///
    /// `t` is clamped to `[0, 1]`; NaN counts as 0.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };

        Color {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: mix(self.alpha, other.alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn abi_layout_is_four_packed_bytes() {
        assert_eq!(std::mem::size_of::<Color>(), 4);
        assert_eq!(std::mem::align_of::<Color>(), 1);

        let frame = [Color::new(1, 2, 3, 4), Color::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&frame);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 200, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let a = Color::rgb(0, 10, 255);
        let b = Color::rgb(201, 20, 0);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(101, 15, 128));
    }

    #[test]
    fn lerp_clamps_factor() {
        let a = Color::rgb(10, 10, 10);
        let b = Color::rgb(20, 20, 20);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.5), b);
        assert_eq!(a.lerp(b, f32::NAN), a);
    }
}
