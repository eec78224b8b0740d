//! Framebuffers obtained through the engine's C ABI.

use std::ptr::NonNull;

use gfx_engine::ffi;
use gfx_engine::{Color, Controls};

/// One engine framebuffer, released with `free_buffer` on drop.
pub struct EngineFrame {
    pixels: NonNull<Color>,
    width: u32,
    height: u32,
}

impl EngineFrame {
    /// Advances the engine by `dt` seconds and renders a `width × height`
    /// frame. `None` when the engine declined (its reason is already logged).
    pub fn render(width: u32, height: u32, dt: f32, controls: Controls) -> Option<Self> {
        let w = i32::try_from(width).ok()?;
        let h = i32::try_from(height).ok()?;

        let raw = ffi::update_and_render_with_controls(w, h, dt, controls.movement, controls.modifiers);

        NonNull::new(raw).map(|pixels| Self { pixels, width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixels, row-major, top row first.
    pub fn pixels(&self) -> &[Color] {
        // SAFETY: a non-null render result points to `width * height` pixels
        // owned by us until `free_buffer` runs in `drop`.
        unsafe { std::slice::from_raw_parts(self.pixels.as_ptr(), self.len()) }
    }
}

impl Drop for EngineFrame {
    fn drop(&mut self) {
        ffi::free_buffer(self.pixels.as_ptr(), self.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_released_on_drop() {
        let frame = EngineFrame::render(12, 5, 0.0, Controls::IDLE).unwrap();
        let raw = frame.pixels.as_ptr();
        assert_eq!(frame.pixels().len(), 60);
        assert!(ffi::is_live(raw));

        drop(frame);
        assert!(!ffi::is_live(raw));
    }

    #[test]
    fn empty_frame_is_none() {
        assert!(EngineFrame::render(0, 5, 0.0, Controls::IDLE).is_none());
        assert!(EngineFrame::render(u32::MAX, 5, 0.0, Controls::IDLE).is_none());
    }
}
