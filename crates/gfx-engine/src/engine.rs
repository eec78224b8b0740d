use anyhow::{Context, Result};

use crate::assets::load_model_or_cube;
use crate::config::EngineConfig;
use crate::input::Controls;
use crate::paint::Color;
use crate::render::render_scene;
use crate::scene::{update_scene, Scene};
use crate::time::sanitize_delta;

/// Largest frame, in pixels, the engine agrees to allocate (8192 × 8192).
pub const MAX_FRAME_PIXELS: usize = 1 << 26;

/// Scene plus configuration; produces one framebuffer per call to `frame`.
pub struct Engine {
    config: EngineConfig,
    scene: Scene,
    frames: u64,
}

impl Engine {
    /// Loads the configured model and builds the default scene around it.
    pub fn new(config: EngineConfig) -> Self {
        let scene = Self::build_scene(&config);
        Self::with_scene(config, scene)
    }

    pub fn with_scene(config: EngineConfig, scene: Scene) -> Self {
        Self { config, scene, frames: 0 }
    }

    fn build_scene(config: &EngineConfig) -> Scene {
        let scene = Scene::new(load_model_or_cube(&config.model_path));
        log::info!("scene created ({} triangles)", scene.triangle_count());
        scene
    }

    /// Rebuilds the scene from the configured model, discarding camera and
    /// light state.
    pub fn reset_scene(&mut self) {
        self.scene = Self::build_scene(&self.config);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Frames produced since creation.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advances the scene by `dt` seconds and renders a `width × height`
    /// frame, row-major, top row first.
    pub fn frame(&mut self, width: usize, height: usize, dt: f32, controls: &Controls) -> Result<Box<[Color]>> {
        let (w, h, len) = frame_dimensions(width, height)?;

        let dt = sanitize_delta(dt, self.config.max_delta);
        update_scene(&mut self.scene, controls, dt);

        let pixels = render_scene(&self.scene, w, h, &self.config.render).into_colors();
        debug_assert_eq!(pixels.len(), len);

        self.frames += 1;
        Ok(pixels)
    }
}

/// Validates a requested frame size. Returns the raster dimensions and the
/// pixel count.
pub fn frame_dimensions(width: usize, height: usize) -> Result<(i32, i32, usize)> {
    anyhow::ensure!(width > 0 && height > 0, "frame size {width}x{height} is empty");

    let len = width
        .checked_mul(height)
        .filter(|&n| n <= MAX_FRAME_PIXELS)
        .with_context(|| format!("frame size {width}x{height} exceeds {MAX_FRAME_PIXELS} pixels"))?;

    let w = i32::try_from(width).with_context(|| format!("frame width {width} out of range"))?;
    let h = i32::try_from(height).with_context(|| format!("frame height {height} out of range"))?;

    Ok((w, h, len))
}
