use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Surface options picked on the command line.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Engine pixels are sRGB-encoded and uploaded to an sRGB texture, so an
    /// sRGB surface writes them back out unchanged.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
        }
    }
}

/// The window surface plus the device the blit pass records on.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
    /// Last size reported by the window; zero while minimized.
    window_size: PhysicalSize<u32>,

    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
}

/// Outcome of [`Gpu::present`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Presented {
    Shown,
    /// Nothing was acquired; the caller just waits for the next redraw.
    Skipped,
}

/// What to do with a failed surface acquire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Recovery {
    Reconfigure,
    Skip,
    Fatal,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let window_size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("gfx-host device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to open the GPU device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no formats")?;
        log::debug!("surface format {format:?}, present mode {:?}", init.present_mode);

        let (width, height) = surface_extent(window_size);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: init.present_mode,
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        Ok(Gpu { surface, config, window_size, device, queue })
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Drawable size in physical pixels, `None` while the window has no area.
    pub fn drawable(&self) -> Option<PhysicalSize<u32>> {
        let size = self.window_size;
        (size.width > 0 && size.height > 0).then_some(size)
    }

    /// Tracks the window size; the surface is only reconfigured for a
    /// non-empty one.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.window_size = size;
        if self.drawable().is_some() {
            (self.config.width, self.config.height) = surface_extent(size);
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Acquires the next surface texture, lets `record` encode into it, then
    /// submits and presents. Lost or outdated surfaces are reconfigured and
    /// the frame is skipped.
    pub fn present(
        &mut self,
        record: impl FnOnce(&mut wgpu::CommandEncoder, &wgpu::TextureView),
    ) -> Result<Presented> {
        let target = match self.surface.get_current_texture() {
            Ok(target) => target,
            Err(err) => {
                return match recovery_for(&err) {
                    Recovery::Reconfigure => {
                        log::debug!("surface {err}; reconfiguring");
                        self.surface.configure(&self.device, &self.config);
                        Ok(Presented::Skipped)
                    }
                    Recovery::Skip => Ok(Presented::Skipped),
                    Recovery::Fatal => Err(anyhow::anyhow!("surface error: {err}")),
                };
            }
        };

        let view = target.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("gfx-host frame") });

        record(&mut encoder, &view);

        self.queue.submit([encoder.finish()]);
        target.present();
        Ok(Presented::Shown)
    }
}

/// Surface configuration extent; wgpu rejects zero-sized surfaces.
fn surface_extent(size: PhysicalSize<u32>) -> (u32, u32) {
    (size.width.max(1), size.height.max(1))
}

fn recovery_for(err: &SurfaceError) -> Recovery {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => Recovery::Reconfigure,
        SurfaceError::OutOfMemory => Recovery::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => Recovery::Skip,
    }
}

fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = prefer_srgb
        .then(|| formats.iter().copied().find(|f| f.is_srgb()))
        .flatten();
    srgb.or_else(|| formats.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    // ── formats ──

    #[test]
    fn prefers_srgb_format() {
        let formats = [F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(choose_surface_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── sizing ──

    #[test]
    fn zero_sized_window_still_configures() {
        assert_eq!(surface_extent(PhysicalSize::new(0, 0)), (1, 1));
        assert_eq!(surface_extent(PhysicalSize::new(640, 0)), (640, 1));
        assert_eq!(surface_extent(PhysicalSize::new(800, 600)), (800, 600));
    }

    // ── surface errors ──

    #[test]
    fn surface_errors_map_to_recovery() {
        assert_eq!(recovery_for(&SurfaceError::Lost), Recovery::Reconfigure);
        assert_eq!(recovery_for(&SurfaceError::Outdated), Recovery::Reconfigure);
        assert_eq!(recovery_for(&SurfaceError::Timeout), Recovery::Skip);
        assert_eq!(recovery_for(&SurfaceError::Other), Recovery::Skip);
        assert_eq!(recovery_for(&SurfaceError::OutOfMemory), Recovery::Fatal);
    }
}
