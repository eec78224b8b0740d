use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use gfx_engine::input::{Key, KeyState, KeyboardState};
use gfx_engine::time::{FrameClock, FrameStats};

use crate::blit::BlitRenderer;
use crate::frame::EngineFrame;
use crate::gpu::{Gpu, GpuInit, Presented};
use crate::keys::{map_key, map_state};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial inner size in physical pixels.
    pub initial_size: PhysicalSize<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "gfx".to_string(),
            initial_size: PhysicalSize::new(800, 600),
        }
    }
}

/// Entry point for the host loop.
pub struct Runtime;

impl Runtime {
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        let leaked = gfx_engine::ffi::live_count();
        if leaked > 0 {
            log::warn!("{leaked} framebuffer(s) still leased at exit");
        }

        state.failure.map_or(Ok(()), Err)
    }
}

#[self_referencing]
struct WindowEntry {
    keyboard: KeyboardState,
    clock: FrameClock,
    stats: FrameStats,
    blit: BlitRenderer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    window: Option<WindowEntry>,
    exit_requested: bool,
    /// Error that ended the loop, reported by `Runtime::run`.
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure.get_or_insert(err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            keyboard: KeyboardState::default(),
            clock: FrameClock::default(),
            stats: FrameStats::default(),
            blit: BlitRenderer::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(e) => self.fail(event_loop, e.context("failed to create window")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw: the scene animates even without input.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else { return; };

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Focused(focused) => {
                entry.with_keyboard_mut(|kb| kb.set_focused(focused));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.physical_key);
                let state = map_state(event.state);

                if key == Key::Escape && state == KeyState::Pressed {
                    log::info!("escape pressed; exiting");
                    self.request_exit(event_loop);
                    return;
                }

                entry.with_keyboard_mut(|kb| kb.apply_key(key, state));
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::Occluded(occluded) => {
                // Time spent hidden is not simulated.
                if !occluded {
                    entry.with_clock_mut(|clock| clock.reset());
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = redraw(entry) {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }
}

/// Drives one frame: engine update and render, upload, present, release.
fn redraw(entry: &mut WindowEntry) -> Result<()> {
    entry.with_mut(|fields| {
        let ft = fields.clock.tick();
        let controls = fields.keyboard.controls();

        let Some(size) = fields.gpu.drawable() else {
            return Ok(());
        };

        // Render first so the surface texture is held as briefly as possible.
        let Some(frame) = EngineFrame::render(size.width, size.height, ft.dt, controls) else {
            return Ok(());
        };
        fields.blit.upload(fields.gpu, frame.width(), frame.height(), frame.pixels());
        drop(frame);

        let window = fields.window;
        let blit = &*fields.blit;
        let presented = fields.gpu.present(|encoder, view| {
            blit.draw(encoder, view);
            window.pre_present_notify();
        })?;

        if presented == Presented::Shown {
            if let Some(fps) = fields.stats.record(ft.now) {
                log::info!("{fps:.1} fps ({}x{})", size.width, size.height);
            }
        }

        Ok(())
    })
}
