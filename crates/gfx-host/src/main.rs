//! Window host for the gfx engine.
//!
//! Opens a window, feeds the keyboard to the engine through its C ABI every
//! frame and presents the returned framebuffer with wgpu.

mod blit;
mod frame;
mod gpu;
mod keys;
mod runtime;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use winit::dpi::PhysicalSize;

use gfx_engine::config::{ENV_MODEL, ENV_WIREFRAME};
use gfx_engine::logging::{init_logging, LoggingConfig};

use crate::gpu::GpuInit;
use crate::runtime::{Runtime, RuntimeConfig};

/// Software-rendered model viewer.
///
/// WASD moves and turns the camera, Q/E move down/up, Shift speeds up,
/// Escape quits.
#[derive(Parser, Debug)]
#[command(name = "gfx-host")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// OBJ model to display (falls back to a cube)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Disable the wireframe overlay
    #[arg(long)]
    no_wireframe: bool,

    /// Log filter, `env_logger` syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Disable vsync
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    // The engine only takes options through its environment.
    // SAFETY: no other threads exist yet.
    unsafe {
        if let Some(model) = &args.model {
            std::env::set_var(ENV_MODEL, model);
        }
        if args.no_wireframe {
            std::env::set_var(ENV_WIREFRAME, "off");
        }
    }

    let config = RuntimeConfig {
        initial_size: PhysicalSize::new(args.width.max(1), args.height.max(1)),
        ..RuntimeConfig::default()
    };

    let gpu_init = GpuInit {
        present_mode: if args.no_vsync {
            wgpu::PresentMode::AutoNoVsync
        } else {
            wgpu::PresentMode::Fifo
        },
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["gfx-host"]);
        assert_eq!((args.width, args.height), (800, 600));
        assert!(args.model.is_none());
        assert!(!args.no_wireframe);
    }

    #[test]
    fn model_and_flags() {
        let args = Args::parse_from(["gfx-host", "-m", "teapot.obj", "--no-wireframe", "--width", "320"]);
        assert_eq!(args.model, Some(PathBuf::from("teapot.obj")));
        assert!(args.no_wireframe);
        assert_eq!(args.width, 320);
    }
}
