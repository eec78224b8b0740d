//! Software rasterizer behind a C ABI.
//!
//! Each frame the host passes a size, a delta time and keyboard flags; the
//! engine moves the camera, spins the light, rasterizes the scene on the CPU
//! and hands back an owned RGBA buffer (see [`ffi`]). Rust hosts can drive
//! [`engine::Engine`] directly, but `gfx-host` goes through the C exports like
//! any foreign host would.

pub mod assets;
pub mod config;
pub mod engine;
pub mod ffi;
pub mod input;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;

pub use config::EngineConfig;
pub use engine::Engine;
pub use input::{Controls, InputModifiers, UserInput};
pub use paint::Color;
