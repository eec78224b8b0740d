//! Frame timing.
//!
//! - `FrameClock`: one per render loop; `tick()` once per presented frame
//! - `FrameStats`: rolling frame-rate report for logging
//! - `sanitize_delta`: guards delta times arriving over the C ABI

mod frame_clock;
mod stats;

pub use frame_clock::{sanitize_delta, FrameClock, FrameTime};
pub use stats::FrameStats;
