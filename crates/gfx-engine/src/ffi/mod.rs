//! C ABI.
//!
//! A single engine instance lives behind a global lock and is created on
//! first use. Render calls return a pointer to `width * height` [`Color`]s,
//! row-major with the top row first; the host owns it until it passes the
//! pointer back to one of the free functions. Errors and panics never cross
//! the boundary: they are logged and reported as a null pointer.

mod registry;

use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::input::{Controls, InputModifiers, UserInput};
use crate::logging::{init_logging, LoggingConfig};
use crate::paint::Color;

pub use registry::{is_live, live_count, ReleaseError};

static ENGINE: Mutex<Option<Engine>> = Mutex::new(None);

/// Runs `f` against the engine slot under the global lock. A panic inside
/// `f` empties the slot so the next call starts from a fresh engine.
fn with_slot<T>(f: impl FnOnce(&mut Option<Engine>) -> Result<T>) -> Result<T> {
    init_logging(LoggingConfig::default());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut slot = ENGINE.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut slot)
    }));

    match outcome {
        Ok(result) => result,
        Err(_) => {
            *ENGINE.lock().unwrap_or_else(PoisonError::into_inner) = None;
            anyhow::bail!("engine panicked; state discarded")
        }
    }
}

/// Runs `f` against the global engine, creating it if needed.
fn with_engine<T>(f: impl FnOnce(&mut Engine) -> Result<T>) -> Result<T> {
    with_slot(|slot| f(slot.get_or_insert_with(|| Engine::new(EngineConfig::from_env()))))
}

fn render(width: usize, height: usize, dt: f32, controls: Controls) -> *mut Color {
    match with_engine(|engine| engine.frame(width, height, dt, &controls)) {
        Ok(pixels) => registry::lease(pixels),
        Err(err) => {
            log::error!("render failed: {err:#}");
            ptr::null_mut()
        }
    }
}

fn render_signed(width: i32, height: i32, dt: f32, controls: Controls) -> *mut Color {
    let dims = usize::try_from(width)
        .and_then(|w| usize::try_from(height).map(|h| (w, h)))
        .with_context(|| format!("negative frame size {width}x{height}"));

    match dims {
        Ok((w, h)) => render(w, h, dt, controls),
        Err(err) => {
            log::error!("render failed: {err:#}");
            ptr::null_mut()
        }
    }
}

fn free(raw: *mut Color, len: usize, caller: &str) {
    if raw.is_null() {
        return;
    }
    if let Err(err) = registry::release(raw, len) {
        log::warn!("{caller}({raw:p}, {len}) ignored: {err}");
    }
}

/// (Re)creates the scene: loads the configured model and resets camera and
/// light. Calling it is optional; rendering creates the scene lazily.
#[unsafe(no_mangle)]
pub extern "C" fn create_scene() {
    let result = with_slot(|slot| {
        if let Some(engine) = slot.as_mut() {
            engine.reset_scene();
        } else {
            *slot = Some(Engine::new(EngineConfig::from_env()));
        }
        Ok(())
    });
    if let Err(err) = result {
        log::error!("create_scene failed: {err:#}");
    }
}

/// Renders one frame with no input.
#[unsafe(no_mangle)]
pub extern "C" fn update_and_render(width: usize, height: usize, dt: f32) -> *mut Color {
    render(width, height, dt, Controls::IDLE)
}

/// Same as [`update_and_render`].
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn updateAndRender(width: usize, height: usize, dt: f32) -> *mut Color {
    update_and_render(width, height, dt)
}

/// Renders one frame after applying WASD movement.
#[unsafe(no_mangle)]
pub extern "C" fn update_and_render_with_input(width: i32, height: i32, dt: f32, input: UserInput) -> *mut Color {
    render_signed(width, height, dt, Controls::from(input))
}

/// Renders one frame after applying WASD movement plus Q/E vertical movement
/// and the Shift boost.
#[unsafe(no_mangle)]
pub extern "C" fn update_and_render_with_controls(
    width: i32,
    height: i32,
    dt: f32,
    input: UserInput,
    modifiers: InputModifiers,
) -> *mut Color {
    render_signed(width, height, dt, Controls::new(input, modifiers))
}

/// Releases a buffer returned by a render call. `len` is the pixel count.
#[unsafe(no_mangle)]
pub extern "C" fn free_buffer(raw: *mut Color, len: usize) {
    free(raw, len, "free_buffer");
}

/// [`free_buffer`] for hosts that track lengths as `int`.
#[unsafe(no_mangle)]
pub extern "C" fn free_bitmap(raw: *mut Color, len: i32) {
    match usize::try_from(len) {
        Ok(len) => free(raw, len, "free_bitmap"),
        Err(_) if raw.is_null() => {}
        Err(_) => log::warn!("free_bitmap({raw:p}, {len}) ignored: negative length"),
    }
}

/// Same as [`free_buffer`].
#[unsafe(no_mangle)]
pub extern "C" fn free_array(raw: *mut Color, len: usize) {
    free(raw, len, "free_array");
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── rendering ──

    #[test]
    fn render_returns_live_buffer() {
        let _serial = registry::serial();
        let raw = update_and_render(16, 9, 0.016);
        assert!(!raw.is_null());
        assert!(is_live(raw));

        let pixels = unsafe { std::slice::from_raw_parts(raw, 16 * 9) };
        assert!(pixels.iter().all(|c| c.alpha == 255));

        free_buffer(raw, 16 * 9);
        assert!(!is_live(raw));
    }

    #[test]
    fn invalid_sizes_return_null() {
        let _serial = registry::serial();
        assert!(update_and_render(0, 10, 0.016).is_null());
        assert!(updateAndRender(10, 0, 0.016).is_null());
        assert!(update_and_render_with_input(-1, 10, 0.016, UserInput::default()).is_null());
        assert!(update_and_render_with_controls(10, -3, 0.016, UserInput::default(), InputModifiers::default()).is_null());
    }

    #[test]
    fn input_variants_render() {
        let _serial = registry::serial();
        let w = UserInput { w_pressed: true, ..UserInput::default() };
        let raw = update_and_render_with_input(8, 8, 0.0, w);
        assert!(!raw.is_null());
        free_bitmap(raw, 64);
        assert!(!is_live(raw));

        let shift = InputModifiers { shift_pressed: true, ..InputModifiers::default() };
        let raw = update_and_render_with_controls(8, 8, 0.0, w, shift);
        assert!(!raw.is_null());
        free_array(raw, 64);
        assert!(!is_live(raw));
    }

    #[test]
    fn create_scene_is_idempotent() {
        let _serial = registry::serial();
        create_scene();
        create_scene();
        let raw = update_and_render(4, 4, 0.0);
        assert!(!raw.is_null());
        free_buffer(raw, 16);
    }

    #[test]
    fn concurrent_renders_are_serialized() {
        let _serial = registry::serial();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let (w, h) = (8 + i, 6 + i);
                    let mut leased = Vec::new();
                    for _ in 0..10 {
                        let raw = update_and_render(w, h, 0.001);
                        assert!(!raw.is_null());
                        let pixels = unsafe { std::slice::from_raw_parts(raw, w * h) };
                        assert!(pixels.iter().all(|c| c.alpha == 255));
                        assert!(is_live(raw));
                        leased.push(raw as usize);
                        free_buffer(raw, w * h);
                    }
                    leased
                })
            })
            .collect();

        let mut leased = Vec::new();
        for handle in handles {
            leased.extend(handle.join().unwrap());
        }
        assert_eq!(leased.len(), 80);
        assert_eq!(live_count(), 0);
    }

    // ── freeing ──

    #[test]
    fn null_frees_are_no_ops() {
        let _serial = registry::serial();
        free_buffer(ptr::null_mut(), 10);
        free_bitmap(ptr::null_mut(), -1);
        free_array(ptr::null_mut(), 0);
    }

    #[test]
    fn bad_frees_are_ignored() {
        let _serial = registry::serial();
        let raw = update_and_render(4, 4, 0.0);
        free_buffer(raw, 15);
        free_bitmap(raw, -16);
        assert!(is_live(raw));

        free_buffer(raw, 16);
        free_buffer(raw, 16);
        assert!(!is_live(raw));
    }
}
