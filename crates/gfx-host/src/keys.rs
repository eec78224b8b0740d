use gfx_engine::input::{Key, KeyState};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps a physical key to the engine's key set. Physical keys keep WASD in
/// place on non-QWERTY layouts.
pub fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::KeyW => Key::W,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyE => Key::E,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::Escape => Key::Escape,
            other => Key::Other(other as u32),
        },

        // NativeKeyCode is not a u32 in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Other(0),
    }
}

pub fn map_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}
