use std::collections::HashSet;

use super::record::{Controls, InputModifiers, UserInput};
use super::types::{Key, KeyState};

/// Held keys for one window.
#[derive(Debug, Default)]
pub struct KeyboardState {
    /// Whether the window is focused.
    pub focused: bool,

    keys_down: HashSet<Key>,
}

impl KeyboardState {
    pub fn apply_key(&mut self, key: Key, state: KeyState) {
        match state {
            KeyState::Pressed => {
                self.keys_down.insert(key);
            }
            KeyState::Released => {
                self.keys_down.remove(&key);
            }
        }
    }

    /// Focus loss clears held keys; the release events go to another window.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.keys_down.clear();
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn user_input(&self) -> UserInput {
        UserInput {
            w_pressed: self.key_down(Key::W),
            a_pressed: self.key_down(Key::A),
            s_pressed: self.key_down(Key::S),
            d_pressed: self.key_down(Key::D),
        }
    }

    pub fn modifiers(&self) -> InputModifiers {
        InputModifiers {
            q_pressed: self.key_down(Key::Q),
            e_pressed: self.key_down(Key::E),
            shift_pressed: self.key_down(Key::Shift),
        }
    }

    pub fn controls(&self) -> Controls {
        Controls::new(self.user_input(), self.modifiers())
    }
}
