//! Keyboard input records.
//!
//! `UserInput` and `InputModifiers` cross the C ABI and are plain `bool`
//! records. `KeyboardState` is a convenience for Rust hosts that track key
//! events and want to produce those records once per frame.

mod record;
mod state;
mod types;

pub use record::{Controls, InputModifiers, UserInput};
pub use state::KeyboardState;
pub use types::{Key, KeyState};
