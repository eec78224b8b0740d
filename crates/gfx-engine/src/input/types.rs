/// Keys the engine reacts to.
///
/// Hosts map their platform key codes onto these; anything else is
/// `Key::Other` and ignored by the camera controls.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    Shift,
    Escape,

    /// Platform key without a dedicated variant, with a stable platform code.
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}
