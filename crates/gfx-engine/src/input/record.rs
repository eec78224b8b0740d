/// Movement keys held during a frame.
///
/// C layout: four independent `bool` flags, one byte each.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInput {
    pub w_pressed: bool,
    pub a_pressed: bool,
    pub s_pressed: bool,
    pub d_pressed: bool,
}

/// Secondary keys: vertical movement (Q down, E up) and Shift boost.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InputModifiers {
    pub q_pressed: bool,
    pub e_pressed: bool,
    pub shift_pressed: bool,
}

/// Everything the scene update reads from the keyboard.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub movement: UserInput,
    pub modifiers: InputModifiers,
}

impl Controls {
    pub const IDLE: Controls = Controls {
        movement: UserInput { w_pressed: false, a_pressed: false, s_pressed: false, d_pressed: false },
        modifiers: InputModifiers { q_pressed: false, e_pressed: false, shift_pressed: false },
    };

    #[inline]
    pub const fn new(movement: UserInput, modifiers: InputModifiers) -> Self {
        Self { movement, modifiers }
    }
}

impl From<UserInput> for Controls {
    #[inline]
    fn from(movement: UserInput) -> Self {
        Self { movement, modifiers: InputModifiers::default() }
    }
}
