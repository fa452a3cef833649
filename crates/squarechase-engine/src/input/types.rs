use crate::coords::Vec2;

/// Keyboard key.
///
/// Only the keys something reacts to get their own variant; printable keys
/// carry their (unshifted, lowercase) character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Character(char),

    /// Platform key code with no variant above.
    Unknown(u32),
}

/// Pressed/released, shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic input event. Positions are logical px.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: ButtonState,
        /// Auto-repeat of a held key.
        repeat: bool,
    },

    PointerMoved(Vec2),

    PointerButton {
        button: MouseButton,
        state: ButtonState,
        /// Last known pointer position, if the pointer is over the window.
        pos: Option<Vec2>,
    },

    PointerLeft,

    Focused(bool),
}

impl InputEvent {
    /// True for the initial press (not a repeat) of `key`.
    pub fn is_key_press(&self, key: Key) -> bool {
        matches!(
            self,
            InputEvent::Key { key: k, state: ButtonState::Pressed, repeat: false } if *k == key
        )
    }
}
