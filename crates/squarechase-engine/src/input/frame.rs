use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Input transitions since the last rendered frame.
///
/// [`InputState`](super::InputState) answers "what is held now"; this answers
/// "what happened". The runtime clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }
}
