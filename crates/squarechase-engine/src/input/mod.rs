//! Input subsystem.
//!
//! The public API does not expose winit types; the runtime translates window
//! events through [`platform`] and feeds them to [`InputState::apply_event`].

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, Modifiers, MouseButton};
