//! Stack of views (screens) driven by the application loop.
//!
//! The topmost view sees updates and events first and can stop them from
//! reaching the views below; rendering goes bottom-up so upper views draw
//! over lower ones. Stack changes requested during a traversal are queued and
//! applied once it finishes.

mod stack;

pub use stack::{Requests, View, ViewStack};
