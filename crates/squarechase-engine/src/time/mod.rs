//! Frame timing.
//!
//! - [`FrameClock`]: one per loop, `tick()` once per presented frame.
//! - [`FixedStep`]: turns frame deltas into a bounded number of fixed updates.

mod fixed_step;
mod frame_clock;

pub use fixed_step::FixedStep;
pub use frame_clock::{FrameClock, FrameTime};
