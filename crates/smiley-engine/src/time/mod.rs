//! Frame timing.
//!
//! The runtime owns one `FrameClock` and ticks it once per redraw; the
//! resulting `FrameTime::dt` drives rate-based edits such as held-key sliders.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
