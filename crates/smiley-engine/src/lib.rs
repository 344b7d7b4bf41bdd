//! Smiley engine crate.
//!
//! Owns the 2D transform math, the face scene composer and the platform +
//! GPU runtime pieces the studio app drives every frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod coords;
pub mod geometry;
pub mod scene;
pub mod render;
