//! Pixel-space types shared by the scene and the renderer.
//!
//! Canonical CPU space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The vertex shader maps pixels to clip space with the `resolution` uniform
//! and flips Y; `Viewport::to_clip` is the CPU mirror of that mapping.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
