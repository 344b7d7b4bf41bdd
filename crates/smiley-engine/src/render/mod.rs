//! GPU rendering subsystem.
//!
//! The mesh renderer uploads each drawable's geometry once and issues one
//! indexed draw per drawable per frame with its own uniform bundle
//! `{ transform, resolution, color }`.
//!
//! Convention:
//! - CPU geometry is in pixels (top-left origin, +Y down).
//! - The vertex shader applies the composite matrix, normalises by the
//!   resolution uniform and flips Y.

mod ctx;
mod error;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use mesh::{DrawUniform, MeshRenderer};
