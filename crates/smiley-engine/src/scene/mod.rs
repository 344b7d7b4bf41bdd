//! Scene graph for the face: drawables plus per-frame transform resolution.
//!
//! Responsibilities:
//! - own every drawable's transform state behind setters
//! - designate the border (source of scale/position/rotation) and the pivot
//!   (rotation anchor)
//! - recompute each drawable's composite matrix from scratch every frame
//!
//! Threading: a `Scene` lives on the event-loop thread. Control edits and the
//! frame composer both run there, between frames, so there is no locking.

mod error;
mod graph;
mod object;

pub use error::SceneError;
pub use graph::{ResolvedDraw, Scene};
pub use object::{Object2D, ObjectId};
