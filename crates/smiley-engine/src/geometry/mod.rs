//! Procedural 2D meshes.
//!
//! Meshes are built once at startup in object-local pixel coordinates and
//! uploaded by the renderer. Polygon fans are counter-clockwise in a y-up
//! frame; the mouth keeps its fixed clockwise winding. Nothing is culled, so
//! both draw.

mod error;
mod mesh;
mod mouth;
mod polygon;

pub use error::GeometryError;
pub use mesh::{Mesh, Vertex};
pub use mouth::mouth_shape;
pub use polygon::{regular_polygon, MAX_SIDES};
