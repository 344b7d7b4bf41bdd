//! wgpu device, queue and window surface.
//!
//! `Gpu` is created once per window by the runtime. Any failure while
//! bringing it up is reported as `RenderError::RenderContextUnavailable`.

mod context;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use frame::{GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
