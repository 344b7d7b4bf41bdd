/// One acquired swapchain image plus the encoder recording into it.
///
/// Hand it back through `Gpu::submit` within the same redraw; the next image
/// cannot be acquired while this one is held.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the frame loop does after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface reconfigured; draw again next frame.
    Reconfigured,
    /// Skip this frame.
    SkipFrame,
    /// Out of memory or unknown; stop the app.
    Fatal,
}
