/// Surface settings chosen by the app.
///
/// Device features and limits are fixed to wgpu defaults; the face pipeline
/// needs nothing beyond them.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface when the platform offers one.
    ///
    /// Off by default so drawable colors reach the display as authored.
    pub prefer_srgb: bool,

    /// FIFO paces the continuous redraw loop to the display refresh.
    pub present_mode: wgpu::PresentMode,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}
