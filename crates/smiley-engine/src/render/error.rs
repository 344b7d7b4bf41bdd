use std::fmt;

/// Fatal rendering setup failures. None of these are retried.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RenderError {
    /// The host could not provide a surface, adapter or device.
    RenderContextUnavailable(String),
    /// The built-in shader source was rejected by the backend.
    ShaderCompilationFailed(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RenderContextUnavailable(why) => {
                write!(f, "render context unavailable: {why}")
            }
            RenderError::ShaderCompilationFailed(log) => {
                write!(f, "shader compilation failed: {log}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
