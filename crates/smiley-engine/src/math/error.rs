use std::fmt;

/// Error raised by the slice-based math entry points.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MathError {
    /// Input had the wrong number of elements.
    InvalidDimension { expected: usize, actual: usize },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidDimension { expected, actual } => write!(
                f,
                "invalid dimension: expected {expected} elements, got {actual}"
            ),
        }
    }
}

impl std::error::Error for MathError {}
