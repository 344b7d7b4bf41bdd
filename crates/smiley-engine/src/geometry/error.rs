use std::fmt;

/// Invalid parameters passed to a mesh generator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// A polygon fan needs at least three rim vertices.
    TooFewSides(u32),
    /// Rim indices must fit in `u16`.
    TooManySides(u32),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewSides(n) => {
                write!(f, "polygon needs at least 3 sides, got {n}")
            }
            GeometryError::TooManySides(n) => {
                write!(f, "polygon supports at most {} sides, got {n}", super::MAX_SIDES)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
