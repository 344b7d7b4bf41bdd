use std::fmt;

use super::ObjectId;

/// Error raised while assembling a scene.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SceneError {
    /// A role (border/pivot) names an object that was not supplied.
    UnknownObject(ObjectId),
    /// Two drawables share the same id.
    DuplicateId(ObjectId),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownObject(id) => write!(f, "scene has no object named '{id}'"),
            SceneError::DuplicateId(id) => write!(f, "duplicate object id '{id}'"),
        }
    }
}

impl std::error::Error for SceneError {}
