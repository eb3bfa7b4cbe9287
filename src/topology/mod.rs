pub mod edge;
pub mod polyhedron;

pub use edge::{face_edges, EdgeKey};
pub use polyhedron::{Face, Polyhedron};

use crate::error::{OperationError, Result};

/// Upper bounds on caller-supplied mesh sizes.
///
/// Checked before any allocation sized from caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshLimits {
    /// Maximum number of vertices.
    pub max_vertices: usize,
    /// Maximum number of faces.
    pub max_faces: usize,
    /// Maximum number of corners in a single face.
    pub max_face_len: usize,
}

impl Default for MeshLimits {
    fn default() -> Self {
        Self {
            max_vertices: 65_536,
            max_faces: 65_536,
            max_face_len: 1_024,
        }
    }
}

impl MeshLimits {
    /// # Errors
    ///
    /// Returns [`OperationError::LimitExceeded`] if `count > max_vertices`.
    pub fn check_vertices(&self, count: usize) -> Result<()> {
        check_limit("vertex", count, self.max_vertices)
    }

    /// # Errors
    ///
    /// Returns [`OperationError::LimitExceeded`] if `count > max_faces`.
    pub fn check_faces(&self, count: usize) -> Result<()> {
        check_limit("face", count, self.max_faces)
    }

    /// # Errors
    ///
    /// Returns [`OperationError::LimitExceeded`] if `count > max_face_len`.
    pub fn check_face_len(&self, count: usize) -> Result<()> {
        check_limit("face corner", count, self.max_face_len)
    }
}

/// Fails with [`OperationError::LimitExceeded`] when `count > limit`.
pub(crate) fn check_limit(what: &'static str, count: usize, limit: usize) -> Result<()> {
    if count > limit {
        return Err(OperationError::LimitExceeded { what, count, limit }.into());
    }
    Ok(())
}
