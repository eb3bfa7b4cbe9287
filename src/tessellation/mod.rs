mod tessellate_face;
mod tessellate_primitive;

pub use tessellate_face::TessellateFace;
pub use tessellate_primitive::TessellatePrimitive;

use crate::error::Result;
use crate::math::{Point2, Point3, Vector3};
use crate::topology::check_limit;

/// Largest accepted `segments` or `rings` value.
///
/// Keeps every grid vertex index within `u32`.
pub const MAX_GRID_DIVISIONS: usize = 1024;

/// Parameters controlling tessellation quality of the curved primitives.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Slices around the axis (and latitude bands of the sphere). At least 3.
    pub segments: usize,
    /// Bands along the axis of the cylinder and cone sides. At least 1.
    pub rings: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            segments: 16,
            rings: 4,
        }
    }
}

impl TessellationParams {
    /// # Errors
    ///
    /// Returns [`OperationError::LimitExceeded`](crate::error::OperationError::LimitExceeded)
    /// if `segments` or `rings` exceeds [`MAX_GRID_DIVISIONS`].
    pub fn check(&self) -> Result<()> {
        check_limit("tessellation segment", self.segments, MAX_GRID_DIVISIONS)?;
        check_limit("tessellation ring", self.rings, MAX_GRID_DIVISIONS)
    }
}

/// A triangle mesh approximation of a primitive.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
    /// Logical face of each triangle, parallel to `indices`.
    pub face_ids: Vec<usize>,
}

impl TriangleMesh {
    /// Appends `other`, offsetting its indices past the current vertices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|t| t.map(|i| i + offset)));
        self.face_ids.extend_from_slice(&other.face_ids);
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}
