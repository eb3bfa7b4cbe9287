use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::operations::properties::ComputeProperties;
use crate::topology::{MeshLimits, Polyhedron};

/// Builds a polyhedron from caller-supplied vertices and faces.
///
/// Winding is taken as given. Sizes are checked against [`MeshLimits`] and
/// every index against the vertex list before the mesh is assembled; the
/// derived properties are then computed as for any other mesh. Topology is
/// not validated, use [`ValidateTopology`](crate::operations::query::ValidateTopology)
/// for that.
#[derive(Debug, Clone)]
pub struct MakeCustomPolyhedron {
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
}

impl MakeCustomPolyhedron {
    /// Creates a new `MakeCustomPolyhedron` operation.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::LimitExceeded`](crate::error::OperationError::LimitExceeded)
    /// if a size limit is exceeded, or a [`TopologyError`] if a face has fewer
    /// than three corners or references a missing vertex.
    pub fn execute(self, limits: &MeshLimits) -> Result<Polyhedron> {
        limits.check_vertices(self.vertices.len())?;
        limits.check_faces(self.faces.len())?;
        for (i, face) in self.faces.iter().enumerate() {
            check_face(i, face, self.vertices.len(), limits)?;
        }

        let mut mesh = Polyhedron::from_parts(self.vertices, self.faces);
        ComputeProperties::new().execute(&mut mesh);
        Ok(mesh)
    }
}

/// Checks one face loop against the corner limit and the vertex count.
pub(crate) fn check_face(
    face: usize,
    indices: &[usize],
    vertex_count: usize,
    limits: &MeshLimits,
) -> Result<()> {
    limits.check_face_len(indices.len())?;
    if indices.len() < 3 {
        return Err(TopologyError::FaceTooSmall {
            face,
            len: indices.len(),
        }
        .into());
    }
    if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
        return Err(TopologyError::IndexOutOfRange {
            face,
            index,
            vertex_count,
        }
        .into());
    }
    Ok(())
}
