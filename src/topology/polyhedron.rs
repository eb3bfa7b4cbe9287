use crate::error::Result;
use crate::math::{centroid, default_normal, Point2, Point3, Vector3};
use crate::operations::creation::check_face;
use crate::operations::properties::ComputeProperties;

use super::MeshLimits;

/// One face of a polyhedron together with everything derived from it.
///
/// Keeping the derived values on the face record means they cannot drift out
/// of step with the face list.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    indices: Vec<usize>,
    pub(crate) normal: Vector3,
    pub(crate) area: f64,
    pub(crate) convex: bool,
    pub(crate) uvs: Vec<Point2>,
}

impl Face {
    /// Creates a face with placeholder derived data.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        let uvs = vec![Point2::origin(); indices.len()];
        Self {
            indices,
            normal: default_normal(),
            area: 0.0,
            convex: true,
            uvs,
        }
    }

    /// Vertex indices in winding order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the face has no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Unit face normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Face area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// `true` if every other mesh vertex lies on one side of this face's plane.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.convex
    }

    /// Planar texture coordinates, one per corner, in `[0, 1]^2`.
    #[must_use]
    pub fn uvs(&self) -> &[Point2] {
        &self.uvs
    }

    pub(crate) fn reverse(&mut self) {
        self.indices.reverse();
        self.uvs.reverse();
    }
}

/// A polygonal mesh with per-face and per-vertex derived properties.
///
/// Faces are addressed by their position in [`faces`](Self::faces). Faces are
/// only ever appended, so a face index stays valid for the life of the mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyhedron {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
    pub(crate) vertex_curvatures: Vec<f64>,
    pub(crate) is_convex: bool,
}

impl Polyhedron {
    /// Assembles a mesh without computing any derived data.
    ///
    /// Callers must have checked the face indices against `vertices`.
    pub(crate) fn from_parts(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        let vertex_count = vertices.len();
        Self {
            vertices,
            faces: faces.into_iter().map(Face::new).collect(),
            vertex_curvatures: vec![0.0; vertex_count],
            is_convex: true,
        }
    }

    /// Vertex positions in local space.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Face records.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the face at `index`, if any.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// Angle-deficit curvature per vertex.
    #[must_use]
    pub fn vertex_curvatures(&self) -> &[f64] {
        &self.vertex_curvatures
    }

    /// `true` if every face is convex with respect to the rest of the mesh.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.is_convex
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Edge count of a closed mesh, `(sum of face sizes) / 2`.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(Face::len).sum::<usize>() / 2
    }

    /// Average of all vertex positions.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        centroid(&self.vertices)
    }

    /// Positions of a face's corners, in winding order.
    #[must_use]
    pub fn face_points(&self, face: &Face) -> Vec<Point3> {
        face.indices
            .iter()
            .filter_map(|&i| self.vertices.get(i).copied())
            .collect()
    }

    /// Appends a face and recomputes every derived property.
    ///
    /// Winding is not corrected; the caller supplies the face in outward order.
    /// Returns the new face's index.
    ///
    /// # Errors
    ///
    /// Returns an error if the face has fewer than three corners, references a
    /// missing vertex, or would exceed `limits`.
    pub fn add_face(&mut self, indices: Vec<usize>, limits: &MeshLimits) -> Result<usize> {
        limits.check_faces(self.faces.len() + 1)?;
        check_face(self.faces.len(), &indices, self.vertices.len(), limits)?;

        self.faces.push(Face::new(indices));
        ComputeProperties::new().execute(self);
        Ok(self.faces.len() - 1)
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Point3] {
        &mut self.vertices
    }

    pub(crate) fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }
}
