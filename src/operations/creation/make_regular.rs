use tracing::debug;

use super::seeds;
use crate::operations::properties::{ComputeProperties, EnsureOutwardWinding};
use crate::operations::transform::ScaleToRadius;
use crate::topology::Polyhedron;

/// Radius substituted when the caller passes a non-positive one.
const DEFAULT_RADIUS: f64 = 0.5;

/// Builds a regular polyhedron from a requested face count.
///
/// Face counts 4, 6, 8, 12 and 20 give the five Platonic solids. Any other
/// count yields a square pyramid (four triangles and a quad base) instead of
/// an error, so callers who need to know should check
/// [`Polyhedron::face_count`] on the result.
///
/// The mesh is wound outward, scaled so its farthest vertex sits at `radius`,
/// wound outward again and then annotated with every derived property.
#[derive(Debug, Clone, Copy)]
pub struct MakeRegularPolyhedron {
    face_count: usize,
    radius: f64,
}

impl MakeRegularPolyhedron {
    /// Creates a new `MakeRegularPolyhedron` operation.
    #[must_use]
    pub fn new(face_count: usize, radius: f64) -> Self {
        Self { face_count, radius }
    }

    /// Executes the operation, returning the annotated mesh.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        let (vertices, faces) = match self.face_count {
            4 => seeds::tetrahedron(),
            6 => seeds::cube(),
            8 => seeds::octahedron(),
            12 => seeds::dodecahedron(),
            20 => seeds::icosahedron(),
            other => {
                debug!(face_count = other, "unsupported face count, building pyramid");
                seeds::pyramid()
            }
        };

        let radius = if self.radius > 0.0 {
            self.radius
        } else {
            DEFAULT_RADIUS
        };

        let mut mesh = Polyhedron::from_parts(vertices, faces);
        EnsureOutwardWinding::new().execute(&mut mesh);
        ScaleToRadius::new(radius).execute(&mut mesh);
        EnsureOutwardWinding::new().execute(&mut mesh);
        ComputeProperties::new().execute(&mut mesh);
        mesh
    }
}
