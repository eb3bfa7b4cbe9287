use crate::math::polygon_3d::newell_normal;
use crate::topology::Polyhedron;

/// Orients every face so its Newell normal points away from the mesh centroid.
///
/// A face whose normal points towards the centroid (positive dot product with
/// `centroid - first_corner`) has its corner order reversed. Faces with fewer
/// than three corners are skipped. Only meaningful for meshes that are
/// star-shaped around their centroid.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnsureOutwardWinding;

impl EnsureOutwardWinding {
    /// Creates a new `EnsureOutwardWinding` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, reversing inward-facing faces of `mesh`.
    ///
    /// Returns the number of faces that were reversed.
    pub fn execute(&self, mesh: &mut Polyhedron) -> usize {
        if mesh.vertex_count() == 0 || mesh.face_count() == 0 {
            return 0;
        }
        let center = mesh.centroid();

        let inward: Vec<bool> = mesh
            .faces()
            .iter()
            .map(|face| {
                if face.len() < 3 {
                    return false;
                }
                let points = mesh.face_points(face);
                newell_normal(&points).dot(&(center - points[0])) > 0.0
            })
            .collect();

        let mut flipped = 0;
        for (face, flip) in mesh.faces_mut().iter_mut().zip(inward) {
            if flip {
                face.reverse();
                flipped += 1;
            }
        }
        flipped
    }
}
