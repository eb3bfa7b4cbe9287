use crate::math::polygon_3d::fan_area;
use crate::topology::Polyhedron;

/// Computes the area of every face by fan triangulation from its first corner.
///
/// Faces with fewer than three corners get area 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputeFaceAreas;

impl ComputeFaceAreas {
    /// Creates a new `ComputeFaceAreas` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, updating every face area of `mesh`.
    pub fn execute(&self, mesh: &mut Polyhedron) {
        let areas: Vec<f64> = mesh
            .faces()
            .iter()
            .map(|face| fan_area(&mesh.face_points(face)))
            .collect();

        for (face, area) in mesh.faces_mut().iter_mut().zip(areas) {
            face.area = area;
        }
    }

    /// Sum of all face areas.
    #[must_use]
    pub fn total(mesh: &Polyhedron) -> f64 {
        mesh.faces().iter().map(|f| f.area()).sum()
    }
}
