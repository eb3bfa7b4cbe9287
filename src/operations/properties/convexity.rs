use crate::math::polygon_3d::three_point_normal;
use crate::math::TOLERANCE;
use crate::topology::Polyhedron;

/// Flags each face, and the mesh as a whole, as convex or not.
///
/// A face is convex when every vertex not on it lies on one side of its plane.
/// The first vertex off the plane fixes the reference side; any vertex on the
/// other side clears both the face flag and the mesh flag. Vertices within
/// `TOLERANCE` of the plane are ignored. Faces with fewer than three corners
/// count as convex. Cost is `O(faces * vertices)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyzeConvexity;

impl AnalyzeConvexity {
    /// Creates a new `AnalyzeConvexity` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the analysis, updating the face and mesh convexity flags.
    pub fn execute(&self, mesh: &mut Polyhedron) {
        let flags: Vec<bool> = mesh
            .faces()
            .iter()
            .map(|face| {
                if face.len() < 3 {
                    return true;
                }
                let points = mesh.face_points(face);
                let normal = three_point_normal(&points);
                let anchor = points[0];

                let mut reference: Option<bool> = None;
                for (i, v) in mesh.vertices().iter().enumerate() {
                    if face.indices().contains(&i) {
                        continue;
                    }
                    let dist = normal.dot(&(v - anchor));
                    if dist.abs() < TOLERANCE {
                        continue;
                    }
                    let side = dist > 0.0;
                    match reference {
                        None => reference = Some(side),
                        Some(r) if r != side => return false,
                        Some(_) => {}
                    }
                }
                true
            })
            .collect();

        mesh.is_convex = flags.iter().all(|&f| f);
        for (face, convex) in mesh.faces_mut().iter_mut().zip(flags) {
            face.convex = convex;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{
        MakeCraterPolyhedron, MakeCustomPolyhedron, MakeRegularPolyhedron,
    };
    use crate::topology::MeshLimits;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn platonic_solids_are_convex() {
        for count in [4, 6, 8, 12, 20] {
            let mesh = MakeRegularPolyhedron::new(count, 1.0).execute();
            assert!(mesh.is_convex(), "{count}-face solid should be convex");
            assert!(mesh.faces().iter().all(|f| f.is_convex()));
        }
    }

    #[test]
    fn crater_breaks_convexity() {
        let mesh = MakeCraterPolyhedron::new(20, 1.0, 0.5).execute();
        assert!(!mesh.is_convex());
        assert!(mesh.faces().iter().any(|f| !f.is_convex()));
    }

    #[test]
    fn dented_bipyramid_is_not_convex() {
        // Square bipyramid whose bottom apex is pushed up above the equator.
        let mesh = MakeCustomPolyhedron::new(
            vec![
                p(1.0, 0.0, 0.0),
                p(0.0, 0.0, 1.0),
                p(-1.0, 0.0, 0.0),
                p(0.0, 0.0, -1.0),
                p(0.0, 2.0, 0.0),
                p(0.0, 1.0, 0.0),
            ],
            vec![
                vec![0, 4, 1],
                vec![1, 4, 2],
                vec![2, 4, 3],
                vec![3, 4, 0],
                vec![0, 1, 5],
                vec![1, 2, 5],
                vec![2, 3, 5],
                vec![3, 0, 5],
            ],
        )
        .execute(&MeshLimits::default())
        .unwrap();
        assert!(!mesh.is_convex());
    }
}
