use crate::math::polygon_3d::three_point_normal;
use crate::math::{centroid, default_normal, Vector3};
use crate::topology::Polyhedron;

/// Computes one unit normal per face.
///
/// Uses the cross product of the first three corners. For faces with more
/// than three corners the sign is checked against the direction from the mesh
/// centroid to the face centroid and flipped if it points back inward, which
/// catches a concave first corner. Faces with fewer than three corners get
/// `(0, 1, 0)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputeNormals;

impl ComputeNormals {
    /// Creates a new `ComputeNormals` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, updating every face normal of `mesh`.
    pub fn execute(&self, mesh: &mut Polyhedron) {
        let mesh_center = mesh.centroid();

        let normals: Vec<Vector3> = mesh
            .faces()
            .iter()
            .map(|face| {
                if face.len() < 3 {
                    return default_normal();
                }
                let points = mesh.face_points(face);
                let normal = three_point_normal(&points);
                if points.len() > 3 {
                    let outward = centroid(&points) - mesh_center;
                    if normal.dot(&outward) < 0.0 {
                        return -normal;
                    }
                }
                normal
            })
            .collect();

        for (face, normal) in mesh.faces_mut().iter_mut().zip(normals) {
            face.normal = normal;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::topology::Polyhedron;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn triangle_normal_follows_winding() {
        let mut mesh = Polyhedron::from_parts(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![vec![0, 1, 2], vec![0, 2, 1]],
        );
        ComputeNormals::new().execute(&mut mesh);
        assert_relative_eq!(*mesh.faces()[0].normal(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(*mesh.faces()[1].normal(), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn quad_normal_is_forced_outward() {
        // Top quad of a box wound clockwise seen from above; the centroid test
        // must still report +Y.
        let mut mesh = Polyhedron::from_parts(
            vec![
                p(-1.0, 1.0, -1.0),
                p(1.0, 1.0, -1.0),
                p(1.0, 1.0, 1.0),
                p(-1.0, 1.0, 1.0),
                p(0.0, -1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        );
        ComputeNormals::new().execute(&mut mesh);
        assert!(mesh.faces()[0].normal().y > 0.99);
    }

    #[test]
    fn short_face_gets_default_normal() {
        let mut mesh = Polyhedron::from_parts(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)],
            vec![vec![0, 1]],
        );
        ComputeNormals::new().execute(&mut mesh);
        assert_eq!(*mesh.faces()[0].normal(), Vector3::y());
    }
}
