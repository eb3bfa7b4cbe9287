use std::f64::consts::TAU;

use crate::math::polygon_3d::corner_angle;
use crate::topology::Polyhedron;

/// Computes the angle-deficit curvature of every vertex.
///
/// For each vertex, the interior angles of all incident faces (at the first
/// occurrence of the vertex in each face) are summed and subtracted from
/// `2*pi`. Vertices that touch no face with at least three corners keep
/// curvature 0. Over a closed genus-0 mesh the deficits sum to `4*pi`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputeVertexCurvatures;

impl ComputeVertexCurvatures {
    /// Creates a new `ComputeVertexCurvatures` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, replacing the curvature list of `mesh`.
    pub fn execute(&self, mesh: &mut Polyhedron) {
        let vertices = mesh.vertices();
        let mut angle_sums = vec![0.0_f64; vertices.len()];
        let mut touched = vec![false; vertices.len()];

        for face in mesh.faces() {
            let n = face.len();
            if n < 3 {
                continue;
            }
            let idx = face.indices();
            for (i, &v) in idx.iter().enumerate() {
                // Only the first occurrence of a vertex in a face counts.
                if idx[..i].contains(&v) {
                    continue;
                }
                let prev = idx[(i + n - 1) % n];
                let next = idx[(i + 1) % n];
                let (Some(corner), Some(a), Some(b)) =
                    (vertices.get(v), vertices.get(prev), vertices.get(next))
                else {
                    continue;
                };
                if let Some(angle) = corner_angle(corner, a, b) {
                    angle_sums[v] += angle;
                    touched[v] = true;
                }
            }
        }

        mesh.vertex_curvatures = angle_sums
            .into_iter()
            .zip(touched)
            .map(|(sum, hit)| if hit { TAU - sum } else { 0.0 })
            .collect();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeCustomPolyhedron, MakeRegularPolyhedron};
    use crate::topology::MeshLimits;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn cube_corners_have_half_pi_deficit() {
        let mesh = MakeRegularPolyhedron::new(6, 1.0).execute();
        for &k in mesh.vertex_curvatures() {
            assert_relative_eq!(k, FRAC_PI_2, epsilon = 1e-9);
        }
    }

    #[test]
    fn deficits_sum_to_four_pi() {
        for count in [4, 6, 8, 12, 20, 5] {
            let mesh = MakeRegularPolyhedron::new(count, 0.5).execute();
            let total: f64 = mesh.vertex_curvatures().iter().sum();
            assert_relative_eq!(total, 4.0 * PI, epsilon = 1e-9);
        }
    }

    #[test]
    fn isolated_vertex_keeps_zero_curvature() {
        let mesh = MakeCustomPolyhedron::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(5.0, 5.0, 5.0),
            ],
            vec![vec![0, 1, 2]],
        )
        .execute(&MeshLimits::default())
        .unwrap();
        assert_eq!(mesh.vertex_curvatures().len(), 4);
        assert_eq!(mesh.vertex_curvatures()[3], 0.0);
        // The right-angle corner of a lone triangle is far from flat.
        assert_relative_eq!(mesh.vertex_curvatures()[0], 2.0 * PI - FRAC_PI_2, epsilon = 1e-12);
    }
}
