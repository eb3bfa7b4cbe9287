use crate::math::polygon_3d::FaceFrame;
use crate::math::Point2;
use crate::topology::Polyhedron;

/// Generates planar texture coordinates for every face corner.
///
/// Each face is flattened into its own tangent frame and the corners are
/// normalized against the flattened bounding rectangle, so every coordinate
/// lands in `[0, 1]^2`. Faces with fewer than three corners get zeros.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateUvs;

impl GenerateUvs {
    /// Creates a new `GenerateUvs` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, replacing every face's UV list.
    pub fn execute(&self, mesh: &mut Polyhedron) {
        let uvs: Vec<Vec<Point2>> = mesh
            .faces()
            .iter()
            .map(|face| match FaceFrame::new(&mesh.face_points(face)) {
                Some(frame) => frame.polygon.iter().map(|p| frame.uv(p)).collect(),
                None => vec![Point2::origin(); face.len()],
            })
            .collect();

        for (face, face_uvs) in mesh.faces_mut().iter_mut().zip(uvs) {
            face.uvs = face_uvs;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeRegularPolyhedron;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn one_uv_per_corner_inside_unit_square() {
        for count in [4, 6, 8, 12, 20] {
            let mesh = MakeRegularPolyhedron::new(count, 0.5).execute();
            for face in mesh.faces() {
                assert_eq!(face.uvs().len(), face.len());
                for uv in face.uvs() {
                    assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
                }
            }
        }
    }

    #[test]
    fn square_face_spans_full_unit_square() {
        let mut mesh = Polyhedron::from_parts(
            vec![
                p(0.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(0.0, 2.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        );
        GenerateUvs::new().execute(&mut mesh);

        let uvs = mesh.faces()[0].uvs();
        let (mut min, mut max) = (Point2::new(1.0, 1.0), Point2::new(0.0, 0.0));
        for uv in uvs {
            min = min.inf(uv);
            max = max.sup(uv);
        }
        assert_relative_eq!(min, Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(max, Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn short_face_gets_zero_uvs() {
        let mut mesh = Polyhedron::from_parts(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)],
            vec![vec![0, 1]],
        );
        GenerateUvs::new().execute(&mut mesh);
        assert_eq!(mesh.faces()[0].uvs(), &[Point2::origin(), Point2::origin()]);
    }
}
