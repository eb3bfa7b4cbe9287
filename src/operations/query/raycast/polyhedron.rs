use super::{nearest, FaceHit};
use crate::geometry::Ray;
use crate::math::intersect_3d::{line_plane_intersect, LinePlaneRelation};
use crate::math::polygon_2d::point_in_polygon;
use crate::math::polygon_3d::FaceFrame;
use crate::topology::Polyhedron;

/// Tests every face: ray against the Newell plane, then an even-odd test in
/// the face's tangent frame. UVs use the same frame and bounds as
/// [`GenerateUvs`](crate::operations::properties::GenerateUvs).
pub(super) fn intersect(ray: &Ray, mesh: &Polyhedron) -> Option<FaceHit> {
    let hits = mesh.faces().iter().enumerate().filter_map(|(i, face)| {
        let frame = FaceFrame::new(&mesh.face_points(face))?;
        let LinePlaneRelation::Point { point, t } =
            line_plane_intersect(ray.origin(), ray.direction(), &frame.origin, &frame.normal)
        else {
            return None;
        };
        let flat = frame.project(&point);
        point_in_polygon(&flat, &frame.polygon).then(|| FaceHit {
            t,
            face: i,
            uv: frame.uv(&flat),
            point,
        })
    });
    nearest(hits)
}
