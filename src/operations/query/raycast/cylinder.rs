use super::{disc_uv, longitude, nearest, FaceHit};
use crate::geometry::Ray;
use crate::math::intersect_3d::{line_plane_intersect, solve_quadratic, LinePlaneRelation};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

const RADIUS: f64 = 0.5;

/// Side (face 0) as a circle in XY restricted to `z` in `[0, 1]`, plus the
/// two end discs (both face 1).
pub(super) fn intersect(ray: &Ray) -> Option<FaceHit> {
    let mut hits = side_hits(ray);
    hits.extend(cap_hit(ray, 0.0));
    hits.extend(cap_hit(ray, 1.0));
    nearest(hits)
}

/// Solves `x^2 + y^2 = r^2` along the ray and keeps roots with `z` in `[0, 1]`.
fn side_hits(ray: &Ray) -> Vec<FaceHit> {
    let o = ray.origin();
    let d = ray.direction();
    let a = d.x * d.x + d.y * d.y;
    // Axis-parallel rays never cross the side.
    if a < TOLERANCE {
        return Vec::new();
    }
    let b = 2.0 * (o.x * d.x + o.y * d.y);
    let c = o.x * o.x + o.y * o.y - RADIUS * RADIUS;
    solve_quadratic(a, b, c)
        .into_iter()
        .filter_map(|t| {
            let point = ray.at(t);
            (0.0..=1.0).contains(&point.z).then(|| FaceHit {
                t,
                face: 0,
                uv: Point2::new(longitude(&point), point.z),
                point,
            })
        })
        .collect()
}

/// End disc of radius 0.5 in the plane `z = height`.
pub(super) fn cap_hit(ray: &Ray, height: f64) -> Option<FaceHit> {
    let plane_point = Point3::new(0.0, 0.0, height);
    let LinePlaneRelation::Point { point, t } =
        line_plane_intersect(ray.origin(), ray.direction(), &plane_point, &Vector3::z())
    else {
        return None;
    };
    (point.x * point.x + point.y * point.y <= RADIUS * RADIUS).then(|| FaceHit {
        t,
        face: 1,
        uv: disc_uv(&point),
        point,
    })
}
