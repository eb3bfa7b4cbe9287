use super::cylinder::cap_hit;
use super::{longitude, nearest, FaceHit};
use crate::geometry::Ray;
use crate::math::intersect_3d::solve_quadratic;
use crate::math::Point2;

/// Radius shrink per unit height: base radius 0.5 over height 1.
const SLOPE: f64 = 0.5;

/// Side (face 0) of `x^2 + y^2 = k^2 (1 - z)^2` for `z` in `[0, 1]`, plus the
/// base disc at `z = 0` (face 1). The apex is open.
pub(super) fn intersect(ray: &Ray) -> Option<FaceHit> {
    let o = ray.origin();
    let d = ray.direction();
    let k2 = SLOPE * SLOPE;
    let h = 1.0 - o.z;

    let a = d.x * d.x + d.y * d.y - k2 * d.z * d.z;
    let b = 2.0 * (o.x * d.x + o.y * d.y + k2 * h * d.z);
    let c = o.x * o.x + o.y * o.y - k2 * h * h;

    let side = solve_quadratic(a, b, c).into_iter().filter_map(|t| {
        let point = ray.at(t);
        (0.0..=1.0).contains(&point.z).then(|| FaceHit {
            t,
            face: 0,
            uv: Point2::new(longitude(&point), point.z),
            point,
        })
    });
    nearest(side.chain(cap_hit(ray, 0.0)))
}
