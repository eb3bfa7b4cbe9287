use std::f64::consts::PI;

use super::{longitude, nearest, FaceHit};
use crate::geometry::Ray;
use crate::math::intersect_3d::solve_quadratic;
use crate::math::{Point2, Point3};

const RADIUS: f64 = 0.5;

pub(super) fn intersect(ray: &Ray) -> Option<FaceHit> {
    let o = ray.origin().coords;
    let d = ray.direction();

    let roots = solve_quadratic(d.dot(d), 2.0 * o.dot(d), o.dot(&o) - RADIUS * RADIUS);
    nearest(roots.into_iter().map(|t| {
        let point = ray.at(t);
        FaceHit {
            t,
            face: 0,
            uv: surface_uv(&point),
            point,
        }
    }))
}

/// Longitude/latitude coordinates with the poles on the Z axis.
///
/// `v` runs from 0 at the +Z pole to 1 at the -Z pole.
fn surface_uv(point: &Point3) -> Point2 {
    let lat = (point.z / RADIUS).clamp(-1.0, 1.0).asin();
    Point2::new(longitude(point), (0.5 - lat / PI).clamp(0.0, 1.0))
}
