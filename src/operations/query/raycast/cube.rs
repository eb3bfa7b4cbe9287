use super::FaceHit;
use crate::geometry::Ray;
use crate::math::{Point2, Point3, RAY_EPSILON};

const HALF: f64 = 0.5;

/// Slab test against `[-0.5, 0.5]^3`.
///
/// The axis whose slab produced the entry distance picks the face:
/// `axis * 2`, plus one when the ray enters through the negative side.
/// Rays starting inside the box have no entry and miss.
pub(super) fn intersect(ray: &Ray) -> Option<FaceHit> {
    let origin = ray.origin();
    let dir = ray.direction();

    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;
    let mut face = None;

    for axis in 0..3 {
        let (o, d) = (origin[axis], dir[axis]);
        if d.abs() < RAY_EPSILON {
            if o.abs() > HALF {
                return None;
            }
            continue;
        }
        let (t1, t2) = {
            let a = (-HALF - o) / d;
            let b = (HALF - o) / d;
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        if t1 > t_near {
            t_near = t1;
            face = Some(axis * 2 + usize::from(d > 0.0));
        }
        t_far = t_far.min(t2);
        if t_near > t_far {
            return None;
        }
    }

    let face = face?;
    if t_near <= RAY_EPSILON {
        return None;
    }
    let point = ray.at(t_near);
    Some(FaceHit {
        t: t_near,
        face,
        uv: face_uv(face, &point),
        point,
    })
}

/// Texture coordinate of a point on cube face `face`.
///
/// Faces are ordered `+X, -X, +Y, -Y, +Z, -Z`; each picks its two in-plane
/// axes in a fixed order and shifts them into `[0, 1]`.
pub(crate) fn face_uv(face: usize, point: &Point3) -> Point2 {
    let (u, v) = match face {
        0 => (point.y, point.z),
        1 => (point.z, point.y),
        2 => (point.z, point.x),
        3 => (point.x, point.z),
        4 => (point.x, point.y),
        _ => (point.y, point.x),
    };
    Point2::new((u + HALF).clamp(0.0, 1.0), (v + HALF).clamp(0.0, 1.0))
}
