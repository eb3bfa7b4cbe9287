use super::{Point3, Vector3, RAY_EPSILON, TOLERANCE};

/// Relationship of a ray's supporting line with a plane.
#[derive(Debug, Clone, Copy)]
pub enum LinePlaneRelation {
    /// Line crosses the plane at parameter `t`.
    Point { point: Point3, t: f64 },
    /// Line is parallel to the plane (within `RAY_EPSILON`).
    Parallel,
}

/// Intersects the line `origin + t * dir` with the plane through
/// `plane_point` with normal `normal`.
///
/// `t` may be negative; callers decide which side of the origin they accept.
#[must_use]
pub fn line_plane_intersect(
    origin: &Point3,
    dir: &Vector3,
    plane_point: &Point3,
    normal: &Vector3,
) -> LinePlaneRelation {
    let denom = normal.dot(dir);
    if denom.abs() < RAY_EPSILON {
        return LinePlaneRelation::Parallel;
    }
    let t = normal.dot(&(plane_point - origin)) / denom;
    LinePlaneRelation::Point {
        point: origin + dir * t,
        t,
    }
}

/// Real roots of `a*t^2 + b*t + c = 0`, ascending.
///
/// A leading coefficient below `TOLERANCE` degrades to the linear solution;
/// a negative discriminant yields no roots. Roots come from the
/// cancellation-free form, so a small `a` still gives accurate near roots.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < TOLERANCE {
        if b.abs() < TOLERANCE {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let t1 = q / a;
    let t2 = if q.abs() > 0.0 { c / q } else { t1 };
    if t1 <= t2 {
        vec![t1, t2]
    } else {
        vec![t2, t1]
    }
}
