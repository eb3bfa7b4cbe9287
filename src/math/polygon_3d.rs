use super::polygon_2d::Bounds2;
use super::{default_normal, Point2, Point3, Vector3, RAY_EPSILON, TOLERANCE};

/// Computes a polygon normal with Newell's method.
///
/// Sums the cross-product contributions of every edge, so the result stays
/// stable for slightly non-planar or nearly degenerate polygons. Returns
/// `(0, 1, 0)` for polygons with fewer than three corners or a vanishing sum.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    if n < 3 {
        return default_normal();
    }

    let mut normal = Vector3::zeros();
    for i in 0..n {
        let cur = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (cur.y - next.y) * (cur.z + next.z);
        normal.y += (cur.z - next.z) * (cur.x + next.x);
        normal.z += (cur.x - next.x) * (cur.y + next.y);
    }

    let len = normal.norm();
    if len > 1e-8 {
        normal / len
    } else {
        default_normal()
    }
}

/// Builds an orthonormal `(tangent, bitangent)` pair on the plane of `normal`.
///
/// The reference axis is +Y unless the normal is nearly parallel to it, in
/// which case +X is used. `tangent x bitangent == normal`, so counter-clockwise
/// order in the frame matches counter-clockwise order around the normal.
#[must_use]
pub fn tangent_frame(normal: &Vector3) -> (Vector3, Vector3) {
    let reference = if normal.y.abs() < 0.9 {
        Vector3::y()
    } else {
        Vector3::x()
    };
    let tangent = reference.cross(normal).normalize();
    let bitangent = normal.cross(&tangent).normalize();
    (tangent, bitangent)
}

/// A 2D coordinate system erected on a polygon's plane.
///
/// Points are flattened relative to `origin` along `tangent` and `bitangent`.
/// `bounds` covers the flattened polygon and drives UV normalization.
#[derive(Debug, Clone)]
pub struct FaceFrame {
    /// Plane normal (Newell).
    pub normal: Vector3,
    /// Frame origin, the polygon's first corner.
    pub origin: Point3,
    /// First in-plane axis.
    pub tangent: Vector3,
    /// Second in-plane axis.
    pub bitangent: Vector3,
    /// Flattened polygon corners, in polygon order.
    pub polygon: Vec<Point2>,
    /// Bounding rectangle of `polygon`.
    pub bounds: Bounds2,
}

impl FaceFrame {
    /// Erects the frame for a polygon. Returns `None` for fewer than three corners.
    #[must_use]
    pub fn new(points: &[Point3]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let normal = newell_normal(points);
        let (tangent, bitangent) = tangent_frame(&normal);
        let origin = points[0];

        let polygon: Vec<Point2> = points
            .iter()
            .map(|p| {
                let d = p - origin;
                Point2::new(d.dot(&tangent), d.dot(&bitangent))
            })
            .collect();
        let bounds = Bounds2::from_points(&polygon);

        Some(Self {
            normal,
            origin,
            tangent,
            bitangent,
            polygon,
            bounds,
        })
    }

    /// Flattens a 3D point into frame coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let d = point - self.origin;
        Point2::new(d.dot(&self.tangent), d.dot(&self.bitangent))
    }

    /// Maps frame coordinates into `[0, 1]^2` against the polygon's bounds.
    #[must_use]
    pub fn uv(&self, flat: &Point2) -> Point2 {
        self.bounds.normalize(flat)
    }
}

/// Area of a polygon, triangulated as a fan from its first corner.
///
/// Sums `|e1 x e2| / 2` over the fan triangles, so each triangle contributes
/// a non-negative amount regardless of winding.
#[must_use]
pub fn fan_area(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let o = &points[0];
    points
        .windows(2)
        .skip(1)
        .map(|w| (w[0] - o).cross(&(w[1] - o)).norm() * 0.5)
        .sum()
}

/// Interior angle at `corner` between the edges towards `prev` and `next`.
///
/// Returns `None` when either edge has zero length.
#[must_use]
pub fn corner_angle(corner: &Point3, prev: &Point3, next: &Point3) -> Option<f64> {
    let a = prev - corner;
    let b = next - corner;
    let (la, lb) = (a.norm(), b.norm());
    if la < TOLERANCE || lb < TOLERANCE {
        return None;
    }
    Some((a.dot(&b) / (la * lb)).clamp(-1.0, 1.0).acos())
}

/// Unit normal of the triangle spanned by the first three corners.
///
/// Falls back to `(0, 1, 0)` for short or collinear input.
#[must_use]
pub fn three_point_normal(points: &[Point3]) -> Vector3 {
    if points.len() < 3 {
        return default_normal();
    }
    let n = (points[1] - points[0]).cross(&(points[2] - points[0]));
    let len = n.norm();
    if len < RAY_EPSILON * RAY_EPSILON {
        default_normal()
    } else {
        n / len
    }
}
