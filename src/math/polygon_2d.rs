use super::{Point2, RAY_EPSILON};

/// Axis-aligned rectangle in a 2D frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Lower-left corner.
    pub min: Point2,
    /// Upper-right corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Computes the bounds of a point set. An empty set yields a zero rectangle.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                min: Point2::origin(),
                max: Point2::origin(),
            };
        };
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    /// Maps `point` into `[0, 1]^2` relative to the rectangle, clamping.
    ///
    /// Extents thinner than `RAY_EPSILON` are widened to it, so slivers
    /// never divide by zero.
    #[must_use]
    pub fn normalize(&self, point: &Point2) -> Point2 {
        let du = (self.max.x - self.min.x).max(RAY_EPSILON);
        let dv = (self.max.y - self.min.y).max(RAY_EPSILON);
        Point2::new(
            ((point.x - self.min.x) / du).clamp(0.0, 1.0),
            ((point.y - self.min.y) / dv).clamp(0.0, 1.0),
        )
    }
}

/// Even-odd (crossing number) point-in-polygon test.
///
/// Casts a ray from `point` towards +X and toggles on every polygon edge it
/// crosses. Works for concave polygons; points exactly on the boundary may
/// land on either side.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
