pub mod intersect_3d;
pub mod polygon_2d;
pub mod polygon_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Threshold for parallel rays and the smallest accepted hit distance.
pub const RAY_EPSILON: f64 = 1e-6;

/// Normal used whenever a face is too small or too degenerate to have one.
#[must_use]
pub fn default_normal() -> Vector3 {
    Vector3::y()
}

/// Applies a 4x4 matrix to a point (homogeneous weight 1).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Applies a 4x4 matrix to a direction (homogeneous weight 0).
#[must_use]
pub fn transform_direction(matrix: &Matrix4, dir: &Vector3) -> Vector3 {
    let v = matrix * nalgebra::Vector4::new(dir.x, dir.y, dir.z, 0.0);
    Vector3::new(v.x, v.y, v.z)
}

/// Arithmetic mean of a set of points, or the origin for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Point3 {
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return Point3::origin();
    }
    Point3::from(sum / count as f64)
}
