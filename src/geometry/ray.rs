use crate::error::{GeometryError, Result};
use crate::math::{
    transform_direction, transform_point, Matrix4, Point2, Point3, Vector3, TOLERANCE,
};

/// A half-line `origin + t * direction` with `t >= 0`.
///
/// The direction is always unit length, so `t` measures distance in the
/// ray's own coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a new ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE || !len.is_finite() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Builds a world-space picking ray through a cursor position.
    ///
    /// `cursor` is in window pixels with y growing downward and `viewport` is
    /// the window size in pixels. The cursor is unprojected at the near and
    /// far depth planes through `(projection * view)^-1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the view-projection matrix is singular or the
    /// viewport is empty.
    pub fn from_screen(
        cursor: Point2,
        viewport: (f64, f64),
        view: &Matrix4,
        projection: &Matrix4,
    ) -> Result<Self> {
        let (width, height) = viewport;
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::Degenerate("viewport has no area".into()).into());
        }
        let inv_vp = (projection * view)
            .try_inverse()
            .ok_or(GeometryError::SingularTransform)?;

        let ndc_x = cursor.x / width * 2.0 - 1.0;
        let ndc_y = 1.0 - cursor.y / height * 2.0;

        let unproject = |depth: f64| -> Result<Point3> {
            let v = inv_vp * nalgebra::Vector4::new(ndc_x, ndc_y, depth, 1.0);
            if v.w.abs() < TOLERANCE {
                return Err(GeometryError::Degenerate("point at infinity".into()).into());
            }
            Ok(Point3::new(v.x / v.w, v.y / v.w, v.z / v.w))
        };

        let near = unproject(-1.0)?;
        let far = unproject(1.0)?;
        Self::new(near, far - near)
    }

    /// Returns the origin point of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Evaluates the ray at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Maps a world-space ray into the local space of `world_from_local`.
    ///
    /// The origin is transformed as a point and the direction with zero
    /// homogeneous weight, then re-normalized. Returns `None` when the
    /// transform cannot be inverted or squashes the direction to zero.
    #[must_use]
    pub fn to_local(&self, world_from_local: &Matrix4) -> Option<Self> {
        let local_from_world = world_from_local.try_inverse()?;
        let origin = transform_point(&local_from_world, &self.origin);
        let direction = transform_direction(&local_from_world, &self.direction);
        Self::new(origin, direction).ok()
    }
}
