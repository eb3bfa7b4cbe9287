use crate::geometry::Primitive;
use crate::math::{transform_point, Matrix4, Point3};
use crate::operations::query::Aabb;

/// The local unit cube `[-0.5, 0.5]^3`.
fn unit_box() -> Aabb {
    Aabb {
        min: Point3::new(-0.5, -0.5, -0.5),
        max: Point3::new(0.5, 0.5, 0.5),
    }
}

/// Unit box around an analytic primitive. Cylinder and cone sit on `z = 0`.
fn local_box(primitive: &Primitive) -> Aabb {
    match primitive {
        Primitive::Cylinder | Primitive::Cone => Aabb {
            min: Point3::new(-0.5, -0.5, 0.0),
            max: Point3::new(0.5, 0.5, 1.0),
        },
        _ => unit_box(),
    }
}

/// Coarse world-space bounds of an object, stored as eight corners.
///
/// For a polyhedron the corners are those of the world-space box around the
/// transformed vertices. For the analytic primitives they are the transformed
/// corners of the primitive's local unit box, which under rotation no longer
/// form an axis-aligned box; containment still tests against their
/// axis-aligned hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionZone {
    corners: [Point3; 8],
}

impl Default for CollisionZone {
    fn default() -> Self {
        Self {
            corners: unit_box().corners(),
        }
    }
}

impl CollisionZone {
    /// Computes the zone of `primitive` placed by `transform`.
    #[must_use]
    pub fn new(primitive: &Primitive, transform: &Matrix4) -> Self {
        let mut zone = Self::default();
        zone.update(primitive, transform);
        zone
    }

    /// Recomputes the corners after a change of transform or geometry.
    pub fn update(&mut self, primitive: &Primitive, transform: &Matrix4) {
        let world_box = primitive.as_polyhedron().and_then(|mesh| {
            let world: Vec<Point3> = mesh
                .vertices()
                .iter()
                .map(|v| transform_point(transform, v))
                .collect();
            Aabb::from_points(&world)
        });

        self.corners = match world_box {
            Some(aabb) => aabb.corners(),
            None => local_box(primitive)
                .corners()
                .map(|c| transform_point(transform, &c)),
        };
    }

    /// The eight stored corners.
    #[must_use]
    pub fn corners(&self) -> &[Point3; 8] {
        &self.corners
    }

    /// Axis-aligned hull of the corners.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let first = self.corners[0];
        self.corners[1..].iter().fold(
            Aabb {
                min: first,
                max: first,
            },
            |acc, c| Aabb {
                min: acc.min.inf(c),
                max: acc.max.sup(c),
            },
        )
    }

    /// Inclusive containment test against [`bounds`](Self::bounds).
    #[must_use]
    pub fn is_point_inside(&self, point: &Point3) -> bool {
        self.bounds().contains(point)
    }
}
