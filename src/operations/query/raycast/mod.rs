//! Nearest-hit ray casting against every primitive kind.
//!
//! All casts work in the primitive's local frame. Every hit satisfies
//! `t > RAY_EPSILON`, carries a face index below the primitive's face count,
//! and a UV in `[0, 1]^2`. A miss is `None`.

mod cone;
mod cube;
mod cylinder;
mod polyhedron;
mod sphere;

pub(crate) use cube::face_uv as cube_face_uv;

use std::f64::consts::TAU;

use crate::geometry::{Primitive, Ray};
use crate::math::{Point2, Point3, RAY_EPSILON};

/// A ray hit on one face of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    /// Distance along the ray.
    pub t: f64,
    /// Index of the face that was hit.
    pub face: usize,
    /// Texture coordinate of the hit on that face.
    pub uv: Point2,
    /// Hit position in the frame the ray was cast in.
    pub point: Point3,
}

/// Casts an object-local ray against a primitive.
#[derive(Debug, Clone, Copy)]
pub struct RaycastPrimitive<'a> {
    primitive: &'a Primitive,
}

impl<'a> RaycastPrimitive<'a> {
    /// Creates a new `RaycastPrimitive` query.
    #[must_use]
    pub fn new(primitive: &'a Primitive) -> Self {
        Self { primitive }
    }

    /// Executes the query, returning the nearest hit in front of the origin.
    #[must_use]
    pub fn execute(&self, ray: &Ray) -> Option<FaceHit> {
        match self.primitive {
            Primitive::Cube => cube::intersect(ray),
            Primitive::Sphere => sphere::intersect(ray),
            Primitive::Cylinder => cylinder::intersect(ray),
            Primitive::Cone => cone::intersect(ray),
            Primitive::Polyhedron(mesh) => polyhedron::intersect(ray, mesh),
        }
    }
}

/// Keeps the candidate with the smallest `t`.
fn nearest(hits: impl IntoIterator<Item = FaceHit>) -> Option<FaceHit> {
    hits.into_iter()
        .filter(|h| h.t > RAY_EPSILON && h.t.is_finite())
        .min_by(|a, b| a.t.total_cmp(&b.t))
}

/// Longitude around +Z mapped to `[0, 1]`, seam on the -X side.
fn longitude(point: &Point3) -> f64 {
    (0.5 + point.y.atan2(point.x) / TAU).clamp(0.0, 1.0)
}

/// Planar mapping of a radius-0.5 disc onto the unit square.
fn disc_uv(point: &Point3) -> Point2 {
    Point2::new(
        (0.5 + point.x).clamp(0.0, 1.0),
        (0.5 + point.y).clamp(0.0, 1.0),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::MakeRegularPolyhedron;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn every_kind_honours_the_hit_contract() {
        let primitives = [
            Primitive::Cube,
            Primitive::Sphere,
            Primitive::Cylinder,
            Primitive::Cone,
            Primitive::from(MakeRegularPolyhedron::new(12, 0.5).execute()),
        ];
        let rays = [
            Ray::new(p(0.1, 0.05, -3.0), Vector3::z()).unwrap(),
            Ray::new(p(-3.0, 0.1, 0.3), Vector3::new(1.0, 0.02, 0.01)).unwrap(),
            Ray::new(p(2.0, 2.0, 2.0), Vector3::new(-1.0, -1.0, -1.2)).unwrap(),
        ];
        for primitive in &primitives {
            for ray in &rays {
                let Some(hit) = RaycastPrimitive::new(primitive).execute(ray) else {
                    continue;
                };
                assert!(hit.t > 0.0);
                assert!(hit.face < primitive.face_count(), "{}", primitive.name());
                assert!((0.0..=1.0).contains(&hit.uv.x));
                assert!((0.0..=1.0).contains(&hit.uv.y));
                assert!((ray.at(hit.t) - hit.point).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn nearest_skips_hits_behind_origin() {
        let hit = |t| FaceHit {
            t,
            face: 0,
            uv: Point2::origin(),
            point: Point3::origin(),
        };
        let best = nearest([hit(-1.0), hit(3.0), hit(2.0), hit(f64::NAN)]).unwrap();
        assert_eq!(best.t, 2.0);
        assert!(nearest([hit(-1.0), hit(0.0)]).is_none());
    }
}
