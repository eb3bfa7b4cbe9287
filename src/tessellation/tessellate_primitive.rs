use std::f64::consts::{PI, TAU};

use crate::error::Result;
use crate::geometry::Primitive;
use crate::math::{Point2, Point3, Vector3};
use crate::operations::query::cube_face_uv;
use crate::topology::Polyhedron;

use super::{TessellateFace, TessellationParams, TriangleMesh};

const RADIUS: f64 = 0.5;

/// Tessellates any primitive into a triangle mesh for drawing.
///
/// Every triangle is tagged with the face it belongs to, numbered the same way
/// as ray hits, and every UV follows the ray-hit convention of that face, so
/// a texel painted through a pick lands where it is drawn.
pub struct TessellatePrimitive {
    params: TessellationParams,
}

impl TessellatePrimitive {
    /// Creates a new `TessellatePrimitive` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` or `rings` exceeds
    /// [`MAX_GRID_DIVISIONS`](super::MAX_GRID_DIVISIONS), or if a polyhedron
    /// face cannot be triangulated.
    pub fn execute(&self, primitive: &Primitive) -> Result<TriangleMesh> {
        self.params.check()?;
        let segments = self.params.segments.max(3);
        let rings = self.params.rings.max(1);
        match primitive {
            Primitive::Cube => Ok(cube()),
            Primitive::Sphere => Ok(sphere(segments)),
            Primitive::Cylinder => Ok(tapered(segments, rings, false)),
            Primitive::Cone => Ok(tapered(segments, rings, true)),
            Primitive::Polyhedron(mesh) => polyhedron(mesh),
        }
    }
}

fn polyhedron(mesh: &Polyhedron) -> Result<TriangleMesh> {
    let mut combined = TriangleMesh::default();
    for (i, face) in mesh.faces().iter().enumerate() {
        if face.len() < 3 {
            continue;
        }
        combined.merge(&TessellateFace::new(mesh, i).execute()?);
    }
    Ok(combined)
}

/// Outward normal and the two in-plane axes of each cube face, in face order.
fn cube_axes() -> [(Vector3, Vector3, Vector3); 6] {
    let (x, y, z) = (Vector3::x(), Vector3::y(), Vector3::z());
    [
        (x, y, z),
        (-x, z, y),
        (y, z, x),
        (-y, x, z),
        (z, x, y),
        (-z, y, x),
    ]
}

#[allow(clippy::cast_possible_truncation)]
fn cube() -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    for (face, (normal, u, v)) in cube_axes().into_iter().enumerate() {
        let base = mesh.vertices.len() as u32;
        let center = Point3::from(normal * RADIUS);
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = center + u * (su * RADIUS) + v * (sv * RADIUS);
            mesh.vertices.push(corner);
            mesh.normals.push(normal);
            mesh.uvs.push(cube_face_uv(face, &corner));
        }
        mesh.indices.push([base, base + 1, base + 2]);
        mesh.indices.push([base, base + 2, base + 3]);
        mesh.face_ids.extend([face, face]);
    }
    mesh
}

/// Longitude/latitude grid with the poles on the Z axis.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn sphere(segments: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    let cols = segments + 1;

    for j in 0..=segments {
        let v = j as f64 / segments as f64;
        let lat = PI * (0.5 - v);
        for i in 0..=segments {
            let u = i as f64 / segments as f64;
            let lon = TAU * u - PI;
            let normal = Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin());
            mesh.vertices.push(Point3::from(normal * RADIUS));
            mesh.normals.push(normal);
            mesh.uvs.push(Point2::new(u, v));
        }
    }

    for j in 0..segments {
        for i in 0..segments {
            let a = (j * cols + i) as u32;
            let b = (j * cols + i + 1) as u32;
            let c = ((j + 1) * cols + i + 1) as u32;
            let d = ((j + 1) * cols + i) as u32;
            // Pole rows collapse one triangle of each cell.
            if j + 1 < segments {
                mesh.indices.push([a, d, c]);
                mesh.face_ids.push(0);
            }
            if j > 0 {
                mesh.indices.push([a, c, b]);
                mesh.face_ids.push(0);
            }
        }
    }
    mesh
}

/// Cylinder (`cone == false`) or cone around +Z with `z` in `[0, 1]`.
///
/// The side is face 0, a `segments` by `rings` grid. The base disc at `z = 0`
/// and, for the cylinder, the top disc at `z = 1` are face 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn tapered(segments: usize, rings: usize, cone: bool) -> TriangleMesh {
    let radius_at = |z: f64| if cone { RADIUS * (1.0 - z) } else { RADIUS };
    // Outward normals tilt up by the cone's slope.
    let rise = if cone { RADIUS } else { 0.0 };

    let mut mesh = TriangleMesh::default();
    let cols = segments + 1;

    for k in 0..=rings {
        let z = k as f64 / rings as f64;
        let r = radius_at(z);
        for i in 0..=segments {
            let u = i as f64 / segments as f64;
            let theta = TAU * u - PI;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(Point3::new(r * cos, r * sin, z));
            mesh.normals.push(Vector3::new(cos, sin, rise).normalize());
            mesh.uvs.push(Point2::new(u, z));
        }
    }

    for k in 0..rings {
        for i in 0..segments {
            let a = (k * cols + i) as u32;
            let b = (k * cols + i + 1) as u32;
            let c = ((k + 1) * cols + i + 1) as u32;
            let d = ((k + 1) * cols + i) as u32;
            mesh.indices.push([a, b, c]);
            mesh.face_ids.push(0);
            // The top ring of a cone is the apex.
            if !(cone && k + 1 == rings) {
                mesh.indices.push([a, c, d]);
                mesh.face_ids.push(0);
            }
        }
    }

    mesh.merge(&disc(segments, 0.0));
    if !cone {
        mesh.merge(&disc(segments, 1.0));
    }
    mesh
}

/// Triangle fan for an end disc, facing -Z at `z = 0` and +Z otherwise.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn disc(segments: usize, z: f64) -> TriangleMesh {
    let up = z > 0.0;
    let normal = if up { Vector3::z() } else { -Vector3::z() };

    let mut mesh = TriangleMesh::default();
    mesh.vertices.push(Point3::new(0.0, 0.0, z));
    mesh.normals.push(normal);
    mesh.uvs.push(Point2::new(0.5, 0.5));

    for i in 0..=segments {
        let theta = TAU * i as f64 / segments as f64 - PI;
        let (sin, cos) = theta.sin_cos();
        let (x, y) = (RADIUS * cos, RADIUS * sin);
        mesh.vertices.push(Point3::new(x, y, z));
        mesh.normals.push(normal);
        mesh.uvs.push(Point2::new(0.5 + x, 0.5 + y));
    }

    for i in 0..segments {
        let (p, q) = (i as u32 + 1, i as u32 + 2);
        mesh.indices.push(if up { [0, p, q] } else { [0, q, p] });
        mesh.face_ids.push(1);
    }
    mesh
}
