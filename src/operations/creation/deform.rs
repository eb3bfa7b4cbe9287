use super::MakeRegularPolyhedron;
use crate::math::{Point3, TOLERANCE};
use crate::operations::properties::ComputeProperties;
use crate::topology::Polyhedron;

/// Radial displacement applied to a regular polyhedron's vertices.
#[derive(Debug, Clone, Copy)]
enum Displacement {
    /// Distance times `1 - factor`, every vertex.
    Shrink(f64),
    /// Distance plus `length`, every vertex.
    Extend(f64),
    /// Distance times `1 - depth`, even-indexed vertices only.
    Crater(f64),
}

fn displaced(face_count: usize, radius: f64, displacement: Displacement) -> Polyhedron {
    let mut mesh = MakeRegularPolyhedron::new(face_count, radius).execute();

    for (i, v) in mesh.vertices_mut().iter_mut().enumerate() {
        let distance = v.coords.norm();
        if distance < TOLERANCE {
            continue;
        }
        let direction = v.coords / distance;
        let new_distance = match displacement {
            Displacement::Shrink(factor) => distance * (1.0 - factor),
            Displacement::Extend(length) => distance + length,
            Displacement::Crater(depth) if i % 2 == 0 => distance * (1.0 - depth),
            Displacement::Crater(_) => continue,
        };
        *v = Point3::from(direction * new_distance);
    }

    ComputeProperties::new().execute(&mut mesh);
    mesh
}

/// Regular polyhedron with every vertex pulled towards the center by
/// `concavity` (a fraction of its distance).
#[derive(Debug, Clone, Copy)]
pub struct MakeConcavePolyhedron {
    face_count: usize,
    radius: f64,
    concavity: f64,
}

impl MakeConcavePolyhedron {
    /// Creates a new `MakeConcavePolyhedron` operation.
    #[must_use]
    pub fn new(face_count: usize, radius: f64, concavity: f64) -> Self {
        Self {
            face_count,
            radius,
            concavity,
        }
    }

    /// Executes the operation, returning the annotated mesh.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        displaced(
            self.face_count,
            self.radius,
            Displacement::Shrink(self.concavity),
        )
    }
}

/// Regular polyhedron with every vertex pushed outward by `spike_length`.
#[derive(Debug, Clone, Copy)]
pub struct MakeStarPolyhedron {
    face_count: usize,
    radius: f64,
    spike_length: f64,
}

impl MakeStarPolyhedron {
    /// Creates a new `MakeStarPolyhedron` operation.
    #[must_use]
    pub fn new(face_count: usize, radius: f64, spike_length: f64) -> Self {
        Self {
            face_count,
            radius,
            spike_length,
        }
    }

    /// Executes the operation, returning the annotated mesh.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        displaced(
            self.face_count,
            self.radius,
            Displacement::Extend(self.spike_length),
        )
    }
}

/// Regular polyhedron with alternating (even-indexed) vertices sunk inward
/// by `depth`, a fraction of their distance.
#[derive(Debug, Clone, Copy)]
pub struct MakeCraterPolyhedron {
    face_count: usize,
    radius: f64,
    depth: f64,
}

impl MakeCraterPolyhedron {
    /// Creates a new `MakeCraterPolyhedron` operation.
    #[must_use]
    pub fn new(face_count: usize, radius: f64, depth: f64) -> Self {
        Self {
            face_count,
            radius,
            depth,
        }
    }

    /// Executes the operation, returning the annotated mesh.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        displaced(self.face_count, self.radius, Displacement::Crater(self.depth))
    }
}
