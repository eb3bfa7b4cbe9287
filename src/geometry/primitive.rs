use crate::topology::Polyhedron;

/// The shape carried by an [`Object`](crate::scene::Object).
///
/// The analytic shapes live in a fixed local frame and carry no data:
/// - `Cube`: the box `[-0.5, 0.5]^3`.
/// - `Sphere`: radius 0.5 around the origin, poles on the Z axis.
/// - `Cylinder`: radius 0.5 around the Z axis, `z` in `[0, 1]`.
/// - `Cone`: base radius 0.5 at `z = 0`, apex at `z = 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Primitive {
    #[default]
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Polyhedron(Polyhedron),
}

impl Primitive {
    /// Number of independently textured faces.
    ///
    /// Cube 6, sphere 1, cylinder 2 (side and caps), cone 2 (side and base),
    /// polyhedron one per mesh face.
    #[must_use]
    pub fn face_count(&self) -> usize {
        match self {
            Self::Cube => 6,
            Self::Sphere => 1,
            Self::Cylinder | Self::Cone => 2,
            Self::Polyhedron(mesh) => mesh.face_count(),
        }
    }

    /// Returns the mesh of a `Polyhedron` primitive.
    #[must_use]
    pub fn as_polyhedron(&self) -> Option<&Polyhedron> {
        match self {
            Self::Polyhedron(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Short lowercase name, used in log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Polyhedron(_) => "polyhedron",
        }
    }
}

impl From<Polyhedron> for Primitive {
    fn from(mesh: Polyhedron) -> Self {
        Self::Polyhedron(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeRegularPolyhedron;

    #[test]
    fn face_counts() {
        assert_eq!(Primitive::Cube.face_count(), 6);
        assert_eq!(Primitive::Sphere.face_count(), 1);
        assert_eq!(Primitive::Cylinder.face_count(), 2);
        assert_eq!(Primitive::Cone.face_count(), 2);
        let mesh = MakeRegularPolyhedron::new(12, 0.5).execute();
        assert_eq!(Primitive::from(mesh).face_count(), 12);
    }

    #[test]
    fn default_is_cube() {
        assert_eq!(Primitive::default(), Primitive::Cube);
        assert!(Primitive::default().as_polyhedron().is_none());
    }
}
