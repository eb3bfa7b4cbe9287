use crate::math::TOLERANCE;
use crate::topology::Polyhedron;

/// Scales a mesh about the origin so its farthest vertex lies at `radius`.
///
/// A mesh whose vertices all sit at (or within `TOLERANCE` of) the origin is
/// left unchanged. Derived properties are not recomputed.
#[derive(Debug, Clone, Copy)]
pub struct ScaleToRadius {
    radius: f64,
}

impl ScaleToRadius {
    /// Creates a new `ScaleToRadius` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the scaling in place.
    ///
    /// Returns the factor that was applied, or `None` for a degenerate mesh.
    pub fn execute(&self, mesh: &mut Polyhedron) -> Option<f64> {
        let max = mesh
            .vertices()
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0_f64, f64::max);
        if max < TOLERANCE {
            return None;
        }

        let factor = self.radius / max;
        for v in mesh.vertices_mut() {
            v.coords *= factor;
        }
        Some(factor)
    }
}
