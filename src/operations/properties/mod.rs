mod area;
mod convexity;
mod curvature;
mod normals;
mod uv;
mod winding;

pub use area::ComputeFaceAreas;
pub use convexity::AnalyzeConvexity;
pub use curvature::ComputeVertexCurvatures;
pub use normals::ComputeNormals;
pub use uv::GenerateUvs;
pub use winding::EnsureOutwardWinding;

use crate::topology::Polyhedron;

/// Recomputes every derived property of a mesh from its current topology and
/// vertex positions.
///
/// Runs normals, convexity, face areas, vertex curvatures and UVs, in that
/// order. Winding is left as is. Running it twice on an unchanged mesh gives
/// identical results.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputeProperties;

impl ComputeProperties {
    /// Creates a new `ComputeProperties` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the pipeline, updating `mesh` in place.
    pub fn execute(&self, mesh: &mut Polyhedron) {
        ComputeNormals::new().execute(mesh);
        AnalyzeConvexity::new().execute(mesh);
        ComputeFaceAreas::new().execute(mesh);
        ComputeVertexCurvatures::new().execute(mesh);
        GenerateUvs::new().execute(mesh);
    }
}
