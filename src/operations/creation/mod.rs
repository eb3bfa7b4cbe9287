mod deform;
mod make_custom;
mod make_regular;
mod seeds;

pub use deform::{MakeConcavePolyhedron, MakeCraterPolyhedron, MakeStarPolyhedron};
pub use make_custom::MakeCustomPolyhedron;
pub use make_regular::MakeRegularPolyhedron;

pub(crate) use make_custom::check_face;
