mod bounding_box;
mod is_valid;
mod raycast;

pub use bounding_box::Aabb;
pub use is_valid::ValidateTopology;
pub use raycast::{FaceHit, RaycastPrimitive};

pub(crate) use raycast::cube_face_uv;
