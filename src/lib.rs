pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;
pub mod topology;

pub use error::{PolyformError, Result};
