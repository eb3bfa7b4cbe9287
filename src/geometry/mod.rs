pub mod primitive;
pub mod ray;

pub use primitive::Primitive;
pub use ray::Ray;
