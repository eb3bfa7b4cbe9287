pub mod creation;
pub mod properties;
pub mod query;
pub mod transform;
