pub mod creation;
pub mod query;
pub mod transform;
pub mod validate;
