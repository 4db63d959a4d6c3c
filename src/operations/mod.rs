pub mod creation;
pub mod modification;
pub mod nesting;
pub mod offset;
pub mod query;
pub mod transform;
