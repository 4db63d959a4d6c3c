pub mod catalog;
pub mod error;
pub mod export;
pub mod geometry;
pub mod import;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, ThrowformError};
