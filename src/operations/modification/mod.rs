mod inner_fillet;

pub use inner_fillet::{InnerFillet, DEFAULT_FILLET_RADIUS, FILLET_SEGMENTS};

/// Smallest radius an inner wall point may take, in millimeters.
pub const MIN_RADIUS: f64 = 2.0;
