pub mod arc_2d;
pub mod polygon_2d;

/// 2D point type. Wall curves store `x = radius`, `y = height`.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;
