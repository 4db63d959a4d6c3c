use std::f64::consts::PI;

use crate::geometry::WallCurve;
use crate::math::Point2;

/// Lateral area of the frustum swept by revolving segment `a`–`b` about the
/// axis: `2π · r_avg · slant`.
#[must_use]
pub fn frustum_lateral_area(a: Point2, b: Point2) -> f64 {
    2.0 * PI * ((a.x + b.x) / 2.0) * (b - a).norm()
}

/// Sums the lateral frustum areas along a curve.
#[must_use]
pub fn revolved_area(curve: &WallCurve) -> f64 {
    curve
        .points()
        .windows(2)
        .map(|w| frustum_lateral_area(w[0], w[1]))
        .sum()
}

/// Estimates the glazeable surface of a vessel wall.
///
/// Counts the interior floor disc plus the revolved area of the wall curve
/// and of the same curve pushed out by the wall thickness. This is a frustum
/// estimate, not an exact surface integral.
#[derive(Debug)]
pub struct GlazeArea<'a> {
    curve: &'a WallCurve,
    wall_thickness: f64,
}

impl<'a> GlazeArea<'a> {
    /// Creates a new `GlazeArea` query.
    #[must_use]
    pub fn new(curve: &'a WallCurve, wall_thickness: f64) -> Self {
        Self {
            curve,
            wall_thickness,
        }
    }

    /// Executes the query, returning the area in mm².
    #[must_use]
    pub fn execute(&self) -> f64 {
        let r0 = self.curve.base_radius();
        let floor = PI * r0 * r0;
        let outside = self.curve.with_radial_offset(self.wall_thickness);
        floor + revolved_area(self.curve) + revolved_area(&outside)
    }
}
