use crate::geometry::WallCurve;
use crate::math::Point2;

/// Mirrors a wall curve's radii about a vertical axis.
///
/// The axis defaults to `x = 0`. Heights are unchanged, so the result is
/// still a valid wall curve.
pub struct Mirror<'a> {
    curve: &'a WallCurve,
    axis: f64,
}

impl<'a> Mirror<'a> {
    /// Creates a new `Mirror` operation about `x = 0`.
    #[must_use]
    pub fn new(curve: &'a WallCurve) -> Self {
        Self { curve, axis: 0.0 }
    }

    /// Mirrors about `x = axis` instead.
    #[must_use]
    pub fn with_axis(mut self, axis: f64) -> Self {
        self.axis = axis;
        self
    }

    /// Executes the mirror, returning a new curve.
    #[must_use]
    pub fn execute(&self) -> WallCurve {
        let two_a = 2.0 * self.axis;
        WallCurve::from_points_unchecked(
            self.curve
                .points()
                .iter()
                .map(|p| Point2::new(two_a - p.x, p.y))
                .collect(),
        )
    }
}
