use crate::geometry::WallCurve;
use crate::math::Point2;

/// Scales a wall curve uniformly about the origin (axis at floor level).
///
/// Radii and heights are both multiplied by the factor. Negative factors are
/// clamped to zero.
pub struct Scale<'a> {
    curve: &'a WallCurve,
    factor: f64,
}

impl<'a> Scale<'a> {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(curve: &'a WallCurve, factor: f64) -> Self {
        Self {
            curve,
            factor: factor.max(0.0),
        }
    }

    /// Executes the scaling, returning a new curve.
    #[must_use]
    pub fn execute(&self) -> WallCurve {
        let s = self.factor;
        WallCurve::from_points_unchecked(
            self.curve
                .points()
                .iter()
                .map(|p| Point2::new(p.x * s, p.y * s))
                .collect(),
        )
    }
}
