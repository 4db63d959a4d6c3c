use crate::geometry::WallCurve;
use crate::math::{Point2, Vector2};

/// Translates a wall curve by a displacement in (radius, height).
pub struct Translate<'a> {
    curve: &'a WallCurve,
    displacement: Vector2,
}

impl<'a> Translate<'a> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(curve: &'a WallCurve, displacement: Vector2) -> Self {
        Self {
            curve,
            displacement,
        }
    }

    /// Shorthand for a purely vertical lift.
    #[must_use]
    pub fn lift(curve: &'a WallCurve, dh: f64) -> Self {
        Self::new(curve, Vector2::new(0.0, dh))
    }

    /// Executes the translation, returning a new curve.
    #[must_use]
    pub fn execute(&self) -> WallCurve {
        WallCurve::from_points_unchecked(
            self.curve
                .points()
                .iter()
                .map(|p: &Point2| p + self.displacement)
                .collect(),
        )
    }
}
