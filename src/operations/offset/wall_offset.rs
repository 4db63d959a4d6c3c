use crate::geometry::WallCurve;
use crate::math::Point2;
use crate::operations::modification::{InnerFillet, DEFAULT_FILLET_RADIUS, MIN_RADIUS};

/// Extra thickness at the base, as a fraction of the wall thickness. Tapers
/// linearly to zero at the rim.
const BASE_TAPER: f64 = 0.3;

/// Derives an inner wall curve from an outer one.
///
/// Point `i` of `n` moves inward by `t * (1 + 0.3 * (1 - i / (n - 1)))`, so
/// the wall is 30% thicker at the base than at the rim, and never below
/// radius 2. Heights are kept. The floor corner is then rounded with an
/// [`InnerFillet`].
#[derive(Debug)]
pub struct OffsetInward<'a> {
    outer: &'a WallCurve,
    thickness: f64,
    fillet_radius: f64,
}

impl<'a> OffsetInward<'a> {
    /// Creates a new `OffsetInward` operation with the default fillet radius.
    ///
    /// Negative thicknesses are treated as zero.
    #[must_use]
    pub fn new(outer: &'a WallCurve, thickness: f64) -> Self {
        Self {
            outer,
            thickness: thickness.max(0.0),
            fillet_radius: DEFAULT_FILLET_RADIUS,
        }
    }

    /// Sets the floor fillet radius. Zero or less disables the fillet.
    #[must_use]
    pub fn with_fillet_radius(mut self, radius: f64) -> Self {
        self.fillet_radius = radius;
        self
    }

    /// Executes the offset, returning the inner curve.
    #[must_use]
    pub fn execute(&self) -> WallCurve {
        let pts = self.outer.points();
        let last = pts.len().saturating_sub(1);
        let t = self.thickness;

        let offset = pts
            .iter()
            .enumerate()
            .map(|(i, p)| {
                #[allow(clippy::cast_precision_loss)]
                let along = if last == 0 { 0.0 } else { i as f64 / last as f64 };
                let inset = t * (1.0 + BASE_TAPER * (1.0 - along));
                Point2::new((p.x - inset).max(MIN_RADIUS), p.y)
            })
            .collect();
        let offset = WallCurve::from_points_unchecked(offset);

        InnerFillet::new(&offset, self.fillet_radius).execute()
    }
}
