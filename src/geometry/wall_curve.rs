use crate::error::CurveError;
use crate::math::{Point2, TOLERANCE};

/// A vessel wall silhouette sampled from base to rim.
///
/// Each point stores `x = radius` and `y = height`. Heights never decrease
/// along the curve and the curve always holds at least one point; both are
/// checked on construction, so every geometry function taking a `WallCurve`
/// can rely on them.
#[derive(Debug, Clone, PartialEq)]
pub struct WallCurve {
    points: Vec<Point2>,
}

impl WallCurve {
    /// Creates a wall curve from base-to-rim points.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Empty`] if `points` is empty
    /// - [`CurveError::NonFinite`] if a coordinate is NaN or infinite
    /// - [`CurveError::NonMonotonicHeight`] if a height drops below its predecessor
    pub fn new(points: Vec<Point2>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].y < pair[0].y - TOLERANCE {
                return Err(CurveError::NonMonotonicHeight {
                    index: index + 1,
                    previous: pair[0].y,
                    current: pair[1].y,
                });
            }
        }
        Ok(Self { points })
    }

    /// Creates a wall curve from `[radius, height]` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`WallCurve::new`].
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self, CurveError> {
        Self::new(pairs.iter().map(|&[r, h]| Point2::new(r, h)).collect())
    }

    /// Wraps points produced by a transform that preserves the invariants.
    pub(crate) fn from_points_unchecked(points: Vec<Point2>) -> Self {
        debug_assert!(!points.is_empty(), "wall curve must not be empty");
        Self { points }
    }

    /// Returns the points, base first.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a wall curve holds at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the base point.
    #[must_use]
    pub fn first(&self) -> Point2 {
        self.points[0]
    }

    /// Returns the rim point.
    #[must_use]
    pub fn last(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Radius at the base of the wall.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.first().x
    }

    /// Radius at the rim.
    #[must_use]
    pub fn rim_radius(&self) -> f64 {
        self.last().x
    }

    /// Height of the rim above the curve's own base.
    #[must_use]
    pub fn rise(&self) -> f64 {
        self.last().y - self.first().y
    }

    /// Returns the points as `[radius, height]` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Returns a new curve with every radius shifted by `dr`.
    #[must_use]
    pub fn with_radial_offset(&self, dr: f64) -> Self {
        Self::from_points_unchecked(
            self.points
                .iter()
                .map(|p| Point2::new(p.x + dr, p.y))
                .collect(),
        )
    }
}
