use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::geometry::WallCurve;
use crate::math::arc_2d::sample_arc;
use crate::math::{Point2, TOLERANCE};

use super::MIN_RADIUS;

/// Fillet radius used when none is configured, in millimeters.
pub const DEFAULT_FILLET_RADIUS: f64 = 5.0;

/// Number of segments the quarter-turn fillet arc is sampled with.
pub const FILLET_SEGMENTS: u32 = 8;

/// Rounds the corner where an inner wall meets the floor.
///
/// Prepends a quarter-turn arc that leaves the floor horizontally at
/// `(r0 - rf, floor)` and meets the wall vertically at `(r0, floor + rf)`,
/// then continues with the curve minus its first point. The radius is
/// clamped to the first segment's length, to its rise above the floor and to
/// `r0 - 2`, so the result stays a valid wall curve.
///
/// A non-positive radius, a non-finite floor height, a curve of fewer than
/// two points, or a radius that clamps to nothing returns the curve
/// unchanged.
#[derive(Debug)]
pub struct InnerFillet<'a> {
    curve: &'a WallCurve,
    radius: f64,
    floor_height: Option<f64>,
}

impl<'a> InnerFillet<'a> {
    /// Creates a new `InnerFillet` operation.
    #[must_use]
    pub fn new(curve: &'a WallCurve, radius: f64) -> Self {
        Self {
            curve,
            radius,
            floor_height: None,
        }
    }

    /// Sets the floor height the arc starts from. Defaults to the height of
    /// the curve's first point.
    #[must_use]
    pub fn with_floor_height(mut self, height: f64) -> Self {
        self.floor_height = Some(height);
        self
    }

    /// Executes the fillet, returning a new curve.
    #[must_use]
    pub fn execute(&self) -> WallCurve {
        let pts = self.curve.points();
        if self.radius.is_nan() || self.radius <= 0.0 || pts.len() < 2 {
            return self.curve.clone();
        }

        let p0 = pts[0];
        let p1 = pts[1];
        let floor = self.floor_height.unwrap_or(p0.y);
        if !floor.is_finite() {
            debug!(floor, "non-finite floor height, fillet skipped");
            return self.curve.clone();
        }

        let rf = self
            .radius
            .min((p1 - p0).norm())
            .min(p1.y - floor)
            .min(p0.x - MIN_RADIUS);
        if rf <= TOLERANCE {
            debug!(requested = self.radius, "fillet radius clamped away");
            return self.curve.clone();
        }
        if rf < self.radius {
            debug!(requested = self.radius, used = rf, "fillet radius clamped");
        }

        let center = Point2::new(p0.x - rf, floor + rf);
        let mut out = sample_arc(center, rf, -FRAC_PI_2, FRAC_PI_2, FILLET_SEGMENTS);
        out.extend_from_slice(&pts[1..]);
        WallCurve::from_points_unchecked(out)
    }
}
