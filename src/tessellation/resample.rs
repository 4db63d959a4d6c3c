use crate::geometry::WallCurve;
use crate::math::Point2;

/// Catmull-Rom tension. 0.5 gives the uniform (standard) spline.
const TENSION: f64 = 0.5;

/// Resamples a wall curve to a fixed number of points along a uniform
/// Catmull-Rom spline through its control points.
///
/// The first and last control points are duplicated so the spline passes
/// through both ends. Two-point input is interpolated linearly. Output
/// heights are clamped into `[previous, rim]`, so spline overshoot never
/// breaks the non-decreasing height invariant.
#[derive(Debug)]
pub struct Resample<'a> {
    curve: &'a WallCurve,
    count: usize,
}

impl<'a> Resample<'a> {
    /// Creates a new `Resample` operation producing `count` points.
    ///
    /// A `count` of zero is treated as one.
    #[must_use]
    pub fn new(curve: &'a WallCurve, count: usize) -> Self {
        Self {
            curve,
            count: count.max(1),
        }
    }

    /// Executes the resampling.
    #[must_use]
    pub fn execute(&self) -> WallCurve {
        let pts = self.curve.points();
        if self.count == 1 || pts.len() == 1 {
            return WallCurve::from_points_unchecked(vec![pts[0]]);
        }

        let first = pts[0];
        let last = pts[pts.len() - 1];
        let segments = pts.len() - 1;
        let mut out = Vec::with_capacity(self.count);

        #[allow(clippy::cast_precision_loss)]
        let denom = (self.count - 1) as f64;
        for k in 0..self.count {
            if k == 0 {
                out.push(first);
                continue;
            }
            if k == self.count - 1 {
                out.push(last);
                continue;
            }

            #[allow(clippy::cast_precision_loss)]
            let t = k as f64 / denom * segments as f64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seg = (t.floor() as usize).min(segments - 1);
            #[allow(clippy::cast_precision_loss)]
            let u = t - seg as f64;

            let p = if pts.len() == 2 {
                first + (last - first) * u
            } else {
                let p0 = pts[seg.saturating_sub(1)];
                let p1 = pts[seg];
                let p2 = pts[seg + 1];
                let p3 = pts[(seg + 2).min(segments)];
                catmull_rom(p0, p1, p2, p3, u)
            };

            let prev_y = out.last().map_or(first.y, |q: &Point2| q.y);
            let y = p.y.clamp(prev_y, last.y.max(prev_y));
            out.push(Point2::new(p.x, y));
        }

        WallCurve::from_points_unchecked(out)
    }
}

/// Evaluates one Catmull-Rom segment between `p1` and `p2` at `u` in `[0, 1]`.
fn catmull_rom(p0: Point2, p1: Point2, p2: Point2, p3: Point2, u: f64) -> Point2 {
    let u2 = u * u;
    let u3 = u2 * u;
    let eval = |a: f64, b: f64, c: f64, d: f64| {
        let m1 = TENSION * (c - a);
        let m2 = TENSION * (d - b);
        (2.0 * u3 - 3.0 * u2 + 1.0) * b
            + (u3 - 2.0 * u2 + u) * m1
            + (-2.0 * u3 + 3.0 * u2) * c
            + (u3 - u2) * m2
    };
    Point2::new(
        eval(p0.x, p1.x, p2.x, p3.x),
        eval(p0.y, p1.y, p2.y, p3.y),
    )
}
