/// 2D arc sampling utilities.
///
/// Angles are in radians, measured counter-clockwise from the +x axis.
/// A positive `sweep` walks counter-clockwise, a negative one clockwise.
use super::Point2;

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(
    cx: f64, cy: f64,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    t: f64,
) -> (f64, f64) {
    let angle = start_angle + sweep * t;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Samples an arc into `segments + 1` points, both endpoints included.
///
/// `segments` of zero is treated as one.
#[must_use]
pub fn sample_arc(
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    segments: u32,
) -> Vec<Point2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|j| {
            let t = f64::from(j) / f64::from(segments);
            let (x, y) = arc_point_at(center.x, center.y, radius, start_angle, sweep, t);
            Point2::new(x, y)
        })
        .collect()
}
