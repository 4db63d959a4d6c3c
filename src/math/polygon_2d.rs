use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub(crate) fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Drops points that repeat their predecessor within `epsilon` on both axes.
///
/// The first point is always kept.
#[must_use]
pub fn dedup_consecutive(points: &[Point2], epsilon: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        match out.last() {
            Some(prev) if (p.x - prev.x).abs() <= epsilon && (p.y - prev.y).abs() <= epsilon => {}
            _ => out.push(p),
        }
    }
    out
}

/// Drops exact (within [`TOLERANCE`]) consecutive duplicates, including the
/// closing duplicate of a ring whose last point equals its first.
#[must_use]
pub fn dedup_ring(points: &[Point2]) -> Vec<Point2> {
    let mut out = dedup_consecutive(points, TOLERANCE);
    while out.len() > 1 {
        let (first, last) = (out[0], out[out.len() - 1]);
        if (first.x - last.x).abs() <= TOLERANCE && (first.y - last.y).abs() <= TOLERANCE {
            out.pop();
        } else {
            break;
        }
    }
    out
}
