use crate::math::Point2;

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self {
            min: Point2::origin(),
            max: Point2::origin(),
        }
    }
}

impl Aabb2 {
    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a point set.
pub struct BoundingBox<'a> {
    points: &'a [Point2],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the AABB. An empty point set yields a
    /// zero-sized box at the origin.
    #[must_use]
    pub fn execute(&self) -> Aabb2 {
        let Some(&first) = self.points.first() else {
            return Aabb2::default();
        };
        self.points[1..].iter().fold(
            Aabb2 {
                min: first,
                max: first,
            },
            |acc, p| Aabb2 {
                min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        )
    }
}
