use std::fmt::Write;

use crate::math::Point2;

/// One drawing command of a [`Path2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath.
    MoveTo(Point2),
    /// Straight segment to a point.
    LineTo(Point2),
    /// Cubic Bézier segment through two control points.
    CubicTo {
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
}

impl PathCommand {
    /// Applies `f` to every point the command carries.
    #[must_use]
    pub fn map_points(self, f: impl Fn(Point2) -> Point2) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(f(p)),
            Self::LineTo(p) => Self::LineTo(f(p)),
            Self::CubicTo { ctrl1, ctrl2, to } => Self::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
        }
    }

    /// Returns the points the command carries, end point last.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => vec![p],
            Self::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
        }
    }
}

/// A 2D vector path built from move, line and cubic commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path2D {
    commands: Vec<PathCommand>,
}

impl Path2D {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move-to command.
    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(Point2::new(x, y)));
        self
    }

    /// Appends a line-to command.
    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(Point2::new(x, y)));
        self
    }

    /// Appends a cubic Bézier command: two control points, then the end point.
    #[must_use]
    pub fn cubic_to(mut self, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) -> Self {
        self.commands.push(PathCommand::CubicTo {
            ctrl1: Point2::new(c1.0, c1.1),
            ctrl2: Point2::new(c2.0, c2.1),
            to: Point2::new(to.0, to.1),
        });
        self
    }

    /// Returns the commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns every point (end points and control points) in drawing order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.commands.iter().flat_map(PathCommand::points).collect()
    }

    /// Returns a new path with `f` applied to every point.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point2) -> Point2 + Copy) -> Self {
        Self {
            commands: self.commands.iter().map(|c| c.map_points(f)).collect(),
        }
    }

    /// Renders SVG path data (`M x,y L x,y C x,y x,y x,y`).
    ///
    /// Numbers use the shortest round-trip representation.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                    d,
                    "C{},{} {},{} {},{}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
            };
        }
        d
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn svg_path_data_formats_commands() {
        let path = Path2D::new()
            .move_to(30.0, 50.0)
            .line_to(30.0, 53.0)
            .cubic_to((31.5, 54.0), (35.0, 54.0), (35.0, 50.0));
        assert_eq!(
            path.to_svg_path_data(),
            "M30,50 L30,53 C31.5,54 35,54 35,50"
        );
    }

    #[test]
    fn empty_path_renders_empty_string() {
        let path = Path2D::new();
        assert!(path.is_empty());
        assert_eq!(path.to_svg_path_data(), "");
    }

    #[test]
    fn map_points_touches_control_points() {
        let path = Path2D::new()
            .move_to(1.0, 0.0)
            .cubic_to((2.0, 1.0), (3.0, 1.0), (4.0, 0.0));
        let mirrored = path.map_points(|p| Point2::new(-p.x, p.y));
        let xs: Vec<f64> = mirrored.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-1.0, -2.0, -3.0, -4.0]);
        // Input untouched.
        assert!((path.points()[0].x - 1.0).abs() < 1e-12);
    }
}
