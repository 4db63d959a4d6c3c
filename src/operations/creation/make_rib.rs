use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use crate::geometry::WallCurve;
use crate::math::arc_2d::sample_arc;
use crate::math::polygon_2d::{dedup_ring, signed_area_2d};
use crate::math::{Point2, MM_PER_INCH, TOLERANCE};
use crate::operations::nesting::NestedInstance;
use crate::operations::query::{Aabb2, BoundingBox};
use crate::operations::transform::{Mirror, Translate};

/// Narrowest rib, measured between the two wall bases: two inches.
pub const DEFAULT_MIN_GAP: f64 = 2.0 * MM_PER_INCH;

/// Radius of the rounded bottom corners, before clamping, mm.
pub const DEFAULT_CORNER_RADIUS: f64 = 3.0;

/// Radius of the hanging hole, before clamping, mm.
pub const DEFAULT_HOLE_RADIUS: f64 = 4.0;

/// Height of the hanging hole center as a fraction of the rib height.
pub const HOLE_HEIGHT_RATIO: f64 = 0.55;

/// Corner radius may not exceed this fraction of the step height.
pub const CORNER_STEP_RATIO: f64 = 0.4;

/// Corner radius may not exceed this fraction of the gap.
pub const CORNER_GAP_RATIO: f64 = 0.1;

/// Hole radius may not exceed this fraction of the gap.
pub const HOLE_GAP_RATIO: f64 = 0.15;

/// Segments per rounded corner.
pub const CORNER_SEGMENTS: u32 = 6;

/// Rib assembly settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibConfig {
    /// Minimum distance between the inner and outer wall bases.
    pub min_gap: f64,
    /// Bottom corner radius. Zero or less keeps square corners.
    pub corner_radius: f64,
    /// Hanging hole radius.
    pub hole_radius: f64,
}

impl Default for RibConfig {
    fn default() -> Self {
        Self {
            min_gap: DEFAULT_MIN_GAP,
            corner_radius: DEFAULT_CORNER_RADIUS,
            hole_radius: DEFAULT_HOLE_RADIUS,
        }
    }
}

/// Two wall curves to be fused into one rib.
///
/// Heights are measured from the rib's flat base, so a curve whose first
/// point sits above zero produces a straight step below it.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPair {
    pub label: String,
    /// Shapes the inside of the vessel; becomes the rib's left edge.
    pub inner: WallCurve,
    /// Shapes the outside of the vessel; becomes the rib's right edge.
    pub outer: WallCurve,
}

impl WallPair {
    /// Creates a pair from two curves.
    #[must_use]
    pub fn new(label: impl Into<String>, inner: WallCurve, outer: WallCurve) -> Self {
        Self {
            label: label.into(),
            inner,
            outer,
        }
    }

    /// Builds the pair for one nested instance. Both curves are lifted by the
    /// foot height plus floor thickness, so the rib base sits on the wheel.
    #[must_use]
    pub fn from_nested(instance: &NestedInstance) -> Self {
        let lift = instance.foot_height + instance.floor_thickness;
        Self {
            label: format!("B{}", instance.index + 1),
            inner: Translate::lift(&instance.inner, lift).execute(),
            outer: Translate::lift(&instance.outer, lift).execute(),
        }
    }
}

/// Circular cutout used to hang the rib.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HangingHole {
    pub center: Point2,
    pub radius: f64,
}

/// One closed, cuttable rib outline in rib coordinates (y up, flat base on
/// `y = 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct RibPolygon {
    pub label: String,
    /// Outline vertices. The closing edge back to the first vertex is
    /// implicit.
    pub points: Vec<Point2>,
    pub hole: HangingHole,
    /// Distance between the two wall bases that was used.
    pub gap: f64,
    pub bounds: Aabb2,
}

impl RibPolygon {
    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    /// Vertical extent, base to highest rim.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }
}

/// Assembles a rib outline from a [`WallPair`].
///
/// The inner curve is mirrored onto the left edge with its base at `x = 0`;
/// the outer curve forms the right edge with its base at `x = gap`, where
/// the gap is the larger of the configured minimum and the natural distance
/// between the two bases. The outline runs along the flat bottom (rounded at
/// both corners), up the outer curve, across the top and down the inner
/// curve. That is counter-clockwise with y up and clockwise once flipped
/// into y-down document space.
#[derive(Debug)]
pub struct MakeRib<'a> {
    pair: &'a WallPair,
    config: RibConfig,
}

impl<'a> MakeRib<'a> {
    /// Creates a new `MakeRib` operation with default settings.
    #[must_use]
    pub fn new(pair: &'a WallPair) -> Self {
        Self {
            pair,
            config: RibConfig::default(),
        }
    }

    /// Sets the assembly settings.
    #[must_use]
    pub fn with_config(mut self, config: RibConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the assembly.
    #[must_use]
    pub fn execute(&self) -> RibPolygon {
        let inner = &self.pair.inner;
        let outer = &self.pair.outer;
        let inner_base = inner.first();
        let outer_base = outer.first();

        let natural = (outer_base.x - inner_base.x).abs();
        let gap = self.config.min_gap.max(natural);
        debug!(label = %self.pair.label, natural, gap, "rib gap");

        let step = inner_base.y.min(outer_base.y);
        let rc = self
            .config
            .corner_radius
            .min(CORNER_STEP_RATIO * step)
            .min(CORNER_GAP_RATIO * gap);

        let mut pts: Vec<Point2> = Vec::with_capacity(inner.len() + outer.len() + 16);
        if rc > TOLERANCE {
            pts.extend(sample_arc(Point2::new(rc, rc), rc, PI, FRAC_PI_2, CORNER_SEGMENTS));
            pts.extend(sample_arc(
                Point2::new(gap - rc, rc),
                rc,
                -FRAC_PI_2,
                FRAC_PI_2,
                CORNER_SEGMENTS,
            ));
        } else {
            pts.push(Point2::new(0.0, 0.0));
            pts.push(Point2::new(gap, 0.0));
        }

        pts.extend(
            outer
                .points()
                .iter()
                .map(|p| Point2::new(gap + (p.x - outer_base.x), p.y)),
        );
        // Reflect about half the base radius so the inner base lands on x = 0.
        let mirrored = Mirror::new(inner).with_axis(inner_base.x / 2.0).execute();
        pts.extend(mirrored.points().iter().rev().copied());

        let mut pts = dedup_ring(&pts);

        // Pin the flat base to exactly y = 0.
        let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        if min_y.is_finite() && min_y.abs() > 0.0 {
            for p in &mut pts {
                p.y -= min_y;
            }
        }

        let bounds = BoundingBox::new(&pts).execute();
        let hole = HangingHole {
            center: Point2::new(
                bounds.center().x,
                bounds.min.y + HOLE_HEIGHT_RATIO * bounds.height(),
            ),
            radius: self.config.hole_radius.min(HOLE_GAP_RATIO * gap).max(0.0),
        };
        debug!(
            label = %self.pair.label,
            points = pts.len(),
            area = signed_area_2d(&pts),
            "rib outline"
        );

        RibPolygon {
            label: self.pair.label.clone(),
            points: pts,
            hole,
            gap,
            bounds,
        }
    }
}

/// Builds one rib per nested instance.
#[must_use]
pub fn ribs_for_nest(instances: &[NestedInstance], config: RibConfig) -> Vec<RibPolygon> {
    instances
        .iter()
        .map(|inst| {
            let pair = WallPair::from_nested(inst);
            MakeRib::new(&pair).with_config(config).execute()
        })
        .collect()
}
