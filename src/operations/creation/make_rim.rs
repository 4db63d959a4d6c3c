use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::geometry::VesselKind::{self, Bowl, Cup, Mug, Plate, Serving, Tumbler};
use crate::geometry::{Path2D, RimLip};
use crate::math::Point2;
use crate::operations::nesting::NestedInstance;

/// Smallest lip height a rim is drawn with, mm.
pub const MIN_LIP_HEIGHT: f64 = 1.5;

/// Smallest overhang a rim is drawn with, mm.
pub const MIN_OVERHANG: f64 = 0.5;

/// Largest magnitude any rim input is taken at, mm.
pub const MAX_RIM_DIMENSION: f64 = 1e6;

/// The ten rim-edge shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RimType {
    Rounded,
    Beveled,
    Flared,
    Tulip,
    Straight,
    Rolled,
    Tapered,
    Flanged,
    Coupe,
    Thickened,
}

impl RimType {
    /// All rim types, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Rounded,
        Self::Beveled,
        Self::Flared,
        Self::Tulip,
        Self::Straight,
        Self::Rolled,
        Self::Tapered,
        Self::Flanged,
        Self::Coupe,
        Self::Thickened,
    ];

    /// Returns the table entry describing this rim type.
    #[must_use]
    pub fn spec(self) -> &'static RimSpec {
        &RIM_SPECS[self as usize]
    }

    /// Lowercase tag, e.g. `"rounded"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.spec().tag
    }

    /// Looks a rim type up by tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        RIM_SPECS.iter().find(|s| s.tag == tag).map(|s| s.rim_type)
    }

    /// Rim types recommended for a vessel category.
    pub fn for_vessel(kind: VesselKind) -> impl Iterator<Item = Self> {
        RIM_SPECS
            .iter()
            .filter(move |s| s.vessels.contains(&kind))
            .map(|s| s.rim_type)
    }
}

impl fmt::Display for RimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown rim tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rim type: {0}")]
pub struct UnknownRimType(pub String);

impl FromStr for RimType {
    type Err = UnknownRimType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownRimType(s.to_owned()))
    }
}

/// Static description of one rim type.
pub struct RimSpec {
    pub rim_type: RimType,
    pub tag: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Vessel categories the rim suits. Used for filtering only.
    pub vessels: &'static [VesselKind],
    build: fn(&RimInputs) -> RimProfile,
}

impl fmt::Debug for RimSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RimSpec")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("vessels", &self.vessels)
            .finish_non_exhaustive()
    }
}

static RIM_SPECS: [RimSpec; 10] = [
    RimSpec {
        rim_type: RimType::Rounded,
        tag: "rounded",
        name: "Rounded",
        description: "Smooth curved top edge — resists chipping",
        vessels: &[Bowl, Mug, Cup, Tumbler, Serving, Plate],
        build: rounded,
    },
    RimSpec {
        rim_type: RimType::Beveled,
        tag: "beveled",
        name: "Beveled",
        description: "Angled cut on outside — feels lighter on the mouth",
        vessels: &[Mug, Cup, Tumbler],
        build: beveled,
    },
    RimSpec {
        rim_type: RimType::Flared,
        tag: "flared",
        name: "Flared",
        description: "Curves outward — faster pour, drink cooling",
        vessels: &[Bowl, Mug, Cup, Serving],
        build: flared,
    },
    RimSpec {
        rim_type: RimType::Tulip,
        tag: "tulip",
        name: "Tulip",
        description: "Curves inward — concentrates aroma, retains heat",
        vessels: &[Mug, Cup, Bowl],
        build: tulip,
    },
    RimSpec {
        rim_type: RimType::Straight,
        tag: "straight",
        name: "Straight",
        description: "Extends vertically — neutral feel, ideal for stacking",
        vessels: &[Tumbler, Mug, Bowl, Serving],
        build: straight,
    },
    RimSpec {
        rim_type: RimType::Rolled,
        tag: "rolled",
        name: "Rolled",
        description: "Turns back toward body — reinforced, stronger edge",
        vessels: &[Serving, Bowl, Mug],
        build: rolled,
    },
    RimSpec {
        rim_type: RimType::Tapered,
        tag: "tapered",
        name: "Tapered",
        description: "Thins to a fine edge — delicate feel, fine porcelain",
        vessels: &[Cup, Mug, Tumbler],
        build: tapered,
    },
    RimSpec {
        rim_type: RimType::Flanged,
        tag: "flanged",
        name: "Flanged",
        description: "Flat horizontal shelf — safe grip, frames food",
        vessels: &[Plate, Serving, Bowl],
        build: flanged,
    },
    RimSpec {
        rim_type: RimType::Coupe,
        tag: "coupe",
        name: "Coupe",
        description: "No distinct lip — continuous curve, modern minimal",
        vessels: &[Plate, Bowl, Serving],
        build: coupe,
    },
    RimSpec {
        rim_type: RimType::Thickened,
        tag: "thickened",
        name: "Thickened",
        description: "Bulbous club rim — most chip-resistant, substantial feel",
        vessels: &[Mug, Bowl, Serving, Tumbler],
        build: thickened,
    },
];

/// Which side of the vessel axis a rim is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Negative radii; the path is mirrored about the axis.
    Left,
    #[default]
    Right,
}

/// Inputs to the rim generator. Lengths in millimeters, heights measured up
/// from the vessel base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimParams {
    /// Radius of the inner wall at the top.
    pub inner_top_radius: f64,
    /// Radius of the outer wall at the top.
    pub outer_top_radius: f64,
    /// Height of the top of the wall, where the rim starts.
    pub base_height: f64,
    pub lip_height: f64,
    pub overhang: f64,
    pub wall_thickness: f64,
    pub side: Side,
}

impl RimParams {
    /// Rim inputs for one nested instance, with the lip scaled to match.
    #[must_use]
    pub fn for_instance(instance: &NestedInstance, lip: &RimLip, side: Side) -> Self {
        Self {
            inner_top_radius: instance.inner.rim_radius(),
            outer_top_radius: instance.outer.rim_radius(),
            base_height: instance.outer.last().y,
            lip_height: lip.height * instance.scale,
            overhang: lip.overhang * instance.scale,
            wall_thickness: instance.wall_thickness,
            side,
        }
    }
}

/// Output of the rim generator: an open path from the inner top radius to
/// the outer top radius, and the highest point the rim reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct RimProfile {
    pub path: Path2D,
    pub top_height: f64,
}

/// Clamped inputs handed to each shape builder.
struct RimInputs {
    ir: f64,
    or: f64,
    h: f64,
    lh: f64,
    ov: f64,
    wt: f64,
}

impl RimInputs {
    fn from_params(p: &RimParams) -> Self {
        Self {
            ir: clamp_input(p.inner_top_radius, -MAX_RIM_DIMENSION, 0.0),
            or: clamp_input(p.outer_top_radius, -MAX_RIM_DIMENSION, 0.0),
            h: clamp_input(p.base_height, -MAX_RIM_DIMENSION, 0.0),
            lh: clamp_input(p.lip_height, MIN_LIP_HEIGHT, MIN_LIP_HEIGHT),
            ov: clamp_input(p.overhang, MIN_OVERHANG, MIN_OVERHANG),
            wt: clamp_input(p.wall_thickness, 0.0, 0.0),
        }
    }
}

/// Clamps `v` to `[min, MAX_RIM_DIMENSION]`; NaN becomes `fallback`.
fn clamp_input(v: f64, min: f64, fallback: f64) -> f64 {
    if v.is_nan() {
        fallback
    } else {
        v.clamp(min, MAX_RIM_DIMENSION)
    }
}

fn rounded(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .cubic_to((r.ir, top), (r.or, top), (r.or, r.h)),
        top_height: top,
    }
}

fn beveled(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .line_to(r.ir, top)
            .line_to(r.or + r.ov * 0.3, top)
            .line_to(r.or + r.ov, r.h + r.lh * 0.3)
            .line_to(r.or, r.h),
        top_height: top,
    }
}

fn flared(r: &RimInputs) -> RimProfile {
    let flare = r.or + r.ov + r.wt * 0.8;
    let top = r.h + r.lh;
    let mid = r.h + r.lh * 0.7;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .cubic_to(
                (r.ir - r.ov * 0.3, top),
                (r.ir + r.wt * 0.5, top + r.lh * 0.3),
                (flare, mid),
            )
            .cubic_to(
                (flare + r.ov * 0.2, mid - r.lh * 0.2),
                (r.or + r.ov * 0.5, r.h + r.lh * 0.1),
                (r.or, r.h),
            ),
        top_height: top + r.lh * 0.3,
    }
}

fn tulip(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    let inward = r.ir - r.wt * 0.6;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .cubic_to((r.ir, r.h + r.lh * 0.3), (inward, top - r.lh * 0.2), (inward, top))
            .cubic_to((inward, top + r.lh * 0.15), (r.or, top), (r.or, r.h + r.lh * 0.5))
            .line_to(r.or, r.h),
        top_height: top + r.lh * 0.15,
    }
}

fn straight(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .line_to(r.ir, top)
            .line_to(r.or, top)
            .line_to(r.or, r.h),
        top_height: top,
    }
}

fn rolled(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    let roll = r.or + r.ov;
    let roll_back = r.or - r.wt * 0.15;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .line_to(r.ir, top - r.lh * 0.3)
            .cubic_to(
                (r.ir, top + r.lh * 0.1),
                (roll, top + r.lh * 0.1),
                (roll, top - r.lh * 0.3),
            )
            .cubic_to(
                (roll, top - r.lh * 0.7),
                (roll_back, r.h + r.lh * 0.3),
                (r.or, r.h),
            ),
        top_height: top + r.lh * 0.1,
    }
}

fn tapered(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    let thin = r.ir + (r.or - r.ir) * 0.15;
    let mid = r.h + r.lh * 0.5;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .line_to(r.ir, mid)
            .line_to(thin, top)
            .line_to(r.or, mid)
            .line_to(r.or, r.h),
        top_height: top,
    }
}

fn flanged(r: &RimInputs) -> RimProfile {
    let shelf_w = r.ov + r.wt * 1.5;
    let top = r.h + r.lh;
    let shelf = r.or + shelf_w;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .line_to(r.ir, top)
            .line_to(shelf, top)
            .line_to(shelf, top - r.lh * 0.6)
            .cubic_to(
                (shelf - shelf_w * 0.1, top - r.lh * 0.7),
                (r.or + shelf_w * 0.1, r.h + r.lh * 0.1),
                (r.or, r.h),
            ),
        top_height: top,
    }
}

fn coupe(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh * 0.4;
    let mid = (r.ir + r.or) / 2.0;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .cubic_to((r.ir, top), (mid, top + r.lh * 0.15), (r.or, r.h)),
        top_height: top + r.lh * 0.15,
    }
}

fn thickened(r: &RimInputs) -> RimProfile {
    let top = r.h + r.lh;
    let bulge = r.wt * 0.4;
    let outer = r.or + bulge;
    let inner = r.ir - bulge * 0.5;
    RimProfile {
        path: Path2D::new()
            .move_to(r.ir, r.h)
            .cubic_to(
                (r.ir, r.h + r.lh * 0.3),
                (inner, r.h + r.lh * 0.5),
                (inner, top - r.lh * 0.3),
            )
            .cubic_to(
                (inner, top + r.lh * 0.1),
                (outer, top + r.lh * 0.1),
                (outer, top - r.lh * 0.3),
            )
            .cubic_to(
                (outer, r.h + r.lh * 0.5),
                (r.or, r.h + r.lh * 0.3),
                (r.or, r.h),
            ),
        top_height: top + r.lh * 0.1,
    }
}

/// Generates the edge profile of one rim type.
///
/// This is the library entry point for rim geometry. The laser exports cut
/// flat ribs only, so nothing in [`crate::export`] calls it; callers that
/// draw a vessel section pair it with [`RimParams::for_instance`].
///
/// Lip height and overhang are clamped to [`MIN_LIP_HEIGHT`] and
/// [`MIN_OVERHANG`], every input to [`MAX_RIM_DIMENSION`] in magnitude.
/// NaN inputs fall back to zero or the minimum. For [`Side::Left`] the path
/// is mirrored about the vessel axis.
#[derive(Debug)]
pub struct MakeRim {
    rim_type: RimType,
    params: RimParams,
}

impl MakeRim {
    /// Creates a new `MakeRim` operation.
    #[must_use]
    pub fn new(rim_type: RimType, params: RimParams) -> Self {
        Self { rim_type, params }
    }

    /// Executes the generator.
    #[must_use]
    pub fn execute(&self) -> RimProfile {
        let inputs = RimInputs::from_params(&self.params);
        let profile = (self.rim_type.spec().build)(&inputs);
        orient(profile, self.params.side)
    }
}

/// Generates a rim by tag. An unknown tag yields an empty path whose top
/// height is the base height plus the clamped lip height.
#[must_use]
pub fn rim_profile_for_tag(tag: &str, params: RimParams) -> RimProfile {
    if let Some(rim_type) = RimType::from_tag(tag) {
        return MakeRim::new(rim_type, params).execute();
    }
    debug!(tag, "unknown rim type, returning empty profile");
    let inputs = RimInputs::from_params(&params);
    RimProfile {
        path: Path2D::new(),
        top_height: inputs.h + inputs.lh,
    }
}

fn orient(profile: RimProfile, side: Side) -> RimProfile {
    match side {
        Side::Right => profile,
        Side::Left => RimProfile {
            path: profile.path.map_points(|p| Point2::new(-p.x, p.y)),
            top_height: profile.top_height,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PathCommand;
    use approx::assert_abs_diff_eq;
    use proptest::num;
    use proptest::prelude::*;

    fn params() -> RimParams {
        RimParams {
            inner_top_radius: 30.0,
            outer_top_radius: 35.0,
            base_height: 50.0,
            lip_height: 3.0,
            overhang: 1.0,
            wall_thickness: 5.0,
            side: Side::Right,
        }
    }

    #[test]
    fn table_is_indexed_by_variant() {
        for t in RimType::ALL {
            assert_eq!(t.spec().rim_type, t);
            assert_eq!(RimType::from_tag(t.tag()), Some(t));
            assert_eq!(t.to_string().parse::<RimType>().unwrap(), t);
        }
    }

    #[test]
    fn every_type_starts_with_move_to_inner_radius() {
        for t in RimType::ALL {
            let rim = MakeRim::new(t, params()).execute();
            assert!(!rim.path.is_empty(), "{t}");
            match rim.path.commands()[0] {
                PathCommand::MoveTo(p) => {
                    assert_abs_diff_eq!(p.x, 30.0);
                    assert_abs_diff_eq!(p.y, 50.0);
                }
                other => panic!("{t}: first command {other:?}"),
            }
            assert!(rim.path.to_svg_path_data().starts_with('M'));
        }
    }

    #[test]
    fn every_type_ends_on_outer_radius() {
        for t in RimType::ALL {
            let rim = MakeRim::new(t, params()).execute();
            let end = *rim.path.points().last().unwrap();
            assert_abs_diff_eq!(end.x, 35.0);
            assert_abs_diff_eq!(end.y, 50.0);
        }
    }

    #[test]
    fn top_clears_minimum_lip_except_coupe() {
        let mut p = params();
        p.lip_height = 0.0;
        for t in RimType::ALL {
            let rim = MakeRim::new(t, p).execute();
            if t == RimType::Coupe {
                continue;
            }
            assert!(rim.top_height >= p.base_height + MIN_LIP_HEIGHT, "{t}: {}", rim.top_height);
        }
    }

    #[test]
    fn coupe_top_height() {
        let rim = MakeRim::new(RimType::Coupe, params()).execute();
        assert_abs_diff_eq!(rim.top_height, 50.0 + 3.0 * 0.4 + 3.0 * 0.15, epsilon = 1e-12);
    }

    #[test]
    fn bulging_types_rise_above_the_lip() {
        for t in [RimType::Flared, RimType::Rolled, RimType::Thickened, RimType::Tulip] {
            let rim = MakeRim::new(t, params()).execute();
            assert!(rim.top_height > 53.0, "{t}");
        }
    }

    #[test]
    fn straight_path_data() {
        let rim = MakeRim::new(RimType::Straight, params()).execute();
        assert_eq!(rim.path.to_svg_path_data(), "M30,50 L30,53 L35,53 L35,50");
    }

    #[test]
    fn left_side_mirrors_radii() {
        let right = MakeRim::new(RimType::Flanged, params()).execute();
        let mut p = params();
        p.side = Side::Left;
        let left = MakeRim::new(RimType::Flanged, p).execute();
        assert_abs_diff_eq!(left.top_height, right.top_height);
        for (l, r) in left.path.points().iter().zip(right.path.points()) {
            assert_abs_diff_eq!(l.x, -r.x);
            assert_abs_diff_eq!(l.y, r.y);
        }
    }

    #[test]
    fn unknown_tag_is_empty() {
        let mut p = params();
        p.lip_height = 0.5;
        let rim = rim_profile_for_tag("scalloped", p);
        assert!(rim.path.is_empty());
        assert_abs_diff_eq!(rim.top_height, 51.5);
        assert_eq!(
            "scalloped".parse::<RimType>(),
            Err(UnknownRimType("scalloped".to_owned()))
        );
    }

    #[test]
    fn known_tag_matches_typed_entry_point() {
        assert_eq!(
            rim_profile_for_tag("rolled", params()),
            MakeRim::new(RimType::Rolled, params()).execute()
        );
    }

    #[test]
    fn vessel_filter() {
        let plate: Vec<RimType> = RimType::for_vessel(VesselKind::Plate).collect();
        assert_eq!(plate, [RimType::Rounded, RimType::Flanged, RimType::Coupe]);
        assert_eq!(RimType::for_vessel(VesselKind::Mug).count(), 8);
        for kind in VesselKind::ALL {
            assert!(RimType::for_vessel(kind).any(|t| t == RimType::Rounded));
        }
    }

    #[test]
    fn huge_inputs_are_clamped() {
        let p = RimParams {
            base_height: 1e308,
            lip_height: 1e308,
            overhang: 1e308,
            wall_thickness: 1e308,
            ..params()
        };
        for t in RimType::ALL {
            let rim = MakeRim::new(t, p).execute();
            assert!(rim.top_height.is_finite(), "{t}");
            assert!(rim.top_height <= 3.0 * MAX_RIM_DIMENSION, "{t}");
            assert!(
                rim.path.points().iter().all(|q| q.x.is_finite() && q.y.is_finite()),
                "{t}"
            );
        }
    }

    #[test]
    fn nan_inputs_fall_back() {
        let p = RimParams {
            lip_height: f64::NAN,
            overhang: f64::NAN,
            wall_thickness: f64::NAN,
            ..params()
        };
        let rim = MakeRim::new(RimType::Straight, p).execute();
        assert_abs_diff_eq!(rim.top_height, 50.0 + MIN_LIP_HEIGHT);
        assert!(!rim.path.to_svg_path_data().contains("NaN"));
    }

    #[test]
    fn params_for_nested_instance() {
        let profile = crate::catalog::profile("fargklar-real").unwrap();
        let bowls = crate::operations::nesting::Nest::new(&profile, 2, 3.0).execute();
        let p = RimParams::for_instance(&bowls[1], &profile.rim_lip, Side::Left);
        assert_abs_diff_eq!(p.outer_top_radius, bowls[1].outer.rim_radius());
        assert_abs_diff_eq!(p.inner_top_radius, bowls[1].inner.rim_radius());
        assert_abs_diff_eq!(p.lip_height, profile.rim_lip.height * bowls[1].scale);
        assert_eq!(p.side, Side::Left);
        let rim = MakeRim::new(RimType::Rounded, p).execute();
        assert!(rim.path.points().iter().all(|q| q.x <= 0.0));
    }

    proptest! {
        #[test]
        fn finite_inputs_give_finite_paths(
            ir in -500.0f64..500.0,
            width in 0.0f64..50.0,
            h in -100.0f64..500.0,
            lip in -10.0f64..20.0,
            ov in -10.0f64..20.0,
            wt in 0.0f64..30.0,
            left in proptest::bool::ANY,
        ) {
            let p = RimParams {
                inner_top_radius: ir,
                outer_top_radius: ir + width,
                base_height: h,
                lip_height: lip,
                overhang: ov,
                wall_thickness: wt,
                side: if left { Side::Left } else { Side::Right },
            };
            for t in RimType::ALL {
                let rim = MakeRim::new(t, p).execute();
                prop_assert!(rim.top_height.is_finite());
                prop_assert!(rim.path.points().iter().all(|q| q.x.is_finite() && q.y.is_finite()));
                let d = rim.path.to_svg_path_data();
                prop_assert!(!d.contains("NaN") && !d.contains("inf"));
            }
        }

        #[test]
        fn any_magnitude_gives_finite_paths(
            ir in num::f64::NORMAL | num::f64::ZERO,
            or in num::f64::NORMAL | num::f64::ZERO,
            h in num::f64::NORMAL,
            lip in num::f64::NORMAL,
            ov in num::f64::NORMAL,
            wt in num::f64::NORMAL,
        ) {
            let p = RimParams {
                inner_top_radius: ir,
                outer_top_radius: or,
                base_height: h,
                lip_height: lip,
                overhang: ov,
                wall_thickness: wt,
                side: Side::Right,
            };
            for t in RimType::ALL {
                let rim = MakeRim::new(t, p).execute();
                prop_assert!(rim.top_height.is_finite());
                prop_assert!(rim.path.points().iter().all(|q| q.x.is_finite() && q.y.is_finite()));
            }
        }
    }
}
