use tracing::debug;

use crate::geometry::{Profile, WallCurve};
use crate::operations::modification::DEFAULT_FILLET_RADIUS;
use crate::operations::offset::OffsetInward;
use crate::operations::transform::Scale;

/// Smallest scale an instance may have. Ribs for smaller vessels are too
/// small to hold.
pub const MIN_NEST_SCALE: f64 = 0.35;

/// Clearance between an instance's foot ring and its own wall base, mm.
pub const FOOT_WALL_MARGIN: f64 = 1.0;

/// Clearance between an instance's foot ring and the wall base of the
/// instance it sits in, mm.
pub const FOOT_PARENT_MARGIN: f64 = 2.0;

/// Narrowest foot ring, and smallest foot inner radius, mm.
pub const MIN_FOOT_RING: f64 = 2.0;

/// One member of a nested family of vessels.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedInstance {
    /// Zero-based position in the family, largest first.
    pub index: usize,
    /// Display label, `"Bowl N"`.
    pub label: String,
    pub scale: f64,
    /// Scaled outer wall curve, base at height 0.
    pub outer: WallCurve,
    /// Inner wall curve derived from `outer`.
    pub inner: WallCurve,
    /// Interior depth plus floor plus foot.
    pub total_height: f64,
    pub interior_depth: f64,
    pub rim_diameter: f64,
    pub foot_outer: f64,
    pub foot_inner: f64,
    pub foot_height: f64,
    pub floor_thickness: f64,
    /// Height of this instance's foot above the bottom of the stack.
    pub base_y: f64,
    pub wall_base: f64,
    /// Wall thickness at this scale.
    pub wall_thickness: f64,
}

/// Derives a family of progressively smaller vessels that stack inside one
/// another.
///
/// Instance `i` is scaled by `1 - i * (wall thickness + gap) / rim radius`;
/// the family ends early once the scale would drop below
/// [`MIN_NEST_SCALE`]. Foot rings are shrunk to clear both their own wall
/// base and the wall base of the instance below, and each instance rests on
/// the floor of the one below it.
#[derive(Debug)]
pub struct Nest<'a> {
    profile: &'a Profile,
    count: usize,
    gap: f64,
    fillet_radius: f64,
}

impl<'a> Nest<'a> {
    /// Creates a new `Nest` operation for up to `count` instances separated
    /// by `gap` millimeters. Negative gaps are treated as zero.
    #[must_use]
    pub fn new(profile: &'a Profile, count: usize, gap: f64) -> Self {
        Self {
            profile,
            count,
            gap: gap.max(0.0),
            fillet_radius: DEFAULT_FILLET_RADIUS,
        }
    }

    /// Sets the inner floor fillet radius at scale 1.
    #[must_use]
    pub fn with_fillet_radius(mut self, radius: f64) -> Self {
        self.fillet_radius = radius;
        self
    }

    /// Executes the nesting, returning at most `count` instances.
    #[must_use]
    pub fn execute(&self) -> Vec<NestedInstance> {
        let p = self.profile;
        let rim_r = p.rim_outer_radius();
        let step = (p.wall_thickness + self.gap) / rim_r;
        let ring = p.foot.outer_radius - p.foot.inner_radius;

        // `count` is unbounded; the scale floor limits the real length.
        let mut out: Vec<NestedInstance> = Vec::new();
        for i in 0..self.count {
            #[allow(clippy::cast_precision_loss)]
            let s = 1.0 - i as f64 * step;
            // NaN when the rim radius is zero.
            if s.is_nan() || s < MIN_NEST_SCALE {
                debug!(index = i, scale = s, requested = self.count, "nesting stopped early");
                break;
            }

            let outer = Scale::new(&p.outer, s).execute();
            let wall_base = outer.base_radius();
            let wt = p.wall_thickness * s;
            let inner = OffsetInward::new(&outer, wt)
                .with_fillet_radius(self.fillet_radius * s)
                .execute();

            let mut foot_outer = (p.foot.outer_radius * s).min(wall_base - FOOT_WALL_MARGIN);
            if let Some(parent) = out.last() {
                foot_outer = foot_outer.min(parent.wall_base - FOOT_PARENT_MARGIN);
            }
            let foot_inner = (foot_outer - (ring * s).max(MIN_FOOT_RING)).max(MIN_FOOT_RING);

            let foot_height = p.foot.height * s;
            let floor_thickness = p.floor.thickness * s;
            let base_y = out
                .last()
                .map_or(0.0, |par| par.base_y + par.foot_height + par.floor_thickness);

            out.push(NestedInstance {
                index: i,
                label: format!("Bowl {}", i + 1),
                scale: s,
                outer,
                inner,
                total_height: (p.interior_depth + p.floor.thickness + p.foot.height) * s,
                interior_depth: p.interior_depth * s,
                rim_diameter: p.rim_diameter * s,
                foot_outer,
                foot_inner,
                foot_height,
                floor_thickness,
                base_y,
                wall_base,
                wall_thickness: wt,
            });
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn fargklar() -> Profile {
        catalog::profile("fargklar-real").unwrap()
    }

    #[test]
    fn returns_requested_count() {
        assert_eq!(Nest::new(&fargklar(), 3, 3.0).execute().len(), 3);
    }

    #[test]
    fn first_instance_is_unscaled() {
        let p = fargklar();
        let bowls = Nest::new(&p, 3, 3.0).execute();
        assert_abs_diff_eq!(bowls[0].scale, 1.0);
        assert_abs_diff_eq!(bowls[0].base_y, 0.0);
        assert_eq!(bowls[0].outer, p.outer);
    }

    #[test]
    fn scale_follows_gap_formula() {
        let bowls = Nest::new(&fargklar(), 3, 3.0).execute();
        // (5.5 + 3) / 84.5 per step.
        assert_abs_diff_eq!(bowls[1].scale, 1.0 - 8.5 / 84.5, epsilon = 1e-12);
        assert_abs_diff_eq!(bowls[2].scale, 1.0 - 17.0 / 84.5, epsilon = 1e-12);
    }

    #[test]
    fn successive_instances_shrink_and_rise() {
        let bowls = Nest::new(&fargklar(), 4, 3.0).execute();
        for w in bowls.windows(2) {
            assert!(w[1].scale < w[0].scale);
            assert!(w[1].base_y > w[0].base_y);
        }
    }

    #[test]
    fn base_y_stacks_on_parent_floor() {
        let bowls = Nest::new(&fargklar(), 3, 3.0).execute();
        for w in bowls.windows(2) {
            let expected = w[0].base_y + w[0].foot_height + w[0].floor_thickness;
            assert_abs_diff_eq!(w[1].base_y, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn feet_clear_own_and_parent_walls() {
        let bowls = Nest::new(&fargklar(), 4, 3.0).execute();
        for b in &bowls {
            assert!(b.foot_outer < b.wall_base);
            assert!(b.foot_inner < b.foot_outer);
        }
        for w in bowls.windows(2) {
            assert!(w[1].foot_outer < w[0].wall_base);
        }
    }

    #[test]
    fn stops_at_scale_floor() {
        let bowls = Nest::new(&fargklar(), 20, 3.0).execute();
        assert!(bowls.len() < 20);
        assert!(bowls.iter().all(|b| b.scale >= MIN_NEST_SCALE));
    }

    #[test]
    fn larger_gap_fits_fewer() {
        let p = fargklar();
        let tight = Nest::new(&p, 10, 1.0).execute();
        let loose = Nest::new(&p, 10, 8.0).execute();
        assert!(tight.len() >= loose.len());
    }

    #[test]
    fn negative_gap_is_clamped() {
        let p = fargklar();
        assert_eq!(
            Nest::new(&p, 3, -10.0).execute(),
            Nest::new(&p, 3, 0.0).execute()
        );
    }

    #[test]
    fn labels_count_from_one() {
        let bowls = Nest::new(&fargklar(), 3, 3.0).execute();
        let labels: Vec<&str> = bowls.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Bowl 1", "Bowl 2", "Bowl 3"]);
    }

    #[test]
    fn inner_curves_are_valid_for_every_profile() {
        for (key, p) in catalog::all() {
            for b in Nest::new(&p, 3, 3.0).execute() {
                assert!(
                    WallCurve::new(b.inner.points().to_vec()).is_ok(),
                    "{key} {}: invalid inner curve",
                    b.label
                );
                assert!(b.inner.base_radius() < b.outer.base_radius());
            }
        }
    }

    #[test]
    fn unbounded_count_stops_at_scale_floor() {
        let bowls = Nest::new(&fargklar(), usize::MAX, 3.0).execute();
        assert!(!bowls.is_empty());
        assert!(bowls.len() < 10);
        assert!(bowls.iter().all(|b| b.scale >= MIN_NEST_SCALE));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(Nest::new(&fargklar(), 0, 3.0).execute().is_empty());
    }

    proptest! {
        #[test]
        fn nest_invariants_hold(count in 0usize..12, gap in -5.0f64..40.0, key_idx in 0usize..15) {
            let all = catalog::all();
            let (_, p) = &all[key_idx % all.len()];
            let bowls = Nest::new(p, count, gap).execute();
            prop_assert!(bowls.len() <= count);
            for b in &bowls {
                prop_assert!(b.scale >= MIN_NEST_SCALE);
                prop_assert!(b.foot_outer < b.wall_base);
            }
            for w in bowls.windows(2) {
                prop_assert!(w[1].foot_outer < w[0].wall_base);
            }
        }
    }
}
