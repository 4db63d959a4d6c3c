use std::f64::consts::PI;

use crate::geometry::{Profile, WallCurve};
use crate::operations::transform::Scale;

use super::GlazeArea;

/// Wet clay density used for mass estimates, g/mL.
pub const CLAY_DENSITY_G_PER_ML: f64 = 1.8;
/// Milliliters per US fluid ounce.
pub const ML_PER_US_FL_OZ: f64 = 29.5735;
/// Grams per pound.
pub const G_PER_LB: f64 = 453.592;
/// Square millimeters per square inch.
pub const MM2_PER_IN2: f64 = 645.16;
/// Thickness of the disc closing the interior at the floor, at scale 1.
const FLOOR_DISC_THICKNESS: f64 = 0.01;

/// Volume of a conical frustum: `π/3 · |dh| · (r1² + r1·r2 + r2²)`.
#[must_use]
pub fn frustum_volume(r1: f64, r2: f64, dh: f64) -> f64 {
    PI / 3.0 * dh.abs() * (r1 * r1 + r1 * r2 + r2 * r2)
}

/// Sums the frustum volumes under a curve, down to the axis.
#[must_use]
pub fn revolved_volume(curve: &WallCurve) -> f64 {
    curve
        .points()
        .windows(2)
        .map(|w| frustum_volume(w[0].x, w[1].x, w[1].y - w[0].y))
        .sum()
}

/// Volumetric and surface measurements of a vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselVolumes {
    /// Scale the measurements were taken at.
    pub scale: f64,
    pub interior_mm3: f64,
    pub interior_ml: f64,
    pub interior_oz: f64,
    pub clay_mm3: f64,
    pub clay_ml: f64,
    /// Wet clay mass in grams.
    pub clay_g: f64,
    pub clay_lb: f64,
    pub glaze_mm2: f64,
    pub glaze_in2: f64,
}

/// Computes interior volume, clay volume and mass, and glaze area of a
/// profile by summing frustums along its wall curve.
///
/// Every length, including the floor disc, is scaled, so volumes scale with
/// `s³` and areas with `s²` exactly.
#[derive(Debug)]
pub struct ComputeVolumes<'a> {
    profile: &'a Profile,
    scale: f64,
}

impl<'a> ComputeVolumes<'a> {
    /// Creates a new `ComputeVolumes` query at scale 1.
    #[must_use]
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            scale: 1.0,
        }
    }

    /// Sets a uniform scale. Negative values are treated as zero.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale.max(0.0);
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> VesselVolumes {
        let p = self.profile;
        let s = self.scale;
        let wt = p.wall_thickness * s;
        let foot_h = p.foot.height * s;
        let floor_t = p.floor.thickness * s;
        let foot_or = p.foot.outer_radius * s;
        let foot_ir = p.foot.inner_radius * s;

        let outer = Scale::new(&p.outer, s).execute();
        let wall_base = outer.base_radius();

        let interior_mm3 =
            frustum_volume(0.0, wall_base, FLOOR_DISC_THICKNESS * s) + revolved_volume(&outer);

        let exterior_mm3 = PI * (foot_or * foot_or - foot_ir * foot_ir) * foot_h
            + frustum_volume(foot_ir, wall_base + wt, floor_t)
            + revolved_volume(&outer.with_radial_offset(wt));

        let clay_mm3 = exterior_mm3 - interior_mm3;
        let interior_ml = interior_mm3 / 1000.0;
        let clay_ml = clay_mm3 / 1000.0;
        let clay_g = clay_ml * CLAY_DENSITY_G_PER_ML;
        let glaze_mm2 = GlazeArea::new(&outer, wt).execute();

        VesselVolumes {
            scale: s,
            interior_mm3,
            interior_ml,
            interior_oz: interior_ml / ML_PER_US_FL_OZ,
            clay_mm3,
            clay_ml,
            clay_g,
            clay_lb: clay_g / G_PER_LB,
            glaze_mm2,
            glaze_in2: glaze_mm2 / MM2_PER_IN2,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn frustum_reduces_to_cylinder_and_cone() {
        assert_relative_eq!(frustum_volume(2.0, 2.0, 5.0), PI * 4.0 * 5.0, max_relative = 1e-12);
        assert_relative_eq!(
            frustum_volume(0.0, 3.0, 4.0),
            PI * 9.0 * 4.0 / 3.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(frustum_volume(1.0, 2.0, -3.0), frustum_volume(1.0, 2.0, 3.0));
    }

    #[test]
    fn every_catalog_profile_has_positive_measurements() {
        for (key, p) in catalog::all() {
            let v = ComputeVolumes::new(&p).execute();
            assert!(v.interior_ml > 0.0, "{key}: interior {}", v.interior_ml);
            assert!(v.clay_g > 0.0, "{key}: clay {}", v.clay_g);
            assert!(v.glaze_mm2 > 0.0, "{key}: glaze {}", v.glaze_mm2);
        }
    }

    #[test]
    fn half_scale_is_an_eighth_of_the_volume() {
        for (key, p) in catalog::all() {
            let full = ComputeVolumes::new(&p).execute();
            let half = ComputeVolumes::new(&p).with_scale(0.5).execute();
            let ratio = full.interior_mm3 / half.interior_mm3;
            assert!(ratio > 6.0 && ratio < 10.0, "{key}: ratio {ratio}");
            assert_relative_eq!(ratio, 8.0, max_relative = 1e-9);
            assert_relative_eq!(full.glaze_mm2 / half.glaze_mm2, 4.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn unit_conversions_are_consistent() {
        let p = catalog::profile("mug").unwrap();
        let v = ComputeVolumes::new(&p).execute();
        assert_relative_eq!(v.interior_ml * 1000.0, v.interior_mm3, max_relative = 1e-12);
        assert_relative_eq!(v.interior_oz * ML_PER_US_FL_OZ, v.interior_ml, max_relative = 1e-12);
        assert_relative_eq!(v.clay_g, v.clay_ml * 1.8, max_relative = 1e-12);
        assert_relative_eq!(v.clay_lb * G_PER_LB, v.clay_g, max_relative = 1e-12);
        assert_relative_eq!(v.glaze_in2 * MM2_PER_IN2, v.glaze_mm2, max_relative = 1e-12);
    }

    #[test]
    fn mug_holds_a_plausible_amount() {
        // 82 mm mug, 90 mm tall: somewhere between 250 and 600 mL.
        let p = catalog::profile("mug").unwrap();
        let v = ComputeVolumes::new(&p).execute();
        assert!(v.interior_ml > 250.0 && v.interior_ml < 600.0, "{}", v.interior_ml);
    }

    proptest! {
        #[test]
        fn volume_follows_cube_law(s in 0.35f64..1.0) {
            let p = catalog::profile("fargklar-real").unwrap();
            let full = ComputeVolumes::new(&p).execute();
            let scaled = ComputeVolumes::new(&p).with_scale(s).execute();
            let expected = full.interior_mm3 * s * s * s;
            prop_assert!((scaled.interior_mm3 - expected).abs() <= expected * 1e-9);
            let expected_area = full.glaze_mm2 * s * s;
            prop_assert!((scaled.glaze_mm2 - expected_area).abs() <= expected_area * 1e-9);
        }
    }
}
