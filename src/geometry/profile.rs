use serde::{Deserialize, Serialize};

use super::WallCurve;
use crate::error::ProfileError;

/// Vessel category, used to filter rim types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselKind {
    #[default]
    Bowl,
    Plate,
    Mug,
    Cup,
    Tumbler,
    Serving,
}

impl VesselKind {
    /// All vessel categories.
    pub const ALL: [Self; 6] = [
        Self::Bowl,
        Self::Plate,
        Self::Mug,
        Self::Cup,
        Self::Tumbler,
        Self::Serving,
    ];

    /// Returns the lowercase tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bowl => "bowl",
            Self::Plate => "plate",
            Self::Mug => "mug",
            Self::Cup => "cup",
            Self::Tumbler => "tumbler",
            Self::Serving => "serving",
        }
    }
}

/// Floor slab under the interior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub thickness: f64,
}

/// Foot ring the vessel stands on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foot {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub height: f64,
}

/// Lip above the top of the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimLip {
    pub height: f64,
    pub overhang: f64,
}

/// Authoritative description of one vessel. All lengths in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    /// Free-form provenance note.
    pub source: String,
    pub vessel: VesselKind,
    pub rim_diameter: f64,
    pub wall_thickness: f64,
    pub interior_depth: f64,
    pub floor: Floor,
    pub foot: Foot,
    pub rim_lip: RimLip,
    /// Canonical wall curve, base to rim.
    pub outer: WallCurve,
}

/// Minimum number of outer curve samples a profile needs.
pub const MIN_PROFILE_POINTS: usize = 3;

impl Profile {
    /// Radius of the wall where it meets the floor.
    #[must_use]
    pub fn wall_base_radius(&self) -> f64 {
        self.outer.base_radius()
    }

    /// Outer radius at the rim, as sampled by the curve.
    #[must_use]
    pub fn rim_outer_radius(&self) -> f64 {
        self.outer.rim_radius()
    }

    /// Overall height: interior depth plus floor plus foot.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.interior_depth + self.floor.thickness + self.foot.height
    }

    /// Checks the profile invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ProfileError`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        let scalars = [
            ("rimDiameter", self.rim_diameter),
            ("wallThickness", self.wall_thickness),
            ("interiorDepth", self.interior_depth),
            ("floor.thickness", self.floor.thickness),
            ("foot.outerRadius", self.foot.outer_radius),
            ("foot.height", self.foot.height),
            ("rimLip.height", self.rim_lip.height),
        ];
        for (field, value) in scalars {
            if !(value.is_finite() && value > 0.0) {
                return Err(ProfileError::NonPositive { field, value });
            }
        }
        if !(self.foot.inner_radius.is_finite() && self.foot.inner_radius >= 0.0) {
            return Err(ProfileError::NonPositive {
                field: "foot.innerRadius",
                value: self.foot.inner_radius,
            });
        }
        if !(self.rim_lip.overhang.is_finite() && self.rim_lip.overhang >= 0.0) {
            return Err(ProfileError::NonPositive {
                field: "rimLip.overhang",
                value: self.rim_lip.overhang,
            });
        }
        if self.outer.len() < MIN_PROFILE_POINTS {
            return Err(ProfileError::TooFewPoints {
                required: MIN_PROFILE_POINTS,
                actual: self.outer.len(),
            });
        }
        if self.foot.outer_radius <= self.foot.inner_radius {
            return Err(ProfileError::FootRingInverted {
                outer: self.foot.outer_radius,
                inner: self.foot.inner_radius,
            });
        }
        if self.foot.outer_radius >= self.wall_base_radius() {
            return Err(ProfileError::FootOutsideWall {
                foot_outer: self.foot.outer_radius,
                wall_base: self.wall_base_radius(),
            });
        }
        Ok(())
    }
}
