use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ImportError;
use crate::export::FORMAT_VERSION;
use crate::geometry::{Floor, Foot, Profile, RimLip, VesselKind, WallCurve};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    throwform: Option<String>,
    name: Option<String>,
    source: Option<String>,
    #[serde(default)]
    vessel: VesselKind,
    rim_diameter: Option<f64>,
    wall_thickness: Option<f64>,
    interior_depth: Option<f64>,
    floor: Option<Floor>,
    foot: Option<Foot>,
    rim_lip: Option<RimLip>,
    outer: Option<Vec<[f64; 2]>>,
}

/// Parses a profile document written by [`crate::export::export_profile_json`]
/// and validates it.
///
/// A missing `vessel` means a bowl; unknown keys are ignored.
///
/// # Errors
///
/// Returns [`ImportError::Json`] for malformed JSON,
/// [`ImportError::MissingField`] for an absent required field,
/// [`ImportError::InvalidCurve`] for an outer curve whose height decreases and
/// [`ImportError::InvalidProfile`] when validation fails.
pub fn parse_profile_json(json: &str) -> Result<Profile, ImportError> {
    let raw: RawProfile =
        serde_json::from_str(json).map_err(|e| ImportError::Json(e.to_string()))?;

    match raw.throwform.as_deref() {
        Some(FORMAT_VERSION) | None => {}
        Some(other) => warn!(version = other, "unexpected profile format version"),
    }

    let outer = raw.outer.ok_or(ImportError::MissingField("outer"))?;
    let outer = WallCurve::from_pairs(&outer)
        .map_err(|source| ImportError::InvalidCurve { index: 0, source })?;

    let profile = Profile {
        name: raw.name.unwrap_or_default(),
        source: raw.source.unwrap_or_default(),
        vessel: raw.vessel,
        rim_diameter: raw.rim_diameter.ok_or(ImportError::MissingField("rimDiameter"))?,
        wall_thickness: raw
            .wall_thickness
            .ok_or(ImportError::MissingField("wallThickness"))?,
        interior_depth: raw
            .interior_depth
            .ok_or(ImportError::MissingField("interiorDepth"))?,
        floor: raw.floor.ok_or(ImportError::MissingField("floor"))?,
        foot: raw.foot.ok_or(ImportError::MissingField("foot"))?,
        rim_lip: raw.rim_lip.ok_or(ImportError::MissingField("rimLip"))?,
        outer,
    };
    profile.validate()?;

    debug!(name = %profile.name, points = profile.outer.len(), "profile json imported");
    Ok(profile)
}
