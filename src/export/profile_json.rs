use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ExportError;
use crate::geometry::{Profile, VesselKind};

/// Value of the `throwform` key identifying the document format.
pub const FORMAT_VERSION: &str = "1.0";

/// Largest magnitude below which every integer is an exact `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A length written the way a JavaScript number prints: integral values
/// without a fractional part, `160` rather than `160.0`.
#[derive(Clone, Copy)]
struct Number(f64);

impl Serialize for Number {
    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() && v.trunc() == v && v.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// Field order here is the key order of the written document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument<'a> {
    throwform: &'static str,
    name: &'a str,
    rim_diameter: Number,
    wall_thickness: Number,
    interior_depth: Number,
    floor: FloorDocument,
    foot: FootDocument,
    rim_lip: RimLipDocument,
    outer: Vec<[Number; 2]>,
    vessel: VesselKind,
}

#[derive(Serialize)]
struct FloorDocument {
    thickness: Number,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FootDocument {
    outer_radius: Number,
    inner_radius: Number,
    height: Number,
}

#[derive(Serialize)]
struct RimLipDocument {
    height: Number,
    overhang: Number,
}

/// Serializes a profile as a pretty-printed JSON document.
///
/// `name` overrides the profile's own name. Integral lengths are written
/// without a fractional part. Parsing the result with
/// [`crate::import::parse_profile_json`] and writing it again yields the same
/// bytes.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if the JSON writer fails.
pub fn export_profile_json(profile: &Profile, name: Option<&str>) -> Result<String, ExportError> {
    let doc = ProfileDocument {
        throwform: FORMAT_VERSION,
        name: name.unwrap_or(&profile.name),
        rim_diameter: Number(profile.rim_diameter),
        wall_thickness: Number(profile.wall_thickness),
        interior_depth: Number(profile.interior_depth),
        floor: FloorDocument {
            thickness: Number(profile.floor.thickness),
        },
        foot: FootDocument {
            outer_radius: Number(profile.foot.outer_radius),
            inner_radius: Number(profile.foot.inner_radius),
            height: Number(profile.foot.height),
        },
        rim_lip: RimLipDocument {
            height: Number(profile.rim_lip.height),
            overhang: Number(profile.rim_lip.overhang),
        },
        outer: profile
            .outer
            .points()
            .iter()
            .map(|p| [Number(p.x), Number(p.y)])
            .collect(),
        vessel: profile.vessel,
    };
    let json =
        serde_json::to_string_pretty(&doc).map_err(|e| ExportError::Serialize(e.to_string()))?;
    debug!(name = doc.name, bytes = json.len(), "profile json written");
    Ok(json)
}
