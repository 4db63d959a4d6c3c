//! Input readers: the curve editor's tool-pair SVG and JSON profiles.

mod profile_json;
mod profile_svg;

pub use profile_json::parse_profile_json;
pub use profile_svg::{parse_profile_svg, DEDUP_EPSILON};
