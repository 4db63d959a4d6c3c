//! Output encoders: laser SVG, DXF, printable template SVG and JSON profile.
//!
//! Every number written by an encoder passes through a finite check; a NaN
//! or infinite value is written as `0` and reported with a `warn` event.

mod dxf;
mod profile_json;
mod svg;
mod template;

use std::borrow::Cow;

use tracing::warn;

use crate::operations::creation::{ribs_for_nest, RibConfig, RibPolygon};
use crate::operations::nesting::NestedInstance;

pub use dxf::export_rib_dxf;
pub use profile_json::{export_profile_json, FORMAT_VERSION};
pub use svg::export_rib_svg;
pub use template::export_template_svg;

/// Stroke color of the cut layer.
pub const CUT_COLOR: &str = "#FF0000";
/// Fill color of the engrave layer.
pub const ENGRAVE_COLOR: &str = "#000000";
/// Stroke width of cut lines, read by laser software as a hairline.
pub const HAIRLINE: &str = "0.01";

/// Parameters shared by the rib encoders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportParams {
    /// Included angle of the rib's working edge bevel, degrees.
    pub edge_angle_deg: f64,
    /// Stock thickness of the rib body, mm.
    pub rib_thickness: f64,
    /// Horizontal space between neighboring ribs, mm.
    pub spacing: f64,
    /// Margin around the sheet content, mm.
    pub padding: f64,
    /// Assembly settings the ribs were built with.
    pub rib: RibConfig,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            edge_angle_deg: 45.0,
            rib_thickness: 6.0,
            spacing: 15.0,
            padding: 10.0,
            rib: RibConfig::default(),
        }
    }
}

impl ExportParams {
    /// Sets the bevel angle.
    #[must_use]
    pub fn with_edge_angle(mut self, degrees: f64) -> Self {
        self.edge_angle_deg = degrees;
        self
    }

    /// Sets the rib body thickness.
    #[must_use]
    pub fn with_rib_thickness(mut self, thickness: f64) -> Self {
        self.rib_thickness = thickness;
        self
    }

    /// Sets the minimum gap between wall bases.
    #[must_use]
    pub fn with_min_gap(mut self, gap: f64) -> Self {
        self.rib.min_gap = gap;
        self
    }

    /// How far the bevel reaches into the rib body:
    /// `thickness / (2 · tan(angle / 2))`.
    ///
    /// The angle is clamped to `[1°, 179°]`.
    #[must_use]
    pub fn edge_extension(&self) -> f64 {
        let half = (self.edge_angle_deg.clamp(1.0, 179.0) / 2.0).to_radians();
        self.rib_thickness / (2.0 * half.tan())
    }

    /// Builds one rib per nested instance with these settings.
    #[must_use]
    pub fn build_ribs(&self, instances: &[NestedInstance]) -> Vec<RibPolygon> {
        ribs_for_nest(instances, self.rib)
    }
}

/// Replaces a non-finite value with zero.
fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(%value, "non-finite number written as 0");
        0.0
    }
}

/// Formats with a fixed number of decimals.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, finite(value))
}

/// Formats with the shortest representation that round-trips.
pub(crate) fn shortest(value: f64) -> String {
    format!("{}", finite(value))
}

/// Escapes text for XML character data and attribute values.
pub(crate) fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Horizontal placement of ribs in a row: the x shift to apply to each rib
/// and the total row width.
pub(crate) fn layout_row(ribs: &[RibPolygon], start: f64, spacing: f64) -> (Vec<f64>, f64) {
    let mut cursor = start;
    let mut shifts = Vec::with_capacity(ribs.len());
    for rib in ribs {
        shifts.push(cursor - rib.bounds.min.x);
        cursor += rib.width() + spacing;
    }
    let end = if ribs.is_empty() { start } else { cursor - spacing };
    (shifts, end)
}
