use std::fmt::Write;

use tracing::info;

use super::{
    escape_xml, fixed, layout_row, shortest, ExportParams, CUT_COLOR, ENGRAVE_COLOR, HAIRLINE,
};
use crate::operations::creation::RibPolygon;

/// Extra headroom above the tallest rib for the label row, mm.
const LABEL_BAND: f64 = 10.0;

/// Renders a set of ribs as a laser-ready SVG document in millimetres.
///
/// Ribs are laid out left to right on a shared floor line. Outlines and
/// hanging holes go in the `cut` group as red hairlines; the title and the
/// per-rib labels go in the `engrave` group as black text.
#[must_use]
pub fn export_rib_svg(name: &str, ribs: &[RibPolygon], params: &ExportParams) -> String {
    let pad = params.padding.max(0.0);
    let spacing = params.spacing.max(0.0);

    let (shifts, row_end) = layout_row(ribs, pad, spacing);
    let width = if ribs.is_empty() { 2.0 * pad } else { row_end + pad };
    let tallest = ribs.iter().map(RibPolygon::height).fold(0.0, f64::max);
    let height = tallest + 2.0 * pad + LABEL_BAND;
    let floor = height - pad;

    let mut svg = String::with_capacity(4096);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
        w = fixed(width, 2),
        h = fixed(height, 2),
    );

    let _ = writeln!(
        svg,
        r#"<g id="cut" fill="none" stroke="{CUT_COLOR}" stroke-width="{HAIRLINE}">"#
    );
    for (rib, shift) in ribs.iter().zip(&shifts) {
        let mut d = String::with_capacity(rib.points.len() * 16);
        for (i, p) in rib.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{},{} ", fixed(p.x + shift, 2), fixed(floor - p.y, 2));
        }
        d.push('Z');
        let _ = writeln!(svg, r#"<path d="{d}"/>"#);
        if rib.hole.radius > 0.0 {
            let _ = writeln!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                fixed(rib.hole.center.x + shift, 2),
                fixed(floor - rib.hole.center.y, 2),
                fixed(rib.hole.radius, 2),
            );
        }
    }
    svg.push_str("</g>\n");

    let _ = writeln!(
        svg,
        r#"<g id="engrave" stroke="none" fill="{ENGRAVE_COLOR}">"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{p}" y="{p}" font-family="sans-serif" font-size="8">{title}</text>"#,
        p = fixed(pad, 2),
        title = escape_xml(&title(name, params)),
    );
    for (rib, shift) in ribs.iter().zip(&shifts) {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="6" text-anchor="middle">{}-Rib</text>"#,
            fixed(rib.bounds.center().x + shift, 2),
            fixed(pad + 8.0, 2),
            escape_xml(&rib.label),
        );
    }
    svg.push_str("</g>\n</svg>\n");

    info!(ribs = ribs.len(), bytes = svg.len(), "rib svg written");
    svg
}

fn title(name: &str, params: &ExportParams) -> String {
    format!(
        "{name} | gap {} mm | edge {}° | body {} mm",
        shortest(params.rib.min_gap),
        shortest(params.edge_angle_deg),
        shortest(params.rib_thickness),
    )
}
