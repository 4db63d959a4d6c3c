use std::fmt::Write;

use tracing::{debug, info};

use super::{escape_xml, fixed, shortest, ExportParams};
use crate::geometry::Profile;
use crate::operations::creation::RibPolygon;

/// A4 landscape, mm.
const PAGE_WIDTH: f64 = 297.0;
const PAGE_HEIGHT: f64 = 210.0;
const MARGIN: f64 = 15.0;
/// Vertical space reserved for the title block.
const HEADER: f64 = 30.0;
/// Horizontal space between neighboring outlines on the page.
const GUTTER: f64 = 12.0;
const CROP_MARK: f64 = 5.0;
const RULER_LENGTH: f64 = 50.0;
const RULER_STEP: f64 = 10.0;

/// Renders a printable hand-cut template on a single A4 landscape page.
///
/// Outlines are drawn at 1:1 unless they would not fit the page, in which
/// case they are scaled down uniformly and the scale is printed. A 50 mm
/// ruler lets the printout be checked for scaling.
#[must_use]
pub fn export_template_svg(
    profile: &Profile,
    ribs: &[RibPolygon],
    params: &ExportParams,
) -> String {
    let scale = fit_scale(ribs);
    debug!(scale, "template scale");

    let mut svg = String::with_capacity(8192);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {PAGE_WIDTH} {PAGE_HEIGHT}" width="{PAGE_WIDTH}mm" height="{PAGE_HEIGHT}mm">"#
    );
    let _ = writeln!(
        svg,
        r##"<rect x="{MARGIN}" y="{MARGIN}" width="{}" height="{}" fill="none" stroke="#ccc" stroke-width="0.3" stroke-dasharray="4,2"/>"##,
        PAGE_WIDTH - 2.0 * MARGIN,
        PAGE_HEIGHT - 2.0 * MARGIN,
    );
    for (x, y) in [
        (MARGIN, MARGIN),
        (PAGE_WIDTH - MARGIN, MARGIN),
        (MARGIN, PAGE_HEIGHT - MARGIN),
        (PAGE_WIDTH - MARGIN, PAGE_HEIGHT - MARGIN),
    ] {
        line(&mut svg, (x - CROP_MARK, y), (x + CROP_MARK, y), "#999", 0.3);
        line(&mut svg, (x, y - CROP_MARK), (x, y + CROP_MARK), "#999", 0.3);
    }

    let _ = writeln!(
        svg,
        r##"<text x="{}" y="{}" font-family="monospace" font-size="5" fill="#666">ThrowForm — {} — Hand Cut Template — PRINT AT 100% / NO SCALING</text>"##,
        MARGIN + 2.0,
        MARGIN + 8.0,
        escape_xml(&profile.name),
    );
    let scale_text = if scale < 1.0 {
        format!("{}x", fixed(scale, 2))
    } else {
        "1:1".to_owned()
    };
    let _ = writeln!(
        svg,
        r##"<text x="{}" y="{}" font-family="monospace" font-size="3.5" fill="#999">Edge: {}° · Body: {}mm · Bevel: {}mm · Wall: {}mm · Gap: {}mm · Scale: {scale_text}</text>"##,
        MARGIN + 2.0,
        MARGIN + 14.0,
        shortest(params.edge_angle_deg),
        shortest(params.rib_thickness),
        fixed(params.edge_extension(), 2),
        shortest(profile.wall_thickness),
        shortest(params.rib.min_gap),
    );

    ruler(&mut svg);

    let mut x0 = MARGIN + 5.0;
    let y0 = MARGIN + HEADER - 8.0;
    for rib in ribs {
        let w = rib.width() * scale;
        let h = rib.height() * scale;
        let min_x = rib.bounds.min.x;
        let top = rib.bounds.max.y;
        let px = |x: f64, y: f64| (fixed((x - min_x) * scale, 2), fixed((top - y) * scale, 2));

        let _ = writeln!(svg, r#"<g transform="translate({},{})">"#, fixed(x0, 2), fixed(y0, 2));
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="-3" text-anchor="middle" font-family="monospace" font-size="4" fill="#7a9a7e">{}-Rib</text>"##,
            fixed(w / 2.0, 2),
            escape_xml(&rib.label),
        );
        let mut d = String::with_capacity(rib.points.len() * 16);
        for (i, p) in rib.points.iter().enumerate() {
            let (x, y) = px(p.x, p.y);
            let _ = write!(d, "{}{x},{y} ", if i == 0 { 'M' } else { 'L' });
        }
        d.push('Z');
        let _ = writeln!(
            svg,
            r##"  <path d="{d}" fill="#f5f0e8" stroke="#333" stroke-width="0.6"/>"##
        );
        if rib.hole.radius > 0.0 {
            let (cx, cy) = px(rib.hole.center.x, rib.hole.center.y);
            let _ = writeln!(
                svg,
                r##"  <circle cx="{cx}" cy="{cy}" r="{}" fill="#fff" stroke="#333" stroke-width="0.4"/>"##,
                fixed(rib.hole.radius * scale, 2),
            );
        }
        let _ = writeln!(
            svg,
            r##"  <line x1="{c}" y1="0" x2="{c}" y2="{h}" stroke="#ccc" stroke-width="0.2" stroke-dasharray="2,2"/>"##,
            c = fixed(w / 2.0, 2),
            h = fixed(h, 2),
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-size="3" fill="#999">▼ flat base — wheel side ▼</text>"##,
            fixed(w / 2.0, 2),
            fixed(h + 5.0, 2),
        );
        svg.push_str("</g>\n");
        x0 += w + GUTTER;
    }
    svg.push_str("</svg>\n");

    info!(ribs = ribs.len(), scale, "template svg written");
    svg
}

/// Largest scale, at most 1, that fits every outline on the page.
fn fit_scale(ribs: &[RibPolygon]) -> f64 {
    if ribs.is_empty() {
        return 1.0;
    }
    let tallest = ribs.iter().map(RibPolygon::height).fold(0.0, f64::max);
    let total_width: f64 = ribs.iter().map(RibPolygon::width).sum();
    #[allow(clippy::cast_precision_loss)]
    let gutters = GUTTER * (ribs.len() - 1) as f64;

    let mut scale: f64 = 1.0;
    if tallest > 0.0 {
        scale = scale.min((PAGE_HEIGHT - 2.0 * MARGIN - HEADER) / tallest);
    }
    if total_width > 0.0 {
        let room = (PAGE_WIDTH - 2.0 * MARGIN - 10.0 - gutters).max(1.0);
        scale = scale.min(room / total_width);
    }
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

fn line(svg: &mut String, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
    let _ = writeln!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{width}"/>"#,
        from.0, from.1, to.0, to.1,
    );
}

/// 50 mm calibration ruler in the top right corner.
fn ruler(svg: &mut String) {
    let x = PAGE_WIDTH - MARGIN - RULER_LENGTH - 2.0;
    let y = MARGIN + 5.0;
    line(svg, (x, y), (x + RULER_LENGTH, y), "#333", 0.4);
    for i in 0..=5_u8 {
        let tick = x + f64::from(i) * RULER_STEP;
        line(svg, (tick, y - 2.0), (tick, y + 2.0), "#333", 0.3);
        if i < 5 {
            let _ = writeln!(
                svg,
                r##"<text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-size="3" fill="#666">{}</text>"##,
                tick + RULER_STEP / 2.0,
                y + 6.0,
                u32::from(i + 1) * 10,
            );
        }
    }
    let _ = writeln!(
        svg,
        r##"<text x="{}" y="{}" text-anchor="end" font-family="monospace" font-size="3" fill="#666">0mm</text>"##,
        x - 1.0,
        y + 2.0,
    );
}
