use std::fmt::{Display, Write};

use tracing::info;

use super::{fixed, layout_row, shortest, ExportParams};
use crate::operations::creation::RibPolygon;

/// AutoCAD 2000 drawing version.
const ACAD_VERSION: &str = "AC1015";
/// `$INSUNITS` value for millimetres.
const UNITS_MM: u8 = 4;
/// ACI color of the cut layer (red).
const CUT_COLOR: u8 = 1;
/// ACI color of the engrave layer (white/black).
const ENGRAVE_COLOR: u8 = 7;
const LABEL_HEIGHT: f64 = 4.0;
const TITLE_HEIGHT: f64 = 5.0;

/// Group-code stream. Lines are separated by `\n` with no trailing newline.
struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn new() -> Self {
        Self {
            out: String::with_capacity(8192),
        }
    }

    fn group(&mut self, code: u16, value: impl Display) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let _ = write!(self.out, "{code}\n{value}");
    }

    fn coord(&mut self, code: u16, value: f64) {
        self.group(code, fixed(value, 4));
    }

    fn layer(&mut self, name: &str, color: u8) {
        self.group(0, "LAYER");
        self.group(2, name);
        self.group(70, 0);
        self.group(62, color);
        self.group(6, "CONTINUOUS");
    }

    fn text(&mut self, layer: &str, x: f64, y: f64, height: f64, value: &str) {
        self.group(0, "TEXT");
        self.group(8, layer);
        self.coord(10, x);
        self.coord(20, y);
        self.coord(40, height);
        // Group values are single lines.
        self.group(1, value.replace(['\r', '\n'], " "));
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders a set of ribs as an AutoCAD 2000 (AC1015) DXF drawing in
/// millimetres.
///
/// The drawing declares two layers: `CUT` (red) carries one closed
/// `LWPOLYLINE` per rib and one `CIRCLE` per hanging hole; `ENGRAVE` carries
/// a title and one label per rib. Ribs sit on `y = 0` and are laid out left
/// to right.
#[must_use]
pub fn export_rib_dxf(name: &str, ribs: &[RibPolygon], params: &ExportParams) -> String {
    let (shifts, _) = layout_row(ribs, 0.0, params.spacing.max(0.0));
    let tallest = ribs.iter().map(RibPolygon::height).fold(0.0, f64::max);

    let mut dxf = DxfWriter::new();

    dxf.group(0, "SECTION");
    dxf.group(2, "HEADER");
    dxf.group(9, "$ACADVER");
    dxf.group(1, ACAD_VERSION);
    dxf.group(9, "$INSUNITS");
    dxf.group(70, UNITS_MM);
    dxf.group(9, "$MEASUREMENT");
    dxf.group(70, 1);
    dxf.group(0, "ENDSEC");

    dxf.group(0, "SECTION");
    dxf.group(2, "TABLES");
    dxf.group(0, "TABLE");
    dxf.group(2, "LAYER");
    dxf.group(70, 2);
    dxf.layer("CUT", CUT_COLOR);
    dxf.layer("ENGRAVE", ENGRAVE_COLOR);
    dxf.group(0, "ENDTAB");
    dxf.group(0, "ENDSEC");

    dxf.group(0, "SECTION");
    dxf.group(2, "ENTITIES");
    for (rib, shift) in ribs.iter().zip(&shifts) {
        dxf.group(0, "LWPOLYLINE");
        dxf.group(8, "CUT");
        dxf.group(90, rib.points.len());
        dxf.group(70, 1);
        for p in &rib.points {
            dxf.coord(10, p.x + shift);
            dxf.coord(20, p.y);
        }

        if rib.hole.radius > 0.0 {
            dxf.group(0, "CIRCLE");
            dxf.group(8, "CUT");
            dxf.coord(10, rib.hole.center.x + shift);
            dxf.coord(20, rib.hole.center.y);
            dxf.coord(40, rib.hole.radius);
        }

        dxf.text(
            "ENGRAVE",
            rib.bounds.center().x + shift,
            rib.height() + 5.0,
            LABEL_HEIGHT,
            &format!("{}-Rib", rib.label),
        );
    }
    let title = format!(
        "{name} | gap {} mm | edge {} deg | body {} mm",
        shortest(params.rib.min_gap),
        shortest(params.edge_angle_deg),
        shortest(params.rib_thickness),
    );
    dxf.text("ENGRAVE", 0.0, tallest + 15.0, TITLE_HEIGHT, &title);
    dxf.group(0, "ENDSEC");
    dxf.group(0, "EOF");

    let out = dxf.finish();
    info!(ribs = ribs.len(), bytes = out.len(), "rib dxf written");
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::WallCurve;
    use crate::operations::creation::{MakeRib, WallPair};

    fn rib(label: &str) -> RibPolygon {
        let pair = WallPair::new(
            label,
            WallCurve::from_pairs(&[[20.0, 10.0], [25.0, 30.0], [32.0, 50.0]]).unwrap(),
            WallCurve::from_pairs(&[[26.0, 10.0], [31.0, 30.0], [38.0, 50.0]]).unwrap(),
        );
        MakeRib::new(&pair).execute()
    }

    fn lines(dxf: &str) -> Vec<&str> {
        dxf.split('\n').collect()
    }

    #[test]
    fn sections_and_terminator() {
        let dxf = export_rib_dxf("T", &[rib("B1")], &ExportParams::default());
        assert!(dxf.starts_with("0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015"));
        assert!(dxf.contains("9\n$INSUNITS\n70\n4"));
        assert!(dxf.ends_with("0\nENDSEC\n0\nEOF"));
        assert_eq!(dxf.matches("\nSECTION\n").count() + 1, 3);
        assert_eq!(lines(&dxf).len() % 2, 0);
    }

    #[test]
    fn exactly_two_layers() {
        let dxf = export_rib_dxf("T", &[rib("B1")], &ExportParams::default());
        assert_eq!(dxf.matches("0\nLAYER\n2\n").count(), 2);
        assert!(dxf.contains("0\nLAYER\n2\nCUT\n70\n0\n62\n1\n6\nCONTINUOUS"));
        assert!(dxf.contains("0\nLAYER\n2\nENGRAVE\n70\n0\n62\n7\n6\nCONTINUOUS"));
    }

    #[test]
    fn one_entity_set_per_rib() {
        let ribs = vec![rib("B1"), rib("B2"), rib("B3")];
        let dxf = export_rib_dxf("T", &ribs, &ExportParams::default());
        assert_eq!(dxf.matches("LWPOLYLINE").count(), 3);
        assert_eq!(dxf.matches("CIRCLE").count(), 3);
        // Three labels and the title.
        assert_eq!(dxf.matches("\nTEXT\n").count(), 4);
        assert!(dxf.contains("1\nB3-Rib"));
    }

    #[test]
    fn polyline_vertex_count_matches() {
        let r = rib("B1");
        let dxf = export_rib_dxf("T", &[r.clone()], &ExportParams::default());
        assert!(dxf.contains(&format!("LWPOLYLINE\n8\nCUT\n90\n{}\n70\n1\n", r.points.len())));
        let tokens = lines(&dxf);
        let xs = tokens.windows(2).filter(|w| w[0] == "10").count();
        // Vertices, the hole center and two text anchors.
        assert_eq!(xs, r.points.len() + 1 + 2);
    }

    #[test]
    fn title_is_single_line_with_parameters() {
        let params = ExportParams::default().with_edge_angle(60.0).with_rib_thickness(3.0);
        let dxf = export_rib_dxf("Two\nLines", &[rib("B1")], &params);
        assert!(dxf.contains("1\nTwo Lines | gap 50.8 mm | edge 60 deg | body 3 mm"));
    }

    #[test]
    fn ribs_do_not_overlap() {
        let ribs = vec![rib("B1"), rib("B2")];
        let dxf = export_rib_dxf("T", &ribs, &ExportParams::default());
        // First rib starts at x = 0; the second at width + spacing.
        let second = format!("{:.4}", ribs[0].width() + 15.0);
        assert!(dxf.contains("10\n0.0000\n"));
        assert!(dxf.contains(&format!("10\n{second}\n")));
    }
}
