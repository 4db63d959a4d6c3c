//! End-to-end runs from catalog profiles to finished output documents.

#![allow(clippy::unwrap_used)]

use std::sync::Once;

use throwform::catalog;
use throwform::export::{
    export_profile_json, export_rib_dxf, export_rib_svg, export_template_svg, ExportParams,
};
use throwform::import::{parse_profile_json, parse_profile_svg};
use throwform::operations::creation::{MakeRib, MakeRim, RimParams, RimType, Side};
use throwform::operations::nesting::Nest;
use throwform::operations::query::ComputeVolumes;
use throwform::tessellation::Resample;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

fn assert_finite_text(doc: &str, context: &str) {
    for token in ["NaN", "Infinity", "inf"] {
        assert!(!doc.contains(token), "{context}: found {token}");
    }
}

#[test]
fn fargklar_three_bowl_set() {
    init_tracing();
    let profile = catalog::profile("fargklar-real").unwrap();
    let bowls = Nest::new(&profile, 3, 3.0).execute();
    assert_eq!(bowls.len(), 3);

    let params = ExportParams::default();
    let ribs = params.build_ribs(&bowls);
    let svg = export_rib_svg(&profile.name, &ribs, &params);

    assert_eq!(svg.matches("<path").count(), 3);
    assert_eq!(svg.matches("<polygon").count(), 0);
    assert!(svg.contains(r#"id="cut""#));
    assert!(svg.contains(r#"id="engrave""#));
    assert!(svg.contains("#FF0000"));
    assert!(svg.contains(r#"stroke-width="0.01""#));
    assert!(svg.contains("IKEA Färgklar Bowl (EXTRACTED)"));
    assert!(svg.contains("gap 50.8 mm"));
    assert!(svg.contains("edge 45°"));
    assert!(svg.contains("body 6 mm"));
    for label in ["B1-Rib", "B2-Rib", "B3-Rib"] {
        assert!(svg.contains(label), "{label}");
    }
    assert_finite_text(&svg, "fargklar svg");
}

#[test]
fn every_combination_writes_finite_documents() {
    init_tracing();
    for (key, profile) in catalog::all() {
        for count in [2, 3, 4] {
            let bowls = Nest::new(&profile, count, 3.0).execute();
            assert!(!bowls.is_empty(), "{key}");
            for min_gap in [30.0, 50.8, 70.0] {
                for angle in [30.0, 45.0, 60.0] {
                    for thickness in [3.0, 6.0] {
                        let params = ExportParams::default()
                            .with_min_gap(min_gap)
                            .with_edge_angle(angle)
                            .with_rib_thickness(thickness);
                        let ribs = params.build_ribs(&bowls);
                        let context = format!("{key}/{count}/{min_gap}/{angle}/{thickness}");

                        let svg = export_rib_svg(&profile.name, &ribs, &params);
                        assert_eq!(svg.matches("<path").count(), ribs.len(), "{context}");
                        assert_finite_text(&svg, &context);

                        let dxf = export_rib_dxf(&profile.name, &ribs, &params);
                        assert_eq!(dxf.matches("LWPOLYLINE").count(), ribs.len(), "{context}");
                        assert_finite_text(&dxf, &context);

                        let template = export_template_svg(&profile, &ribs, &params);
                        assert_finite_text(&template, &context);
                    }
                }
            }
        }
    }
}

#[test]
fn rims_for_every_nested_instance() {
    init_tracing();
    for (key, profile) in catalog::all() {
        for bowl in Nest::new(&profile, 3, 3.0).execute() {
            for rim_type in RimType::for_vessel(profile.vessel) {
                let params = RimParams::for_instance(&bowl, &profile.rim_lip, Side::Right);
                let rim = MakeRim::new(rim_type, params).execute();
                assert!(rim.top_height.is_finite(), "{key}/{rim_type}");
                assert_finite_text(&rim.path.to_svg_path_data(), key);
            }
        }
    }
}

#[test]
fn nested_volumes_shrink() {
    let profile = catalog::profile("cereal").unwrap();
    let volumes: Vec<f64> = Nest::new(&profile, 4, 3.0)
        .execute()
        .iter()
        .map(|b| ComputeVolumes::new(&profile).with_scale(b.scale).execute().interior_ml)
        .collect();
    assert!(volumes.windows(2).all(|w| w[0] > w[1]), "{volumes:?}");
}

#[test]
fn resampled_profile_still_exports() {
    init_tracing();
    let mut profile = catalog::profile("ramen").unwrap();
    profile.outer = Resample::new(&profile.outer, 40).execute();
    assert_eq!(profile.outer.len(), 40);
    profile.validate().unwrap();

    let json = export_profile_json(&profile, Some("Ramen 40")).unwrap();
    let parsed = parse_profile_json(&json).unwrap();
    assert_eq!(parsed.name, "Ramen 40");
    assert_eq!(export_profile_json(&parsed, None).unwrap(), json);
}

#[test]
fn json_round_trip_for_catalog() {
    for (key, profile) in catalog::all() {
        let first = export_profile_json(&profile, None).unwrap();
        let second = export_profile_json(&parse_profile_json(&first).unwrap(), None).unwrap();
        assert_eq!(first, second, "{key}");
    }
}

const EDITOR_DOC: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 120" width="300mm" height="120mm">
  <g id="engrave" stroke="none" fill="#000000">
    <text x="10" y="10">Tool sheet</text>
    <text x="20" y="20">B1-Inner-165mm</text>
    <text x="60" y="20">B1-Outer-165mm</text>
    <text x="120" y="20">B2-Inner-140mm</text>
    <text x="160" y="20">B2-Outer-140mm</text>
  </g>
  <g id="cut" fill="none" stroke="#FF0000" stroke-width="0.01">
    <polygon points="0,80 0,0 30,0 24,20 16,40 10,60 8,70 8,70 8,80"/>
    <polygon points="0,80 0,0 34,0 28,20 20,40 14,60 12,70 12,80"/>
    <polygon points="0,70 0,0 26,0 20,20 13,40 8,55 8,70"/>
    <polygon points="0,70 0,0 30,0 24,20 17,40 12,55 12,70"/>
  </g>
</svg>
"##;

#[test]
fn editor_document_to_laser_sheet() {
    init_tracing();
    let pairs = parse_profile_svg(EDITOR_DOC).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].label, "B1");
    assert_eq!(pairs[1].label, "B2");

    let params = ExportParams::default();
    let ribs: Vec<_> = pairs
        .iter()
        .map(|pair| MakeRib::new(pair).with_config(params.rib).execute())
        .collect();
    for rib in &ribs {
        assert!(rib.bounds.min.y.abs() <= 0.01, "{}", rib.label);
        assert!(rib.width() >= params.rib.min_gap);
    }

    let svg = export_rib_svg("Editor set", &ribs, &params);
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(svg.contains("B1-Rib"));
    assert_finite_text(&svg, "editor svg");

    let dxf = export_rib_dxf("Editor set", &ribs, &params);
    assert!(dxf.ends_with("EOF"));
}
