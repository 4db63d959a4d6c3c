//! Reader for the tool-pair SVG written by the curve editor.
//!
//! The editor writes one closed `<polygon>` per tool into `<g id="cut">`,
//! alternating inner and outer, and one `<text>` label per tool into
//! `<g id="engrave">`. Each polygon's vertices run: bottom-left anchor,
//! top-left anchor, the wall profile from rim to base, bottom-right anchor.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, info};

use crate::error::ImportError;
use crate::geometry::WallCurve;
use crate::math::polygon_2d::dedup_consecutive;
use crate::math::Point2;
use crate::operations::creation::WallPair;

/// Consecutive vertices closer than this are merged.
pub const DEDUP_EPSILON: f64 = 0.001;

/// Anchors plus at least two profile points.
const MIN_POLYGON_VERTICES: usize = 4;

const CUT_LAYER: &str = "cut";
const ENGRAVE_LAYER: &str = "engrave";

/// Parses an editor document into inner/outer wall pairs.
///
/// Curves are returned base to rim with heights measured up from each
/// polygon's bottom edge.
///
/// # Errors
///
/// Fails on malformed XML, a missing cut layer, no polygons, an odd polygon
/// count, unparsable or too few vertices, or a curve whose height decreases.
pub fn parse_profile_svg(svg: &str) -> Result<Vec<WallPair>, ImportError> {
    let doc = scan(svg)?;
    if !doc.saw_cut_layer {
        return Err(ImportError::MissingLayer(CUT_LAYER));
    }
    if doc.polygons.is_empty() {
        return Err(ImportError::NoPolygons);
    }
    if doc.polygons.len() % 2 != 0 {
        return Err(ImportError::UnpairedPolygon(doc.polygons.len()));
    }
    debug!(
        polygons = doc.polygons.len(),
        labels = doc.labels.len(),
        "editor document scanned"
    );

    let mut pairs = Vec::with_capacity(doc.polygons.len() / 2);
    for (k, chunk) in doc.polygons.chunks_exact(2).enumerate() {
        let i = 2 * k;
        let inner = wall_curve(i, &chunk[0])?;
        let outer = wall_curve(i + 1, &chunk[1])?;
        let label = doc
            .labels
            .get(i)
            .and_then(|l| l.split('-').next())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map_or_else(|| format!("P{}", k + 1), str::to_owned);
        pairs.push(WallPair::new(label, inner, outer));
    }

    info!(pairs = pairs.len(), "editor document imported");
    Ok(pairs)
}

#[derive(Default)]
struct ScannedDocument {
    saw_cut_layer: bool,
    /// Raw `points` attributes of polygons in the cut layer.
    polygons: Vec<String>,
    /// Engrave texts mentioning "Inner" or "Outer", in document order.
    labels: Vec<String>,
}

fn scan(svg: &str) -> Result<ScannedDocument, ImportError> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut doc = ScannedDocument::default();
    // Open <g> elements and their ids.
    let mut groups: Vec<Option<String>> = Vec::new();
    let mut text: Option<String> = None;
    let mut buf = Vec::new();

    let in_layer = |groups: &[Option<String>], layer: &str| {
        groups.iter().flatten().any(|id| id == layer)
    };

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"g" => {
                    let id = attribute(e, b"id")?;
                    if id.as_deref() == Some(CUT_LAYER) {
                        doc.saw_cut_layer = true;
                    }
                    groups.push(id);
                }
                b"text" if in_layer(&groups, ENGRAVE_LAYER) => text = Some(String::new()),
                b"polygon" if in_layer(&groups, CUT_LAYER) => push_polygon(&mut doc, e)?,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"g" => {
                    if attribute(e, b"id")?.as_deref() == Some(CUT_LAYER) {
                        doc.saw_cut_layer = true;
                    }
                }
                b"polygon" if in_layer(&groups, CUT_LAYER) => push_polygon(&mut doc, e)?,
                _ => {}
            },
            Ok(Event::Text(ref t)) => {
                if let Some(acc) = text.as_mut() {
                    let raw = std::str::from_utf8(t)
                        .map_err(|e| ImportError::Xml(format!("invalid UTF-8 in text: {e}")))?;
                    let value = unescape(raw).map_err(|e| ImportError::Xml(e.to_string()))?;
                    acc.push_str(&value);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"g" => {
                    groups.pop();
                }
                b"text" => {
                    if let Some(label) = text.take() {
                        if label.contains("Inner") || label.contains("Outer") {
                            doc.labels.push(label);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ImportError::Xml(format!(
                    "at byte {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(doc)
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, ImportError> {
    for attr in element.attributes().flatten() {
        if attr.key.local_name().as_ref() == name {
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|e| ImportError::Xml(format!("invalid UTF-8 in attribute: {e}")))?;
            let value = unescape(raw).map_err(|e| ImportError::Xml(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn push_polygon(doc: &mut ScannedDocument, element: &BytesStart<'_>) -> Result<(), ImportError> {
    let index = doc.polygons.len();
    let points = attribute(element, b"points")?.ok_or_else(|| ImportError::MalformedPolygon {
        index,
        reason: "missing points attribute".to_owned(),
    })?;
    doc.polygons.push(points);
    Ok(())
}

/// Parses a `points` attribute: whitespace-separated `x,y` pairs.
fn parse_points(index: usize, raw: &str) -> Result<Vec<Point2>, ImportError> {
    let malformed = |reason: String| ImportError::MalformedPolygon { index, reason };
    raw.split_whitespace()
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| malformed(format!("expected x,y but found {pair:?}")))?;
            let x: f64 = x
                .trim()
                .parse()
                .map_err(|_| malformed(format!("invalid x coordinate {x:?}")))?;
            let y: f64 = y
                .trim()
                .parse()
                .map_err(|_| malformed(format!("invalid y coordinate {y:?}")))?;
            if x.is_finite() && y.is_finite() {
                Ok(Point2::new(x, y))
            } else {
                Err(malformed(format!("non-finite vertex {pair:?}")))
            }
        })
        .collect()
}

/// Extracts the profile from one polygon and turns it into a base-to-rim
/// wall curve.
fn wall_curve(index: usize, raw: &str) -> Result<WallCurve, ImportError> {
    let vertices = parse_points(index, raw)?;
    if vertices.len() < MIN_POLYGON_VERTICES {
        return Err(ImportError::MalformedPolygon {
            index,
            reason: format!(
                "needs at least {MIN_POLYGON_VERTICES} vertices, found {}",
                vertices.len()
            ),
        });
    }
    let bottom = vertices[0].y;
    let profile = dedup_consecutive(&vertices[2..vertices.len() - 1], DEDUP_EPSILON);
    let points = profile
        .iter()
        .rev()
        .map(|p| Point2::new(p.x, bottom - p.y))
        .collect();
    WallCurve::new(points).map_err(|source| ImportError::InvalidCurve { index, source })
}
