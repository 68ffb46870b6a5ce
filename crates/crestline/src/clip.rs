//! CSS clip-path output.
//!
//! Converts a wave region into a `polygon()` expression with percentage
//! vertices, so the same curve that draws an SVG divider can also clip an
//! HTML element. Curved segments flatten to their control and end points,
//! which at clip-path resolution reads the same as the true curve.

use tracing::warn;

use crate::path::PathData;
use crate::transform::contour_path;

/// Which edge of the element the wave cuts across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionEdge {
    Top,
    Bottom,
}

impl RegionEdge {
    pub fn name(&self) -> &'static str {
        match self {
            RegionEdge::Top => "top",
            RegionEdge::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<RegionEdge> {
        match name.to_lowercase().as_str() {
            "top" => Some(RegionEdge::Top),
            "bottom" => Some(RegionEdge::Bottom),
            _ => None,
        }
    }
}

/// Convert a wave region into a CSS `polygon()` covering the element on one
/// side of the curve.
///
/// For [`RegionEdge::Bottom`] the polygon runs from the top corners down to
/// the curve, so the element's bottom edge turns wavy; [`RegionEdge::Top`]
/// anchors to the bottom corners instead. Returns the CSS keyword `none`
/// when the path is empty or unparseable or the canvas has no area, so the
/// result can always be assigned to a `clip-path` property.
pub fn clip_polygon(d: &str, width: f64, height: f64, edge: RegionEdge) -> String {
    if width <= 0.0 || height <= 0.0 {
        warn!(width, height, "cannot clip against an empty canvas");
        return "none".to_string();
    }
    let path = match PathData::parse(d) {
        Ok(path) => path,
        Err(err) => {
            warn!(%err, "cannot build a clip polygon from an unparseable path");
            return "none".to_string();
        }
    };
    let points = contour_path(&path).points();
    if points.is_empty() {
        return "none".to_string();
    }

    let corner_y = match edge {
        RegionEdge::Bottom => "0%",
        RegionEdge::Top => "100%",
    };

    let mut vertices = Vec::with_capacity(points.len() + 2);
    vertices.push(format!("0% {corner_y}"));
    for (x, y) in points {
        vertices.push(vertex(x, y, width, height));
    }
    vertices.push(format!("100% {corner_y}"));

    format!("polygon({})", vertices.join(", "))
}

/// Convert two wave curves into a `polygon()` covering the band between
/// them: the top curve left to right, then the bottom curve right to left.
pub fn clip_polygon_between(top_d: &str, bottom_d: &str, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        warn!(width, height, "cannot clip against an empty canvas");
        return "none".to_string();
    }
    let (top, bottom) = match (PathData::parse(top_d), PathData::parse(bottom_d)) {
        (Ok(top), Ok(bottom)) => (top, bottom),
        (top, bottom) => {
            if let Err(err) = top {
                warn!(%err, "cannot build a clip polygon from an unparseable path");
            }
            if let Err(err) = bottom {
                warn!(%err, "cannot build a clip polygon from an unparseable path");
            }
            return "none".to_string();
        }
    };

    let top_points = contour_path(&top).points();
    let bottom_points = contour_path(&bottom).points();
    if top_points.is_empty() || bottom_points.is_empty() {
        return "none".to_string();
    }

    let mut vertices = Vec::with_capacity(top_points.len() + bottom_points.len());
    for (x, y) in top_points {
        vertices.push(vertex(x, y, width, height));
    }
    for (x, y) in bottom_points.into_iter().rev() {
        vertices.push(vertex(x, y, width, height));
    }

    format!("polygon({})", vertices.join(", "))
}

#[inline]
fn vertex(x: f64, y: f64, width: f64, height: f64) -> String {
    format!("{}% {}%", pct(x / width * 100.0), pct(y / height * 100.0))
}

/// Two-decimal percentage, trailing zeros trimmed. CSS presentation format;
/// the d-attribute serialization keeps full precision, percentages do not
/// need it.
fn pct(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

// ====== TESTS ======
