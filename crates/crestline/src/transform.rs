//! Whole-path transforms.
//!
//! Mirror and flip reflect finished waves so one generated curve serves
//! both page edges. Contour extraction peels the closing frame off a region
//! so the bare curve can be re-framed against the top edge, extended past
//! the bottom, or resampled.

use tracing::warn;

use crate::path::{PathCommand, PathData};

/// How far re-framed regions overshoot the canvas edge, in user units.
/// Hides hairline seams when the region is scaled or antialiased.
const REGION_OVERSHOOT: f64 = 50.0;

/// Reflect a path across the vertical centerline of a `width`-wide canvas.
///
/// Absolute x-coordinates become `width - x`; relative x-deltas negate.
/// Everything else is untouched.
pub fn mirror_path(path: &PathData, width: f64) -> PathData {
    let commands = path
        .commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo { abs, x, y } => PathCommand::MoveTo {
                abs,
                x: reflect(x, width, abs),
                y,
            },
            PathCommand::LineTo { abs, x, y } => PathCommand::LineTo {
                abs,
                x: reflect(x, width, abs),
                y,
            },
            PathCommand::HorizontalLineTo { abs, x } => PathCommand::HorizontalLineTo {
                abs,
                x: reflect(x, width, abs),
            },
            PathCommand::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => PathCommand::CurveTo {
                abs,
                x1: reflect(x1, width, abs),
                y1,
                x2: reflect(x2, width, abs),
                y2,
                x: reflect(x, width, abs),
                y,
            },
            PathCommand::SmoothCurveTo { abs, x2, y2, x, y } => PathCommand::SmoothCurveTo {
                abs,
                x2: reflect(x2, width, abs),
                y2,
                x: reflect(x, width, abs),
                y,
            },
            PathCommand::QuadTo { abs, x1, y1, x, y } => PathCommand::QuadTo {
                abs,
                x1: reflect(x1, width, abs),
                y1,
                x: reflect(x, width, abs),
                y,
            },
            PathCommand::SmoothQuadTo { abs, x, y } => PathCommand::SmoothQuadTo {
                abs,
                x: reflect(x, width, abs),
                y,
            },
            PathCommand::ArcTo {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => PathCommand::ArcTo {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x: reflect(x, width, abs),
                y,
            },
            other => other,
        })
        .collect();
    PathData { commands }
}

/// Reflect a path across the horizontal centerline of a `height`-tall canvas.
///
/// Absolute y-coordinates become `height - y`; relative y-deltas negate.
/// Arc sweep flags toggle so arcs keep bulging the same way.
pub fn flip_path(path: &PathData, height: f64) -> PathData {
    let commands = path
        .commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo { abs, x, y } => PathCommand::MoveTo {
                abs,
                x,
                y: reflect(y, height, abs),
            },
            PathCommand::LineTo { abs, x, y } => PathCommand::LineTo {
                abs,
                x,
                y: reflect(y, height, abs),
            },
            PathCommand::VerticalLineTo { abs, y } => PathCommand::VerticalLineTo {
                abs,
                y: reflect(y, height, abs),
            },
            PathCommand::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => PathCommand::CurveTo {
                abs,
                x1,
                y1: reflect(y1, height, abs),
                x2,
                y2: reflect(y2, height, abs),
                x,
                y: reflect(y, height, abs),
            },
            PathCommand::SmoothCurveTo { abs, x2, y2, x, y } => PathCommand::SmoothCurveTo {
                abs,
                x2,
                y2: reflect(y2, height, abs),
                x,
                y: reflect(y, height, abs),
            },
            PathCommand::QuadTo { abs, x1, y1, x, y } => PathCommand::QuadTo {
                abs,
                x1,
                y1: reflect(y1, height, abs),
                x,
                y: reflect(y, height, abs),
            },
            PathCommand::SmoothQuadTo { abs, x, y } => PathCommand::SmoothQuadTo {
                abs,
                x,
                y: reflect(y, height, abs),
            },
            PathCommand::ArcTo {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => PathCommand::ArcTo {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep: !sweep,
                x,
                y: reflect(y, height, abs),
            },
            other => other,
        })
        .collect();
    PathData { commands }
}

#[inline]
fn reflect(coord: f64, extent: f64, abs: bool) -> f64 {
    if abs { extent - coord } else { -coord }
}

/// Strip the closing frame off a wave region, leaving the bare curve.
///
/// Expects the canonical region shape: a move to the bottom corner, a line
/// up to the curve start, the curve itself, a line back down to the other
/// corner, and a close. Paths that do not lead with a move pass through
/// unchanged.
pub fn contour_path(path: &PathData) -> PathData {
    if path.commands.len() < 3 {
        return path.clone();
    }
    let Some(PathCommand::MoveTo {
        abs: true,
        x: move_x,
        y: move_y,
    }) = path.commands.first().copied()
    else {
        warn!("path does not start with an absolute move, keeping it as is");
        return path.clone();
    };

    let mut commands: Vec<PathCommand> = path.commands[1..].to_vec();

    // The old descent becomes the new starting move
    commands[0] = match commands[0] {
        PathCommand::LineTo { abs: true, x, y } => PathCommand::move_to(x, y),
        PathCommand::LineTo { abs: false, x, y } => PathCommand::move_to(move_x + x, move_y + y),
        PathCommand::HorizontalLineTo { abs: true, x } => PathCommand::move_to(x, move_y),
        PathCommand::VerticalLineTo { abs: true, y } => PathCommand::move_to(move_x, y),
        PathCommand::CurveTo { abs: true, x, y, .. }
        | PathCommand::QuadTo { abs: true, x, y, .. }
        | PathCommand::SmoothCurveTo { abs: true, x, y, .. }
        | PathCommand::SmoothQuadTo { abs: true, x, y }
        | PathCommand::ArcTo { abs: true, x, y, .. } => PathCommand::move_to(x, y),
        _ => {
            warn!("unrecognized region frame, keeping the path as is");
            return path.clone();
        }
    };

    // Drop the close and the line back to the corner together
    if matches!(commands.last(), Some(PathCommand::Close)) {
        commands.pop();
        if matches!(
            commands.last(),
            Some(
                PathCommand::LineTo { .. }
                    | PathCommand::HorizontalLineTo { .. }
                    | PathCommand::VerticalLineTo { .. }
            )
        ) {
            commands.pop();
        }
    }

    PathData { commands }
}

/// Re-frame a wave region against the top edge, for filling the section
/// above the cut. The frame corners overshoot past y=0.
pub fn invert_path_to_top(path: &PathData, width: f64) -> PathData {
    reframe(path, width, -REGION_OVERSHOOT)
}

/// Extend a wave region's frame past the bottom edge, for filling the
/// section below the cut without a seam at y=height.
pub fn extend_path_below(path: &PathData, width: f64, height: f64) -> PathData {
    reframe(path, width, height + REGION_OVERSHOOT)
}

fn reframe(path: &PathData, width: f64, corner_y: f64) -> PathData {
    let contour = contour_path(path);
    let Some(PathCommand::MoveTo { x, y, .. }) = contour.commands.first().copied() else {
        return contour;
    };

    let mut commands = Vec::with_capacity(contour.commands.len() + 3);
    commands.push(PathCommand::move_to(0.0, corner_y));
    commands.push(PathCommand::line_to(x, y));
    commands.extend_from_slice(&contour.commands[1..]);
    commands.push(PathCommand::line_to(width, corner_y));
    commands.push(PathCommand::Close);
    PathData { commands }
}

/// String-level mirror. Unparseable input passes through unchanged.
pub fn mirror_horizontal(d: &str, width: f64) -> String {
    match PathData::parse(d) {
        Ok(path) => mirror_path(&path, width).to_string(),
        Err(err) => {
            warn!(%err, "cannot mirror an unparseable path");
            d.to_string()
        }
    }
}

/// String-level flip. Unparseable input passes through unchanged.
pub fn flip_vertical(d: &str, height: f64) -> String {
    match PathData::parse(d) {
        Ok(path) => flip_path(&path, height).to_string(),
        Err(err) => {
            warn!(%err, "cannot flip an unparseable path");
            d.to_string()
        }
    }
}

/// String-level contour extraction. Unparseable input passes through
/// unchanged.
pub fn extract_contour(d: &str) -> String {
    match PathData::parse(d) {
        Ok(path) => contour_path(&path).to_string(),
        Err(err) => {
            warn!(%err, "cannot extract a contour from an unparseable path");
            d.to_string()
        }
    }
}

/// String-level top re-frame. Unparseable input passes through unchanged.
pub fn invert_to_top_region(d: &str, width: f64) -> String {
    match PathData::parse(d) {
        Ok(path) => invert_path_to_top(&path, width).to_string(),
        Err(err) => {
            warn!(%err, "cannot re-frame an unparseable path");
            d.to_string()
        }
    }
}

/// String-level bottom extension. Unparseable input passes through
/// unchanged.
pub fn extend_below_region(d: &str, width: f64, height: f64) -> String {
    match PathData::parse(d) {
        Ok(path) => extend_path_below(&path, width, height).to_string(),
        Err(err) => {
            warn!(%err, "cannot re-frame an unparseable path");
            d.to_string()
        }
    }
}

// ====== TESTS ======
