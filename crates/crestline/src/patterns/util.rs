//! Shared helpers for wave generation.
//!
//! Every family draws inside the same vertical band and closes its curve
//! against the baseline the same way; the helpers here keep that geometry in
//! one place.

use crate::path::{PathCommand, PathData};
use crate::patterns::PatternConfig;

/// Vertical band a wave may occupy, as `(mid, dev)`.
///
/// The curve oscillates around `mid` (half the region height) by at most
/// `dev`; at amplitude 1.0 the band spans the full region.
#[inline]
pub(crate) fn wave_band(config: &PatternConfig) -> (f64, f64) {
    let mid = config.height / 2.0;
    (mid, mid * config.amplitude)
}

/// Number of peaks for the families that honor `frequency`.
#[inline]
pub(crate) fn peak_count(config: &PatternConfig) -> usize {
    (config.frequency.round() as i64).max(1) as usize
}

/// Close a left-to-right curve into a fillable region.
///
/// Produces the canonical shape: enter at the bottom-left baseline corner,
/// rise to the curve's start height, trace the curve, drop to the
/// bottom-right corner, close.
pub(crate) fn close_region(
    start_y: f64,
    curve: Vec<PathCommand>,
    width: f64,
    height: f64,
) -> PathData {
    let mut commands = Vec::with_capacity(curve.len() + 4);
    commands.push(PathCommand::move_to(0.0, height));
    commands.push(PathCommand::line_to(0.0, start_y));
    commands.extend(curve);
    commands.push(PathCommand::line_to(width, height));
    commands.push(PathCommand::Close);
    PathData { commands }
}
