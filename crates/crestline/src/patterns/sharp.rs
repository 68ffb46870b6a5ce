//! Sharp wave - angular sawtooth peaks.
//!
//! Straight line segments alternate between the baseline side of the band
//! and the peak side, one apex per peak. No curves at all.

use crate::path::{PathCommand, PathData};
use crate::patterns::util::{close_region, peak_count, wave_band};
use crate::patterns::PatternConfig;

/// Generate `round(frequency)` angular peaks as line segments.
///
/// - `frequency` sets the peak count (at least 1)
/// - `phase` leans each apex toward one side of its interval
pub fn generate_sharp_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let peaks = peak_count(config);
    let w = config.width;
    let seg = w / peaks as f64;
    let rest = mid + dev;
    let peak = mid - dev;

    let mut curve = Vec::with_capacity(peaks * 2);
    for i in 0..peaks {
        let x0 = i as f64 * seg;
        let x1 = (i + 1) as f64 * seg;
        let apex = (x0 + seg / 2.0 + config.phase * seg).clamp(x0, x1);
        curve.push(PathCommand::line_to(apex, peak));
        curve.push(PathCommand::line_to(x1, rest));
    }

    close_region(rest, curve, w, config.height)
}
