//! Mountain wave - triangular ridgeline.
//!
//! Like sharp but with an asymmetric apex and alternating summit heights,
//! so the silhouette reads as a ridge rather than a sawtooth.

use crate::path::{PathCommand, PathData};
use crate::patterns::util::{close_region, peak_count, wave_band};
use crate::patterns::PatternConfig;

/// Generate `round(frequency)` triangular peaks, each a rise-then-fall pair
/// of line segments.
///
/// - `frequency` sets the peak count (at least 1)
/// - `phase` slides each summit inside its interval
/// - odd-numbered summits sit slightly lower than even ones
pub fn generate_mountain_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let peaks = peak_count(config);
    let w = config.width;
    let seg = w / peaks as f64;
    let rest = mid + dev;

    let mut curve = Vec::with_capacity(peaks * 2);
    for i in 0..peaks {
        let x0 = i as f64 * seg;
        let x1 = (i + 1) as f64 * seg;
        let scale = if i % 2 == 0 { 1.0 } else { 0.75 };
        let summit_y = rest - 2.0 * dev * scale;
        let summit_x = (x0 + 0.4 * seg + config.phase * seg).clamp(x0, x1);
        curve.push(PathCommand::line_to(summit_x, summit_y));
        curve.push(PathCommand::line_to(x1, rest));
    }

    close_region(rest, curve, w, config.height)
}
