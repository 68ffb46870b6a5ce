//! Organic wave - a hand-drawn-looking hump.
//!
//! Three seeded offsets perturb the edge heights and the hump crest, so the
//! curve leans and sags differently for every seed. Two cubic segments with
//! horizontal tangents keep the result smooth.

use crate::path::{PathCommand, PathData};
use crate::patterns::util::{close_region, wave_band};
use crate::patterns::PatternConfig;
use crate::rng::{centered_noise, unit_noise};

/// Generate an irregular single hump from three seeded control offsets.
///
/// - `seed` picks the personality; the same seed always yields the same curve
/// - `phase` slides the crest horizontally (fraction of width)
/// - `frequency` is not used by this family
pub fn generate_organic_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let w = config.width;
    let seed = config.seed_value();

    // Edge heights wander inside a reduced band so the crest stays dominant
    let y0 = mid + centered_noise(seed, 1.0) * dev * 0.6;
    let crest = mid - dev * (0.3 + unit_noise(seed, 2.0) * 0.7);
    let y1 = mid + centered_noise(seed, 3.0) * dev * 0.6;

    let xm = (0.5 + config.phase).clamp(0.2, 0.8) * w;
    let left = xm;
    let right = w - xm;

    let curve = vec![
        PathCommand::curve_to(0.4 * left, y0, xm - 0.4 * left, crest, xm, crest),
        PathCommand::curve_to(xm + 0.4 * right, crest, w - 0.4 * right, y1, w, y1),
    ];

    close_region(y0, curve, w, config.height)
}
