//! Layered-organic wave - a denser organic curve for stacked compositions.
//!
//! Six seeded through-points give five internal segments, enough texture
//! that several copies at different seeds and heights read as depth layers.
//! Callers do the stacking; this module only produces one band.

use crate::path::PathData;
use crate::patterns::PatternConfig;
use crate::patterns::util::wave_band;
use crate::rng::centered_noise;
use crate::sample::path_from_samples;

const POINTS: usize = 6;

/// Generate a dense organic curve with five internal segments.
///
/// - `seed` picks the height sequence
/// - `phase` slides the noise lattice so the bumps travel horizontally
/// - `frequency` is not used by this family
pub fn generate_layered_organic_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let seed = config.seed_value();

    let heights: Vec<f64> = (0..POINTS)
        .map(|i| {
            // Sample the integer noise lattice at a phase-shifted position,
            // interpolating between neighbors so phase animates smoothly
            let u = i as f64 + config.phase * (POINTS - 1) as f64;
            let cell = u.floor();
            let t = u - cell;
            let a = centered_noise(seed, 20.0 + cell);
            let b = centered_noise(seed, 21.0 + cell);
            mid + (a + (b - a) * t) * dev
        })
        .collect();

    path_from_samples(&heights, config.width, config.height)
}
