//! Ribbon wave - a loose seeded streamer.
//!
//! Five evenly spaced control points take their heights from the seed, then
//! quadratics thread through them. Unlike the other families there is no
//! fixed silhouette: the seed alone decides where the ribbon goes.

use crate::path::{PathCommand, PathData};
use crate::patterns::util::{close_region, wave_band};
use crate::patterns::PatternConfig;
use crate::rng::centered_noise;

const POINTS: usize = 5;

/// Generate a free-form ribbon from five seeded control points.
///
/// - `seed` fully controls the shape
/// - `frequency` and `phase` are not used by this family
pub fn generate_ribbon_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let w = config.width;
    let seed = config.seed_value();
    let step = w / (POINTS - 1) as f64;

    let heights: Vec<f64> = (0..POINTS)
        .map(|i| mid + centered_noise(seed, (10 + i) as f64) * dev)
        .collect();

    let mut curve = Vec::with_capacity(POINTS - 1);
    for i in 1..POINTS {
        let x = i as f64 * step;
        let prev_x = (i - 1) as f64 * step;
        curve.push(PathCommand::quad_to(
            (prev_x + x) / 2.0,
            heights[i - 1],
            x,
            heights[i],
        ));
    }

    close_region(heights[0], curve, w, config.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> PatternConfig {
        PatternConfig {
            width: 800.0,
            height: 120.0,
            amplitude: 0.5,
            frequency: 3.0,
            phase: 0.0,
            mirror: false,
            seed: Some(seed),
        }
    }

    #[test]
    fn four_quadratics_between_five_points() {
        let path = generate_ribbon_wave(&config(42));
        let quads = path
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, crate::path::PathCommand::QuadTo { .. }))
            .count();
        assert_eq!(quads, 4);
    }

    #[test]
    fn seed_decides_everything() {
        let a = generate_ribbon_wave(&config(1));
        let b = generate_ribbon_wave(&config(2));
        assert_ne!(a.to_string(), b.to_string());
        assert_eq!(
            generate_ribbon_wave(&config(1)).to_string(),
            a.to_string()
        );
    }

    #[test]
    fn frequency_and_phase_are_ignored() {
        let mut cfg = config(9);
        cfg.frequency = 12.0;
        cfg.phase = 0.4;
        assert_eq!(
            generate_ribbon_wave(&cfg).to_string(),
            generate_ribbon_wave(&config(9)).to_string()
        );
    }

    #[test]
    fn heights_stay_inside_the_band() {
        for seed in [0, 3, 17, 250] {
            let path = generate_ribbon_wave(&config(seed));
            for (_, y) in path.points() {
                assert!((0.0..=120.0).contains(&y), "seed {seed}: y {y} escaped");
            }
        }
    }
}
