//! Flowing wave - one large S-curve.
//!
//! A single cubic sweeps from high on the left to low on the right, with
//! the control points pushed to the band extremes for a strong diagonal.

use crate::path::{PathCommand, PathData};
use crate::patterns::util::{close_region, wave_band};
use crate::patterns::PatternConfig;

/// Generate a full-width S-curve from a single cubic segment.
///
/// - `phase` shifts both control points horizontally (fraction of width)
/// - `frequency` is not used by this family
pub fn generate_flowing_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let w = config.width;

    let start = mid - dev * 0.5;
    let end = mid + dev * 0.5;
    let c1x = (0.3 + config.phase).clamp(0.0, 1.0) * w;
    let c2x = (0.7 + config.phase).clamp(0.0, 1.0) * w;

    let curve = vec![PathCommand::curve_to(
        c1x,
        mid - dev,
        c2x,
        mid + dev,
        w,
        end,
    )];

    close_region(start, curve, w, config.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PatternConfig {
        PatternConfig {
            width: 500.0,
            height: 80.0,
            amplitude: 0.5,
            frequency: 1.0,
            phase: 0.0,
            mirror: false,
            seed: None,
        }
    }

    #[test]
    fn single_cubic_spans_the_width() {
        let path = generate_flowing_wave(&config());
        // mid = 40, dev = 20: starts at 30, ends at 50
        assert_eq!(
            path.to_string(),
            "M 0,80 L 0,30 C 150,20 350,60 500,50 L 500,80 Z"
        );
    }

    #[test]
    fn phase_pushes_controls_right() {
        let mut cfg = config();
        cfg.phase = 0.2;
        let shifted = generate_flowing_wave(&cfg);
        let base = generate_flowing_wave(&config());
        let PathCommand::CurveTo { x1: s1, x2: s2, .. } = shifted.commands[2] else {
            panic!("expected a cubic at index 2");
        };
        let PathCommand::CurveTo { x1: b1, x2: b2, .. } = base.commands[2] else {
            panic!("expected a cubic at index 2");
        };
        // Both control points travel by phase * width
        assert!((s1 - (b1 + 100.0)).abs() < 1e-9);
        assert!((s2 - (b2 + 100.0)).abs() < 1e-9);
    }

    #[test]
    fn extreme_phase_clamps_to_edges() {
        let mut cfg = config();
        cfg.phase = 3.0;
        let path = generate_flowing_wave(&cfg);
        assert_eq!(
            path.to_string(),
            "M 0,80 L 0,30 C 500,20 500,60 500,50 L 500,80 Z"
        );
    }
}
