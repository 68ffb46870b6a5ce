//! Smooth wave - one gentle sine-like hump.
//!
//! The default and fallback family. Two quadratic segments share a crest at
//! the horizontal center, giving a symmetric swell with horizontal tangents
//! at both the crest and the edges.

use crate::path::{PathCommand, PathData};
use crate::patterns::util::{close_region, wave_band};
use crate::patterns::PatternConfig;

/// Generate a single smooth hump across the full width.
///
/// - `amplitude` scales the crest height
/// - `phase` nudges the control points horizontally (fraction of width)
/// - `frequency` is not used by this family
pub fn generate_smooth_wave(config: &PatternConfig) -> PathData {
    let (mid, dev) = wave_band(config);
    let w = config.width;
    let crest = mid - dev;
    let shift = config.phase * w;

    let c1x = (0.25 * w + shift).clamp(0.0, w / 2.0);
    let c2x = (0.75 * w + shift).clamp(w / 2.0, w);

    let curve = vec![
        PathCommand::quad_to(c1x, crest, w / 2.0, crest),
        PathCommand::quad_to(c2x, crest, w, mid),
    ];

    close_region(mid, curve, w, config.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PatternConfig {
        PatternConfig {
            width: 400.0,
            height: 120.0,
            amplitude: 0.5,
            frequency: 1.0,
            phase: 0.0,
            mirror: false,
            seed: None,
        }
    }

    #[test]
    fn crest_sits_at_center() {
        let path = generate_smooth_wave(&config());
        assert_eq!(
            path.to_string(),
            "M 0,120 L 0,60 Q 100,30 200,30 Q 300,30 400,60 L 400,120 Z"
        );
    }

    #[test]
    fn zero_amplitude_is_flat() {
        let mut cfg = config();
        cfg.amplitude = 0.0;
        let path = generate_smooth_wave(&cfg);
        // All curve y-operands collapse to the midline
        assert_eq!(
            path.to_string(),
            "M 0,120 L 0,60 Q 100,60 200,60 Q 300,60 400,60 L 400,120 Z"
        );
    }

    #[test]
    fn phase_shifts_controls_only() {
        let mut cfg = config();
        cfg.phase = 0.1;
        let shifted = generate_smooth_wave(&cfg).to_string();
        let base = generate_smooth_wave(&config()).to_string();
        assert_ne!(shifted, base);
        // Endpoints stay pinned
        assert!(shifted.starts_with("M 0,120 L 0,60"));
        assert!(shifted.ends_with("400,60 L 400,120 Z"));
    }

    #[test]
    fn frequency_is_ignored() {
        let mut cfg = config();
        cfg.frequency = 9.0;
        assert_eq!(
            generate_smooth_wave(&cfg).to_string(),
            generate_smooth_wave(&config()).to_string()
        );
    }
}
