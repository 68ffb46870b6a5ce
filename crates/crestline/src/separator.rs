//! Interlocking separator pairs.
//!
//! A separator is two waves cut from one base curve: the upper edge closes
//! the section above, the lower edge opens the section below, and the offset
//! between them decides whether the sections mesh, overlap, or stand apart.
//! Both edges inherit the base curve's silhouette, with a little seeded
//! jitter so the cut line does not look machine-made.

use tracing::warn;

use crate::path::PathData;
use crate::patterns::{PatternConfig, generate_pattern_unchecked};
use crate::rng::centered_noise;
use crate::sample::{path_from_samples, sample_heights};
use crate::transform::contour_path;

/// Evenly spaced sample positions taken across the base curve.
pub const SAMPLE_COUNT: usize = 20;

/// Jitter amplitude as a fraction of the maximum offset.
const JITTER: f64 = 0.15;

/// How the two cut edges relate vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterlockMode {
    /// Edges pushed toward each other so the sections mesh like teeth
    Interlock,
    /// Upper edge reaches past the lower, sections visually overlap
    Overlap,
    /// Edges pushed away from each other, leaving a visible channel
    Apart,
    /// Both edges are the base curve itself, a clean shared cut
    Flush,
}

impl InterlockMode {
    pub fn all() -> &'static [InterlockMode] {
        &[
            InterlockMode::Interlock,
            InterlockMode::Overlap,
            InterlockMode::Apart,
            InterlockMode::Flush,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            InterlockMode::Interlock => "interlock",
            InterlockMode::Overlap => "overlap",
            InterlockMode::Apart => "apart",
            InterlockMode::Flush => "flush",
        }
    }

    pub fn from_name(name: &str) -> Option<InterlockMode> {
        match name.to_lowercase().as_str() {
            "interlock" => Some(InterlockMode::Interlock),
            "overlap" => Some(InterlockMode::Overlap),
            "apart" | "gap" => Some(InterlockMode::Apart),
            "flush" => Some(InterlockMode::Flush),
            _ => None,
        }
    }

    /// Per-edge multipliers for the maximum offset: (upper, lower).
    pub fn offset_factors(&self) -> (f64, f64) {
        match self {
            InterlockMode::Interlock => (-1.0, 1.0),
            InterlockMode::Overlap => (-1.3, 0.7),
            InterlockMode::Apart => (-0.6, 1.4),
            InterlockMode::Flush => (0.0, 0.0),
        }
    }
}

/// Knobs for cutting a separator pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationConfig {
    pub mode: InterlockMode,
    /// Scales the edge offset, 0.0 to 1.0
    pub intensity: f64,
    /// Extra symmetric distance between the edges, in user units
    pub gap: f64,
    /// Stroke painted along the cut by renderers, if any
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Default for SeparationConfig {
    fn default() -> Self {
        SeparationConfig {
            mode: InterlockMode::Interlock,
            intensity: 0.5,
            gap: 0.0,
            stroke_color: None,
            stroke_width: None,
        }
    }
}

impl SeparationConfig {
    pub fn with_mode(mut self, mode: InterlockMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_stroke(mut self, color: &str, width: f64) -> Self {
        self.stroke_color = Some(color.to_string());
        self.stroke_width = Some(width);
        self
    }

    /// Copy with `intensity` and `gap` pulled back into range.
    pub fn sanitized(&self) -> SeparationConfig {
        let mut config = self.clone();
        if config.intensity < 0.0 || config.intensity > 1.0 {
            let clamped = config.intensity.clamp(0.0, 1.0);
            warn!(
                intensity = config.intensity,
                clamped, "intensity out of range"
            );
            config.intensity = clamped;
        }
        if config.gap < 0.0 {
            warn!(gap = config.gap, "negative gap treated as zero");
            config.gap = 0.0;
        }
        config
    }
}

/// A cut separator: two closed region paths plus the curve they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DualPath {
    /// Closed region for the section above the cut
    pub upper: PathData,
    /// Closed region for the section below the cut
    pub lower: PathData,
    /// The unperturbed base wave both edges derive from
    pub base: PathData,
}

/// Cut a separator pair from a named pattern.
pub fn generate_dual(
    pattern: &str,
    config: &PatternConfig,
    separation: &SeparationConfig,
) -> DualPath {
    let config = config.sanitized();
    let separation = separation.sanitized();
    let base = generate_pattern_unchecked(pattern, &config);
    dual_from_base(base, &config, &separation)
}

/// Cut a separator pair whose base blends two different patterns.
///
/// The blended base takes the mean of both patterns' height samples. The
/// upper config decides the canvas size and seed; amplitude averages so the
/// blend sits between the two personalities.
pub fn generate_cross(
    upper_pattern: &str,
    upper_config: &PatternConfig,
    lower_pattern: &str,
    lower_config: &PatternConfig,
    separation: &SeparationConfig,
) -> DualPath {
    let upper_config = upper_config.sanitized();
    let lower_config = lower_config.sanitized();
    let separation = separation.sanitized();

    let width = upper_config.width.max(lower_config.width);
    let height = upper_config.height.max(lower_config.height);
    let blended = PatternConfig {
        width,
        height,
        amplitude: (upper_config.amplitude + lower_config.amplitude) / 2.0,
        frequency: upper_config.frequency,
        phase: upper_config.phase,
        mirror: upper_config.mirror,
        seed: upper_config.seed.or(lower_config.seed),
    };

    let a = generate_pattern_unchecked(upper_pattern, &PatternConfig {
        width,
        height,
        ..upper_config
    });
    let b = generate_pattern_unchecked(lower_pattern, &PatternConfig {
        width,
        height,
        ..lower_config
    });

    let sa = sample_heights(&contour_path(&a), width, SAMPLE_COUNT);
    let sb = sample_heights(&contour_path(&b), width, SAMPLE_COUNT);
    let mixed: Vec<f64> = sa
        .iter()
        .zip(sb.iter())
        .map(|(ya, yb)| (ya + yb) / 2.0)
        .collect();
    let base = path_from_samples(&mixed, width, height);

    dual_from_base(base, &blended, &separation)
}

/// Shared cutting step: sample the base, offset and jitter each edge,
/// rebuild both regions.
///
/// Callers sanitize; morphing deliberately feeds modulated amplitudes
/// through here without re-clamping.
pub(crate) fn dual_from_base(
    base: PathData,
    config: &PatternConfig,
    separation: &SeparationConfig,
) -> DualPath {
    if separation.mode == InterlockMode::Flush {
        // Both sections share the exact base cut
        return DualPath {
            upper: base.clone(),
            lower: base.clone(),
            base,
        };
    }

    let (factor_upper, factor_lower) = separation.mode.offset_factors();
    let max_offset = config.height * config.amplitude * separation.intensity * 0.5;
    let seed = config.seed_value();
    let half_gap = separation.gap / 2.0;

    let samples = sample_heights(&contour_path(&base), config.width, SAMPLE_COUNT);

    let mut upper_heights = Vec::with_capacity(SAMPLE_COUNT);
    let mut lower_heights = Vec::with_capacity(SAMPLE_COUNT);
    for (i, y) in samples.iter().enumerate() {
        let index = i as f64;
        let jitter_upper = centered_noise(seed + 1.0, index) * JITTER * max_offset;
        let jitter_lower = centered_noise(seed + 2.0, index) * JITTER * max_offset;
        upper_heights.push(y + factor_upper * max_offset + jitter_upper - half_gap);
        lower_heights.push(y + factor_lower * max_offset + jitter_lower + half_gap);
    }

    DualPath {
        upper: path_from_samples(&upper_heights, config.width, config.height),
        lower: path_from_samples(&lower_heights, config.width, config.height),
        base,
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::generate_pattern;

    fn config() -> PatternConfig {
        PatternConfig::default().with_seed(21)
    }

    #[test]
    fn flush_clones_the_base_exactly() {
        let separation = SeparationConfig::default().with_mode(InterlockMode::Flush);
        let dual = generate_dual("organic", &config(), &separation);
        assert_eq!(dual.upper.to_string(), dual.base.to_string());
        assert_eq!(dual.lower.to_string(), dual.base.to_string());
        assert_eq!(
            dual.base.to_string(),
            generate_pattern("organic", &config()).to_string()
        );
    }

    #[test]
    fn interlock_pushes_edges_apart() {
        let dual = generate_dual("smooth", &config(), &SeparationConfig::default());
        let cfg = config();
        let upper = sample_heights(
            &contour_path(&dual.upper),
            cfg.width,
            SAMPLE_COUNT,
        );
        let lower = sample_heights(
            &contour_path(&dual.lower),
            cfg.width,
            SAMPLE_COUNT,
        );
        // Upper edge rises above the lower everywhere: the jitter never
        // exceeds 15% of the offset, so a full offset apart cannot cross
        for (qa, qb) in upper.iter().zip(lower.iter()) {
            assert!(qa < qb, "upper {qa} not above lower {qb}");
        }
    }

    #[test]
    fn gap_widens_the_channel() {
        let plain = generate_dual("smooth", &config(), &SeparationConfig::default());
        let gapped = generate_dual(
            "smooth",
            &config(),
            &SeparationConfig::default().with_gap(24.0),
        );
        let cfg = config();
        let plain_upper = sample_heights(&contour_path(&plain.upper), cfg.width, 5);
        let gapped_upper = sample_heights(&contour_path(&gapped.upper), cfg.width, 5);
        for (a, b) in plain_upper.iter().zip(gapped_upper.iter()) {
            assert!((a - 12.0 - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn zero_intensity_collapses_to_the_base() {
        let separation = SeparationConfig::default().with_intensity(0.0);
        let dual = generate_dual("smooth", &config(), &separation);
        // max offset is zero, so jitter collapses too
        let cfg = config();
        let base = sample_heights(&contour_path(&dual.base), cfg.width, SAMPLE_COUNT);
        let upper = sample_heights(&contour_path(&dual.upper), cfg.width, SAMPLE_COUNT);
        for (a, b) in base.iter().zip(upper.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn determinism_per_seed() {
        let a = generate_dual("organic", &config(), &SeparationConfig::default());
        let b = generate_dual("organic", &config(), &SeparationConfig::default());
        assert_eq!(a.upper.to_string(), b.upper.to_string());
        assert_eq!(a.lower.to_string(), b.lower.to_string());
    }

    #[test]
    fn jitter_differs_between_edges() {
        let dual = generate_dual(
            "smooth",
            &config(),
            &SeparationConfig::default().with_mode(InterlockMode::Apart),
        );
        let cfg = config();
        let upper = sample_heights(&contour_path(&dual.upper), cfg.width, SAMPLE_COUNT);
        let lower = sample_heights(&contour_path(&dual.lower), cfg.width, SAMPLE_COUNT);
        // Remove the mode offset: the residuals are the per-edge jitter,
        // which comes from different derived seeds
        let (fa, fb) = InterlockMode::Apart.offset_factors();
        let max_offset = cfg.height * cfg.amplitude * 0.5 * 0.5;
        let residuals: Vec<f64> = upper
            .iter()
            .zip(lower.iter())
            .map(|(ya, yb)| (ya - fa * max_offset) - (yb - fb * max_offset))
            .collect();
        assert!(residuals.iter().any(|r| r.abs() > 1e-6));
    }

    #[test]
    fn cross_blend_averages_the_bases() {
        let upper_cfg = config();
        let lower_cfg = config().with_amplitude(0.9);
        let dual = generate_cross(
            "smooth",
            &upper_cfg,
            "sharp",
            &lower_cfg,
            &SeparationConfig::default().with_mode(InterlockMode::Flush),
        );
        let a = generate_pattern("smooth", &upper_cfg);
        let b = generate_pattern("sharp", &lower_cfg);
        let sa = sample_heights(&contour_path(&a), upper_cfg.width, SAMPLE_COUNT);
        let sb = sample_heights(&contour_path(&b), upper_cfg.width, SAMPLE_COUNT);
        let base = sample_heights(&contour_path(&dual.base), upper_cfg.width, SAMPLE_COUNT);
        for ((ya, yb), got) in sa.iter().zip(sb.iter()).zip(base.iter()) {
            assert!(((ya + yb) / 2.0 - got).abs() < 1e-9);
        }
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in InterlockMode::all() {
            assert_eq!(InterlockMode::from_name(mode.name()), Some(*mode));
        }
        assert_eq!(InterlockMode::from_name("sideways"), None);
    }

    #[test]
    fn sanitized_clamps_intensity_and_gap() {
        let separation = SeparationConfig::default()
            .with_intensity(3.0)
            .with_gap(-5.0)
            .sanitized();
        assert_eq!(separation.intensity, 1.0);
        assert_eq!(separation.gap, 0.0);
    }
}
