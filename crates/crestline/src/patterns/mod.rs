//! Wave pattern generation.
//!
//! Each pattern family produces a closed region path: down the left edge,
//! along the wave curve, down the right edge, and closed across the bottom.
//! The d-attribute string of that path drops straight into an `<svg>` as a
//! section divider.

use tracing::warn;

use crate::path::PathData;

pub mod flowing;
pub mod layered_organic;
pub mod mountain;
pub mod organic;
pub mod ribbon;
pub mod sharp;
pub mod smooth;
pub(crate) mod util;

pub use flowing::generate_flowing_wave;
pub use layered_organic::generate_layered_organic_wave;
pub use mountain::generate_mountain_wave;
pub use organic::generate_organic_wave;
pub use ribbon::generate_ribbon_wave;
pub use sharp::generate_sharp_wave;
pub use smooth::generate_smooth_wave;

/// Lowest accepted frequency. Anything below rounds to a single peak anyway.
pub const MIN_FREQUENCY: f64 = 0.1;
/// Highest accepted frequency, past which peaks degenerate into noise.
pub const MAX_FREQUENCY: f64 = 20.0;

/// Shared knobs for every pattern family.
///
/// Families that do not use a knob ignore it: `smooth` and `flowing` skip
/// `frequency`, `ribbon` skips both `frequency` and `phase`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    /// Canvas width in user units
    pub width: f64,
    /// Canvas height in user units
    pub height: f64,
    /// Wave depth as a fraction of half the height, 0.0 to 1.0
    pub amplitude: f64,
    /// Target peak count for the angular families
    pub frequency: f64,
    /// Horizontal shift as a fraction of the width
    pub phase: f64,
    /// Reflect the finished path across the vertical centerline
    pub mirror: bool,
    /// Personality for the seeded families; `None` behaves like `Some(0)`
    pub seed: Option<u64>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            width: 1440.0,
            height: 120.0,
            amplitude: 0.5,
            frequency: 3.0,
            phase: 0.0,
            mirror: false,
            seed: None,
        }
    }
}

impl PatternConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Copy with `amplitude` and `frequency` pulled back into their accepted
    /// ranges. Out-of-range values are clamped, not rejected.
    ///
    /// ## Rust Lesson #25: Structured Logging
    ///
    /// `tracing::warn!` takes key = value fields before the message, like
    /// `console.warn({amplitude}, 'msg')` but typed. A subscriber in the
    /// binary decides where they go; a library never prints directly.
    pub fn sanitized(&self) -> PatternConfig {
        let mut config = self.clone();
        if config.amplitude < 0.0 || config.amplitude > 1.0 {
            let clamped = config.amplitude.clamp(0.0, 1.0);
            warn!(
                amplitude = config.amplitude,
                clamped, "amplitude out of range"
            );
            config.amplitude = clamped;
        }
        if config.frequency < MIN_FREQUENCY || config.frequency > MAX_FREQUENCY {
            let clamped = config.frequency.clamp(MIN_FREQUENCY, MAX_FREQUENCY);
            warn!(
                frequency = config.frequency,
                clamped, "frequency out of range"
            );
            config.frequency = clamped;
        }
        config
    }

    #[inline]
    pub(crate) fn seed_value(&self) -> f64 {
        self.seed.unwrap_or(0) as f64
    }
}

/// Descriptive info about a pattern family, for help screens and pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMetadata {
    pub description: &'static str,
    pub uses_frequency: bool,
    pub uses_seed: bool,
}

impl PatternMetadata {
    pub const fn new(description: &'static str, uses_frequency: bool, uses_seed: bool) -> Self {
        PatternMetadata {
            description,
            uses_frequency,
            uses_seed,
        }
    }
}

/// The closed set of wave families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WavePattern {
    Smooth,
    Organic,
    Sharp,
    Mountain,
    Flowing,
    Ribbon,
    LayeredOrganic,
    Custom,
}

impl WavePattern {
    /// Every family, in presentation order.
    pub fn all() -> &'static [WavePattern] {
        &[
            WavePattern::Smooth,
            WavePattern::Organic,
            WavePattern::Sharp,
            WavePattern::Mountain,
            WavePattern::Flowing,
            WavePattern::Ribbon,
            WavePattern::LayeredOrganic,
            WavePattern::Custom,
        ]
    }

    /// Canonical name, as accepted by [`WavePattern::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            WavePattern::Smooth => "smooth",
            WavePattern::Organic => "organic",
            WavePattern::Sharp => "sharp",
            WavePattern::Mountain => "mountain",
            WavePattern::Flowing => "flowing",
            WavePattern::Ribbon => "ribbon",
            WavePattern::LayeredOrganic => "layered-organic",
            WavePattern::Custom => "custom",
        }
    }

    pub fn metadata(&self) -> PatternMetadata {
        match self {
            WavePattern::Smooth => {
                PatternMetadata::new("One gentle sine-like hump", false, false)
            }
            WavePattern::Organic => {
                PatternMetadata::new("Irregular hand-drawn hump from a seed", false, true)
            }
            WavePattern::Sharp => {
                PatternMetadata::new("Angular sawtooth peaks", true, false)
            }
            WavePattern::Mountain => {
                PatternMetadata::new("Triangular ridgeline with alternating summits", true, false)
            }
            WavePattern::Flowing => {
                PatternMetadata::new("One large S-curve sweeping the width", false, false)
            }
            WavePattern::Ribbon => {
                PatternMetadata::new("Free-form streamer, shape fully seed-driven", false, true)
            }
            WavePattern::LayeredOrganic => {
                PatternMetadata::new("Dense organic curve for stacked layers", false, true)
            }
            WavePattern::Custom => {
                PatternMetadata::new("Empty placeholder for caller-supplied paths", false, false)
            }
        }
    }

    /// Look up a family by name. Case-insensitive, with a few aliases.
    pub fn from_name(name: &str) -> Option<WavePattern> {
        match name.to_lowercase().as_str() {
            "smooth" | "layered" | "sine" => Some(WavePattern::Smooth),
            "organic" | "hand-drawn" => Some(WavePattern::Organic),
            "sharp" | "zigzag" => Some(WavePattern::Sharp),
            "mountain" | "peaks" => Some(WavePattern::Mountain),
            "flowing" | "s-curve" => Some(WavePattern::Flowing),
            "ribbon" => Some(WavePattern::Ribbon),
            "layered-organic" | "layered_organic" => Some(WavePattern::LayeredOrganic),
            "custom" => Some(WavePattern::Custom),
            _ => None,
        }
    }

    /// Run the family's generator, then apply the shared mirror step.
    pub fn generate(&self, config: &PatternConfig) -> PathData {
        let path = match self {
            WavePattern::Smooth => generate_smooth_wave(config),
            WavePattern::Organic => generate_organic_wave(config),
            WavePattern::Sharp => generate_sharp_wave(config),
            WavePattern::Mountain => generate_mountain_wave(config),
            WavePattern::Flowing => generate_flowing_wave(config),
            WavePattern::Ribbon => generate_ribbon_wave(config),
            WavePattern::LayeredOrganic => generate_layered_organic_wave(config),
            WavePattern::Custom => PathData::new(),
        };
        if config.mirror {
            crate::transform::mirror_path(&path, config.width)
        } else {
            path
        }
    }
}

/// Generate a wave by pattern name, clamping the config first.
///
/// Unknown names fall back to `smooth` with a warning rather than failing,
/// so a typo in one layer of a composition never blanks the whole output.
pub fn generate_pattern(name: &str, config: &PatternConfig) -> PathData {
    generate_pattern_unchecked(name, &config.sanitized())
}

/// Name dispatch without the clamping step, for callers that modulate an
/// already-sanitized config past the static limits, like morphing.
pub(crate) fn generate_pattern_unchecked(name: &str, config: &PatternConfig) -> PathData {
    match WavePattern::from_name(name) {
        Some(pattern) => pattern.generate(config),
        None => {
            let available: Vec<&str> = WavePattern::all().iter().map(|p| p.name()).collect();
            warn!(
                pattern = name,
                available = available.join(", ").as_str(),
                "unknown pattern, falling back to smooth"
            );
            WavePattern::Smooth.generate(config)
        }
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_round_trips_by_name() {
        for pattern in WavePattern::all() {
            assert_eq!(WavePattern::from_name(pattern.name()), Some(*pattern));
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(WavePattern::from_name("layered"), Some(WavePattern::Smooth));
        assert_eq!(WavePattern::from_name("zigzag"), Some(WavePattern::Sharp));
        assert_eq!(WavePattern::from_name("SMOOTH"), Some(WavePattern::Smooth));
        assert_eq!(WavePattern::from_name("wibble"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_smooth() {
        let config = PatternConfig::default();
        assert_eq!(
            generate_pattern("wibble", &config).to_string(),
            generate_pattern("smooth", &config).to_string()
        );
    }

    #[test]
    fn custom_generates_nothing() {
        let path = generate_pattern("custom", &PatternConfig::default());
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn sanitized_clamps_amplitude_and_frequency() {
        let config = PatternConfig::default()
            .with_amplitude(1.8)
            .with_frequency(500.0)
            .sanitized();
        assert_eq!(config.amplitude, 1.0);
        assert_eq!(config.frequency, MAX_FREQUENCY);

        let config = PatternConfig::default()
            .with_amplitude(-0.2)
            .with_frequency(0.0)
            .sanitized();
        assert_eq!(config.amplitude, 0.0);
        assert_eq!(config.frequency, MIN_FREQUENCY);
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let config = PatternConfig::default();
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn out_of_range_config_draws_the_clamped_geometry() {
        let wild = PatternConfig::default().with_amplitude(3.0).with_frequency(100.0);
        let bound = PatternConfig::default()
            .with_amplitude(1.0)
            .with_frequency(MAX_FREQUENCY);
        assert_eq!(
            generate_pattern("sharp", &wild).to_string(),
            generate_pattern("sharp", &bound).to_string()
        );
    }

    #[test]
    fn mirror_is_an_involution() {
        let config = PatternConfig::default();
        let mirrored_twice = generate_pattern(
            "smooth",
            &config.clone().with_mirror(true),
        );
        let mirrored_twice =
            crate::transform::mirror_path(&mirrored_twice, config.width);
        assert_eq!(
            mirrored_twice.to_string(),
            generate_pattern("smooth", &config).to_string()
        );
    }

    #[test]
    fn mirror_changes_asymmetric_families() {
        let config = PatternConfig::default().with_seed(14);
        let plain = generate_pattern("organic", &config);
        let mirrored = generate_pattern("organic", &config.clone().with_mirror(true));
        assert_ne!(plain.to_string(), mirrored.to_string());
    }

    #[test]
    fn all_families_generate_for_the_same_config() {
        let config = PatternConfig::default().with_seed(3);
        for pattern in WavePattern::all() {
            let path = pattern.generate(&config);
            if *pattern == WavePattern::Custom {
                assert!(path.is_empty());
            } else {
                let text = path.to_string();
                assert!(text.starts_with("M 0,120"), "{}: {}", pattern.name(), text);
                assert!(text.ends_with("Z"), "{}: {}", pattern.name(), text);
            }
        }
    }
}
