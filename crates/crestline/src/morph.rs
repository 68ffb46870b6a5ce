//! Frame sequences for animated waves.
//!
//! A morph walks one full sine cycle of phase and amplitude modulation
//! across the frame count, so the sequence loops seamlessly: the last frame
//! repeats the first, which is what CSS keyframe and SMIL `values` lists
//! expect at their endpoints.

use crate::path::PathData;
use crate::patterns::{PatternConfig, generate_pattern_unchecked};
use crate::separator::{DualPath, SeparationConfig, dual_from_base};

/// Modulation depths for one morph sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphStyle {
    /// Frames in the loop, including the closing repeat of frame zero
    pub frame_count: usize,
    /// Peak phase swing, as a fraction of the width
    pub phase_range: f64,
    /// Peak amplitude swing, as a fraction of the base amplitude
    pub amplitude_variation: f64,
}

impl MorphStyle {
    pub const fn new(frame_count: usize, phase_range: f64, amplitude_variation: f64) -> Self {
        MorphStyle {
            frame_count,
            phase_range,
            amplitude_variation,
        }
    }
}

/// Named modulation recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphPreset {
    /// Slow sideways wander, almost no breathing
    Drift,
    /// Amplitude swells and relaxes in place
    Breathe,
    /// Broad travel with moderate swell
    Undulate,
    /// Fast outward sweep, biggest travel
    RippleOut,
}

impl MorphPreset {
    pub fn all() -> &'static [MorphPreset] {
        &[
            MorphPreset::Drift,
            MorphPreset::Breathe,
            MorphPreset::Undulate,
            MorphPreset::RippleOut,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MorphPreset::Drift => "drift",
            MorphPreset::Breathe => "breathe",
            MorphPreset::Undulate => "undulate",
            MorphPreset::RippleOut => "ripple-out",
        }
    }

    pub fn from_name(name: &str) -> Option<MorphPreset> {
        match name.to_lowercase().as_str() {
            "drift" => Some(MorphPreset::Drift),
            "breathe" => Some(MorphPreset::Breathe),
            "undulate" => Some(MorphPreset::Undulate),
            "ripple-out" | "ripple_out" | "ripple" => Some(MorphPreset::RippleOut),
            _ => None,
        }
    }

    pub fn style(&self) -> MorphStyle {
        match self {
            MorphPreset::Drift => MorphStyle::new(5, 0.4, 0.05),
            MorphPreset::Breathe => MorphStyle::new(5, 0.05, 0.2),
            MorphPreset::Undulate => MorphStyle::new(7, 0.5, 0.15),
            MorphPreset::RippleOut => MorphStyle::new(7, 0.8, 0.1),
        }
    }
}

/// Generate the looping frame sequence for one wave.
///
/// Frame `i` modulates the base config at `t = i / (frame_count - 1)`; the
/// final frame reuses `t = 0` exactly so the loop closes without a seam.
pub fn morph_frames(pattern: &str, config: &PatternConfig, style: &MorphStyle) -> Vec<PathData> {
    let config = config.sanitized();
    frame_configs(&config, style)
        .map(|frame| generate_pattern_unchecked(pattern, &frame))
        .collect()
}

/// Generate a looping frame sequence of separator pairs.
///
/// Each frame cuts its own dual from that frame's modulated base, so upper
/// and lower edges stay interlocked throughout the loop.
pub fn morph_dual_frames(
    pattern: &str,
    config: &PatternConfig,
    separation: &SeparationConfig,
    style: &MorphStyle,
) -> Vec<DualPath> {
    let config = config.sanitized();
    let separation = separation.sanitized();
    frame_configs(&config, style)
        .map(|frame| {
            let base = generate_pattern_unchecked(pattern, &frame);
            dual_from_base(base, &frame, &separation)
        })
        .collect()
}

/// The per-frame modulated configs for one loop.
///
/// ## Rust Lesson #26: Returning Iterators
///
/// `impl Iterator<Item = T> + 'a` returns a lazy sequence without naming
/// the (unnameable) closure type, like returning a generator in JS. The
/// `'a` ties it to the borrowed config: the iterator cannot outlive it.
fn frame_configs<'a>(
    config: &'a PatternConfig,
    style: &'a MorphStyle,
) -> impl Iterator<Item = PatternConfig> + 'a {
    let count = style.frame_count;
    (0..count).map(move |i| {
        let t = if count > 1 && i == count - 1 {
            // sin(2*pi) is not exactly zero in floating point, so the
            // closing frame reuses t = 0 rather than computing it
            0.0
        } else if count > 1 {
            i as f64 / (count - 1) as f64
        } else {
            0.0
        };
        let swing = (t * std::f64::consts::TAU).sin();
        let mut frame = config.clone();
        frame.phase = config.phase + swing * style.phase_range;
        frame.amplitude = config.amplitude * (1.0 + swing * style.amplitude_variation);
        frame
    })
}

// ====== TESTS ======
