//! # crestline
//!
//! Wave boundary geometry engine.
//!
//! Everything works in SVG path coordinates: a pattern family turns a
//! [`PatternConfig`] into a closed region whose top edge is the wave, ready
//! to drop into a `d=""` attribute. On top of that sit separator cutting
//! (two interlocking edges from one curve), whole-path transforms, CSS
//! clip-path export, point reduction, and looping morph sequences.

pub mod clip;
pub mod morph;
pub mod path;
pub mod patterns;
pub mod rng;
pub mod sample;
pub mod separator;
pub mod simplify;
pub mod transform;

// Re-export common types at crate root for convenience.
pub use clip::{RegionEdge, clip_polygon, clip_polygon_between};
pub use morph::{MorphPreset, MorphStyle, morph_dual_frames, morph_frames};
pub use path::{PathCommand, PathData, PathError};
pub use patterns::{PatternConfig, PatternMetadata, WavePattern, generate_pattern};
pub use sample::{path_from_samples, sample_heights};
pub use separator::{
    DualPath, InterlockMode, SAMPLE_COUNT, SeparationConfig, generate_cross, generate_dual,
};
pub use simplify::simplify_path;
pub use transform::{
    extend_below_region, extract_contour, flip_vertical, invert_to_top_region, mirror_horizontal,
};
