//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `generate` - Generate a single wave region
//! - `separator` - Cut an interlocking section pair
//! - `morph` - Generate looping animation frames
//! - `swatches` - Generate a reference sheet of all patterns
//! - `recipe` - Render layered compositions from YAML
//! - `preview` - Rasterize an SVG to PNG
//! - `simplify` - Reduce a path to a coarse polyline

pub mod common;
pub mod generate;
pub mod separator;
pub mod morph;
pub mod swatches;
pub mod recipe;
pub mod preview;
pub mod simplify;

pub use generate::cmd_generate;
pub use separator::cmd_separator;
pub use morph::cmd_morph;
pub use swatches::cmd_swatches;
pub use recipe::cmd_recipe;
pub use preview::cmd_preview;
pub use simplify::cmd_simplify;
