//! Wave recipe system for declarative layer composition.
//!
//! Recipes are YAML files that define stacked wave compositions: a banner
//! of three offset organic layers, a header with a flipped divider, etc.
//! Each layer picks a pattern, its knobs, and styling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crestline::{PatternConfig, WavePattern, generate_pattern};

use crate::cli::common::write_output;

/// A complete recipe defining a layered wave composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Canvas configuration
    pub canvas: Canvas,

    /// Default style applied to all layers (can be overridden)
    #[serde(default)]
    pub defaults: LayerStyle,

    /// Ordered list of wave layers (rendered bottom to top)
    pub layers: Vec<Layer>,
}

/// Canvas/output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in user units
    pub width: f64,

    /// Height in user units
    pub height: f64,

    /// Background color (default: white)
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_background() -> String {
    "white".to_string()
}

/// A single wave layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name (for identification)
    pub name: String,

    /// Pattern family (e.g., "smooth", "organic", "layered-organic")
    pub pattern: String,

    /// Wave depth, 0.0 to 1.0
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Peak count for the angular families
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Horizontal shift, fraction of width
    #[serde(default)]
    pub phase: f64,

    /// Personality for the seeded families
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reflect across the vertical centerline
    #[serde(default)]
    pub mirror: bool,

    /// Band height for this layer (default: canvas height)
    #[serde(default)]
    pub height: Option<f64>,

    /// Vertical offset from the canvas top
    #[serde(default)]
    pub offset_y: f64,

    /// Layer style (merged with defaults)
    #[serde(default)]
    pub style: LayerStyle,

    /// Whether this layer is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_amplitude() -> f64 {
    0.5
}

fn default_frequency() -> f64 {
    3.0
}

fn default_enabled() -> bool {
    true
}

/// Style properties for a layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Fill color
    #[serde(default)]
    pub color: Option<String>,

    /// Opacity (0.0 to 1.0)
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl LayerStyle {
    /// Merge this style with defaults, preferring self's values.
    pub fn merge_with(&self, defaults: &LayerStyle) -> LayerStyle {
        LayerStyle {
            color: self.color.clone().or_else(|| defaults.color.clone()),
            opacity: self.opacity.or(defaults.opacity),
        }
    }

    /// Get color with fallback.
    pub fn color_or(&self, fallback: &str) -> String {
        self.color.clone().unwrap_or_else(|| fallback.to_string())
    }

    /// Get opacity with fallback.
    pub fn opacity_or(&self, fallback: f64) -> f64 {
        self.opacity.unwrap_or(fallback)
    }
}

/// Result of rendering a recipe.
pub struct RenderedRecipe {
    /// All layers with their generated paths
    pub layers: Vec<RenderedLayer>,
    /// Canvas configuration
    pub canvas: Canvas,
    /// Recipe name
    pub name: String,
}

/// A rendered layer with its path and style.
pub struct RenderedLayer {
    pub name: String,
    pub d: String,
    pub offset_y: f64,
    pub style: LayerStyle,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read recipe file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse recipe YAML: {}", e))
    }

    /// Render the recipe to wave paths.
    pub fn render(&self) -> RenderedRecipe {
        let mut rendered_layers = Vec::new();

        for layer in &self.layers {
            if !layer.enabled {
                continue;
            }

            // Unknown patterns skip the layer rather than sinking the whole
            // composition; generate_pattern's fallback would silently draw
            // the wrong family here
            if WavePattern::from_name(&layer.pattern).is_none() {
                eprintln!(
                    "Warning: Unknown pattern '{}', skipping layer '{}'",
                    layer.pattern, layer.name
                );
                continue;
            }

            let config = PatternConfig {
                width: self.canvas.width,
                height: layer.height.unwrap_or(self.canvas.height),
                amplitude: layer.amplitude,
                frequency: layer.frequency,
                phase: layer.phase,
                mirror: layer.mirror,
                seed: layer.seed,
            };
            let d = generate_pattern(&layer.pattern, &config).to_string();

            let style = layer.style.merge_with(&self.defaults);

            rendered_layers.push(RenderedLayer {
                name: layer.name.clone(),
                d,
                offset_y: layer.offset_y,
                style,
            });
        }

        RenderedRecipe {
            layers: rendered_layers,
            canvas: self.canvas.clone(),
            name: self.name.clone(),
        }
    }
}

impl RenderedRecipe {
    /// Export to SVG string.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}" height="{:.2}"
     viewBox="0 0 {:.2} {:.2}">
  <title>{}</title>
  <rect width="100%" height="100%" fill="{}"/>
"##,
            self.canvas.width, self.canvas.height, self.canvas.width, self.canvas.height,
            self.name, self.canvas.background
        );

        for layer in &self.layers {
            let color = layer.style.color_or("#264653");
            let opacity = layer.style.opacity_or(1.0);

            svg.push_str(&format!(
                r##"  <g id="{}" transform="translate(0,{})" fill-opacity="{}">
    <path d="{}" fill="{}"/>
  </g>
"##,
                layer.name, layer.offset_y, opacity, layer.d, color
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Execute the recipe command.
pub fn cmd_recipe(args: &[String]) {
    if args.is_empty() {
        print_usage();
        return;
    }

    let mut recipe_path: Option<String> = None;
    let mut output_path = "composition.svg".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = args[i].clone();
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--example" => {
                print_example();
                return;
            }
            arg if !arg.starts_with('-') => {
                recipe_path = Some(arg.to_string());
            }
            _ => {}
        }
        i += 1;
    }

    let recipe_path = match recipe_path {
        Some(p) => p,
        None => {
            eprintln!("Error: No recipe file specified");
            print_usage();
            return;
        }
    };

    eprintln!("Loading recipe: {}", recipe_path);

    let recipe = match Recipe::load(&recipe_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    eprintln!("Recipe: {}", recipe.name);
    eprintln!("Canvas: {}x{}", recipe.canvas.width, recipe.canvas.height);
    eprintln!("Layers: {}", recipe.layers.len());

    let rendered = recipe.render();
    eprintln!(
        "Rendered {} of {} layers",
        rendered.layers.len(),
        recipe.layers.len()
    );

    let svg = rendered.to_svg();
    write_output(Some(output_path.as_str()), &svg);
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("crestline recipe - Render layered wave compositions from YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline recipe <recipe.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (default: composition.svg)");
    eprintln!("    --example              Print an example recipe YAML");
    eprintln!("    -h, --help             Show this help");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    crestline recipe hero_waves.yaml -o hero.svg");
}

fn print_example() {
    println!(
        r##"# Example crestline recipe
name: "Layered Hero Waves"
description: "Three organic bands with depth, over a smooth base"

canvas:
  width: 1440
  height: 320
  background: "#f6f9fc"

defaults:
  color: "#264653"
  opacity: 1.0

layers:
  - name: back_band
    pattern: layered-organic
    amplitude: 0.35
    seed: 11
    height: 300
    offset_y: 20
    style:
      color: "#2a9d8f"
      opacity: 0.35

  - name: mid_band
    pattern: layered-organic
    amplitude: 0.45
    seed: 12
    height: 280
    offset_y: 40
    style:
      color: "#2a9d8f"
      opacity: 0.6

  - name: front_band
    pattern: organic
    amplitude: 0.55
    seed: 13
    height: 260
    offset_y: 60
    style:
      color: "#264653"

  - name: base
    pattern: smooth
    amplitude: 0.3
    height: 120
    offset_y: 200
"##
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
name: Minimal
canvas:
  width: 400
  height: 100
layers:
  - name: base
    pattern: smooth
"#;

    const MIXED: &str = r#"
name: Mixed
canvas:
  width: 400
  height: 100
layers:
  - name: keep
    pattern: smooth
  - name: wrong
    pattern: wibble
  - name: off
    pattern: sharp
    enabled: false
"#;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let recipe: Recipe = serde_yaml::from_str(MINIMAL).expect("should parse");
        assert_eq!(recipe.canvas.background, "white");
        let layer = &recipe.layers[0];
        assert_eq!(layer.amplitude, 0.5);
        assert_eq!(layer.frequency, 3.0);
        assert_eq!(layer.offset_y, 0.0);
        assert!(layer.enabled);
        assert!(layer.height.is_none());
        assert!(layer.style.color.is_none());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(serde_yaml::from_str::<Recipe>("name: [unclosed").is_err());
    }

    #[test]
    fn render_skips_unknown_and_disabled_layers() {
        let recipe: Recipe = serde_yaml::from_str(MIXED).expect("should parse");
        let rendered = recipe.render();
        assert_eq!(rendered.layers.len(), 1);
        assert_eq!(rendered.layers[0].name, "keep");
    }

    #[test]
    fn layer_style_wins_over_defaults() {
        let defaults = LayerStyle {
            color: Some("#111111".to_string()),
            opacity: Some(0.5),
        };
        let layer = LayerStyle {
            color: None,
            opacity: Some(0.9),
        };
        let merged = layer.merge_with(&defaults);
        assert_eq!(merged.color.as_deref(), Some("#111111"));
        assert_eq!(merged.opacity, Some(0.9));
    }

    #[test]
    fn to_svg_wraps_each_layer_in_a_group() {
        let recipe: Recipe = serde_yaml::from_str(MINIMAL).expect("should parse");
        let svg = recipe.render().to_svg();
        assert!(svg.contains(r#"<g id="base""#));
        assert!(svg.contains(r#"fill="white""#));
        assert!(svg.contains("<path d=\"M 0,100"));
    }
}
