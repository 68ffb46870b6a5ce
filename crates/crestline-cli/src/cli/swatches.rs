//! Generate a reference sheet of all wave patterns.
//!
//! Creates a grid of labeled swatches, one per pattern family, so the
//! families can be compared side by side when picking a divider style.

use crestline::{PatternConfig, WavePattern, generate_pattern};

use crate::cli::common::write_output;

/// Swatch tile dimensions
const SWATCH_WIDTH: f64 = 320.0;
const SWATCH_HEIGHT: f64 = 80.0;
const LABEL_HEIGHT: f64 = 14.0;
const GUTTER: f64 = 12.0;
const MARGIN: f64 = 18.0;

const COLUMNS: usize = 2;

/// Per-swatch fill colors for colorful mode
const COLORS: &[&str] = &[
    "#E63946", // Red
    "#2A9D8F", // Teal
    "#264653", // Dark blue-gray
    "#E9C46A", // Yellow
    "#8338EC", // Purple
    "#3A86FF", // Bright blue
    "#FB5607", // Orange
    "#118AB2", // Ocean blue
];

/// Execute the swatches command.
pub fn cmd_swatches(args: &[String]) {
    let mut output_path = "wave_swatches.svg".to_string();
    let mut fill_color = "#264653".to_string();
    let mut seed = 7_u64;
    let mut amplitude = 0.5_f64;
    let mut frequency = 3.0_f64;
    let mut png_output: Option<String> = None;
    let mut png_scale = 2.0_f64;
    let mut colorful = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = args[i].clone();
                }
            }
            "--fill" => {
                i += 1;
                if i < args.len() {
                    fill_color = args[i].clone();
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(seed);
                }
            }
            "-A" | "--amplitude" => {
                i += 1;
                if i < args.len() {
                    amplitude = args[i].parse().unwrap_or(amplitude);
                }
            }
            "-F" | "--frequency" => {
                i += 1;
                if i < args.len() {
                    frequency = args[i].parse().unwrap_or(frequency);
                }
            }
            "--png" => {
                i += 1;
                if i < args.len() {
                    png_output = Some(args[i].clone());
                }
            }
            "--png-scale" => {
                i += 1;
                if i < args.len() {
                    png_scale = args[i].parse().unwrap_or(2.0);
                }
            }
            "--colorful" | "-c" => {
                colorful = true;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    // Custom is an empty placeholder, nothing to show on a sheet
    let patterns: Vec<WavePattern> = WavePattern::all()
        .iter()
        .copied()
        .filter(|pattern| *pattern != WavePattern::Custom)
        .collect();

    let rows = patterns.len().div_ceil(COLUMNS);
    let cell_width = SWATCH_WIDTH + GUTTER;
    let cell_height = SWATCH_HEIGHT + LABEL_HEIGHT + GUTTER;
    let page_width = MARGIN * 2.0 + COLUMNS as f64 * cell_width - GUTTER;
    let page_height = MARGIN * 2.0 + rows as f64 * cell_height - GUTTER;

    eprintln!("Generating wave swatches...");
    eprintln!("  Grid: {}x{} ({} patterns)", COLUMNS, rows, patterns.len());
    eprintln!("  Seed: {}, amplitude: {}, frequency: {}", seed, amplitude, frequency);

    let mut svg_content = String::new();
    svg_content.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}" height="{:.2}"
     viewBox="0 0 {:.2} {:.2}">
  <title>Wave Swatches - crestline</title>

  <!-- Background -->
  <rect width="100%" height="100%" fill="white"/>

  <!-- Swatches -->
"##,
        page_width, page_height, page_width, page_height
    ));

    let config = PatternConfig::default()
        .with_size(SWATCH_WIDTH, SWATCH_HEIGHT)
        .with_amplitude(amplitude)
        .with_frequency(frequency)
        .with_seed(seed);

    for (idx, pattern) in patterns.iter().enumerate() {
        let col = idx % COLUMNS;
        let row = idx / COLUMNS;

        let x = MARGIN + col as f64 * cell_width;
        let y = MARGIN + row as f64 * cell_height;

        let d = generate_pattern(pattern.name(), &config).to_string();

        let swatch_fill = if colorful {
            COLORS[idx % COLORS.len()]
        } else {
            fill_color.as_str()
        };

        svg_content.push_str(&format!(
            r##"  <g id="swatch-{}" transform="translate({:.2},{:.2})">
    <rect width="{:.2}" height="{:.2}" fill="none" stroke="#cccccc" stroke-width="0.5"/>
    <path d="{}" fill="{}"/>
"##,
            pattern.name(),
            x,
            y,
            SWATCH_WIDTH,
            SWATCH_HEIGHT,
            d,
            swatch_fill
        ));

        let label_x = SWATCH_WIDTH / 2.0;
        let label_y = SWATCH_HEIGHT + LABEL_HEIGHT - 3.0;
        svg_content.push_str(&format!(
            r##"    <text x="{:.2}" y="{:.2}"
          font-family="system-ui, -apple-system, sans-serif"
          font-size="10"
          text-anchor="middle"
          fill="#333333">{}</text>
  </g>
"##,
            label_x, label_y, pattern.name()
        ));

        eprint!(".");
    }

    svg_content.push_str("</svg>\n");
    eprintln!(" done!");

    write_output(Some(output_path.as_str()), &svg_content);

    if let Some(png_path) = png_output {
        generate_png(&svg_content, &png_path, png_scale, page_width, page_height);
    }
}

/// Generate PNG from SVG content using resvg.
fn generate_png(svg_content: &str, png_path: &str, scale: f64, width: f64, height: f64) {
    use resvg::usvg;
    use tiny_skia::Pixmap;

    eprint!("Generating PNG at {}x scale...", scale);

    let options = usvg::Options::default();
    let tree = match usvg::Tree::from_str(svg_content, &options) {
        Ok(t) => t,
        Err(e) => {
            eprintln!(" failed: {}", e);
            return;
        }
    };

    let pixmap_width = (width * scale) as u32;
    let pixmap_height = (height * scale) as u32;

    let mut pixmap = match Pixmap::new(pixmap_width, pixmap_height) {
        Some(p) => p,
        None => {
            eprintln!(" failed: could not create pixmap");
            return;
        }
    };

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    match pixmap.save_png(png_path) {
        Ok(_) => eprintln!(" done!\nWrote: {} ({}x{})", png_path, pixmap_width, pixmap_height),
        Err(e) => eprintln!(" failed: {}", e),
    }
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("crestline swatches - Generate a pattern reference sheet");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline swatches [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (default: wave_swatches.svg)");
    eprintln!("    -c, --colorful         One color per swatch");
    eprintln!("    --fill <color>         Wave fill color (default: #264653)");
    eprintln!("    --seed <n>             Seed for the seeded families (default: 7)");
    eprintln!("    -A, --amplitude <n>    Wave depth for all swatches (default: 0.5)");
    eprintln!("    -F, --frequency <n>    Peak count for all swatches (default: 3)");
    eprintln!("    --png <file>           Also generate PNG output");
    eprintln!("    --png-scale <n>        PNG scale factor (default: 2.0)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    # Reference sheet for the README");
    eprintln!("    crestline swatches --colorful -o swatches.svg --png swatches.png");
    eprintln!();
    eprintln!("    # Compare seeds");
    eprintln!("    crestline swatches --seed 3 -o seed3.svg");
}
