//! Cut an interlocking section pair.
//!
//! Renders both halves of the cut in one SVG so the meshing is visible at
//! a glance: the upper section re-framed against the top edge, the lower
//! section hugging the bottom, and optionally the shared base curve as a
//! stroked line between them.

use serde::Serialize;

use crestline::{
    InterlockMode, PatternConfig, SeparationConfig, extract_contour, generate_cross,
    generate_dual, invert_to_top_region,
};

use crate::cli::common::{OutputFormat, SvgLayer, layers_to_svg, write_output};

const UPPER_FILL: &str = "#264653";
const LOWER_FILL: &str = "#2a9d8f";

#[derive(Serialize)]
struct JsonSeparator<'a> {
    pattern: &'a str,
    lower_pattern: Option<&'a str>,
    mode: &'a str,
    intensity: f64,
    gap: f64,
    seed: Option<u64>,
    upper: String,
    lower: String,
    base: String,
}

/// Execute the separator command.
pub fn cmd_separator(args: &[String]) {
    let mut pattern = "smooth".to_string();
    let mut lower_pattern: Option<String> = None;
    let mut config = PatternConfig::default();
    let mut separation = SeparationConfig::default();
    let mut output_path: Option<String> = None;
    let mut format = OutputFormat::Svg;
    let mut upper_fill = UPPER_FILL.to_string();
    let mut lower_fill = LOWER_FILL.to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" | "--upper-pattern" => {
                i += 1;
                if i < args.len() {
                    pattern = args[i].clone();
                }
            }
            "--lower-pattern" => {
                i += 1;
                if i < args.len() {
                    lower_pattern = Some(args[i].clone());
                }
            }
            "-W" | "--width" => {
                i += 1;
                if i < args.len() {
                    config.width = args[i].parse().unwrap_or(config.width);
                }
            }
            "-H" | "--height" => {
                i += 1;
                if i < args.len() {
                    config.height = args[i].parse().unwrap_or(config.height);
                }
            }
            "-A" | "--amplitude" => {
                i += 1;
                if i < args.len() {
                    config.amplitude = args[i].parse().unwrap_or(config.amplitude);
                }
            }
            "-F" | "--frequency" => {
                i += 1;
                if i < args.len() {
                    config.frequency = args[i].parse().unwrap_or(config.frequency);
                }
            }
            "--phase" => {
                i += 1;
                if i < args.len() {
                    config.phase = args[i].parse().unwrap_or(config.phase);
                }
            }
            "--mirror" => {
                config.mirror = true;
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    config.seed = args[i].parse().ok();
                }
            }
            "--mode" => {
                i += 1;
                if i < args.len() {
                    separation.mode = match InterlockMode::from_name(&args[i]) {
                        Some(mode) => mode,
                        None => {
                            eprintln!("Unknown mode '{}', using interlock", args[i]);
                            InterlockMode::Interlock
                        }
                    };
                }
            }
            "--intensity" => {
                i += 1;
                if i < args.len() {
                    separation.intensity = args[i].parse().unwrap_or(separation.intensity);
                }
            }
            "--gap" => {
                i += 1;
                if i < args.len() {
                    separation.gap = args[i].parse().unwrap_or(separation.gap);
                }
            }
            "--stroke" => {
                i += 1;
                if i < args.len() {
                    separation.stroke_color = Some(args[i].clone());
                }
            }
            "--stroke-width" => {
                i += 1;
                if i < args.len() {
                    separation.stroke_width = args[i].parse().ok();
                }
            }
            "--upper-fill" => {
                i += 1;
                if i < args.len() {
                    upper_fill = args[i].clone();
                }
            }
            "--lower-fill" => {
                i += 1;
                if i < args.len() {
                    lower_fill = args[i].clone();
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let dual = match &lower_pattern {
        Some(lower) => generate_cross(&pattern, &config, lower, &config, &separation),
        None => generate_dual(&pattern, &config, &separation),
    };

    let content = if format == OutputFormat::Json {
        let record = JsonSeparator {
            pattern: &pattern,
            lower_pattern: lower_pattern.as_deref(),
            mode: separation.mode.name(),
            intensity: separation.intensity,
            gap: separation.gap,
            seed: config.seed,
            upper: dual.upper.to_string(),
            lower: dual.lower.to_string(),
            base: dual.base.to_string(),
        };
        let mut json =
            serde_json::to_string_pretty(&record).expect("Failed to serialize JSON");
        json.push('\n');
        json
    } else {
        let upper_d = invert_to_top_region(&dual.upper.to_string(), config.width);
        let mut layers = vec![
            SvgLayer::filled(upper_d, &upper_fill),
            SvgLayer::filled(dual.lower.to_string(), &lower_fill),
        ];
        if let Some(color) = &separation.stroke_color {
            let stroke_width = separation.stroke_width.unwrap_or(2.0);
            layers.push(SvgLayer {
                d: extract_contour(&dual.base.to_string()),
                fill: "none".to_string(),
                opacity: 1.0,
                stroke: Some((color.clone(), stroke_width)),
                offset_y: 0.0,
            });
        }
        layers_to_svg(&layers, config.width, config.height)
    };

    write_output(output_path.as_deref(), &content);
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("crestline separator - Cut an interlocking section pair");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline separator [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -p, --pattern <name>     Base pattern family (default: smooth)");
    eprintln!("    --lower-pattern <name>   Blend a second family into the base");
    eprintln!("    --mode <mode>            interlock, overlap, apart, flush");
    eprintln!("    --intensity <n>          Edge offset strength 0..1 (default: 0.5)");
    eprintln!("    --gap <n>                Extra channel between edges, user units");
    eprintln!("    --stroke <color>         Stroke the base cut line");
    eprintln!("    --stroke-width <n>       Cut line width (default: 2)");
    eprintln!("    --upper-fill <color>     Upper section fill");
    eprintln!("    --lower-fill <color>     Lower section fill");
    eprintln!("    -W, -H, -A, -F, --phase, --mirror, --seed   As in generate");
    eprintln!("    -o, --output <file>      Output file (- for stdout, default: stdout)");
    eprintln!("    --json                   Emit upper/lower/base paths as JSON");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    # Meshing section boundary");
    eprintln!("    crestline separator -p organic --seed 12 --mode interlock -o cut.svg");
    eprintln!();
    eprintln!("    # Visible channel between sections");
    eprintln!("    crestline separator --mode apart --gap 10 --stroke '#e63946'");
    eprintln!();
    eprintln!("    # Blend two families");
    eprintln!("    crestline separator -p smooth --lower-pattern sharp --json");
}
