//! Generate a single wave region.
//!
//! The workhorse command: one pattern, one config, one output. The output
//! can be a standalone SVG, the raw d-attribute string, a JSON record, or
//! a CSS clip-path polygon.

use serde::Serialize;

use crestline::{
    PatternConfig, RegionEdge, clip_polygon, extract_contour, flip_vertical, generate_pattern,
    simplify_path,
};

use crate::cli::common::{OutputFormat, wave_to_svg, write_output};

#[derive(Serialize)]
struct JsonWave<'a> {
    pattern: &'a str,
    width: f64,
    height: f64,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    mirror: bool,
    seed: Option<u64>,
    d: &'a str,
}

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    let mut pattern = "smooth".to_string();
    let mut config = PatternConfig::default();
    let mut output_path: Option<String> = None;
    let mut format = OutputFormat::Svg;
    let mut path_only = false;
    let mut contour = false;
    let mut flip = false;
    let mut clip_edge: Option<RegionEdge> = None;
    let mut simplify_epsilon = 0.0_f64;
    let mut fill = "#0a2540".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" => {
                i += 1;
                if i < args.len() {
                    pattern = args[i].clone();
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
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "--path-only" => {
                path_only = true;
            }
            "--contour" => {
                contour = true;
            }
            "--flip" => {
                flip = true;
            }
            "--clip" => {
                i += 1;
                if i < args.len() {
                    clip_edge = Some(match RegionEdge::from_name(&args[i]) {
                        Some(edge) => edge,
                        None => {
                            eprintln!("Unknown edge '{}', using bottom", args[i]);
                            RegionEdge::Bottom
                        }
                    });
                }
            }
            "--simplify" => {
                i += 1;
                if i < args.len() {
                    simplify_epsilon = args[i].parse().unwrap_or(0.0);
                }
            }
            "--fill" => {
                i += 1;
                if i < args.len() {
                    fill = args[i].clone();
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let mut d = generate_pattern(&pattern, &config).to_string();
    if flip {
        d = flip_vertical(&d, config.height);
    }
    if contour {
        d = extract_contour(&d);
    }
    if simplify_epsilon > 0.0 {
        d = simplify_path(&d, simplify_epsilon);
    }

    let content = if let Some(edge) = clip_edge {
        let mut clip = clip_polygon(&d, config.width, config.height, edge);
        clip.push('\n');
        clip
    } else if path_only {
        let mut line = d.clone();
        line.push('\n');
        line
    } else if format == OutputFormat::Json {
        let record = JsonWave {
            pattern: &pattern,
            width: config.width,
            height: config.height,
            amplitude: config.amplitude,
            frequency: config.frequency,
            phase: config.phase,
            mirror: config.mirror,
            seed: config.seed,
            d: &d,
        };
        let mut json =
            serde_json::to_string_pretty(&record).expect("Failed to serialize JSON");
        json.push('\n');
        json
    } else {
        wave_to_svg(&d, config.width, config.height, &fill)
    };

    write_output(output_path.as_deref(), &content);
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("crestline generate - Generate one wave region");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline generate -p <pattern> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -p, --pattern <name>    Pattern family (default: smooth)");
    eprintln!("    -W, --width <n>         Canvas width (default: 1440)");
    eprintln!("    -H, --height <n>        Canvas height (default: 120)");
    eprintln!("    -A, --amplitude <n>     Wave depth 0..1 (default: 0.5)");
    eprintln!("    -F, --frequency <n>     Peak count (default: 3)");
    eprintln!("    --phase <n>             Horizontal shift, fraction of width");
    eprintln!("    --mirror                Reflect across the vertical centerline");
    eprintln!("    --seed <n>              Personality for seeded patterns");
    eprintln!("    -o, --output <file>     Output file (- for stdout, default: stdout)");
    eprintln!("    --json                  Emit a JSON record instead of SVG");
    eprintln!("    --path-only             Emit just the d-attribute string");
    eprintln!("    --contour               Strip the closing frame, keep the bare curve");
    eprintln!("    --flip                  Flip the region upside down first");
    eprintln!("    --clip <top|bottom>     Emit a CSS clip-path polygon instead");
    eprintln!("    --simplify <epsilon>    Reduce to a polyline before output");
    eprintln!("    --fill <color>          SVG fill color (default: #0a2540)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    # Hero divider, reproducible");
    eprintln!("    crestline generate -p organic --seed 7 -o hero.svg");
    eprintln!();
    eprintln!("    # Raw path for templating");
    eprintln!("    crestline generate -p sharp -F 5 --path-only");
    eprintln!();
    eprintln!("    # CSS clip for an HTML section");
    eprintln!("    crestline generate -p flowing --clip bottom");
}
