//! Generate looping animation frames.
//!
//! Output is either a JSON frame list for scripted animation or an SVG
//! with SMIL `<animate>` on the path's d-attribute. Every frame of one
//! sequence shares the same command structure, which is what makes the
//! d-attribute interpolation work in browsers.

use serde::Serialize;

use crestline::{
    InterlockMode, MorphPreset, MorphStyle, PatternConfig, SeparationConfig, invert_to_top_region,
    morph_dual_frames, morph_frames,
};

use crate::cli::common::{OutputFormat, write_output};

const DEFAULT_DURATION: f64 = 8.0;

#[derive(Serialize)]
struct JsonMorph<'a> {
    pattern: &'a str,
    preset: &'a str,
    width: f64,
    height: f64,
    frames: Vec<String>,
}

#[derive(Serialize)]
struct JsonDualFrame {
    upper: String,
    lower: String,
}

#[derive(Serialize)]
struct JsonDualMorph<'a> {
    pattern: &'a str,
    preset: &'a str,
    mode: &'a str,
    width: f64,
    height: f64,
    frames: Vec<JsonDualFrame>,
}

/// Execute the morph command.
pub fn cmd_morph(args: &[String]) {
    let mut pattern = "smooth".to_string();
    let mut config = PatternConfig::default();
    let mut preset = MorphPreset::Drift;
    let mut style_override: Option<MorphStyle> = None;
    let mut frames_override: Option<usize> = None;
    let mut dual = false;
    let mut separation = SeparationConfig::default();
    let mut duration = DEFAULT_DURATION;
    let mut output_path: Option<String> = None;
    let mut format = OutputFormat::Svg;
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
            "--preset" => {
                i += 1;
                if i < args.len() {
                    preset = match MorphPreset::from_name(&args[i]) {
                        Some(preset) => preset,
                        None => {
                            eprintln!("Unknown preset '{}', using drift", args[i]);
                            MorphPreset::Drift
                        }
                    };
                }
            }
            "--frames" => {
                i += 1;
                if i < args.len() {
                    frames_override = args[i].parse().ok();
                }
            }
            "--phase-range" => {
                i += 1;
                if i < args.len() {
                    if let Ok(value) = args[i].parse() {
                        let mut style = style_override.unwrap_or(preset.style());
                        style.phase_range = value;
                        style_override = Some(style);
                    }
                }
            }
            "--amp-variation" => {
                i += 1;
                if i < args.len() {
                    if let Ok(value) = args[i].parse() {
                        let mut style = style_override.unwrap_or(preset.style());
                        style.amplitude_variation = value;
                        style_override = Some(style);
                    }
                }
            }
            "--dual" => {
                dual = true;
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
            "--duration" => {
                i += 1;
                if i < args.len() {
                    duration = args[i].parse().unwrap_or(DEFAULT_DURATION);
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

    let mut style = style_override.unwrap_or(preset.style());
    if let Some(frames) = frames_override {
        style.frame_count = frames;
    }

    let content = if dual {
        let frames = morph_dual_frames(&pattern, &config, &separation, &style);
        if format == OutputFormat::Json {
            let record = JsonDualMorph {
                pattern: &pattern,
                preset: preset.name(),
                mode: separation.mode.name(),
                width: config.width,
                height: config.height,
                frames: frames
                    .iter()
                    .map(|frame| JsonDualFrame {
                        upper: frame.upper.to_string(),
                        lower: frame.lower.to_string(),
                    })
                    .collect(),
            };
            let mut json =
                serde_json::to_string_pretty(&record).expect("Failed to serialize JSON");
            json.push('\n');
            json
        } else {
            let upper_values: Vec<String> = frames
                .iter()
                .map(|frame| invert_to_top_region(&frame.upper.to_string(), config.width))
                .collect();
            let lower_values: Vec<String> =
                frames.iter().map(|frame| frame.lower.to_string()).collect();
            dual_animation_svg(&upper_values, &lower_values, &config, duration)
        }
    } else {
        let frames = morph_frames(&pattern, &config, &style);
        if format == OutputFormat::Json {
            let record = JsonMorph {
                pattern: &pattern,
                preset: preset.name(),
                width: config.width,
                height: config.height,
                frames: frames.iter().map(|frame| frame.to_string()).collect(),
            };
            let mut json =
                serde_json::to_string_pretty(&record).expect("Failed to serialize JSON");
            json.push('\n');
            json
        } else {
            let values: Vec<String> = frames.iter().map(|frame| frame.to_string()).collect();
            animation_svg(&values, &config, duration, &fill)
        }
    };

    write_output(output_path.as_deref(), &content);
}

/// Build an SVG whose single path cycles through the frame d-values.
fn animation_svg(values: &[String], config: &PatternConfig, duration: f64, fill: &str) -> String {
    let first = values.first().map(String::as_str).unwrap_or("");
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none">
"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(&format!("  <path d=\"{}\" fill=\"{}\">\n", first, fill));
    svg.push_str(&format!(
        "    <animate attributeName=\"d\" dur=\"{}s\" repeatCount=\"indefinite\" values=\"{}\"/>\n",
        duration,
        values.join(";")
    ));
    svg.push_str("  </path>\n</svg>\n");
    svg
}

/// Build an SVG animating both halves of a separator cut.
fn dual_animation_svg(
    upper_values: &[String],
    lower_values: &[String],
    config: &PatternConfig,
    duration: f64,
) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none">
"#,
        config.width, config.height, config.width, config.height
    ));
    for (values, fill) in [(upper_values, "#264653"), (lower_values, "#2a9d8f")] {
        let first = values.first().map(String::as_str).unwrap_or("");
        svg.push_str(&format!("  <path d=\"{}\" fill=\"{}\">\n", first, fill));
        svg.push_str(&format!(
            "    <animate attributeName=\"d\" dur=\"{}s\" repeatCount=\"indefinite\" values=\"{}\"/>\n",
            duration,
            values.join(";")
        ));
        svg.push_str("  </path>\n");
    }
    svg.push_str("</svg>\n");
    svg
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("crestline morph - Generate a looping wave animation");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline morph [--preset <name>] [OPTIONS]");
    eprintln!();
    eprintln!("PRESETS:");
    for preset in MorphPreset::all() {
        let style = preset.style();
        eprintln!(
            "    {:<12} {} frames, phase range {}, amplitude variation {}",
            preset.name(),
            style.frame_count,
            style.phase_range,
            style.amplitude_variation
        );
    }
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --preset <name>         Modulation recipe (default: drift)");
    eprintln!("    --frames <n>            Override the preset's frame count");
    eprintln!("    --phase-range <n>       Override the preset's phase swing");
    eprintln!("    --amp-variation <n>     Override the preset's amplitude swing");
    eprintln!("    --dual                  Animate a separator pair instead");
    eprintln!("    --mode <mode>           Cut mode for --dual (default: interlock)");
    eprintln!("    --duration <s>          Loop duration in seconds (default: 8)");
    eprintln!("    -p, -W, -H, -A, -F, --phase, --mirror, --seed   As in generate");
    eprintln!("    -o, --output <file>     Output file (- for stdout, default: stdout)");
    eprintln!("    --json                  Emit the frame list as JSON");
    eprintln!("    --fill <color>          SVG fill color (default: #0a2540)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    # Gentle hero background");
    eprintln!("    crestline morph -p organic --seed 4 --preset breathe -o hero.svg");
    eprintln!();
    eprintln!("    # Frame list for a JS animation loop");
    eprintln!("    crestline morph --preset undulate --json");
}
