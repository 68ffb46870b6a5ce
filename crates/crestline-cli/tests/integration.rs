//! Integration tests for crestline CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the crestline binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from crestline-cli to crates
    path.pop(); // Go up from crates to the workspace root

    // Try release first, then debug
    let release = path.join("target/release/crestline");
    if release.exists() {
        return release;
    }
    path.join("target/debug/crestline")
}

#[test]
fn patterns_command_lists_all_patterns() {
    let output = Command::new(binary_path())
        .arg("patterns")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in [
        "smooth",
        "organic",
        "sharp",
        "mountain",
        "flowing",
        "ribbon",
        "layered-organic",
        "custom",
    ] {
        assert!(stdout.contains(name), "Should list '{}' pattern", name);
    }
}

#[test]
fn help_command_shows_usage() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{}{}", stdout, stderr);

    assert!(combined.contains("generate"), "Should mention generate command");
    assert!(combined.contains("separator"), "Should mention separator command");
    assert!(combined.contains("morph"), "Should mention morph command");
    assert!(combined.contains("patterns"), "Should mention patterns command");
}

#[test]
fn generate_produces_svg() {
    let output = Command::new(binary_path())
        .args(["generate", "-p", "smooth"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<path"), "Should have a path element");
    assert!(
        stdout.contains("preserveAspectRatio=\"none\""),
        "Divider SVGs should stretch to their container"
    );
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn generate_path_only_is_deterministic() {
    let run = || {
        let output = Command::new(binary_path())
            .args(["generate", "-p", "organic", "--seed", "5", "--path-only"])
            .output()
            .expect("Failed to execute command");
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    let first = run();
    let second = run();

    assert!(first.starts_with("M 0,"), "Path should start at the left edge");
    assert_eq!(first, second, "Same seed should reproduce the same path");
}

#[test]
fn generate_different_seeds_differ() {
    let run = |seed: &str| {
        let output = Command::new(binary_path())
            .args(["generate", "-p", "organic", "--seed", seed, "--path-only"])
            .output()
            .expect("Failed to execute command");
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    assert_ne!(run("5"), run("6"), "Different seeds should change the curve");
}

#[test]
fn generate_json_has_wave_fields() {
    let output = Command::new(binary_path())
        .args(["generate", "-p", "sharp", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"pattern\""), "Should have pattern key");
    assert!(stdout.contains("\"width\""), "Should have width key");
    assert!(stdout.contains("\"height\""), "Should have height key");
    assert!(stdout.contains("\"d\""), "Should have d key");
}

#[test]
fn generate_flip_changes_output() {
    let run = |extra: &[&str]| {
        let mut args = vec!["generate", "-p", "smooth", "--path-only"];
        args.extend_from_slice(extra);
        let output = Command::new(binary_path())
            .args(&args)
            .output()
            .expect("Failed to execute command");
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    let plain = run(&[]);
    let flipped = run(&["--flip"]);

    assert!(plain.starts_with('M'), "Plain output should be path data");
    assert!(flipped.starts_with('M'), "Flipped output should be path data");
    assert_ne!(plain, flipped, "Flip should move the wave to the other edge");
}

#[test]
fn generate_clip_emits_polygon() {
    let output = Command::new(binary_path())
        .args(["generate", "-p", "sharp", "--clip", "bottom"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("polygon("), "Should emit a CSS polygon");
    assert!(stdout.contains('%'), "Polygon vertices should be percentages");
}

#[test]
fn separator_json_has_both_edges() {
    let output = Command::new(binary_path())
        .args(["separator", "-p", "smooth", "--mode", "interlock", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"upper\""), "Should have upper edge");
    assert!(stdout.contains("\"lower\""), "Should have lower edge");
    assert!(stdout.contains("\"base\""), "Should have base curve");
    assert!(stdout.contains("\"interlock\""), "Should record the mode");
}

#[test]
fn separator_flush_edges_match_base() {
    let output = Command::new(binary_path())
        .args(["separator", "-p", "smooth", "--mode", "flush", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("Separator JSON should parse");

    assert_eq!(json["upper"], json["base"], "Flush upper should equal the base");
    assert_eq!(json["lower"], json["base"], "Flush lower should equal the base");
}

#[test]
fn morph_frames_close_the_loop() {
    let output = Command::new(binary_path())
        .args(["morph", "-p", "smooth", "--preset", "drift", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Morph JSON should parse");

    let frames = json["frames"].as_array().expect("frames should be an array");
    assert_eq!(frames.len(), 5, "Drift preset should emit 5 frames");
    assert_eq!(
        frames.first(),
        frames.last(),
        "Loop should end where it started"
    );
}

#[test]
fn morph_svg_embeds_animation() {
    let output = Command::new(binary_path())
        .args(["morph", "-p", "smooth", "--preset", "breathe"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<animate"), "Should embed a SMIL animate element");
    assert!(
        stdout.contains("repeatCount=\"indefinite\""),
        "Animation should loop forever"
    );
    assert!(stdout.contains("attributeName=\"d\""), "Should animate the path data");
}

#[test]
fn simplify_zero_epsilon_is_identity() {
    let d = "M 0,120 L 0,60 L 400,60 L 400,120 Z";

    let output = Command::new(binary_path())
        .args(["simplify", d, "-e", "0"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(stdout.trim(), d, "Zero epsilon should leave the path alone");
}

#[test]
fn simplify_collapses_collinear_points() {
    let d = "M 0,0 L 10,0 L 20,0 L 30,0 L 40,0";

    let output = Command::new(binary_path())
        .args(["simplify", d, "-e", "1"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let kept = stdout.trim().split(' ').count();
    let original = d.split(' ').count();

    assert!(
        kept < original,
        "Collinear run should shrink: {} -> {} tokens",
        original,
        kept
    );
    assert!(stdout.contains("40,0"), "Endpoint should survive");
}

#[test]
fn recipe_example_round_trips() {
    let yaml_path = std::env::temp_dir().join(format!("crestline_recipe_{}.yaml", std::process::id()));
    let svg_path = std::env::temp_dir().join(format!("crestline_recipe_{}.svg", std::process::id()));

    let example = Command::new(binary_path())
        .args(["recipe", "--example"])
        .output()
        .expect("Failed to execute command");
    let yaml = String::from_utf8_lossy(&example.stdout).into_owned();
    assert!(yaml.contains("layers:"), "Example should be a recipe");

    std::fs::write(&yaml_path, yaml).expect("Failed to write temp recipe");

    let render = Command::new(binary_path())
        .args([
            "recipe",
            yaml_path.to_str().unwrap(),
            "-o",
            svg_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert!(render.status.success(), "Recipe render should succeed");

    let svg = std::fs::read_to_string(&svg_path).expect("Rendered SVG should exist");
    assert!(svg.contains("<svg"), "Should be an SVG document");
    assert!(svg.contains("<path"), "Should contain wave paths");
    assert!(svg.contains("back_band"), "Should keep layer ids");

    let _ = std::fs::remove_file(&yaml_path);
    let _ = std::fs::remove_file(&svg_path);
}

#[test]
fn swatches_writes_reference_sheet() {
    let svg_path = std::env::temp_dir().join(format!("crestline_swatches_{}.svg", std::process::id()));

    let output = Command::new(binary_path())
        .args(["swatches", "-o", svg_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Swatches should succeed");

    let svg = std::fs::read_to_string(&svg_path).expect("Swatch sheet should exist");
    assert!(svg.contains("<svg"), "Should be an SVG document");
    assert!(svg.contains("swatch-smooth"), "Should label each swatch");
    assert!(svg.contains("swatch-ribbon"), "Should cover the seeded patterns");

    let _ = std::fs::remove_file(&svg_path);
}
