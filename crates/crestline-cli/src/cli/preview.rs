//! Rasterize an SVG file to PNG for quick visual checks.

use std::path::Path;

use crate::cli::common::read_stdin;

/// Execute the preview command.
pub fn cmd_preview(args: &[String]) {
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut scale = 2.0;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--scale" => {
                i += 1;
                if i < args.len() {
                    scale = args[i].parse().unwrap_or(2.0);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            arg if !arg.starts_with('-') || arg == "-" => {
                input = Some(arg.to_string());
            }
            _ => {}
        }
        i += 1;
    }

    let input = match input {
        Some(p) => p,
        None => {
            eprintln!("Error: No input SVG specified");
            print_usage();
            return;
        }
    };

    let svg_content = if input == "-" {
        read_stdin()
    } else {
        match std::fs::read_to_string(&input) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: Failed to read {}: {}", input, e);
                return;
            }
        }
    };

    let png_path = output.unwrap_or_else(|| {
        if input == "-" {
            "preview.png".to_string()
        } else {
            Path::new(&input).with_extension("png").to_string_lossy().into_owned()
        }
    });

    render_png(&svg_content, &png_path, scale);
}

/// Render SVG content to a PNG file using resvg.
///
/// Pixel dimensions come from the SVG's own width/height, multiplied
/// by the scale factor.
fn render_png(svg_content: &str, png_path: &str, scale: f64) {
    use resvg::usvg;
    use tiny_skia::Pixmap;

    eprint!("Rendering PNG at {}x scale...", scale);

    let options = usvg::Options::default();
    let tree = match usvg::Tree::from_str(svg_content, &options) {
        Ok(t) => t,
        Err(e) => {
            eprintln!(" failed: {}", e);
            return;
        }
    };

    let size = tree.size();
    let pixmap_width = (size.width() as f64 * scale) as u32;
    let pixmap_height = (size.height() as f64 * scale) as u32;

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
    eprintln!("crestline preview - Rasterize an SVG to PNG");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline preview <input.svg> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output PNG file (default: input with .png extension)");
    eprintln!("    --scale <n>            Scale factor (default: 2.0)");
    eprintln!("    -h, --help             Show this help");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    crestline preview wave.svg");
    eprintln!("    crestline generate -p organic | crestline preview - -o wave.png");
}
