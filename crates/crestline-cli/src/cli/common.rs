//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};

/// Output format for generated waves.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// One filled path in an output document.
pub struct SvgLayer {
    pub d: String,
    pub fill: String,
    pub opacity: f64,
    pub stroke: Option<(String, f64)>,
    pub offset_y: f64,
}

impl SvgLayer {
    pub fn filled(d: String, fill: &str) -> SvgLayer {
        SvgLayer {
            d,
            fill: fill.to_string(),
            opacity: 1.0,
            stroke: None,
            offset_y: 0.0,
        }
    }
}

/// Wrap one filled wave path in a standalone SVG document.
pub fn wave_to_svg(d: &str, width: f64, height: f64, fill: &str) -> String {
    layers_to_svg(
        &[SvgLayer::filled(d.to_string(), fill)],
        width,
        height,
    )
}

/// Wrap several filled paths in a standalone SVG document.
///
/// `preserveAspectRatio="none"` lets the divider stretch to whatever box
/// the page gives it, which is how these waves get used in practice.
pub fn layers_to_svg(layers: &[SvgLayer], width: f64, height: f64) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="none">
"#,
        width, height, width, height
    ));

    for layer in layers {
        if layer.d.is_empty() {
            continue;
        }

        let mut attrs = format!("d=\"{}\" fill=\"{}\"", layer.d, layer.fill);
        if layer.opacity < 1.0 {
            attrs.push_str(&format!(" fill-opacity=\"{}\"", layer.opacity));
        }
        if let Some((color, stroke_width)) = &layer.stroke {
            attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                color, stroke_width
            ));
        }

        if layer.offset_y != 0.0 {
            svg.push_str(&format!(
                "  <g transform=\"translate(0,{})\"><path {}/></g>\n",
                layer.offset_y, attrs
            ));
        } else {
            svg.push_str(&format!("  <path {}/>\n", attrs));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write to a file, or to stdout when the path is `-` or unset.
pub fn write_output(path: Option<&str>, content: &str) {
    match path {
        Some(path) if path != "-" => {
            fs::write(path, content).expect("Failed to write output");
            eprintln!("Wrote: {}", path);
        }
        _ => {
            print!("{}", content);
        }
    }
}

/// Read all of stdin into a string.
pub fn read_stdin() -> String {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .expect("Failed to read stdin");
    buffer
}
