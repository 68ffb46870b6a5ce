//! Reduce path point counts for plotting and lightweight embeds.

use crestline::simplify_path;

use crate::cli::common::{read_stdin, write_output};

/// Execute the simplify command.
pub fn cmd_simplify(args: &[String]) {
    let mut input: Option<String> = None;
    let mut file: Option<String> = None;
    let mut output: Option<String> = None;
    let mut epsilon = 1.0;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-e" | "--epsilon" => {
                i += 1;
                if i < args.len() {
                    epsilon = args[i].parse().unwrap_or(1.0);
                }
            }
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    file = Some(args[i].clone());
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
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

    let d = if let Some(path) = file {
        match std::fs::read_to_string(&path) {
            Ok(c) => c.trim().to_string(),
            Err(e) => {
                eprintln!("Error: Failed to read {}: {}", path, e);
                return;
            }
        }
    } else {
        match input.as_deref() {
            Some("-") | None => read_stdin().trim().to_string(),
            Some(d) => d.to_string(),
        }
    };

    if d.is_empty() {
        eprintln!("Error: No path data to simplify");
        print_usage();
        return;
    }

    let before = d.split(' ').count();
    let simplified = simplify_path(&d, epsilon);
    let after = simplified.split(' ').count();
    eprintln!("Simplified: {} tokens -> {} tokens (epsilon {})", before, after, epsilon);

    write_output(output.as_deref(), &simplified);
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("crestline simplify - Reduce path detail with Ramer-Douglas-Peucker");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    crestline simplify <path-data> [OPTIONS]");
    eprintln!("    crestline simplify -f wave.txt [OPTIONS]");
    eprintln!("    ... | crestline simplify - [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -e, --epsilon <n>      Tolerance in user units (default: 1.0)");
    eprintln!("    -f, --file <file>      Read path data from a file");
    eprintln!("    -o, --output <file>    Write result to a file instead of stdout");
    eprintln!("    -h, --help             Show this help");
    eprintln!();
    eprintln!("NOTE: Curves are flattened to line segments; use a small epsilon");
    eprintln!("      to keep the contour close to the original.");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    crestline generate -p ribbon --path-only | crestline simplify - -e 0.5");
}
