//! crestline - wave boundary generation for section dividers
//!
//! Usage:
//!   crestline generate -p <pattern>     Generate one wave region
//!   crestline separator [options]       Cut an interlocking section pair
//!   crestline morph --preset <name>     Generate a looping frame sequence
//!   crestline patterns                  List available patterns

use std::env;

use crestline::WavePattern;

mod cli;

use cli::{
    cmd_generate, cmd_morph, cmd_preview, cmd_recipe, cmd_separator, cmd_simplify, cmd_swatches,
};

fn main() {
    // Library warnings (clamps, fallbacks) go to stderr so stdout stays
    // clean for piped SVG and JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "generate" => {
                cmd_generate(&args[2..]);
                return;
            }
            "separator" => {
                cmd_separator(&args[2..]);
                return;
            }
            "morph" => {
                cmd_morph(&args[2..]);
                return;
            }
            "swatches" => {
                cmd_swatches(&args[2..]);
                return;
            }
            "recipe" => {
                cmd_recipe(&args[2..]);
                return;
            }
            "preview" => {
                cmd_preview(&args[2..]);
                return;
            }
            "simplify" => {
                cmd_simplify(&args[2..]);
                return;
            }
            "patterns" => {
                cmd_patterns();
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!();
            }
        }
    }

    print_usage(&args[0]);
    std::process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("crestline - decorative wave boundaries between page sections");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate -p <pattern> [options]", prog);
    eprintln!("  {} separator [--mode <mode>] [options]", prog);
    eprintln!("  {} morph [--preset <name>] [options]", prog);
    eprintln!("  {} recipe <file.yaml> [options]", prog);
    eprintln!("  {} swatches [options]", prog);
    eprintln!("  {} preview <file.svg> [options]", prog);
    eprintln!("  {} simplify <path-or-file> -e <epsilon>", prog);
    eprintln!("  {} patterns", prog);
    eprintln!();
    eprintln!("Common wave options (generate, separator, morph):");
    eprintln!("  -p, --pattern <name>    Pattern family (default: smooth)");
    eprintln!("  -W, --width <n>         Canvas width (default: 1440)");
    eprintln!("  -H, --height <n>        Canvas height (default: 120)");
    eprintln!("  -A, --amplitude <n>     Wave depth 0..1 (default: 0.5)");
    eprintln!("  -F, --frequency <n>     Peak count (default: 3)");
    eprintln!("  --phase <n>             Horizontal shift, fraction of width");
    eprintln!("  --mirror                Reflect across the vertical centerline");
    eprintln!("  --seed <n>              Personality for seeded patterns");
    eprintln!();
    eprintln!("Run '{} <command> --help' for command-specific options.", prog);
}

fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in WavePattern::all() {
        let meta = pattern.metadata();
        println!("  {:<16} {}", pattern.name(), meta.description);
    }
    println!();
    println!("Seeded patterns (vary with --seed):");
    for pattern in WavePattern::all() {
        if pattern.metadata().uses_seed {
            println!("  {}", pattern.name());
        }
    }
}
