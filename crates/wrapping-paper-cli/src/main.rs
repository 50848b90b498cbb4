//! wrapping-paper - tile curve motifs into SVG wrapping-paper patterns
//!
//! Usage:
//!   wrapping-paper export <scene.yaml> [-o out.svg]  Render a scene to SVG
//!   wrapping-paper layout <scene.yaml>               Print placements as JSON
//!   wrapping-paper patterns                          List available patterns
//!   wrapping-paper example                           Print an example scene

mod cli;

use std::env;
use std::process;

use cli::{cmd_export, cmd_layout, cmd_patterns, print_example};

fn main() {
    // Info by default; RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("wrapping-paper");

    let Some(command) = args.get(1) else {
        print_usage(prog);
        process::exit(1);
    };

    let result = match command.as_str() {
        "export" => cmd_export(&args[2..]),
        "layout" => cmd_layout(&args[2..]),
        "patterns" => {
            cmd_patterns();
            Ok(())
        }
        "example" => {
            print_example();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_usage(prog);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("wrapping-paper - tile curve motifs into SVG patterns");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} export <scene.yaml> [options]", prog);
    eprintln!("  {} layout <scene.yaml> [-p <pattern>] [--seed <n>]", prog);
    eprintln!("  {} patterns", prog);
    eprintln!("  {} example", prog);
    eprintln!();
    eprintln!("Export options:");
    eprintln!("  -o, --output <file>    Output SVG file (- for stdout, default: stdout)");
    eprintln!("  -p, --pattern <name>   Override the scene's pattern");
    eprintln!("  --seed <n>             Override the scene's random seed");
    eprintln!("  --png <file>           Also write a PNG preview");
    eprintln!("  --png-scale <f>        PNG pixels per SVG unit (default: 1)");
    eprintln!();
    eprintln!("Logging:");
    eprintln!("  RUST_LOG=debug {} export scene.yaml -o out.svg", prog);
}
