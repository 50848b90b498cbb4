//! Export command implementation.

use anyhow::{Context, Result, bail};
use log::info;

use super::preview::write_png;
use super::scene::Scene;
use super::{Overrides, flag_value};

const DEFAULT_PNG_SCALE: f64 = 1.0;

/// Execute the export command.
pub fn cmd_export(args: &[String]) -> Result<()> {
    let mut scene_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut png_path: Option<&str> = None;
    let mut png_scale = DEFAULT_PNG_SCALE;
    let mut overrides = Overrides::default();

    let mut i = 0;
    while i < args.len() {
        if overrides.parse_flag(args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(flag_value(args, &mut i)?);
            }
            "--png" => {
                png_path = Some(flag_value(args, &mut i)?);
            }
            "--png-scale" => {
                let value = flag_value(args, &mut i)?;
                png_scale = value
                    .parse()
                    .with_context(|| format!("--png-scale expects a number, got '{}'", value))?;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            arg if !arg.starts_with('-') && scene_path.is_none() => {
                scene_path = Some(arg);
            }
            other => bail!("unexpected argument '{}'", other),
        }
        i += 1;
    }

    let Some(scene_path) = scene_path else {
        print_usage();
        bail!("no scene file specified");
    };

    let mut scene = Scene::load(scene_path)?;
    overrides.apply(&mut scene.params);
    info!("exporting '{}' ({})", scene.title(), scene.params.pattern.name());

    let doc = wrapping_paper::export(&scene.collections, &scene.params, &scene.texts)
        .with_context(|| format!("failed to export {}", scene_path))?;

    match output_path {
        Some(path) if path != "-" => doc.save(path).with_context(|| format!("failed to write {}", path))?,
        _ => print!("{}", doc),
    }

    if let Some(png_path) = png_path {
        write_png(&doc, png_path, png_scale)?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("wrapping-paper export - Render a scene file to SVG");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    wrapping-paper export <scene.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (- for stdout, default: stdout)");
    eprintln!("    -p, --pattern <name>   Override the scene's pattern");
    eprintln!("    --seed <n>             Override the scene's random seed");
    eprintln!("    --png <file>           Also rasterize a PNG preview");
    eprintln!("    --png-scale <f>        PNG pixels per SVG unit (default: {})", DEFAULT_PNG_SCALE);
    eprintln!("    -h, --help             Show this help");
}
