//! Layout command: placements as JSON, without building the document.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use wrapping_paper::tables::load_circles;
use wrapping_paper::{MotifSelector, Placement, collect, layout};

use super::scene::Scene;
use super::Overrides;

/// How a placement picks its motif, in JSON output format.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsonSelector {
    Random { draw: f64 },
    Bucket { index: usize },
    Cycle { index: usize },
}

/// A placement in JSON output format. Coordinates are authoring space (Y up).
#[derive(Serialize)]
struct JsonPlacement {
    x: f64,
    y: f64,
    selector: JsonSelector,
    /// Name of the motif this placement resolves to, if any are exportable.
    motif: Option<String>,
    rotation: f64,
    scale: f64,
    translate: [f64; 2],
}

#[derive(Serialize)]
struct JsonLayout {
    pattern: &'static str,
    seed: u32,
    width: u32,
    height: u32,
    motifs: Vec<String>,
    count: usize,
    placements: Vec<JsonPlacement>,
}

fn to_json(placement: &Placement, motifs: &[String]) -> JsonPlacement {
    let selector = match placement.motif {
        MotifSelector::Random(draw) => JsonSelector::Random { draw },
        MotifSelector::Bucket(index) => JsonSelector::Bucket { index },
        MotifSelector::Cycle(index) => JsonSelector::Cycle { index },
    };
    JsonPlacement {
        x: placement.position.x,
        y: placement.position.y,
        selector,
        motif: placement.motif.resolve(motifs.len()).map(|i| motifs[i].clone()),
        rotation: placement.rotation,
        scale: placement.scale,
        translate: [placement.translate.x, placement.translate.y],
    }
}

/// Execute the layout command.
pub fn cmd_layout(args: &[String]) -> Result<()> {
    let mut scene_path: Option<&str> = None;
    let mut overrides = Overrides::default();

    let mut i = 0;
    while i < args.len() {
        if overrides.parse_flag(args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
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
    let params = &scene.params;
    params.validate()?;

    let motifs: Vec<String> = collect(&scene.collections)?
        .iter()
        .map(|m| m.name.to_string())
        .collect();
    let circles = if params.pattern.needs_circles() { load_circles(&scene.texts)? } else { Vec::new() };

    let placements = layout(params, &circles);
    let output = JsonLayout {
        pattern: params.pattern.name(),
        seed: params.random_seed,
        width: params.width,
        height: params.height,
        count: placements.len(),
        placements: placements.iter().map(|p| to_json(p, &motifs)).collect(),
        motifs,
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize layout")?;
    println!("{}", json);
    Ok(())
}

fn print_usage() {
    eprintln!("wrapping-paper layout - Print a scene's placements as JSON");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    wrapping-paper layout <scene.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -p, --pattern <name>   Override the scene's pattern");
    eprintln!("    --seed <n>             Override the scene's random seed");
    eprintln!("    -h, --help             Show this help");
}
