//! CLI command implementations.
//!
//! - `export` - Render a scene file to SVG (and optionally PNG)
//! - `layout` - Print a scene's placements as JSON
//! - `patterns` - List available patterns
//! - `example` - Print an example scene file

pub mod export;
pub mod layout;
pub mod preview;
pub mod scene;

pub use export::cmd_export;
pub use layout::cmd_layout;

use anyhow::{Context, Result, anyhow, bail};

use wrapping_paper::{PatternKind, PatternParameters};

/// Flags shared by `export` and `layout` that override the scene file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub pattern: Option<PatternKind>,
    pub seed: Option<u32>,
}

impl Overrides {
    pub fn apply(&self, params: &mut PatternParameters) {
        if let Some(pattern) = self.pattern {
            params.pattern = pattern;
        }
        if let Some(seed) = self.seed {
            params.random_seed = seed;
        }
    }

    /// Try to consume `args[*i]` (and its value). Returns `false` for
    /// flags this struct does not handle.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> Result<bool> {
        match args[*i].as_str() {
            "-p" | "--pattern" => {
                let name = flag_value(args, i)?;
                let pattern = PatternKind::from_name(name)
                    .ok_or_else(|| anyhow!("unknown pattern '{}' (see `wrapping-paper patterns`)", name))?;
                self.pattern = Some(pattern);
            }
            "--seed" => {
                let value = flag_value(args, i)?;
                let seed = value.parse().with_context(|| format!("--seed expects an integer, got '{}'", value))?;
                self.seed = Some(seed);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Advance past a flag and return its value.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} expects a value", flag),
    }
}

pub fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in PatternKind::all() {
        println!("  {:<16} {}", pattern.name(), pattern.description());
    }
}

pub fn print_example() {
    println!(r##"# Example wrapping-paper scene
name: "Dots and diamonds"

parameters:
  width: 600
  height: 400
  scale: 100
  pattern: hexagonal     # square, hexagonal, yagasuri, circle-packing
  distance_x: 60
  distance_y: 60
  use_location_noise: true
  location_noise: 4
  use_rotation_noise: true
  rotation_noise: 15     # degrees
  seed: 3
  use_background: true
  background: [0.9, 0.85, 0.7, 1.0]

collections:
  - name: Dot
    objects:
      - name: dot
        material: [0.8, 0.1, 0.1, 1.0]
        curves:
          - circle: 0.12

  - name: Diamond
    objects:
      - name: diamond
        material: [0.05, 0.2, 0.6, 0.9]
        transform:
          rotate: 45
        curves:
          - points:
              - co: [-0.1, -0.1]
              - co: [0.1, -0.1]
              - co: [0.1, 0.1]
              - co: [-0.1, 0.1]

# Used with use_stripe_background: x_offset,r,g,b
stripes: |
  -300,240,220,180
  0,220,200,160

# Used with pattern: circle-packing: x,y,radius
circles: |
  0,0,80
  -150,60,40
  150,-60,40
"##);
}
