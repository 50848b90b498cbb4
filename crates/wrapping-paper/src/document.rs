//! SVG document assembly.
//!
//! Each motif is defined once as a `<g>` inside `<defs>`, and every
//! placement becomes a `<use>` pointing at it. Authoring Y is up and SVG Y
//! is down, so placement Y values are negated on the way out.
//!
//! The markup is built as a string; the output vocabulary is small
//! (`rect`, `g`, `path`, `use`) and fixed.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use quick_xml::escape::escape;

use crate::error::ExportError;
use crate::layout::{PatternParameters, Placement};
use crate::path::PathBuilder;
use crate::registry::MotifCollection;
use crate::tables::Stripe;

/// Nominal size given to every `<use>` instance.
pub const USE_SIZE: u32 = 100;

/// A finished SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    content: String,
    width: u32,
    height: u32,
}

impl SvgDocument {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write the document to `path` in one go.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        fs::write(path.as_ref(), &self.content)?;
        info!("wrote {} ({} bytes)", path.as_ref().display(), self.content.len());
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Negate a Y value for SVG space, without producing `-0`.
#[inline]
fn flip(y: f64) -> f64 {
    -y + 0.0
}

/// Build the document from resolved motifs and placements.
///
/// Fails with [`ExportError::EmptyRegistry`] only when there is something
/// to place and nothing to place it with.
pub fn assemble(
    registry: &[MotifCollection<'_>],
    placements: &[Placement],
    params: &PatternParameters,
    stripes: &[Stripe],
) -> Result<SvgDocument, ExportError> {
    if registry.is_empty() && !placements.is_empty() {
        return Err(ExportError::EmptyRegistry);
    }

    let (w, h) = (params.width, params.height);
    let (half_w, half_h) = params.half_extent();

    let mut svg = format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1"
     width="{}" height="{}" viewBox="{} {} {} {}">
"##,
        w, h, -half_w, -half_h, w, h
    );

    if params.use_background {
        let c = params.background_color;
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"100%\" height=\"100%\" fill=\"{}\" opacity=\"{}\"/>\n",
            -half_w,
            -half_h,
            c.to_display(),
            c.opacity()
        ));
    }
    if params.use_stripe_background {
        for stripe in stripes {
            svg.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"100%\" height=\"100%\" fill=\"{}\" opacity=\"1\"/>\n",
                stripe.x_offset, -half_h, stripe.color
            ));
        }
    }

    svg.push_str("  <defs>\n");
    for motif in registry {
        write_motif(&mut svg, motif, params.scale);
    }
    svg.push_str("  </defs>\n");

    for placement in placements {
        let Some(index) = placement.motif.resolve(registry.len()) else {
            return Err(ExportError::EmptyRegistry);
        };
        write_use(&mut svg, registry[index].name, placement);
    }

    svg.push_str("</svg>\n");
    debug!("assembled {} motif(s), {} instance(s)", registry.len(), placements.len());

    Ok(SvgDocument { content: svg, width: w, height: h })
}

/// One `<g>` definition with a path per curve, members back to front.
fn write_motif(svg: &mut String, motif: &MotifCollection<'_>, scale: f64) {
    svg.push_str(&format!("    <g id=\"{}\">\n", escape(motif.name)));

    for member in &motif.members {
        let builder = PathBuilder::new(member.world, scale);
        for curve in member.curves {
            match builder.build(curve) {
                Ok(path) => svg.push_str(&format!(
                    "      <path d=\"{}\" fill=\"{}\" stroke=\"{}\" opacity=\"{}\"/>\n",
                    path, member.fill, member.fill, member.opacity
                )),
                Err(reason) => info!(
                    "skipping curve: {}",
                    ExportError::UnsupportedGeometry { object: member.object.to_string(), reason }
                ),
            }
        }
    }

    svg.push_str("    </g>\n");
}

fn write_use(svg: &mut String, name: &str, placement: &Placement) {
    let x = placement.position.x;
    let y = flip(placement.position.y);

    let mut transform = Vec::new();
    if placement.is_scaled() {
        let s = placement.scale;
        transform.push(format!("scale({},{})", s, s));
        transform.push(format!("translate({},{})", placement.translate.x + 0.0, placement.translate.y + 0.0));
    }
    if placement.rotation != 0.0 {
        transform.push(format!("rotate({},{},{})", placement.rotation, x, y));
    }
    let transform = if transform.is_empty() {
        String::new()
    } else {
        format!(" transform=\"{}\"", transform.join(" "))
    };

    svg.push_str(&format!(
        "  <use xlink:href=\"#{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>\n",
        escape(name),
        x,
        y,
        USE_SIZE,
        USE_SIZE,
        transform
    ));
}
