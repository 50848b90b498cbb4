//! PNG preview of an exported document via resvg.

use anyhow::{Context, Result, bail};
use log::info;
use resvg::usvg;
use tiny_skia::Pixmap;

use wrapping_paper::SvgDocument;

/// Rasterize `doc` at `scale` pixels per SVG unit and save it as PNG.
pub fn write_png(doc: &SvgDocument, png_path: &str, scale: f64) -> Result<()> {
    if !(scale > 0.0 && scale.is_finite()) {
        bail!("PNG scale must be positive, got {}", scale);
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(doc.as_str(), &options).context("exported SVG could not be parsed for preview")?;

    let width = (doc.width() as f64 * scale).ceil() as u32;
    let height = (doc.height() as f64 * scale).ceil() as u32;
    let mut pixmap =
        Pixmap::new(width, height).with_context(|| format!("could not allocate a {}x{} pixmap", width, height))?;

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap.save_png(png_path).with_context(|| format!("failed to write {}", png_path))?;
    info!("wrote {} ({}x{})", png_path, width, height);
    Ok(())
}
