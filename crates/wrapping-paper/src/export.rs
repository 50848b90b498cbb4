//! One export run, end to end.

use log::info;

use crate::document::{SvgDocument, assemble};
use crate::error::ExportError;
use crate::layout::{PatternParameters, layout};
use crate::registry::{CollectionSource, collect};
use crate::tables::{TextSource, load_circles, load_stripes};

/// Validate, collect motifs, load the tables the run needs, lay out and
/// assemble.
///
/// Tables are only looked up when their feature is active, so a scene
/// without circle data can still export a square lattice.
pub fn export<C, T>(collections: &[C], params: &PatternParameters, texts: &T) -> Result<SvgDocument, ExportError>
where
    C: CollectionSource,
    T: TextSource + ?Sized,
{
    params.validate()?;

    let registry = collect(collections)?;

    let stripes = if params.use_stripe_background { load_stripes(texts)? } else { Vec::new() };
    let circles = if params.pattern.needs_circles() { load_circles(texts)? } else { Vec::new() };

    let placements = layout(params, &circles);
    info!(
        "{}: {} motif(s), {} placement(s), seed {}",
        params.pattern.name(),
        registry.len(),
        placements.len(),
        params.random_seed
    );

    assemble(&registry, &placements, params, &stripes)
}
