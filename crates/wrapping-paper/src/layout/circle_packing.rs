//! Circle packing: one motif per circle from the solver's table.

use log::warn;

use crate::geometry::Point;
use crate::rng::Rng;
use crate::tables::Circle;

use super::{CIRCLE_SCALE_FACTOR, MotifSelector, PatternParameters, Placement, rotation_jitter};

/// Scale each motif to its circle and cycle through the registry.
///
/// The instance scale is `radius · scale · 1e-4`. SVG scales about the
/// origin, so a compensating translate `(-x·(1 − 1/s), y·(1 − 1/s))` puts
/// the motif's nominal origin back on the circle centre. Circles whose
/// scale comes out non-positive are skipped but still consume their index.
pub fn circle_packing(params: &PatternParameters, circles: &[Circle], rng: &mut Rng) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(circles.len());

    for (i, circle) in circles.iter().enumerate() {
        let s = circle.radius * params.scale * CIRCLE_SCALE_FACTOR;
        if !(s > 0.0 && s.is_finite()) {
            warn!("circle {} at ({}, {}) has scale {}, skipped", i, circle.x, circle.y, s);
            continue;
        }

        let k = 1.0 - 1.0 / s;
        let translate = Point::new(-circle.x * k, circle.y * k);
        let rotation = rotation_jitter(params, rng);
        let motif = MotifSelector::Cycle(i + params.collection_index_offset);

        placements.push(
            Placement::new(Point::new(circle.x, circle.y), motif)
                .scaled(s, translate)
                .rotated(rotation),
        );
    }
    placements
}
