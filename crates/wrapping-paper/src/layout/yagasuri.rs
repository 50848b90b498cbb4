//! Yagasuri: rows of arrow fletchings, two motifs interleaved.
//!
//! Deterministic. Noise flags and the seed are not consulted.

use crate::geometry::Point;

use super::{MotifSelector, PatternParameters, Placement, repeat_count};

/// Every row `y` in `-cy-1..=cy` holds two interleaved runs:
///
/// - bucket 0 at `(x·dx, y·dy)`, turned 180° when `yagasuri_turn` is set
/// - bucket 1 at `((x+½)·dx, y·dy − offset_y)`, with one extra column on the left
pub fn yagasuri(params: &PatternParameters) -> Vec<Placement> {
    let (half_w, half_h) = params.half_extent();
    let (dx, dy) = (params.distance_x, params.distance_y);

    let (Some(count_x), Some(count_y)) = (repeat_count(half_w, dx, "x"), repeat_count(half_h, dy, "y")) else {
        return Vec::new();
    };
    let turn = if params.yagasuri_turn { 180.0 } else { 0.0 };

    let mut placements = Vec::new();
    for y in (-count_y - 1)..=count_y {
        let row = y as f64 * dy;
        for x in -count_x..=count_x {
            let position = Point::new(x as f64 * dx, row);
            placements.push(Placement::new(position, MotifSelector::Bucket(0)).rotated(turn));
        }
        for x in (-count_x - 1)..=count_x {
            let position = Point::new((x as f64 + 0.5) * dx, row - params.offset_y);
            placements.push(Placement::new(position, MotifSelector::Bucket(1)));
        }
    }
    placements
}
