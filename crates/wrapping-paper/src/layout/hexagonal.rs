//! Hexagonal (brick offset) lattice.

use crate::geometry::Point;
use crate::rng::Rng;

use super::{PatternParameters, Placement, lattice_placement, location_jitter, repeat_count};

/// Row pitch for a hex lattice with column spacing `dx`.
pub fn row_pitch(distance_x: f64, offset_y: f64) -> f64 {
    distance_x * 3f64.sqrt() / 2.0 + offset_y
}

/// Rows are spaced `dx·√3/2 + offset_y` apart, `distance_y` is unused.
///
/// Even rows sit on `x·dx`. Odd rows carry one extra column on the left and
/// are shifted right by half a column, so the edges stay covered.
pub fn hexagonal_lattice(params: &PatternParameters, rng: &mut Rng) -> Vec<Placement> {
    let (half_w, half_h) = params.half_extent();
    let dx = params.distance_x;
    let dy = row_pitch(dx, params.offset_y);

    let (Some(count_x), Some(count_y)) = (repeat_count(half_w, dx, "x"), repeat_count(half_h, dy, "y")) else {
        return Vec::new();
    };

    let mut placements = Vec::new();
    for y in -count_y..=count_y {
        let odd = y.rem_euclid(2) == 1;
        let (first, shift) = if odd { (-count_x - 1, 0.5) } else { (-count_x, 0.0) };

        for x in first..=count_x {
            let noise = location_jitter(params, rng);
            let position = Point::new((x as f64 + shift) * dx + noise.x, y as f64 * dy + noise.y);
            placements.push(lattice_placement(position, params, rng));
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(width: u32, height: u32, dx: f64) -> PatternParameters {
        PatternParameters {
            width,
            height,
            distance_x: dx,
            // must be ignored
            distance_y: 1.0,
            ..Default::default()
        }
    }

    fn rows(placements: &[Placement]) -> Vec<Vec<f64>> {
        let mut rows: Vec<(f64, Vec<f64>)> = Vec::new();
        for p in placements {
            match rows.last_mut() {
                Some((y, xs)) if *y == p.position.y => xs.push(p.position.x),
                _ => rows.push((p.position.y, vec![p.position.x])),
            }
        }
        rows.into_iter().map(|(_, xs)| xs).collect()
    }

    #[test]
    fn row_pitch_is_sqrt3_over_two() {
        assert_relative_eq!(row_pitch(20.0, 0.0), 17.320508075688775);
        assert_relative_eq!(row_pitch(20.0, 3.0), 20.320508075688775);
    }

    #[test]
    fn odd_rows_shifted_half_a_column() {
        // half extents 50/20 -> 2 columns; 50/17.32 -> 2 rows each side
        let placements = hexagonal_lattice(&params(100, 100, 20.0), &mut Rng::new(1));
        let rows = rows(&placements);
        assert_eq!(rows.len(), 5);

        // y = -2, 0, 2 are even; y = -1, 1 are odd
        for (i, row) in rows.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(row, &vec![-40.0, -20.0, 0.0, 20.0, 40.0]);
            } else {
                assert_eq!(row, &vec![-50.0, -30.0, -10.0, 10.0, 30.0, 50.0]);
            }
        }
        assert_eq!(placements.len(), 3 * 5 + 2 * 6);
    }

    #[test]
    fn rows_use_hex_pitch() {
        let placements = hexagonal_lattice(&params(100, 100, 20.0), &mut Rng::new(1));
        let ys: Vec<f64> = rows_y(&placements);
        let pitch = row_pitch(20.0, 0.0);
        for pair in ys.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], pitch, epsilon = 1e-9);
        }
    }

    fn rows_y(placements: &[Placement]) -> Vec<f64> {
        let mut ys: Vec<f64> = placements.iter().map(|p| p.position.y).collect();
        ys.dedup();
        ys
    }

    #[test]
    fn zero_column_spacing_produces_nothing() {
        assert!(hexagonal_lattice(&params(100, 100, 0.0), &mut Rng::new(1)).is_empty());
    }
}
