//! Square lattice.

use crate::geometry::Point;
use crate::rng::Rng;

use super::{PatternParameters, Placement, lattice_placement, location_jitter, repeat_count};

/// One placement per `(x, y)` grid index within the half extents, scanned
/// column by column (x outer, y inner).
pub fn square_lattice(params: &PatternParameters, rng: &mut Rng) -> Vec<Placement> {
    let (half_w, half_h) = params.half_extent();
    let (Some(count_x), Some(count_y)) = (
        repeat_count(half_w, params.distance_x, "x"),
        repeat_count(half_h, params.distance_y, "y"),
    ) else {
        return Vec::new();
    };

    let mut placements = Vec::new();
    for x in -count_x..=count_x {
        for y in -count_y..=count_y {
            let noise = location_jitter(params, rng);
            let position = Point::new(
                x as f64 * params.distance_x + noise.x,
                y as f64 * params.distance_y + noise.y,
            );
            placements.push(lattice_placement(position, params, rng));
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MotifSelector;

    fn params(width: u32, height: u32, dx: f64, dy: f64) -> PatternParameters {
        PatternParameters {
            width,
            height,
            distance_x: dx,
            distance_y: dy,
            ..Default::default()
        }
    }

    #[test]
    fn hundred_by_hundred_at_fifty() {
        let placements = square_lattice(&params(100, 100, 50.0, 50.0), &mut Rng::new(1));
        let positions: Vec<(f64, f64)> = placements.iter().map(|p| (p.position.x, p.position.y)).collect();
        assert_eq!(positions, vec![
            (-50.0, -50.0), (-50.0, 0.0), (-50.0, 50.0),
            (0.0, -50.0), (0.0, 0.0), (0.0, 50.0),
            (50.0, -50.0), (50.0, 0.0), (50.0, 50.0),
        ]);
        assert!(placements.iter().all(|p| p.rotation == 0.0 && p.scale == 1.0));
        assert!(placements.iter().all(|p| matches!(p.motif, MotifSelector::Random(_))));
    }

    #[test]
    fn counts_floor_the_half_extent() {
        // 130/2 / 40 = 1.625 -> 1 each side; 90/2 / 20 = 2.25 -> 2 each side
        let placements = square_lattice(&params(130, 90, 40.0, 20.0), &mut Rng::new(1));
        assert_eq!(placements.len(), 3 * 5);
    }

    #[test]
    fn noise_disabled_is_bit_identical() {
        let p = params(300, 200, 30.0, 25.0);
        let a = square_lattice(&p, &mut Rng::new(1));
        let b = square_lattice(&p, &mut Rng::new(99));
        let pos = |v: &[Placement]| v.iter().map(|p| p.position).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
    }

    #[test]
    fn noise_stays_within_bound() {
        let p = PatternParameters {
            use_location_noise: true,
            location_noise: 3.0,
            ..params(200, 200, 50.0, 50.0)
        };
        let noisy = square_lattice(&p, &mut Rng::new(4));
        let clean = square_lattice(&params(200, 200, 50.0, 50.0), &mut Rng::new(4));
        assert_eq!(noisy.len(), clean.len());
        for (n, c) in noisy.iter().zip(&clean) {
            assert!((n.position.x - c.position.x).abs() <= 3.0);
            assert!((n.position.y - c.position.y).abs() <= 3.0);
        }
        assert!(noisy.iter().zip(&clean).any(|(n, c)| n.position != c.position));
    }

    #[test]
    fn rotation_noise_within_bound_in_degrees() {
        let p = PatternParameters {
            use_rotation_noise: true,
            rotation_noise: 10f64.to_radians(),
            ..params(400, 400, 20.0, 20.0)
        };
        let placements = square_lattice(&p, &mut Rng::new(8));
        assert!(placements.iter().all(|p| p.rotation.abs() <= 10.0 + 1e-9));
        assert!(placements.iter().any(|p| p.rotation.abs() > 1.0));
    }

    #[test]
    fn zero_spacing_produces_nothing() {
        assert!(square_lattice(&params(100, 100, 0.0, 50.0), &mut Rng::new(1)).is_empty());
        assert!(square_lattice(&params(100, 100, 50.0, -1.0), &mut Rng::new(1)).is_empty());
    }

    #[test]
    fn spacing_wider_than_canvas_keeps_origin() {
        let placements = square_lattice(&params(100, 100, 500.0, 500.0), &mut Rng::new(1));
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].position, Point::new(0.0, 0.0));
    }
}
