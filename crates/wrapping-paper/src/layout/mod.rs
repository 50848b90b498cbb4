//! Pattern layout: where each motif instance goes.
//!
//! Each pattern is a pure function of [`PatternParameters`] (plus the
//! seeded stream and, for circle packing, the solver's circle table) to a
//! list of [`Placement`]s. No pattern shares state with another.
//!
//! Coordinates here are authoring coordinates, Y up. The document
//! assembler negates Y when it writes the instances out.

mod circle_packing;
mod hexagonal;
mod square;
mod yagasuri;

use log::{debug, warn};

use crate::color::LinearRgba;
use crate::error::ExportError;
use crate::geometry::Point;
use crate::rng::Rng;
use crate::tables::Circle;

pub use circle_packing::circle_packing;
pub use hexagonal::hexagonal_lattice;
pub use square::square_lattice;
pub use yagasuri::yagasuri;

/// Largest rotation-noise bound the UI allows: 20 degrees, in radians.
pub const MAX_ROTATION_NOISE: f64 = 20.0 * std::f64::consts::PI / 180.0;

/// Circle radius and global scale multiply down by this to give the
/// instance scale; motifs are authored at a nominal size of 1e4 units.
pub const CIRCLE_SCALE_FACTOR: f64 = 1e-4;

/// Available tiling families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    SquareLattice,
    HexagonalLattice,
    Yagasuri,
    CirclePacking,
}

impl PatternKind {
    pub fn all() -> &'static [PatternKind] {
        &[
            PatternKind::SquareLattice,
            PatternKind::HexagonalLattice,
            PatternKind::Yagasuri,
            PatternKind::CirclePacking,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::SquareLattice => "square",
            PatternKind::HexagonalLattice => "hexagonal",
            PatternKind::Yagasuri => "yagasuri",
            PatternKind::CirclePacking => "circle-packing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::SquareLattice => "Square lattice, random motifs",
            PatternKind::HexagonalLattice => "Hexagonal (brick offset) lattice, random motifs",
            PatternKind::Yagasuri => "Alternating arrow-fletching rows, two motifs",
            PatternKind::CirclePacking => "One scaled motif per packed circle",
        }
    }

    /// Parse a pattern from its name or a short alias.
    pub fn from_name(name: &str) -> Option<PatternKind> {
        match name.to_lowercase().as_str() {
            "square" | "square-lattice" | "grid" => Some(PatternKind::SquareLattice),
            "hexagonal" | "hex" | "hexagonal-lattice" => Some(PatternKind::HexagonalLattice),
            "yagasuri" | "arrow" => Some(PatternKind::Yagasuri),
            "circle-packing" | "circles" | "packing" => Some(PatternKind::CirclePacking),
            _ => None,
        }
    }

    /// Whether this pattern reads the circle table.
    pub fn needs_circles(&self) -> bool {
        matches!(self, PatternKind::CirclePacking)
    }
}

/// Configuration snapshot for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternParameters {
    pub width: u32,
    pub height: u32,
    /// Authoring units to output units.
    pub scale: f64,
    pub pattern: PatternKind,
    pub distance_x: f64,
    pub distance_y: f64,
    pub offset_y: f64,
    pub use_location_noise: bool,
    pub location_noise: f64,
    pub use_rotation_noise: bool,
    /// Radians.
    pub rotation_noise: f64,
    pub random_seed: u32,
    pub yagasuri_turn: bool,
    pub collection_index_offset: usize,
    pub use_background: bool,
    pub background_color: LinearRgba,
    pub use_stripe_background: bool,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            width: 2825,
            height: 3955,
            scale: 100.0,
            pattern: PatternKind::SquareLattice,
            distance_x: 50.0,
            distance_y: 50.0,
            offset_y: 0.0,
            use_location_noise: false,
            location_noise: 0.0,
            use_rotation_noise: false,
            rotation_noise: 0.0,
            random_seed: 1,
            yagasuri_turn: false,
            collection_index_offset: 0,
            use_background: false,
            background_color: LinearRgba::new(0.8, 0.8, 0.8, 0.8),
            use_stripe_background: false,
        }
    }
}

impl PatternParameters {
    /// Half the canvas, the extent each lattice covers on either side of
    /// the origin.
    pub fn half_extent(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Check every value against the ranges the host UI enforces.
    pub fn validate(&self) -> Result<(), ExportError> {
        let check = |name: &'static str, value: f64, ok: bool, reason: &'static str| {
            if ok { Ok(()) } else { Err(ExportError::InvalidParameter { name, value, reason }) }
        };
        let dims = 4..=65536;

        check("width", self.width as f64, dims.contains(&self.width), "must be within 4..=65536")?;
        check("height", self.height as f64, dims.contains(&self.height), "must be within 4..=65536")?;
        check(
            "scale",
            self.scale,
            (0.00001..=100000.0).contains(&self.scale),
            "must be within 0.00001..=100000",
        )?;
        for (name, value) in [
            ("distance_x", self.distance_x),
            ("distance_y", self.distance_y),
            ("offset_y", self.offset_y),
            ("location_noise", self.location_noise),
        ] {
            check(name, value, value >= 0.0 && value.is_finite(), "must be a finite value >= 0")?;
        }
        check(
            "rotation_noise",
            self.rotation_noise,
            (0.0..=MAX_ROTATION_NOISE + 1e-12).contains(&self.rotation_noise),
            "must be within 0..=20 degrees",
        )?;
        check("random_seed", self.random_seed as f64, self.random_seed >= 1, "must be >= 1")?;

        let c = self.background_color;
        for value in [c.r, c.g, c.b, c.a] {
            check("background_color", value, (0.0..=1.0).contains(&value), "channels must be within 0..=1")?;
        }
        Ok(())
    }
}

/// How a placement picks its motif from the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotifSelector {
    /// A uniform draw in `[0, 1)`, scaled to the registry length later.
    Random(f64),
    /// Fixed bucket chosen by the pattern (Yagasuri).
    Bucket(usize),
    /// Running index including the user offset (circle packing).
    Cycle(usize),
}

impl MotifSelector {
    /// Index into a registry of `len` motifs, `None` when it is empty.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = match *self {
            MotifSelector::Random(u) => ((u * len as f64) as usize).min(len - 1),
            MotifSelector::Bucket(i) | MotifSelector::Cycle(i) => i % len,
        };
        Some(index)
    }
}

/// One motif instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Authoring coordinates, Y up.
    pub position: Point,
    pub motif: MotifSelector,
    /// Degrees, about `position`.
    pub rotation: f64,
    pub scale: f64,
    /// Applied after `scale` so the motif origin lands back on `position`.
    pub translate: Point,
}

impl Placement {
    pub fn new(position: Point, motif: MotifSelector) -> Self {
        Self {
            position,
            motif,
            rotation: 0.0,
            scale: 1.0,
            translate: Point::default(),
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn scaled(mut self, scale: f64, translate: Point) -> Self {
        self.scale = scale;
        self.translate = translate;
        self
    }

    pub fn is_scaled(&self) -> bool {
        self.scale != 1.0
    }
}

/// Compute every placement for the configured pattern.
///
/// Seeds a fresh generator from `params.random_seed`, so two calls with
/// the same parameters return identical placements.
pub fn layout(params: &PatternParameters, circles: &[Circle]) -> Vec<Placement> {
    let mut rng = Rng::new(params.random_seed as u64);

    let placements = match params.pattern {
        PatternKind::SquareLattice => square_lattice(params, &mut rng),
        PatternKind::HexagonalLattice => hexagonal_lattice(params, &mut rng),
        PatternKind::Yagasuri => yagasuri(params),
        PatternKind::CirclePacking => circle_packing(params, circles, &mut rng),
    };

    debug!("{} layout: {} placement(s)", params.pattern.name(), placements.len());
    placements
}

/// Number of repeats on each side of the origin along one axis.
///
/// Non-positive or non-finite spacing yields `None`: no placements on
/// that axis, logged, never a panic.
pub(crate) fn repeat_count(half_extent: f64, distance: f64, axis: &'static str) -> Option<i64> {
    if !(distance > 0.0 && distance.is_finite()) {
        warn!("{}", ExportError::DegenerateParameters { axis, distance });
        return None;
    }
    Some((half_extent / distance).floor() as i64)
}

/// Location noise for one lattice point, drawn x then y.
pub(crate) fn location_jitter(params: &PatternParameters, rng: &mut Rng) -> Point {
    if !params.use_location_noise {
        return Point::default();
    }
    let nx = rng.jitter(params.location_noise);
    let ny = rng.jitter(params.location_noise);
    Point::new(nx, ny)
}

/// Rotation noise in degrees, or 0 when disabled.
pub(crate) fn rotation_jitter(params: &PatternParameters, rng: &mut Rng) -> f64 {
    if !params.use_rotation_noise {
        return 0.0;
    }
    rng.jitter(params.rotation_noise).to_degrees()
}

/// A lattice point with a random motif and optional rotation noise.
pub(crate) fn lattice_placement(position: Point, params: &PatternParameters, rng: &mut Rng) -> Placement {
    let motif = MotifSelector::Random(rng.next_f64());
    let rotation = rotation_jitter(params, rng);
    Placement::new(position, motif).rotated(rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PatternKind::all() {
            assert_eq!(PatternKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(PatternKind::from_name("HEX"), Some(PatternKind::HexagonalLattice));
        assert_eq!(PatternKind::from_name("voronoi"), None);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(PatternParameters::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_values_rejected() {
        let bad = [
            PatternParameters { width: 3, ..Default::default() },
            PatternParameters { height: 70000, ..Default::default() },
            PatternParameters { scale: 0.0, ..Default::default() },
            PatternParameters { distance_x: -1.0, ..Default::default() },
            PatternParameters { location_noise: f64::NAN, ..Default::default() },
            PatternParameters { rotation_noise: 0.5, ..Default::default() },
            PatternParameters { random_seed: 0, ..Default::default() },
            PatternParameters { background_color: LinearRgba::new(1.2, 0.0, 0.0, 1.0), ..Default::default() },
        ];
        for params in bad {
            assert!(
                matches!(params.validate(), Err(ExportError::InvalidParameter { .. })),
                "{:?} should be rejected",
                params
            );
        }
    }

    #[test]
    fn twenty_degrees_is_allowed() {
        let params = PatternParameters { rotation_noise: 20f64.to_radians(), ..Default::default() };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn selector_resolution() {
        assert_eq!(MotifSelector::Random(0.0).resolve(3), Some(0));
        assert_eq!(MotifSelector::Random(0.999_999).resolve(3), Some(2));
        assert_eq!(MotifSelector::Bucket(1).resolve(1), Some(0));
        assert_eq!(MotifSelector::Cycle(7).resolve(3), Some(1));
        assert_eq!(MotifSelector::Cycle(0).resolve(0), None);
    }

    #[test]
    fn degenerate_spacing_gives_no_repeats() {
        assert_eq!(repeat_count(50.0, 0.0, "x"), None);
        assert_eq!(repeat_count(50.0, -5.0, "x"), None);
        assert_eq!(repeat_count(50.0, f64::NAN, "y"), None);
        assert_eq!(repeat_count(50.0, 20.0, "y"), Some(2));
    }

    #[test]
    fn layout_is_reproducible() {
        let params = PatternParameters {
            width: 400,
            height: 300,
            use_location_noise: true,
            location_noise: 4.0,
            use_rotation_noise: true,
            rotation_noise: 0.2,
            random_seed: 17,
            ..Default::default()
        };
        assert_eq!(layout(&params, &[]), layout(&params, &[]));

        let other = PatternParameters { random_seed: 18, ..params.clone() };
        assert_ne!(layout(&params, &[]), layout(&other, &[]));
    }
}
