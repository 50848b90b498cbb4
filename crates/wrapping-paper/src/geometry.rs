//! Core geometry types for wrapping-paper.
//!
//! The authoring side works in a right-handed, Z-up 3D space. The output
//! side is SVG: 2D, origin at the top left, Y pointing down. Everything the
//! core reads from the host (anchors, handles, object matrices) is 3D;
//! everything it writes is a 2D [`Point`].
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Debug, Clone, Copy, PartialEq)]` gives small value types
//! printing, cheap copies and `==` for free. `Copy` only makes sense for
//! plain stack data like these coordinates.

use std::ops::Mul;

/// A 2D point in output (SVG) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A 3D vector in authoring space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A 4x4 affine matrix, row major, applied to column vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rows: [[f64; 4]; 4],
}

/// One anchor of a Bézier spline with its two control handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPoint {
    pub co: Vec3,
    pub handle_left: Vec3,
    pub handle_right: Vec3,
}

/// Spline interpolation type as stored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineKind {
    Bezier,
    Poly,
    Nurbs,
}

/// Whether a curve is constrained to its local XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensions {
    TwoD,
    ThreeD,
}

/// A single authored spline.
///
/// Read-only to the core: it is only ever borrowed from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<BezierPoint>,
    pub closed: bool,
    pub kind: SplineKind,
    pub dimensions: Dimensions,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Vec3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drop the Z component.
    #[inline]
    pub fn xy(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Mirror across the X axis: Z-up authoring space to Y-down SVG space.
    pub const Y_FLIP: Transform = Transform {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.rows[0][3] = x;
        t.rows[1][3] = y;
        t.rows[2][3] = z;
        t
    }

    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.rows[0][0] = sx;
        t.rows[1][1] = sy;
        t.rows[2][2] = sz;
        t
    }

    /// Rotation about the Z axis, counter-clockwise, in radians.
    pub fn rotation_z(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut t = Self::IDENTITY;
        t.rows[0][0] = cos;
        t.rows[0][1] = -sin;
        t.rows[1][0] = sin;
        t.rows[1][1] = cos;
        t
    }

    /// Apply to a position (w = 1).
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z + r[0][3],
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z + r[1][3],
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z + r[2][3],
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Transform { rows }
    }
}

impl BezierPoint {
    pub fn new(co: Vec3, handle_left: Vec3, handle_right: Vec3) -> Self {
        Self { co, handle_left, handle_right }
    }

    /// An anchor whose handles sit on the anchor itself (a sharp corner).
    pub fn corner(co: Vec3) -> Self {
        Self::new(co, co, co)
    }
}

impl Curve {
    /// A closed 2D Bézier spline, the only shape the exporter accepts.
    pub fn closed_bezier(points: Vec<BezierPoint>) -> Self {
        Self {
            points,
            closed: true,
            kind: SplineKind::Bezier,
            dimensions: Dimensions::TwoD,
        }
    }

    /// A closed Bézier circle of the given radius centred on the origin,
    /// built from four anchors with the usual 0.5523 handle length.
    pub fn circle(radius: f64) -> Self {
        let k = radius * 0.552_284_749_8;
        let anchor = |x: f64, y: f64, dx: f64, dy: f64| {
            BezierPoint::new(
                Vec3::new(x, y, 0.0),
                Vec3::new(x - dx, y - dy, 0.0),
                Vec3::new(x + dx, y + dy, 0.0),
            )
        };
        Self::closed_bezier(vec![
            anchor(radius, 0.0, 0.0, k),
            anchor(0.0, radius, -k, 0.0),
            anchor(-radius, 0.0, 0.0, -k),
            anchor(0.0, -radius, k, 0.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_points_alone() {
        let v = Vec3::new(1.5, -2.0, 3.0);
        assert_eq!(Transform::IDENTITY.apply(v), v);
    }

    #[test]
    fn y_flip_mirrors_y_only() {
        let v = Transform::Y_FLIP.apply(Vec3::new(2.0, 5.0, 1.0));
        assert_eq!(v, Vec3::new(2.0, -5.0, 1.0));
    }

    #[test]
    fn composition_applies_right_operand_first() {
        // scale then translate
        let t = Transform::translation(10.0, 0.0, 0.0) * Transform::scale(2.0, 2.0, 1.0);
        let v = t.apply(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(v, Vec3::new(12.0, 2.0, 0.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let v = Transform::rotation_z(std::f64::consts::FRAC_PI_2).apply(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn circle_is_closed_bezier() {
        let c = Curve::circle(2.0);
        assert_eq!(c.points.len(), 4);
        assert!(c.closed);
        assert_eq!(c.kind, SplineKind::Bezier);
        assert_eq!(c.dimensions, Dimensions::TwoD);
        assert_eq!(c.points[0].co, Vec3::new(2.0, 0.0, 0.0));
    }
}
