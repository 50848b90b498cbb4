//! Curve to SVG path conversion.
//!
//! Every anchor and handle goes through `scale * Y_FLIP * world`, then the
//! spline is written as one `M` followed by one cubic `C` per anchor, the
//! last one wrapping back to the first anchor. There is no `Z`: the closing
//! segment has real handles and would be lost as a straight line.

use std::fmt;

use lyon_geom::{CubicBezierSegment, point};

use crate::error::GeometryError;
use crate::geometry::{Curve, Dimensions, Point, SplineKind, Transform, Vec3};

/// SVG path data for one motif curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    start: Point,
    segments: Vec<CubicBezierSegment<f64>>,
}

impl PathCommand {
    /// The `M` target.
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn segments(&self) -> &[CubicBezierSegment<f64>] {
        &self.segments
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{},{}", self.start.x, self.start.y)?;
        for s in &self.segments {
            write!(
                f,
                " C {},{} {},{} {},{}",
                s.ctrl1.x, s.ctrl1.y, s.ctrl2.x, s.ctrl2.y, s.to.x, s.to.y
            )?;
        }
        Ok(())
    }
}

/// Converts curves of one object into path commands.
///
/// The world matrix and Y flip are folded once; `build` is then a pure
/// per-curve mapping.
#[derive(Debug, Clone, Copy)]
pub struct PathBuilder {
    matrix: Transform,
    scale: f64,
}

impl PathBuilder {
    pub fn new(world: Transform, scale: f64) -> Self {
        Self { matrix: Transform::Y_FLIP * world, scale }
    }

    /// Map an authoring-space position into output space.
    #[inline]
    pub fn project(&self, v: Vec3) -> Point {
        let w = self.matrix.apply(v);
        // + 0.0 turns the flipped -0 into 0
        Point::new(w.x * self.scale + 0.0, w.y * self.scale + 0.0)
    }

    pub fn build(&self, curve: &Curve) -> Result<PathCommand, GeometryError> {
        if curve.kind != SplineKind::Bezier {
            return Err(GeometryError::NotBezier);
        }
        if curve.dimensions != Dimensions::TwoD {
            return Err(GeometryError::NotPlanar);
        }
        if !curve.closed {
            return Err(GeometryError::NotClosed);
        }
        let anchors = &curve.points;
        if anchors.len() < 2 {
            return Err(GeometryError::TooFewPoints(anchors.len()));
        }

        let start = self.project(anchors[0].co);
        let mut segments = Vec::with_capacity(anchors.len());
        let mut from = start;

        // windows(2) covers the inner pairs; chaining the first anchor
        // onto the end yields the closing pair
        let wrapped: Vec<_> = anchors.iter().chain(std::iter::once(&anchors[0])).collect();
        for pair in wrapped.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let ctrl1 = self.project(prev.handle_right);
            let ctrl2 = self.project(next.handle_left);
            let to = self.project(next.co);
            if ![ctrl1, ctrl2, to].iter().all(Point::is_finite) {
                return Err(GeometryError::NonFinite);
            }
            segments.push(CubicBezierSegment {
                from: point(from.x, from.y),
                ctrl1: point(ctrl1.x, ctrl1.y),
                ctrl2: point(ctrl2.x, ctrl2.y),
                to: point(to.x, to.y),
            });
            from = to;
        }

        if !start.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        Ok(PathCommand { start, segments })
    }
}

/// Convert one closed 2D Bézier curve into SVG path data.
pub fn build_path(curve: &Curve, world: &Transform, scale: f64) -> Result<PathCommand, GeometryError> {
    PathBuilder::new(*world, scale).build(curve)
}
