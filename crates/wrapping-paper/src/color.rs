//! Material colours.
//!
//! The host stores colours as linear floats in `[0, 1]`. SVG wants display
//! space `rgb(r,g,b)` with 8-bit channels, so every channel goes through a
//! 1/2.2 gamma curve before scaling.

use std::fmt;

/// Display gamma used when converting linear material colours.
pub const GAMMA: f64 = 2.2;

/// A linear-space RGBA colour as stored on a material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// An 8-bit display colour, written as `rgb(r,g,b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LinearRgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Gamma-correct into display space.
    pub fn to_display(self) -> Rgb8 {
        Rgb8::new(encode(self.r), encode(self.g), encode(self.b))
    }

    /// Alpha for the SVG `opacity` attribute.
    pub fn opacity(self) -> f64 {
        self.a
    }
}

/// `255 * c^(1/2.2)`, truncated.
fn encode(channel: f64) -> u8 {
    let c = channel.max(0.0).powf(1.0 / GAMMA) * 255.0;
    if c.is_nan() {
        return 0;
    }
    c.clamp(0.0, 255.0) as u8
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from raw 0–255 floats (stripe table rows), truncating.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let t = |v: f64| if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 };
        Self::new(t(r), t(g), t(b))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_to_extremes() {
        assert_eq!(LinearRgba::new(0.0, 1.0, 0.0, 1.0).to_display(), Rgb8::new(0, 255, 0));
    }

    #[test]
    fn mid_grey_is_brightened() {
        // 0.5^(1/2.2) * 255 = 186.08
        let c = LinearRgba::new(0.5, 0.5, 0.5, 1.0).to_display();
        assert_eq!(c, Rgb8::new(186, 186, 186));
    }

    #[test]
    fn out_of_range_channels_clamp() {
        let c = LinearRgba::new(-0.2, 1.7, f64::NAN, 1.0).to_display();
        assert_eq!(c, Rgb8::new(0, 255, 0));
    }

    #[test]
    fn svg_notation() {
        assert_eq!(Rgb8::new(12, 34, 56).to_string(), "rgb(12,34,56)");
        assert_eq!(Rgb8::from_channels(12.9, 300.0, -1.0).to_string(), "rgb(12,255,0)");
    }
}
