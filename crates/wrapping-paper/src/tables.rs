//! Auxiliary tables the host keeps as text resources.
//!
//! Both are plain comma-separated rows without a header, produced offline
//! (a colour-stripe generator and a circle-packing solver). Blank lines are
//! ignored.

use std::collections::HashMap;

use crate::color::Rgb8;
use crate::error::ExportError;

/// Resource name of the stripe background table.
pub const STRIPE_TABLE: &str = "stripe_data.csv";

/// Resource name of the circle packing table.
pub const CIRCLE_TABLE: &str = "circles_data.csv";

/// Read access to the host's named text blocks.
pub trait TextSource {
    fn text(&self, name: &str) -> Option<&str>;
}

impl TextSource for HashMap<String, String> {
    fn text(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// One vertical colour band, starting at `x_offset` and running to the
/// right edge of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stripe {
    pub x_offset: f64,
    pub color: Rgb8,
}

/// One circle from the packing solver, in authoring units (Y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Rows of `x_offset,r,g,b` with channels in 0–255.
pub fn parse_stripes(text: &str) -> Result<Vec<Stripe>, ExportError> {
    parse_rows::<4>(STRIPE_TABLE, text)?
        .into_iter()
        .map(|[x, r, g, b]| Ok(Stripe { x_offset: x, color: Rgb8::from_channels(r, g, b) }))
        .collect()
}

/// Rows of `x,y,radius`.
pub fn parse_circles(text: &str) -> Result<Vec<Circle>, ExportError> {
    parse_rows::<3>(CIRCLE_TABLE, text).map(|rows| {
        rows.into_iter()
            .map(|[x, y, radius]| Circle { x, y, radius })
            .collect()
    })
}

/// Look up and parse the stripe table.
pub fn load_stripes<T: TextSource + ?Sized>(texts: &T) -> Result<Vec<Stripe>, ExportError> {
    let text = texts
        .text(STRIPE_TABLE)
        .ok_or_else(|| ExportError::MissingResource(STRIPE_TABLE.to_string()))?;
    parse_stripes(text)
}

/// Look up and parse the circle table.
pub fn load_circles<T: TextSource + ?Sized>(texts: &T) -> Result<Vec<Circle>, ExportError> {
    let text = texts
        .text(CIRCLE_TABLE)
        .ok_or_else(|| ExportError::MissingResource(CIRCLE_TABLE.to_string()))?;
    parse_circles(text)
}

fn parse_rows<const N: usize>(table: &str, text: &str) -> Result<Vec<[f64; N]>, ExportError> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |reason: String| ExportError::MalformedTable {
            table: table.to_string(),
            line: index + 1,
            reason,
        };

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != N {
            return Err(malformed(format!("expected {} fields, found {}", N, fields.len())));
        }

        let mut row = [0.0; N];
        for (slot, field) in row.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| malformed(format!("'{}' is not a number", field)))?;
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripes_parse_and_skip_blank_lines() {
        let stripes = parse_stripes("-100, 255, 0, 0\n\n0,0,128.7,255\n").unwrap();
        assert_eq!(stripes.len(), 2);
        assert_eq!(stripes[0], Stripe { x_offset: -100.0, color: Rgb8::new(255, 0, 0) });
        assert_eq!(stripes[1].color, Rgb8::new(0, 128, 255));
    }

    #[test]
    fn circles_parse() {
        let circles = parse_circles("1.5,-2,30\n0,0,10").unwrap();
        assert_eq!(circles, vec![
            Circle { x: 1.5, y: -2.0, radius: 30.0 },
            Circle { x: 0.0, y: 0.0, radius: 10.0 },
        ]);
    }

    #[test]
    fn wrong_arity_reports_line() {
        let err = parse_circles("0,0,1\n\n1,2\n").unwrap_err();
        match err {
            ExportError::MalformedTable { table, line, .. } => {
                assert_eq!(table, CIRCLE_TABLE);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field_rejected() {
        assert!(matches!(
            parse_stripes("0,red,0,0"),
            Err(ExportError::MalformedTable { line: 1, .. })
        ));
        assert!(parse_circles("0,0,inf").is_err());
    }

    #[test]
    fn missing_resource_named() {
        let texts: HashMap<String, String> = HashMap::new();
        assert!(matches!(load_circles(&texts), Err(ExportError::MissingResource(n)) if n == CIRCLE_TABLE));

        let mut texts = HashMap::new();
        texts.insert(STRIPE_TABLE.to_string(), "10,1,2,3".to_string());
        assert_eq!(load_stripes(&texts).unwrap().len(), 1);
    }
}
