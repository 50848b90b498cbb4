//! Error taxonomy for an export run.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Not every variant aborts a run. `UnsupportedGeometry`,
//! `MissingMaterial` and `DegenerateParameters` are built, logged through
//! `Display`, and the run carries on without the offending object or axis.
//! The rest travel up with `?` and end the export.

use std::fmt;

/// Why a curve cannot become a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    NotBezier,
    NotClosed,
    NotPlanar,
    TooFewPoints(usize),
    NonFinite,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NotBezier => write!(f, "spline type is not Bézier"),
            GeometryError::NotClosed => write!(f, "curve is not closed"),
            GeometryError::NotPlanar => write!(f, "curve is not 2D"),
            GeometryError::TooFewPoints(n) => write!(f, "{} anchor(s), need at least 2", n),
            GeometryError::NonFinite => write!(f, "non-finite coordinate"),
        }
    }
}

impl std::error::Error for GeometryError {}

#[derive(Debug)]
pub enum ExportError {
    /// Curve is open, 3D, not Bézier, too short, or has non-finite points.
    UnsupportedGeometry { object: String, reason: GeometryError },
    /// Curve object has no material in its first slot.
    MissingMaterial { object: String },
    /// Placements exist but no motif collection is exportable.
    EmptyRegistry,
    /// Non-positive or non-finite spacing on one lattice axis.
    DegenerateParameters { axis: &'static str, distance: f64 },
    /// Two exportable collections share a name (names are symbol ids).
    DuplicateMotif(String),
    /// A configuration value outside its allowed range.
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },
    /// A row of an auxiliary table could not be parsed (line is 1-based).
    MalformedTable { table: String, line: usize, reason: String },
    /// A text resource the active features need is missing.
    MissingResource(String),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::UnsupportedGeometry { object, reason } => {
                write!(f, "unsupported geometry in '{}': {}", object, reason)
            }
            ExportError::MissingMaterial { object } => {
                write!(f, "'{}' has no material", object)
            }
            ExportError::EmptyRegistry => {
                write!(f, "no exportable motif collections, but placements were generated")
            }
            ExportError::DegenerateParameters { axis, distance } => {
                write!(f, "distance_{} = {} gives no repeats on that axis", axis, distance)
            }
            ExportError::DuplicateMotif(name) => {
                write!(f, "motif collection name '{}' is used more than once", name)
            }
            ExportError::InvalidParameter { name, value, reason } => {
                write!(f, "invalid {} = {}: {}", name, value, reason)
            }
            ExportError::MalformedTable { table, line, reason } => {
                write!(f, "{} line {}: {}", table, line, reason)
            }
            ExportError::MissingResource(name) => {
                write!(f, "text resource '{}' not found", name)
            }
            ExportError::Io(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl ExportError {
    /// Whether the run should keep going after logging this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExportError::UnsupportedGeometry { .. }
                | ExportError::MissingMaterial { .. }
                | ExportError::DegenerateParameters { .. }
        )
    }
}
