//! # wrapping-paper
//!
//! Tiles curve motifs across a canvas and writes the result as SVG.
//!
//! A run reads motif collections through the traits in [`registry`],
//! converts each curve to path data ([`path`]), lays out placements for one
//! of four patterns ([`layout`]) and assembles a document where every motif
//! is defined once and referenced per placement ([`document`]).
//!
//! ## Rust Lesson #7: Modules
//!
//! `layout` is a directory module: `layout/mod.rs` owns the shared types
//! and each pattern lives in its own file. Its submodules stay private and
//! the entry points are re-exported with `pub use`, so callers write
//! `layout::square_lattice` without knowing the file layout.

pub mod color;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod path;
pub mod registry;
pub mod rng;
pub mod tables;

// Re-export common types at crate root for convenience.
pub use color::{LinearRgba, Rgb8};
pub use document::{SvgDocument, assemble};
pub use error::{ExportError, GeometryError};
pub use export::export;
pub use geometry::{BezierPoint, Curve, Dimensions, Point, SplineKind, Transform, Vec3};
pub use layout::{MotifSelector, PatternKind, PatternParameters, Placement, layout};
pub use path::{PathBuilder, PathCommand, build_path};
pub use registry::{CollectionSource, CurveSource, MaterialSource, MotifCollection, MotifMember, collect};
pub use tables::{Circle, Stripe, TextSource};
