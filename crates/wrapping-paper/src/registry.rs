//! Motif registry: which collections become symbols, and in what order
//! their curves are drawn.
//!
//! The host application is reached only through the three traits below.
//! The core never mutates host data and borrows curve geometry for the
//! length of one export.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::color::{LinearRgba, Rgb8};
use crate::error::{ExportError, GeometryError};
use crate::geometry::{Curve, Dimensions, Transform};
use crate::path::PathBuilder;

/// Read access to an object's curve data.
pub trait CurveSource {
    fn name(&self) -> &str;

    /// `None` for objects that are not curves at all (meshes, empties).
    fn curves(&self) -> Option<&[Curve]>;

    fn world_transform(&self) -> Transform;

    /// Position along the authoring Z axis; lower is further back.
    fn depth(&self) -> f64;

    fn hidden(&self) -> bool {
        false
    }
}

/// Read access to an object's material slots.
pub trait MaterialSource {
    /// Diffuse colour and alpha of the first material slot, if any.
    fn first_material(&self) -> Option<LinearRgba>;
}

/// A host-side group of objects with an export flag.
pub trait CollectionSource {
    type Object: CurveSource + MaterialSource;

    fn name(&self) -> &str;
    fn export(&self) -> bool;
    fn objects(&self) -> &[Self::Object];
}

/// One accepted curve object inside a motif.
#[derive(Debug, Clone)]
pub struct MotifMember<'a> {
    pub object: &'a str,
    pub curves: &'a [Curve],
    pub world: Transform,
    pub depth: f64,
    pub fill: Rgb8,
    pub opacity: f64,
}

/// A named motif, its members sorted back to front.
#[derive(Debug, Clone)]
pub struct MotifCollection<'a> {
    pub name: &'a str,
    pub members: Vec<MotifMember<'a>>,
}

/// Check one object against the export rules.
///
/// Returns the member on success, or the recoverable error describing why
/// it was skipped.
pub fn accept_member<O>(object: &O) -> Result<MotifMember<'_>, ExportError>
where
    O: CurveSource + MaterialSource,
{
    let name = object.name();
    let unsupported = |reason: GeometryError| ExportError::UnsupportedGeometry { object: name.to_string(), reason };

    let curves = match object.curves() {
        Some(c) if !c.is_empty() => c,
        Some(_) => return Err(unsupported(GeometryError::TooFewPoints(0))),
        None => return Err(unsupported(GeometryError::NotBezier)),
    };
    if curves.iter().any(|c| c.dimensions != Dimensions::TwoD) {
        return Err(unsupported(GeometryError::NotPlanar));
    }
    // at least one curve has to produce a path, or the motif draws nothing
    let world = object.world_transform();
    let builder = PathBuilder::new(world, 1.0);
    let mut reason = None;
    for curve in curves {
        match builder.build(curve) {
            Ok(_) => {
                reason = None;
                break;
            }
            Err(e) => {
                reason.get_or_insert(e);
            }
        }
    }
    if let Some(reason) = reason {
        return Err(unsupported(reason));
    }
    let material = object
        .first_material()
        .ok_or_else(|| ExportError::MissingMaterial { object: name.to_string() })?;

    Ok(MotifMember {
        object: name,
        curves,
        world,
        depth: object.depth(),
        fill: material.to_display(),
        opacity: material.opacity(),
    })
}

/// Gather every exportable motif collection.
///
/// Collections keep host order. Members are sorted by ascending depth
/// (stable for equal depths) so later members draw on top.
pub fn collect<C: CollectionSource>(collections: &[C]) -> Result<Vec<MotifCollection<'_>>, ExportError> {
    let mut seen = HashSet::new();
    let mut motifs = Vec::new();

    for collection in collections {
        if !collection.export() || collection.objects().is_empty() {
            continue;
        }
        let name = collection.name();

        let mut members: Vec<MotifMember> = Vec::new();
        for object in collection.objects().iter().filter(|o| !o.hidden()) {
            match accept_member(object) {
                Ok(m) => members.push(m),
                Err(e) if e.is_recoverable() => info!("skipping object: {}", e),
                Err(e) => return Err(e),
            }
        }

        if members.is_empty() {
            warn!("collection '{}' has no exportable curves, dropped", name);
            continue;
        }
        if !seen.insert(name) {
            return Err(ExportError::DuplicateMotif(name.to_string()));
        }

        members.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        debug!("motif '{}': {} member(s)", name, members.len());
        motifs.push(MotifCollection { name, members });
    }

    Ok(motifs)
}
