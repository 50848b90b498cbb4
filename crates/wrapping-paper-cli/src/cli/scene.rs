//! Scene files: YAML stand-ins for the host application.
//!
//! A scene lists motif collections with their curve objects, the export
//! parameters, and the two auxiliary tables (inline or as file paths).
//! Loading resolves everything into owned values that implement the
//! library's host traits.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use wrapping_paper::tables::{CIRCLE_TABLE, STRIPE_TABLE};
use wrapping_paper::{
    BezierPoint, CollectionSource, Curve, CurveSource, Dimensions, LinearRgba, MaterialSource, PatternKind,
    PatternParameters, SplineKind, Transform, Vec3,
};

/// Top level of a scene file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub parameters: SceneParameters,

    #[serde(default)]
    pub collections: Vec<CollectionEntry>,

    /// `x_offset,r,g,b` rows
    #[serde(default)]
    pub stripes: Option<TableEntry>,

    /// `x,y,radius` rows
    #[serde(default)]
    pub circles: Option<TableEntry>,
}

/// Export parameters. Missing keys take the library defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParameters {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub pattern: String,
    pub distance_x: f64,
    pub distance_y: f64,
    pub offset_y: f64,
    pub use_location_noise: bool,
    pub location_noise: f64,
    pub use_rotation_noise: bool,
    /// Degrees.
    pub rotation_noise: f64,
    pub seed: u32,
    pub yagasuri_turn: bool,
    pub collection_index_offset: usize,
    pub use_background: bool,
    /// Linear RGBA
    pub background: [f64; 4],
    pub use_stripe_background: bool,
}

impl Default for SceneParameters {
    fn default() -> Self {
        let p = PatternParameters::default();
        let c = p.background_color;
        Self {
            width: p.width,
            height: p.height,
            scale: p.scale,
            pattern: p.pattern.name().to_string(),
            distance_x: p.distance_x,
            distance_y: p.distance_y,
            offset_y: p.offset_y,
            use_location_noise: p.use_location_noise,
            location_noise: p.location_noise,
            use_rotation_noise: p.use_rotation_noise,
            rotation_noise: p.rotation_noise.to_degrees(),
            seed: p.random_seed,
            yagasuri_turn: p.yagasuri_turn,
            collection_index_offset: p.collection_index_offset,
            use_background: p.use_background,
            background: [c.r, c.g, c.b, c.a],
            use_stripe_background: p.use_stripe_background,
        }
    }
}

impl SceneParameters {
    pub fn to_parameters(&self) -> Result<PatternParameters> {
        let pattern = PatternKind::from_name(&self.pattern)
            .ok_or_else(|| anyhow!("unknown pattern '{}' (see `wrapping-paper patterns`)", self.pattern))?;

        Ok(PatternParameters {
            width: self.width,
            height: self.height,
            scale: self.scale,
            pattern,
            distance_x: self.distance_x,
            distance_y: self.distance_y,
            offset_y: self.offset_y,
            use_location_noise: self.use_location_noise,
            location_noise: self.location_noise,
            use_rotation_noise: self.use_rotation_noise,
            rotation_noise: self.rotation_noise.to_radians(),
            random_seed: self.seed,
            yagasuri_turn: self.yagasuri_turn,
            collection_index_offset: self.collection_index_offset,
            use_background: self.use_background,
            background_color: LinearRgba::from_array(self.background),
            use_stripe_background: self.use_stripe_background,
        })
    }
}

/// A table given inline or as a path relative to the scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableEntry {
    File { path: PathBuf },
    Inline(String),
}

impl TableEntry {
    fn read(&self, base: &Path) -> Result<String> {
        match self {
            TableEntry::Inline(text) => Ok(text.clone()),
            TableEntry::File { path } => {
                let path = base.join(path);
                fs::read_to_string(&path).with_context(|| format!("failed to read table {}", path.display()))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,

    #[serde(default = "default_true")]
    pub export: bool,

    #[serde(default)]
    pub objects: Vec<ObjectEntry>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub name: String,

    /// Absent for non-curve objects, which the exporter skips.
    #[serde(default)]
    pub curves: Option<Vec<CurveEntry>>,

    /// Linear RGBA of the first material slot.
    #[serde(default)]
    pub material: Option<[f64; 4]>,

    #[serde(default)]
    pub transform: TransformEntry,

    /// Overrides the translation's z when set.
    #[serde(default)]
    pub depth: Option<f64>,

    #[serde(default)]
    pub hidden: bool,
}

/// Object placement in authoring space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformEntry {
    pub translate: [f64; 3],
    /// Degrees about Z
    pub rotate: f64,
    pub scale: [f64; 2],
    /// Full row-major 4×4 world matrix; wins over the fields above.
    pub matrix: Option<[[f64; 4]; 4]>,
}

impl Default for TransformEntry {
    fn default() -> Self {
        Self {
            translate: [0.0; 3],
            rotate: 0.0,
            scale: [1.0, 1.0],
            matrix: None,
        }
    }
}

impl TransformEntry {
    /// `translate · rotate · scale`
    pub fn to_transform(&self) -> Transform {
        if let Some(rows) = self.matrix {
            return Transform::from_rows(rows);
        }
        let [tx, ty, tz] = self.translate;
        Transform::translation(tx, ty, tz)
            * Transform::rotation_z(self.rotate.to_radians())
            * Transform::scale(self.scale[0], self.scale[1], 1.0)
    }

    fn z(&self) -> f64 {
        match self.matrix {
            Some(rows) => rows[2][3],
            None => self.translate[2],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveEntry {
    /// Four-anchor Bézier circle.
    Circle { circle: f64 },
    Spline(SplineEntry),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplineEntry {
    pub points: Vec<PointEntry>,

    #[serde(default = "default_true")]
    pub closed: bool,

    #[serde(default)]
    pub kind: SplineKindEntry,

    /// Curves flagged 3D are rejected by the exporter.
    #[serde(default)]
    pub three_d: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplineKindEntry {
    #[default]
    Bezier,
    Poly,
    Nurbs,
}

/// An anchor. Handles default to the anchor itself (a sharp corner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointEntry {
    pub co: [f64; 2],
    #[serde(default)]
    pub left: Option<[f64; 2]>,
    #[serde(default)]
    pub right: Option<[f64; 2]>,
}

impl CurveEntry {
    pub fn to_curve(&self) -> Curve {
        match self {
            CurveEntry::Circle { circle } => Curve::circle(*circle),
            CurveEntry::Spline(spline) => {
                let v = |[x, y]: [f64; 2]| Vec3::new(x, y, 0.0);
                let points = spline
                    .points
                    .iter()
                    .map(|p| BezierPoint::new(v(p.co), v(p.left.unwrap_or(p.co)), v(p.right.unwrap_or(p.co))))
                    .collect();
                Curve {
                    points,
                    closed: spline.closed,
                    kind: match spline.kind {
                        SplineKindEntry::Bezier => SplineKind::Bezier,
                        SplineKindEntry::Poly => SplineKind::Poly,
                        SplineKindEntry::Nurbs => SplineKind::Nurbs,
                    },
                    dimensions: if spline.three_d { Dimensions::ThreeD } else { Dimensions::TwoD },
                }
            }
        }
    }
}

/// A resolved curve object.
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    curves: Option<Vec<Curve>>,
    material: Option<LinearRgba>,
    world: Transform,
    depth: f64,
    hidden: bool,
}

impl SceneObject {
    fn from_entry(entry: &ObjectEntry) -> Self {
        Self {
            name: entry.name.clone(),
            curves: entry.curves.as_ref().map(|c| c.iter().map(CurveEntry::to_curve).collect()),
            material: entry.material.map(LinearRgba::from_array),
            world: entry.transform.to_transform(),
            depth: entry.depth.unwrap_or_else(|| entry.transform.z()),
            hidden: entry.hidden,
        }
    }
}

impl CurveSource for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn curves(&self) -> Option<&[Curve]> {
        self.curves.as_deref()
    }

    fn world_transform(&self) -> Transform {
        self.world
    }

    fn depth(&self) -> f64 {
        self.depth
    }

    fn hidden(&self) -> bool {
        self.hidden
    }
}

impl MaterialSource for SceneObject {
    fn first_material(&self) -> Option<LinearRgba> {
        self.material
    }
}

#[derive(Debug, Clone)]
pub struct SceneCollection {
    name: String,
    export: bool,
    objects: Vec<SceneObject>,
}

impl CollectionSource for SceneCollection {
    type Object = SceneObject;

    fn name(&self) -> &str {
        &self.name
    }

    fn export(&self) -> bool {
        self.export
    }

    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}

/// A loaded scene, ready for export.
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: Option<String>,
    pub params: PatternParameters,
    pub collections: Vec<SceneCollection>,
    /// Table text keyed by the resource names the exporter looks up.
    pub texts: HashMap<String, String>,
}

impl Scene {
    /// Load a scene from a YAML file. Table paths resolve against the
    /// file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read scene file {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_yaml(&content, base).with_context(|| format!("invalid scene file {}", path.display()))
    }

    pub fn from_yaml(content: &str, base: &Path) -> Result<Self> {
        let file: SceneFile = serde_yaml::from_str(content).context("failed to parse scene YAML")?;
        Self::from_file(&file, base)
    }

    pub fn from_file(file: &SceneFile, base: &Path) -> Result<Self> {
        let params = file.parameters.to_parameters()?;

        let collections = file
            .collections
            .iter()
            .map(|c| SceneCollection {
                name: c.name.clone(),
                export: c.export,
                objects: c.objects.iter().map(SceneObject::from_entry).collect(),
            })
            .collect();

        let mut texts = HashMap::new();
        for (key, table) in [(STRIPE_TABLE, &file.stripes), (CIRCLE_TABLE, &file.circles)] {
            if let Some(table) = table {
                texts.insert(key.to_string(), table.read(base)?);
            }
        }

        Ok(Self { name: file.name.clone(), params, collections, texts })
    }

    /// Display name for log lines.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("untitled")
    }
}
