//! JSON codec for scenes.
//!
//! A scene file is a top-level array of shape records:
//!
//! ```json
//! [
//!   { "points": [{ "x": 200.0, "y": 200.0 }, { "x": 250.0, "y": 200.0 }], "type": "polygon" },
//!   { "points": [{ "x": 300.0, "y": 300.0 }, { "x": 350.0, "y": 300.0 }], "type": "circle" }
//! ]
//! ```
//!
//! `type` may be missing (older files), `null` or unknown; all of these read
//! as `polygon`. `kind` is accepted as an alternative spelling; when a record
//! carries both, `type` is used. The import
//! path only requires `points` and always produces polygons.
//!
//! Parsing is validate-then-apply: a file is fully decoded and checked before
//! any scene is built or modified.

use polykit_core::{DesignError, Point};
use serde::{Deserialize, Serialize};

use crate::scene::Scene;
use crate::shapes::{Shape, ShapeKind};

/// One persisted shape record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawShapeData")]
pub struct ShapeData {
    pub points: Vec<Point>,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
}

/// Import record: only the point list matters, any tag is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRecord {
    pub points: Vec<Point>,
}

/// Record as read from disk, before the tag is resolved. Both spellings may
/// be present; a string `type` wins over a string `kind`.
#[derive(Deserialize)]
struct RawShapeData {
    points: Vec<Point>,
    #[serde(rename = "type", default)]
    type_tag: Option<serde_json::Value>,
    #[serde(default)]
    kind: Option<serde_json::Value>,
}

impl From<RawShapeData> for ShapeData {
    fn from(raw: RawShapeData) -> Self {
        let kind = match (raw.type_tag, raw.kind) {
            (Some(serde_json::Value::String(tag)), _)
            | (_, Some(serde_json::Value::String(tag))) => ShapeKind::from_tag(&tag),
            _ => ShapeKind::Polygon,
        };
        Self {
            points: raw.points,
            kind,
        }
    }
}

impl ShapeData {
    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            points: shape.points().to_vec(),
            kind: shape.kind(),
        }
    }

    pub fn into_shape(self) -> Result<Shape, DesignError> {
        Shape::new(self.kind, self.points)
    }
}

fn records(scene: &Scene) -> Result<Vec<ShapeData>, DesignError> {
    scene
        .shapes()
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            if shape.points().iter().all(Point::is_finite) {
                Ok(ShapeData::from_shape(shape))
            } else {
                Err(DesignError::format(format!(
                    "shape {i} has a non-finite coordinate"
                )))
            }
        })
        .collect()
}

/// Serializes a scene to compact JSON.
pub fn serialize_scene(scene: &Scene) -> Result<String, DesignError> {
    Ok(serde_json::to_string(&records(scene)?)?)
}

/// Serializes a scene to JSON indented by two spaces, the on-disk layout.
pub fn serialize_scene_pretty(scene: &Scene) -> Result<String, DesignError> {
    Ok(serde_json::to_string_pretty(&records(scene)?)?)
}

/// Parses a scene. The result has no selection and no pending points.
pub fn deserialize_scene(text: &str) -> Result<Scene, DesignError> {
    let data: Vec<ShapeData> = serde_json::from_str(text)?;
    let shapes = data
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .into_shape()
                .map_err(|e| DesignError::format(format!("shape {i}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Scene::from_shapes(shapes))
}

/// Appends every record in `text` to `scene` as a polygon and returns how
/// many were imported. The scene is untouched if any record is malformed.
pub fn import_merge(text: &str, scene: &mut Scene) -> Result<usize, DesignError> {
    let data: Vec<ImportRecord> = serde_json::from_str(text)?;
    let count = data.len();
    scene.extend(data.into_iter().map(|r| Shape::polygon(r.points)));
    Ok(count)
}
