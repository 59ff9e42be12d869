//! Document Parser: editor JSON export -> `GeometryModel`.
//!
//! The document is checked shallowly (root object, `rigidBodies` array, one
//! object per body) and every field is then decoded straight into its typed
//! form, so failures can name the field and the body they came from.
//! Points and circles must be JSON objects; serde's positional array form
//! for structs is refused.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{BodyRef, FormatError, LoadError, Vec2};

use super::model::{CircleDef, GeometryModel, PolygonDef, RigidBodyDef};

/// Parse a full body document. Either the whole model is built or an error is
/// returned; nothing partial escapes.
pub fn parse_document(text: &str) -> Result<GeometryModel, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let root: Value = serde_json::from_str(text)?;
    let bodies = root
        .get("rigidBodies")
        .and_then(Value::as_array)
        .ok_or_else(|| FormatError::missing("rigidBodies", None))?;

    let mut model = GeometryModel::new();
    for (index, elem) in bodies.iter().enumerate() {
        let body = read_rigid_body(index, elem)?;
        if let Some(previous) = model.insert(body) {
            log::warn!(
                "rigid body '{}' defined more than once, keeping entry #{}",
                previous.name,
                index
            );
        }
    }

    log::debug!("parsed body document: {} rigid bodies", model.len());
    Ok(model)
}

#[derive(Deserialize)]
struct CircleElem {
    cx: f32,
    cy: f32,
    r: f32,
}

fn read_rigid_body(index: usize, elem: &Value) -> Result<RigidBodyDef, FormatError> {
    let mut at = BodyRef { index, name: None };
    let obj = elem
        .as_object()
        .ok_or_else(|| FormatError::invalid("rigidBodies", Some(at.clone()), "expected an object"))?;

    let name: String = field(obj, "name", &at)?;
    at.name = Some(name.clone());

    let image_path: String = field(obj, "imagePath", &at)?;
    let origin: Vec2 = object_field(obj, "origin", 0, &at)?;

    let polygons: Vec<Vec<Vec2>> = object_field(obj, "polygons", 2, &at)?;
    let circles: Vec<CircleElem> = object_field(obj, "circles", 1, &at)?;

    Ok(RigidBodyDef {
        name,
        image_path,
        origin,
        polygons: polygons.into_iter().map(PolygonDef::new).collect(),
        circles: circles
            .into_iter()
            .map(|c| CircleDef::new(Vec2::new(c.cx, c.cy), c.r))
            .collect(),
    })
}

fn field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &'static str,
    at: &BodyRef,
) -> Result<T, FormatError> {
    let value = obj
        .get(key)
        .ok_or_else(|| FormatError::missing(key, Some(at.clone())))?;
    T::deserialize(value).map_err(|e| FormatError::invalid(key, Some(at.clone()), e.to_string()))
}

/// Like `field`, but the values `depth` arrays deep must be JSON objects.
fn object_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &'static str,
    depth: usize,
    at: &BodyRef,
) -> Result<T, FormatError> {
    if let Some(value) = obj.get(key) {
        if !objects_at(value, depth) {
            return Err(FormatError::invalid(key, Some(at.clone()), "expected an object"));
        }
    }
    field(obj, key, at)
}

// Non-array values above the target depth are left for the typed decode to
// reject with its own message.
fn objects_at(value: &Value, depth: usize) -> bool {
    match (depth, value) {
        (0, v) => v.is_object(),
        (_, Value::Array(items)) => items.iter().all(|v| objects_at(v, depth - 1)),
        _ => true,
    }
}
