//! Geometry Model: rigid body definitions exactly as the editor exported them.
//!
//! Coordinates are normalized (image width = 1.0) and relative to the image's
//! bottom-left corner. Nothing here is scaled or offset by the body origin;
//! that happens only when fixtures are built, so one model serves any scale.

use std::collections::HashMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::Vec2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryModel {
    rigid_bodies: HashMap<String, RigidBodyDef>,
}

impl GeometryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rigid_bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rigid_bodies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RigidBodyDef> {
        self.rigid_bodies.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RigidBodyDef> {
        self.rigid_bodies.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rigid_bodies.contains_key(name)
    }

    /// Insert keyed by `body.name`. Returns the definition it replaced, if any.
    pub fn insert(&mut self, body: RigidBodyDef) -> Option<RigidBodyDef> {
        self.rigid_bodies.insert(body.name.clone(), body)
    }

    pub fn remove(&mut self, name: &str) -> Option<RigidBodyDef> {
        self.rigid_bodies.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RigidBodyDef> {
        self.rigid_bodies.values()
    }

    /// Body names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rigid_bodies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Bodies in lexicographic name order.
    pub fn sorted(&self) -> Vec<&RigidBodyDef> {
        let mut bodies: Vec<&RigidBodyDef> = self.rigid_bodies.values().collect();
        bodies.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        bodies
    }

    /// Re-serialize in the editor's document schema.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let out = DocumentOut {
            rigid_bodies: self.sorted(),
        };
        serde_json::to_string(&out)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentOut<'a> {
    rigid_bodies: Vec<&'a RigidBodyDef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RigidBodyDef {
    /// Always equal to the key this body is stored under.
    pub name: String,
    /// Opaque to the loader; handed back to the renderer as-is.
    pub image_path: String,
    /// Reference point (the red cross in the editor), normalized.
    pub origin: Vec2,
    pub polygons: Vec<PolygonDef>,
    pub circles: Vec<CircleDef>,
}

/// Vertices in the winding the editor produced. Convexity and vertex limits
/// are the physics layer's concern.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolygonDef {
    pub vertices: Vec<Vec2>,
}

impl PolygonDef {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleDef {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleDef {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

// The document stores circles flat as `{ cx, cy, r }`.
impl Serialize for CircleDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CircleDef", 3)?;
        state.serialize_field("cx", &self.center.x)?;
        state.serialize_field("cy", &self.center.y)?;
        state.serialize_field("r", &self.radius)?;
        state.end()
    }
}
