//! BodyLoader - entry point for games attaching editor-defined shapes.
//!
//! The reference point of a body (the red cross in the editor, bottom-left
//! corner of the image by default) ends up on the physics body's position.
//! Shapes are normalized so the image is 1 unit wide; pass the world width you
//! want as `scale`.

use std::fs;
use std::path::Path;

use crate::core::{LoadError, NotFoundError, Vec2};
use crate::domain::{parse_document, GeometryModel, RigidBodyDef};
use crate::systems::{FixtureBuilder, FixtureSink};

#[derive(Clone, Debug)]
pub struct BodyLoader {
    model: GeometryModel,
}

impl BodyLoader {
    pub fn new(model: GeometryModel) -> Self {
        Self { model }
    }

    /// Read and parse a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a document already held in memory.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(Self::new(parse_document(text)?))
    }

    /// Build fixtures for `name` at `scale` and hand them to `sink`.
    ///
    /// Each polygon vertex and circle center becomes `p * scale - origin * scale`,
    /// circle radii become `r * scale`. Polygons are emitted before circles,
    /// each kind in document order. Nothing reaches `sink` on error.
    pub fn attach_fixtures<S: FixtureSink + ?Sized>(
        &self,
        name: &str,
        scale: f32,
        sink: &mut S,
    ) -> Result<(), NotFoundError> {
        FixtureBuilder::new().attach(&self.model, name, scale, sink)
    }

    pub fn image_path(&self, name: &str) -> Result<&str, NotFoundError> {
        Ok(self.body(name)?.image_path.as_str())
    }

    /// Normalized reference point, unscaled.
    pub fn origin(&self, name: &str) -> Result<Vec2, NotFoundError> {
        Ok(self.body(name)?.origin)
    }

    /// Reference point scaled to world size. Draw the body's image offset by
    /// this amount to line it up with the fixtures.
    pub fn scaled_origin(&self, name: &str, scale: f32) -> Result<Vec2, NotFoundError> {
        Ok(self.body(name)?.origin * scale)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.model.contains(name)
    }

    pub fn body_names(&self) -> Vec<&str> {
        self.model.names()
    }

    pub fn internal_model(&self) -> &GeometryModel {
        &self.model
    }

    /// **Advanced.** Mutable access to the loaded definitions. Changes are
    /// permanent for this loader and seen by every later call; nothing
    /// re-checks them (e.g. a body renamed without re-keying stays reachable
    /// only under its old key).
    pub fn internal_model_mut(&mut self) -> &mut GeometryModel {
        &mut self.model
    }

    fn body(&self, name: &str) -> Result<&RigidBodyDef, NotFoundError> {
        self.model.get(name).ok_or_else(|| NotFoundError::new(name))
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
