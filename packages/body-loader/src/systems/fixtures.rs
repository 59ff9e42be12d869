//! Fixture Transformer: normalized body shapes -> world-scale fixture geometry.
//!
//! For every shape the transform is `point * scale - origin * scale`. Scaling
//! happens first and the already-scaled origin is subtracted after; the order
//! is part of the output contract.

use crate::core::{NotFoundError, Vec2};
use crate::domain::{GeometryModel, RigidBodyDef};

/// Receiver of built fixture geometry, usually backed by a physics body.
///
/// Called once per shape, polygons first, in document order.
pub trait FixtureSink {
    fn create_polygon_fixture(&mut self, vertices: &[Vec2]);
    fn create_circle_fixture(&mut self, center: Vec2, radius: f32);
}

impl<S: FixtureSink + ?Sized> FixtureSink for &mut S {
    fn create_polygon_fixture(&mut self, vertices: &[Vec2]) {
        (**self).create_polygon_fixture(vertices);
    }

    fn create_circle_fixture(&mut self, center: Vec2, radius: f32) {
        (**self).create_circle_fixture(center, radius);
    }
}

/// One fixture as handed to a sink.
#[derive(Clone, Debug, PartialEq)]
pub enum Fixture {
    Polygon(Vec<Vec2>),
    Circle { center: Vec2, radius: f32 },
}

/// Sink that records fixtures in call order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixtureList {
    pub fixtures: Vec<Fixture>,
}

impl FixtureList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Vec2]> {
        self.fixtures.iter().filter_map(|f| match f {
            Fixture::Polygon(vertices) => Some(vertices.as_slice()),
            Fixture::Circle { .. } => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.fixtures.iter().filter_map(|f| match f {
            Fixture::Circle { center, radius } => Some((*center, *radius)),
            Fixture::Polygon(_) => None,
        })
    }
}

impl FixtureSink for FixtureList {
    fn create_polygon_fixture(&mut self, vertices: &[Vec2]) {
        self.fixtures.push(Fixture::Polygon(vertices.to_vec()));
    }

    fn create_circle_fixture(&mut self, center: Vec2, radius: f32) {
        self.fixtures.push(Fixture::Circle { center, radius });
    }
}

/// Reusable transformer. Owns the vertex scratch buffer so repeated
/// attachments do not allocate once it has grown to the largest polygon.
#[derive(Debug, Default)]
pub struct FixtureBuilder {
    scratch: Vec<Vec2>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name` and hand its fixtures to `sink`. The sink is untouched
    /// when the name is unknown.
    pub fn attach<S: FixtureSink + ?Sized>(
        &mut self,
        model: &GeometryModel,
        name: &str,
        scale: f32,
        sink: &mut S,
    ) -> Result<(), NotFoundError> {
        let body = model.get(name).ok_or_else(|| NotFoundError::new(name))?;
        attach_body(body, scale, &mut self.scratch, sink);
        Ok(())
    }
}

/// Transform one body into `sink`, using `scratch` as the vertex buffer.
pub fn attach_body<S: FixtureSink + ?Sized>(
    body: &RigidBodyDef,
    scale: f32,
    scratch: &mut Vec<Vec2>,
    sink: &mut S,
) {
    let origin = body.origin * scale;

    for polygon in &body.polygons {
        scratch.clear();
        scratch.extend(polygon.vertices.iter().map(|&v| v * scale - origin));
        sink.create_polygon_fixture(scratch.as_slice());
    }

    for circle in &body.circles {
        let center = circle.center * scale - origin;
        sink.create_circle_fixture(center, circle.radius * scale);
    }

    log::trace!(
        "attached '{}' at scale {}: {} polygons, {} circles",
        body.name,
        scale,
        body.polygons.len(),
        body.circles.len()
    );
}
