//! Domain - body definitions and how they are read from editor documents.

pub mod document;
pub mod model;

pub use document::parse_document;
pub use model::{CircleDef, GeometryModel, PolygonDef, RigidBodyDef};
