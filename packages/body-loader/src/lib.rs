//! Particula Body Loader - collision shapes from Physics Body Editor exports
//!
//! Architecture:
//! - core/          - Vec2 and error types
//! - domain/        - Geometry model and document parsing
//! - systems/       - Fixture building (single body and batch)
//! - loader/        - BodyLoader facade and lookups
//! - api/           - wasm-bindgen bindings

pub mod core;
pub mod domain;
pub mod systems;
pub mod loader;
pub mod api;

use wasm_bindgen::prelude::*;

pub use crate::core::{FormatError, LoadError, NotFoundError, Vec2};
pub use domain::{parse_document, CircleDef, GeometryModel, PolygonDef, RigidBodyDef};
pub use loader::BodyLoader;
pub use systems::{bake_all, BakedBody, Fixture, FixtureBuilder, FixtureList, FixtureSink};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the loader module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Particula body loader initialized".into());
}

/// Get loader version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
