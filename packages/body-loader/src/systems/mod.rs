//! Systems - turning stored definitions into fixture geometry.

pub mod bake;
pub mod fixtures;

pub use bake::{bake_all, BakedBody};
pub use fixtures::{attach_body, Fixture, FixtureBuilder, FixtureList, FixtureSink};
