//! Core types shared by every layer: math and errors.

pub mod error;
pub mod vec2;

pub use error::{BodyRef, FormatError, FormatProblem, LoadError, NotFoundError};
pub use vec2::Vec2;
