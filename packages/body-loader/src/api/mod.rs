//! Public API bindings.

pub mod wasm;
