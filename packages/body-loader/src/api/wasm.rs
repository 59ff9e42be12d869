use js_sys::{Array, Float32Array};
use wasm_bindgen::prelude::*;

use crate::loader::BodyLoader;
use crate::systems::FixtureList;

/// JS-facing loader. Fixture geometry crosses the boundary as flat
/// `Float32Array`s so the host physics binding can consume it directly.
#[wasm_bindgen(js_name = BodyLoader)]
pub struct WasmBodyLoader {
    inner: BodyLoader,
}

#[wasm_bindgen(js_class = BodyLoader)]
impl WasmBodyLoader {
    /// Parse an editor document. Throws with the load error message.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<WasmBodyLoader, JsValue> {
        let inner = BodyLoader::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn image_path(&self, name: &str) -> Result<String, JsValue> {
        self.inner
            .image_path(name)
            .map(str::to_string)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `[x, y]`
    pub fn scaled_origin(&self, name: &str, scale: f32) -> Result<Float32Array, JsValue> {
        let origin = self
            .inner
            .scaled_origin(name, scale)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Float32Array::from(&[origin.x, origin.y][..]))
    }

    /// One `Float32Array` of `x, y` pairs per polygon.
    pub fn polygon_fixtures(&self, name: &str, scale: f32) -> Result<Array, JsValue> {
        let fixtures = self.fixtures(name, scale)?;
        let out = Array::new();
        for vertices in fixtures.polygons() {
            let flat: Vec<f32> = vertices.iter().flat_map(|v| [v.x, v.y]).collect();
            out.push(&Float32Array::from(flat.as_slice()));
        }
        Ok(out)
    }

    /// `cx, cy, r` triples, one per circle.
    pub fn circle_fixtures(&self, name: &str, scale: f32) -> Result<Float32Array, JsValue> {
        let fixtures = self.fixtures(name, scale)?;
        let flat: Vec<f32> = fixtures
            .circles()
            .flat_map(|(center, radius)| [center.x, center.y, radius])
            .collect();
        Ok(Float32Array::from(flat.as_slice()))
    }

    pub fn body_names(&self) -> Array {
        self.inner
            .body_names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Editor document of the currently loaded model.
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner
            .internal_model()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl WasmBodyLoader {
    fn fixtures(&self, name: &str, scale: f32) -> Result<FixtureList, JsValue> {
        let mut out = FixtureList::new();
        self.inner
            .attach_fixtures(name, scale, &mut out)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(out)
    }
}
