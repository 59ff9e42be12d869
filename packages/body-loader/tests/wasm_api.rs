#![cfg(target_arch = "wasm32")]

use particula_body_loader::api::wasm::WasmBodyLoader;
use wasm_bindgen_test::*;

const DOC: &str = r#"{"rigidBodies": [{
    "name": "box", "imagePath": "gfx/box.png", "origin": {"x": 0.5, "y": 0},
    "polygons": [[{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}, {"x": 0, "y": 1}]],
    "circles": [{"cx": 0.5, "cy": 0.5, "r": 0.25}]
}]}"#;

#[wasm_bindgen_test]
fn polygon_fixtures_are_flat_pairs() {
    let loader = WasmBodyLoader::new(DOC).unwrap();
    let polygons = loader.polygon_fixtures("box", 2.0).unwrap();
    assert_eq!(polygons.length(), 1);

    let flat = js_sys::Float32Array::from(polygons.get(0)).to_vec();
    assert_eq!(flat, vec![-1.0, 0.0, 1.0, 0.0, 1.0, 2.0, -1.0, 2.0]);
}

#[wasm_bindgen_test]
fn circle_fixtures_are_triples() {
    let loader = WasmBodyLoader::new(DOC).unwrap();
    let circles = loader.circle_fixtures("box", 4.0).unwrap().to_vec();
    assert_eq!(circles, vec![0.0, 2.0, 1.0]);
}

#[wasm_bindgen_test]
fn unknown_name_throws() {
    let loader = WasmBodyLoader::new(DOC).unwrap();
    assert!(loader.image_path("crate").is_err());
    assert!(loader.scaled_origin("crate", 1.0).is_err());
}
