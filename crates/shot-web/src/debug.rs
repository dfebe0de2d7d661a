//! Scenario hooks for end-to-end tests. Compiled with `debug-hooks` only.

use shot_engine::{BallId, TestControl};
use wasm_bindgen::prelude::*;

use crate::{read_runner, to_js, with_runner};

/// Replace the table with a JSON layout in one call.
#[wasm_bindgen]
pub fn debug_load_layout(json: &str) -> Result<(), JsValue> {
    with_runner(|r| {
        let result = TestControl::new(r.engine_mut()).load_layout_json(json);
        r.refresh();
        result
    })?
    .map_err(to_js)
}

#[wasm_bindgen]
pub fn debug_snapshot() -> Result<String, JsValue> {
    read_runner(|r| TestControl::snapshot_json_of(r.engine()))?.map_err(to_js)
}

#[wasm_bindgen]
pub fn debug_place_ball(id: &str, x: f64, y: f64) -> Result<(), JsValue> {
    with_runner(|r| {
        let result = id
            .parse::<BallId>()
            .and_then(|id| TestControl::new(r.engine_mut()).place_ball(id, x, y));
        r.refresh();
        result
    })?
    .map_err(to_js)
}

#[wasm_bindgen]
pub fn debug_clear_table() -> Result<(), JsValue> {
    with_runner(|r| {
        TestControl::new(r.engine_mut()).clear_table();
        r.refresh();
    })
}
