pub mod runner;

#[cfg(feature = "debug-hooks")]
mod debug;

pub use runner::ShotRunner;

use std::cell::RefCell;

use shot_engine::ShotError;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ShotRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. Fails instead of panicking when
/// `shot_init()` has not been called yet.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut ShotRunner) -> R) -> Result<R, JsValue> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("engine not initialized, call shot_init() first"))?;
        Ok(f(runner))
    })
}

/// Read-only counterpart of [`with_runner`] for queries.
pub(crate) fn read_runner<R>(f: impl FnOnce(&ShotRunner) -> R) -> Result<R, JsValue> {
    RUNNER.with(|cell| {
        let borrow = cell.borrow();
        let runner = borrow
            .as_ref()
            .ok_or_else(|| JsValue::from_str("engine not initialized, call shot_init() first"))?;
        Ok(f(runner))
    })
}

/// Errors cross the boundary as plain strings for the status bar.
pub(crate) fn to_js(err: ShotError) -> JsValue {
    let msg = err.to_string();
    web_sys::console::warn_1(&JsValue::from_str(&msg));
    JsValue::from_str(&msg)
}

fn call(f: impl FnOnce(&mut ShotRunner) -> Result<(), ShotError>) -> Result<(), JsValue> {
    with_runner(f)?.map_err(to_js)
}

/// Create the engine. `config_json` overrides any subset of the defaults.
#[wasm_bindgen]
pub fn shot_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = ShotRunner::from_config_json(config_json.as_deref()).map_err(to_js)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("shot-engine: initialized");
    Ok(())
}

// ---- Table editing ----

#[wasm_bindgen]
pub fn place_ball(id: &str, x: f64, y: f64) -> Result<(), JsValue> {
    call(|r| r.place_ball(id, x, y))
}

#[wasm_bindgen]
pub fn remove_ball(id: &str) -> Result<(), JsValue> {
    call(|r| r.remove_ball(id))
}

#[wasm_bindgen]
pub fn pocket_ball(id: &str) -> Result<(), JsValue> {
    call(|r| r.pocket_ball(id))
}

#[wasm_bindgen]
pub fn rack(kind: &str) -> Result<(), JsValue> {
    call(|r| r.rack(kind))
}

#[wasm_bindgen]
pub fn clear_table() -> Result<(), JsValue> {
    with_runner(|r| r.clear_table())
}

// ---- Selection and stroke ----

#[wasm_bindgen]
pub fn select_object_ball(id: &str) -> Result<(), JsValue> {
    call(|r| r.select_object_ball(id))
}

#[wasm_bindgen]
pub fn select_pocket(id: &str) -> Result<(), JsValue> {
    call(|r| r.select_pocket(id))
}

#[wasm_bindgen]
pub fn set_english(x: f64, y: f64) -> Result<(), JsValue> {
    with_runner(|r| r.set_english(x, y))
}

#[wasm_bindgen]
pub fn set_power(percent: f64) -> Result<(), JsValue> {
    with_runner(|r| r.set_power(percent))
}

// ---- Queries ----

#[wasm_bindgen]
pub fn get_shot_result() -> Result<String, JsValue> {
    read_runner(|r| r.shot_json())?.map_err(to_js)
}

/// Kick off one rail, or the best rail when `rail` is omitted.
#[wasm_bindgen]
pub fn kick_shot(rail: Option<String>) -> Result<String, JsValue> {
    read_runner(|r| r.kick_json(rail.as_deref()))?.map_err(to_js)
}

#[wasm_bindgen]
pub fn get_status() -> Result<String, JsValue> {
    read_runner(|r| r.status().to_string())
}

// ---- Overlay accessors ----

/// Copy of the overlay frame.
#[wasm_bindgen]
pub fn get_overlay() -> Result<js_sys::Float32Array, JsValue> {
    read_runner(|r| js_sys::Float32Array::from(&r.overlay()[..]))
}

/// Pointer into linear memory for zero-copy reads. Valid until the next
/// call that edits the table.
#[wasm_bindgen]
pub fn get_overlay_ptr() -> Result<*const f32, JsValue> {
    read_runner(|r| r.overlay_ptr())
}

#[wasm_bindgen]
pub fn get_overlay_len() -> Result<u32, JsValue> {
    read_runner(|r| r.overlay_len())
}
