//! Browser smoke tests for the `GridHandle` export.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use js_sys::Function;
use vgrid::GridHandle;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CONFIG: &str = r#"{
    "columns": [{"id": "a", "width": 80}, {"id": "b", "width": 80}, {"id": "c", "width": 80}],
    "rowCount": 10,
    "headerHeight": 24
}"#;

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_resolve_uses_numeric_sentinels() {
    let grid = GridHandle::new(CONFIG).unwrap();
    let header = grid.resolve(85.0, 10.0).unwrap();
    assert_eq!(field(&header, "regionType").as_string().as_deref(), Some("columnHeader"));
    assert_eq!(field(&header, "columnIndex").as_f64(), Some(1.0));
    assert_eq!(field(&header, "rowIndex").as_f64(), Some(-1.0));

    let before = grid.resolve(-5.0, 100.0).unwrap();
    assert_eq!(field(&before, "columnIndex").as_f64(), Some(f64::NEG_INFINITY));
}

#[wasm_bindgen_test]
fn test_resize_gesture_round_trip() {
    let mut grid = GridHandle::new(CONFIG).unwrap();
    grid.on_mouse_down(79.0, 10.0).unwrap();
    assert_eq!(grid.cursor(), "col-resize");
    grid.on_mouse_move(100.0, 10.0).unwrap();
    grid.on_mouse_up();
    assert!(grid.apply_column_width(0, 101.0));
    assert_eq!(grid.total_width(), 261.0);
}

#[wasm_bindgen_test]
fn test_invalid_config_is_an_error() {
    assert!(GridHandle::new(r#"{"freezeColumnCount": 4}"#).is_err());
}

#[wasm_bindgen_test]
fn test_throwing_callback_does_not_break_the_gesture() {
    let mut grid = GridHandle::new(CONFIG).unwrap();
    grid.set_on_column_resize(Some(Function::new_with_args(
        "col, width",
        "throw new Error('rejected')",
    )));
    grid.on_mouse_down(79.0, 10.0).unwrap();
    grid.on_mouse_move(100.0, 10.0).unwrap();
    grid.on_mouse_up();
    assert_eq!(grid.resize_preview_x(), None);
    assert!(grid.on_mouse_down(85.0, 100.0).is_ok());
}

#[wasm_bindgen_test]
fn test_unrecognised_event_types_are_ignored() {
    let mut grid = GridHandle::new(CONFIG).unwrap();
    for kind in ["click", "contextmenu", "mouseenter"] {
        let event = MouseEvent::new(kind).unwrap();
        assert!(grid.on_mouse_event(&event).unwrap().is_null(), "{kind}");
    }
    let moved = grid.on_mouse_event(&MouseEvent::new("mousemove").unwrap()).unwrap();
    assert!(!moved.is_null());
}
