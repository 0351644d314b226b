//! JavaScript export of `GridView`.
//!
//! Resolved regions cross the boundary as plain objects whose indices use the
//! numeric sentinels (-1, -2, -Infinity). Exceptions thrown by registered
//! callbacks are logged through `tracing` and otherwise ignored.

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::GridView;
use crate::interaction::GridCallbacks;
use crate::types::{CombinedSelection, ResolvedRegion};

fn region_to_js(region: ResolvedRegion) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&region)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[allow(clippy::cast_precision_loss)]
fn index_to_js(index: usize) -> JsValue {
    JsValue::from_f64(index as f64)
}

/// Log an exception thrown by a host callback. Commits are not retried.
fn report(callback: &str, result: Result<JsValue, JsValue>) {
    if let Err(err) = result {
        tracing::warn!(callback, error = ?err, "host callback threw");
    }
}

/// JS functions registered by the host page.
#[derive(Default)]
struct JsCallbacks {
    on_column_resize: Option<Function>,
    on_column_freeze_change: Option<Function>,
    on_resize_preview: Option<Function>,
    on_selection_change: Option<Function>,
}

impl GridCallbacks for JsCallbacks {
    fn on_column_resize(&mut self, column_index: usize, width: f32) {
        if let Some(f) = &self.on_column_resize {
            report(
                "onColumnResize",
                f.call2(
                    &JsValue::NULL,
                    &index_to_js(column_index),
                    &JsValue::from_f64(f64::from(width)),
                ),
            );
        }
    }

    fn on_column_freeze_change(&mut self, freeze_column_count: usize) {
        if let Some(f) = &self.on_column_freeze_change {
            report(
                "onColumnFreezeChange",
                f.call1(&JsValue::NULL, &index_to_js(freeze_column_count)),
            );
        }
    }

    fn on_resize_preview(&mut self, column_index: usize, width: f32) {
        if let Some(f) = &self.on_resize_preview {
            report(
                "onResizePreview",
                f.call2(
                    &JsValue::NULL,
                    &index_to_js(column_index),
                    &JsValue::from_f64(f64::from(width)),
                ),
            );
        }
    }

    fn on_selection_change(&mut self, selection: &CombinedSelection) {
        let Some(f) = &self.on_selection_change else {
            return;
        };
        match serde_wasm_bindgen::to_value(selection) {
            Ok(value) => report("onSelectionChange", f.call1(&JsValue::NULL, &value)),
            Err(e) => tracing::warn!(error = %e, "selection serialization failed"),
        }
    }
}

/// A grid instance driven from JavaScript.
#[wasm_bindgen]
pub struct GridHandle {
    view: GridView,
    callbacks: JsCallbacks,
}

#[wasm_bindgen]
impl GridHandle {
    /// Create a grid from a JSON configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is malformed or invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GridHandle, JsValue> {
        console_error_panic_hook::set_once();
        let view = GridView::from_json(config_json)?;
        Ok(Self {
            view,
            callbacks: JsCallbacks::default(),
        })
    }

    /// `callback(columnIndex, width)`, called once per finished resize.
    pub fn set_on_column_resize(&mut self, callback: Option<Function>) {
        self.callbacks.on_column_resize = callback;
    }

    /// `callback(freezeColumnCount)`, called once per finished freeze drag.
    pub fn set_on_column_freeze_change(&mut self, callback: Option<Function>) {
        self.callbacks.on_column_freeze_change = callback;
    }

    /// `callback(columnIndex, width)`, called on every resize move.
    pub fn set_on_resize_preview(&mut self, callback: Option<Function>) {
        self.callbacks.on_resize_preview = callback;
    }

    /// `callback(selection)`, called whenever the selection changes.
    pub fn set_on_selection_change(&mut self, callback: Option<Function>) {
        self.callbacks.on_selection_change = callback;
    }

    /// Resolve a viewport position without changing state.
    pub fn resolve(&self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        region_to_js(self.view.resolve(x, y))
    }

    pub fn on_mouse_down(&mut self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        region_to_js(self.view.pointer_down(x, y, &mut self.callbacks))
    }

    pub fn on_mouse_move(&mut self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        region_to_js(self.view.pointer_move(x, y, &mut self.callbacks))
    }

    pub fn on_mouse_up(&mut self) {
        self.view.pointer_up(&mut self.callbacks);
    }

    /// Route a DOM mouse event using its offset coordinates.
    #[allow(clippy::cast_precision_loss)]
    pub fn on_mouse_event(&mut self, event: &MouseEvent) -> Result<JsValue, JsValue> {
        let x = event.offset_x() as f32;
        let y = event.offset_y() as f32;
        match event.type_().as_str() {
            "mousedown" | "pointerdown" => self.on_mouse_down(x, y),
            "mouseup" | "pointerup" => {
                self.on_mouse_up();
                Ok(JsValue::NULL)
            }
            "mousemove" | "pointermove" => self.on_mouse_move(x, y),
            "mouseleave" | "pointercancel" => {
                self.cancel();
                Ok(JsValue::NULL)
            }
            _ => Ok(JsValue::NULL),
        }
    }

    pub fn cancel(&mut self) {
        self.view.cancel();
    }

    pub fn cursor(&self) -> String {
        self.view.cursor().to_string()
    }

    pub fn set_scroll(&mut self, scroll_left: f32, scroll_top: f32) {
        self.view.set_scroll(scroll_left, scroll_top);
    }

    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.view.set_container_size(width, height);
    }

    pub fn apply_column_width(&mut self, index: usize, width: f32) -> bool {
        self.view.apply_column_width(index, width)
    }

    pub fn apply_freeze_column_count(&mut self, count: usize) {
        self.view.apply_freeze_column_count(count);
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.view.set_row_count(row_count);
    }

    pub fn total_width(&self) -> f32 {
        self.view.coords().total_width()
    }

    pub fn total_height(&self) -> f32 {
        self.view.coords().total_height()
    }

    pub fn freeze_region_width(&self) -> f32 {
        self.view.coords().freeze_region_width()
    }

    pub fn resize_preview_x(&self) -> Option<f32> {
        self.view.resize_preview_x()
    }

    pub fn freeze_indicator_x(&self) -> Option<f32> {
        self.view.freeze_indicator_x()
    }

    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.view.selection())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
