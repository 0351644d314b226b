//! vgrid - virtualized grid geometry and pointer hit-testing
//!
//! Maps pointer positions on a scrolled, partially frozen grid to semantic
//! regions, and drives the gestures that start from them:
//! - Column/row offsets and index lookups over 100k+ rows
//! - Frozen leading columns that ignore horizontal scroll
//! - Region resolution (headers, resize and freeze handles, append targets, cells)
//! - Column resize and freeze-boundary drags with a single commit on release
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridHandle } from 'vgrid';
//! await init();
//! const grid = new GridHandle(JSON.stringify(config));
//! grid.set_on_column_resize((col, width) => { /* persist */ });
//! canvas.addEventListener('mousedown', (e) => grid.on_mouse_event(e));
//! ```

pub mod error;
pub mod interaction;
pub mod layout;
pub mod region;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::GridError;
pub use interaction::{GridCallbacks, InteractionKind};
pub use layout::{CoordinateManager, ScrollState};
pub use region::{resolve_region, RegionContext};
pub use viewer::GridView;
#[cfg(target_arch = "wasm32")]
pub use viewer::GridHandle;

pub use types::*;

/// Resolve one viewport position against a JSON grid configuration.
///
/// Returns the resolved region as a JSON string. Scroll offsets are taken
/// as zero. Indices are numbers with the -1 and -2 sentinels; a pointer left
/// of the grid has a `null` column index, JSON's stand-in for -Infinity.
///
/// # Errors
/// Returns an error if the configuration is malformed or invalid.
#[wasm_bindgen]
pub fn resolve_region_json(config_json: &str, x: f32, y: f32) -> Result<String, JsValue> {
    let view = GridView::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&view.resolve(x, y))
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
