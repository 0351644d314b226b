//! Structured error types for vgrid.
//!
//! Geometry queries, region resolution and the interaction controllers never
//! fail: they clamp and fall back to sentinel indices. Errors only surface at
//! the configuration boundary (loading a [`GridConfig`](crate::types::GridConfig)
//! and the CLI's file handling).

/// All errors that can occur while loading or validating a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration that violates a grid invariant.
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
