//! Structured error types for matview.
//!
//! Only construction can fail: coordinate handling in the grid view clamps
//! instead of erroring.

/// All errors that can occur while building views and rendering them.
#[derive(Debug, thiserror::Error)]
pub enum MatviewError {
    /// A data source reported a negative row or column count.
    #[error("Invalid extent: {rows} rows x {columns} columns")]
    InvalidExtent { rows: i64, columns: i64 },

    /// Matrix data does not match its declared shape.
    #[error("Shape mismatch: {rows} x {columns} needs {expected} values, got {actual}")]
    ShapeMismatch {
        rows: u32,
        columns: u32,
        expected: usize,
        actual: usize,
    },

    /// Cell metrics must be strictly positive.
    #[error("Invalid cell metrics: {0}")]
    InvalidMetrics(String),

    /// A style color could not be parsed.
    #[error("Invalid {name} color: {value:?}")]
    InvalidColor { name: String, value: String },

    /// JSON conversion error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatviewError>;

impl From<String> for MatviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for MatviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<MatviewError> for wasm_bindgen::JsValue {
    fn from(e: MatviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
