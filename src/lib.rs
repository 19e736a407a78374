//! matview - virtualized grid viewer for matrices and nested values
//!
//! Shows 2-D matrices and structured values (lists, maps, records) as
//! scrollable, selectable grids:
//! - Only the visible page is ever formatted or drawn
//! - Scrollbar, wheel and thumb-drag scrolling with clamped offsets
//! - Mouse selection of cells, rows and columns with autoscroll and shift-extend
//! - Clicking a nested value opens it in a new tab
//! - Toolkit-neutral draw commands, with a Canvas 2D backend for the web
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { MatView } from 'matview';
//! await init();
//! const viewer = new MatView(canvas, dpr);
//! viewer.view_matrix(1000, 50, data);
//! ```

pub mod container;
pub mod error;
pub mod layout;
pub mod render;
pub mod source;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use container::{EventLoop, TabHandle, ViewerManager, Window, WindowId};
pub use error::{MatviewError, Result};
pub use source::{CellSource, MonospaceMeasure, Source, TextMeasure};
pub use types::*;
pub use viewer::{GridView, ViewEvent};
#[cfg(target_arch = "wasm32")]
pub use viewer::MatView;

/// Convert a JSON document into the value model a viewer displays.
///
/// Arrays of equal-length numeric arrays become matrices.
///
/// # Errors
/// Returns an error if `json` is not valid JSON.
#[wasm_bindgen]
pub fn parse_value(json: &str) -> std::result::Result<JsValue, JsValue> {
    let value = ViewValue::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
