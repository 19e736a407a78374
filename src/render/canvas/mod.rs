//! Canvas 2D rendering backend.
//!
//! Replays draw commands on an HTML canvas via web-sys. Grid frames are only
//! rectangles, lines and single-line text, which Canvas 2D handles directly.

mod renderer;

pub use renderer::CanvasRenderer;
