//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - Toolkit-neutral draw commands and frame assembly
//! - Selection overlay geometry
//! - Color parsing and the resolved palette
//! - A backend trait with a headless recorder and a Canvas 2D backend (wasm32)

mod backend;
#[cfg(target_arch = "wasm32")]
mod canvas;
mod colors;
mod commands;
mod frame;
mod selection;

pub use backend::{RecordingBackend, RenderBackend};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use colors::{parse_color, CssColor, Palette, Rgb};
pub use commands::{DrawCommand, TextKind};
pub use frame::build_frame;
pub use selection::{cell_rect, selection_overlay, PixelRect, SelectionOverlay};

use crate::error::Result;

/// Renderer enum wrapping available backends for runtime switching.
#[derive(Debug)]
pub enum Renderer {
    /// In-memory recorder (headless hosts, tests).
    Recording(RecordingBackend),
    /// Canvas 2D backend.
    #[cfg(target_arch = "wasm32")]
    Canvas(CanvasRenderer),
}

impl Renderer {
    /// Delegate `init()` to the active backend.
    pub fn init(&mut self) -> Result<()> {
        match self {
            Self::Recording(r) => r.init(),
            #[cfg(target_arch = "wasm32")]
            Self::Canvas(r) => r.init(),
        }
    }

    /// Delegate `resize()` to the active backend.
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        match self {
            Self::Recording(r) => r.resize(width, height, dpr),
            #[cfg(target_arch = "wasm32")]
            Self::Canvas(r) => r.resize(width, height, dpr),
        }
    }

    /// Draw one frame.
    pub fn render(&mut self, commands: &[DrawCommand]) -> Result<()> {
        match self {
            Self::Recording(r) => r.render(commands),
            #[cfg(target_arch = "wasm32")]
            Self::Canvas(r) => r.render(commands),
        }
    }

    /// Font metrics of the backend, if it draws real text.
    pub fn text_measure(&self) -> Option<&dyn crate::source::TextMeasure> {
        match self {
            Self::Recording(_) => None,
            #[cfg(target_arch = "wasm32")]
            Self::Canvas(r) => Some(r),
        }
    }

    /// Get current width.
    pub fn width(&self) -> u32 {
        match self {
            Self::Recording(r) => r.width(),
            #[cfg(target_arch = "wasm32")]
            Self::Canvas(r) => r.width(),
        }
    }

    /// Get current height.
    pub fn height(&self) -> u32 {
        match self {
            Self::Recording(r) => r.height(),
            #[cfg(target_arch = "wasm32")]
            Self::Canvas(r) => r.height(),
        }
    }
}
