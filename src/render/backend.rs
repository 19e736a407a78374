//! Render backend trait for pluggable rendering implementations.
//!
//! Backends replay a frame's [`DrawCommand`] list on a concrete surface.

use tracing::debug;

use super::commands::DrawCommand;
use crate::error::Result;

/// Trait for render backends
///
/// Implementations handle the actual drawing operations for different
/// rendering technologies (Canvas 2D, an in-memory recorder).
pub trait RenderBackend {
    /// Initialize the backend
    fn init(&mut self) -> Result<()>;

    /// Resize the render surface
    fn resize(&mut self, width: u32, height: u32, dpr: f32);

    /// Draw one frame
    fn render(&mut self, commands: &[DrawCommand]) -> Result<()>;

    /// Get the current width
    fn width(&self) -> u32;

    /// Get the current height
    fn height(&self) -> u32;
}

/// Headless backend that keeps the last frame it was given.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    width: u32,
    height: u32,
    dpr: f32,
    frames: usize,
    last_frame: Vec<DrawCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }
}

impl RenderBackend for RecordingBackend {
    fn init(&mut self) -> Result<()> {
        self.frames = 0;
        self.last_frame.clear();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
    }

    fn render(&mut self, commands: &[DrawCommand]) -> Result<()> {
        debug!(commands = commands.len(), "recorded frame");
        self.frames += 1;
        self.last_frame = commands.to_vec();
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
