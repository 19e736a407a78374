//! Viewport size and scroll offsets.

use super::{clamp_offset, PageSize};
use crate::types::{Axis, LogicalExtent};

/// Pixel size of the drawing area, including the heading bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// First visible column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub column_offset: u32,
    pub row_offset: u32,
}

impl ScrollState {
    pub const fn offset(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.column_offset,
            Axis::Vertical => self.row_offset,
        }
    }

    pub fn set_offset(&mut self, axis: Axis, offset: u32) {
        match axis {
            Axis::Horizontal => self.column_offset = offset,
            Axis::Vertical => self.row_offset = offset,
        }
    }

    /// Pull both offsets back into range after the page size changed.
    ///
    /// Returns true if either offset moved.
    pub fn clamp(&mut self, extent: LogicalExtent, page: PageSize) -> bool {
        let before = *self;
        self.column_offset = clamp_offset(
            i64::from(self.column_offset),
            extent.columns,
            page.columns,
        );
        self.row_offset = clamp_offset(i64::from(self.row_offset), extent.rows, page.rows);
        before != *self
    }
}
