//! Page-size, offset and scrollbar arithmetic.
//!
//! Everything here is pure: given an extent, cell metrics and a viewport it
//! returns how many whole cells fit, how far the grid may scroll and where
//! the scrollbar thumbs sit.

use std::ops::Range;

use serde::Serialize;

use super::Viewport;
use crate::error::{MatviewError, Result};
use crate::source::{CellSource, TextMeasure};
use crate::types::{Axis, GridStyle, LogicalExtent};

/// Pixel size of one cell and of the row-heading column.
///
/// The column-heading row is one `cell_height` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
    pub row_heading_width: u32,
}

impl CellMetrics {
    /// # Errors
    /// Returns [`MatviewError::InvalidMetrics`] when any dimension is zero.
    pub fn new(cell_width: u32, cell_height: u32, row_heading_width: u32) -> Result<Self> {
        if cell_width == 0 || cell_height == 0 || row_heading_width == 0 {
            return Err(MatviewError::InvalidMetrics(format!(
                "cell {cell_width}x{cell_height}, row heading {row_heading_width} must all be positive"
            )));
        }
        Ok(Self {
            cell_width,
            cell_height,
            row_heading_width,
        })
    }

    /// Derive metrics from the widest texts a source will display.
    ///
    /// # Errors
    /// Fails when the measured sizes collapse to zero.
    pub fn measure<S: CellSource + ?Sized>(
        source: &S,
        measure: &dyn TextMeasure,
        style: &GridStyle,
    ) -> Result<Self> {
        let hpad = style.cell_hpadding.saturating_mul(2);
        let vpad = style.cell_vpadding.saturating_mul(2);
        Self::new(
            source.max_cell_text_width(measure).saturating_add(hpad),
            measure.font_size().saturating_add(vpad),
            source.max_row_heading_width(measure).saturating_add(hpad),
        )
    }

    /// Size of one cell along an axis.
    pub const fn cell_size(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.cell_width,
            Axis::Vertical => self.cell_height,
        }
    }

    /// Pixel offset where the data region starts along an axis.
    pub const fn data_origin(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.row_heading_width,
            Axis::Vertical => self.cell_height,
        }
    }
}

/// Number of whole cells visible along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PageSize {
    pub columns: u32,
    pub rows: u32,
}

impl PageSize {
    pub const fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.columns,
            Axis::Vertical => self.rows,
        }
    }
}

/// Scrollbar thumb position as fractions of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollbarPosition {
    pub start: f64,
    pub end: f64,
}

impl ScrollbarPosition {
    /// Thumb covering the whole track (nothing to scroll).
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };
}

fn whole_cells(available_px: i64, cell_px: u32, extent: u32) -> u32 {
    let cells = available_px.max(0) / i64::from(cell_px.max(1));
    u32::try_from(cells).unwrap_or(u32::MAX).min(extent)
}

/// Whole cells that fit in the viewport, capped at the extent.
///
/// The first `cell_height` band is reserved for the column headings and the
/// first `row_heading_width` pixels for the row headings.
pub fn compute_page_size(
    viewport: &Viewport,
    metrics: &CellMetrics,
    extent: LogicalExtent,
) -> PageSize {
    PageSize {
        columns: whole_cells(
            i64::from(viewport.width) - i64::from(metrics.row_heading_width),
            metrics.cell_width,
            extent.columns,
        ),
        rows: whole_cells(
            i64::from(viewport.height) - i64::from(metrics.cell_height),
            metrics.cell_height,
            extent.rows,
        ),
    }
}

/// Largest valid offset along one axis.
pub const fn max_offset(extent: u32, page: u32) -> u32 {
    extent.saturating_sub(page)
}

/// Clamp any candidate offset into `[0, max_offset]`.
pub fn clamp_offset(offset: i64, extent: u32, page: u32) -> u32 {
    let max = max_offset(extent, page);
    u32::try_from(offset.clamp(0, i64::from(max))).unwrap_or(max)
}

/// Thumb position for one axis.
pub fn scrollbar_fraction(offset: u32, page: u32, extent: u32) -> ScrollbarPosition {
    if extent == 0 || page >= extent {
        return ScrollbarPosition::FULL;
    }
    let total = f64::from(extent);
    ScrollbarPosition {
        start: f64::from(offset) / total,
        end: (f64::from(offset) + f64::from(page)) / total,
    }
}

/// Logical indices drawn along one axis: the page plus one partial trailing cell.
pub fn visible_range(offset: u32, page: u32, extent: u32) -> Range<u32> {
    let end = offset.saturating_add(page).saturating_add(1).min(extent);
    offset.min(end)..end
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn metrics() -> CellMetrics {
        CellMetrics::new(20, 20, 30).unwrap()
    }

    #[test]
    fn page_size_reserves_heading_band() {
        let page = compute_page_size(
            &Viewport::new(130, 105),
            &metrics(),
            LogicalExtent::new(100, 100),
        );
        assert_eq!(page, PageSize { columns: 5, rows: 4 });
    }

    #[test]
    fn page_size_floors_at_zero() {
        let page = compute_page_size(&Viewport::new(10, 10), &metrics(), LogicalExtent::new(5, 5));
        assert_eq!(page, PageSize::default());
    }

    #[test]
    fn clamp_handles_negative_and_oversized() {
        assert_eq!(clamp_offset(-5, 10, 3), 0);
        assert_eq!(clamp_offset(100, 10, 3), 7);
        assert_eq!(clamp_offset(4, 10, 3), 4);
        assert_eq!(clamp_offset(4, 2, 3), 0);
    }

    #[test]
    fn scrollbar_fraction_fills_track_without_scrolling() {
        assert_eq!(scrollbar_fraction(0, 10, 10), ScrollbarPosition::FULL);
        assert_eq!(scrollbar_fraction(0, 0, 0), ScrollbarPosition::FULL);
        let pos = scrollbar_fraction(25, 25, 100);
        assert_eq!((pos.start, pos.end), (0.25, 0.5));
    }

    #[test]
    fn visible_range_includes_partial_cell() {
        assert_eq!(visible_range(3, 4, 100), 3..8);
        assert_eq!(visible_range(8, 4, 10), 8..10);
        assert_eq!(visible_range(0, 0, 0), 0..0);
    }

    #[test]
    fn zero_metrics_are_rejected() {
        assert!(CellMetrics::new(0, 10, 10).is_err());
    }
}
