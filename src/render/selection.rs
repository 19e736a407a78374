//! Selection overlay helpers.
//!
//! These helpers keep selection math testable without depending on Canvas APIs.

use crate::layout::{visible_range, CellMetrics, PageSize, ScrollState};
use crate::types::{CellPos, LogicalExtent, SelectionRect};

/// Pixel rectangle in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }
}

/// The visible part of a selection and which of its edges are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOverlay {
    /// Clipped selection body in the data region
    pub body: PixelRect,
    /// Highlight strip in the row-heading column
    pub row_strip: PixelRect,
    /// Highlight strip in the column-heading band
    pub column_strip: PixelRect,
    pub draw_top: bool,
    pub draw_bottom: bool,
    pub draw_left: bool,
    pub draw_right: bool,
}

pub(crate) fn to_px(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Screen coordinate of the leading edge of logical index `index`.
pub(crate) fn edge(origin: u32, cell: u32, offset: u32, index: u32) -> i32 {
    to_px(i64::from(origin) + (i64::from(index) - i64::from(offset)) * i64::from(cell))
}

/// Screen rectangle of one data cell.
pub fn cell_rect(cell: CellPos, metrics: &CellMetrics, scroll: &ScrollState) -> PixelRect {
    PixelRect {
        x: edge(
            metrics.row_heading_width,
            metrics.cell_width,
            scroll.column_offset,
            cell.column,
        ),
        y: edge(
            metrics.cell_height,
            metrics.cell_height,
            scroll.row_offset,
            cell.row,
        ),
        w: to_px(i64::from(metrics.cell_width)),
        h: to_px(i64::from(metrics.cell_height)),
    }
}

/// Clip a selection to the drawn window and convert it to pixels.
///
/// Returns `None` when no selected cell is in the window. Border flags are
/// set only for selection edges that fall inside the window.
pub fn selection_overlay(
    selection: SelectionRect,
    metrics: &CellMetrics,
    scroll: &ScrollState,
    page: PageSize,
    extent: LogicalExtent,
) -> Option<SelectionOverlay> {
    let cols = visible_range(scroll.column_offset, page.columns, extent.columns);
    let rows = visible_range(scroll.row_offset, page.rows, extent.rows);

    let cx0 = selection.x0.max(cols.start);
    let cx1 = selection.x1.min(cols.end);
    let ry0 = selection.y0.max(rows.start);
    let ry1 = selection.y1.min(rows.end);
    if cx0 >= cx1 || ry0 >= ry1 {
        return None;
    }

    let x = edge(metrics.row_heading_width, metrics.cell_width, scroll.column_offset, cx0);
    let right = edge(metrics.row_heading_width, metrics.cell_width, scroll.column_offset, cx1);
    let y = edge(metrics.cell_height, metrics.cell_height, scroll.row_offset, ry0);
    let bottom = edge(metrics.cell_height, metrics.cell_height, scroll.row_offset, ry1);
    let body = PixelRect {
        x,
        y,
        w: right.saturating_sub(x),
        h: bottom.saturating_sub(y),
    };

    Some(SelectionOverlay {
        body,
        row_strip: PixelRect {
            x: 0,
            y,
            w: to_px(i64::from(metrics.row_heading_width)),
            h: body.h,
        },
        column_strip: PixelRect {
            x,
            y: 0,
            w: body.w,
            h: to_px(i64::from(metrics.cell_height)),
        },
        draw_top: selection.y0 >= scroll.row_offset,
        draw_bottom: selection.y1 <= rows.end,
        draw_left: selection.x0 >= scroll.column_offset,
        draw_right: selection.x1 <= cols.end,
    })
}
