//! Common test utilities for grid view tests.
//!
//! All helpers use fixed metrics (cells 20x20 px, row headings 30 px wide)
//! so pixel coordinates in tests are easy to compute by hand.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]

use matview::layout::CellMetrics;
use matview::types::{CellPos, Matrix, Modifiers, PointerEvent, ViewValue};
use matview::{GridView, Source};

pub const CELL: u32 = 20;
pub const ROW_HEADING: u32 = 30;

// ============================================================================
// View builders
// ============================================================================

pub fn metrics() -> CellMetrics {
    CellMetrics::new(CELL, CELL, ROW_HEADING).unwrap()
}

/// An int64 matrix whose element at (row, column) is `row * 1000 + column`.
pub fn numbered_matrix(columns: u32, rows: u32) -> Matrix {
    let values = (0..rows)
        .flat_map(|r| (0..columns).map(move |c| i64::from(r) * 1000 + i64::from(c)))
        .collect();
    Matrix::from_i64(rows, columns, values).unwrap()
}

/// A matrix view with fixed metrics, resized to `width` x `height`, events drained.
pub fn matrix_view(columns: u32, rows: u32, width: u32, height: u32) -> GridView {
    let mut view =
        GridView::with_metrics(Source::from(numbered_matrix(columns, rows)), metrics()).unwrap();
    view.on_resize(width, height);
    view.take_events();
    view
}

/// A struct view over `value` with fixed metrics and a 400x300 viewport.
pub fn struct_view(value: ViewValue) -> GridView {
    let mut view = GridView::with_metrics(Source::for_value(value), metrics()).unwrap();
    view.on_resize(400, 300);
    view.take_events();
    view
}

// ============================================================================
// Pointer helpers (unscrolled view)
// ============================================================================

/// Pixel at the center of a data cell, assuming zero scroll offsets.
pub fn cell_px(column: u32, row: u32) -> (i32, i32) {
    (
        (ROW_HEADING + column * CELL + CELL / 2) as i32,
        (CELL + row * CELL + CELL / 2) as i32,
    )
}

pub fn row_heading_px(row: u32) -> (i32, i32) {
    ((ROW_HEADING / 2) as i32, (CELL + row * CELL + CELL / 2) as i32)
}

pub fn column_heading_px(column: u32) -> (i32, i32) {
    ((ROW_HEADING + column * CELL + CELL / 2) as i32, (CELL / 2) as i32)
}

pub fn at(px: (i32, i32)) -> PointerEvent {
    PointerEvent::at(px.0, px.1)
}

pub fn at_time(px: (i32, i32), time_ms: f64) -> PointerEvent {
    PointerEvent::at(px.0, px.1).at_time(time_ms)
}

pub fn shift_at(px: (i32, i32)) -> PointerEvent {
    PointerEvent::at(px.0, px.1).with_modifiers(Modifiers::SHIFT)
}

/// Press on `from`, drag to `to`, release on `to`.
pub fn drag_select(view: &mut GridView, from: CellPos, to: CellPos) {
    view.on_pointer_press(&at(cell_px(from.column, from.row)));
    view.on_pointer_drag(&at(cell_px(to.column, to.row)));
    view.on_pointer_release(&at(cell_px(to.column, to.row)));
}
