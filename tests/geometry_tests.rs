//! Geometry engine tests: page sizes, offset clamping and scrollbar fractions.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use matview::layout::{
    clamp_offset, compute_page_size, max_offset, scrollbar_fraction, CellMetrics, PageSize,
    ScrollbarPosition, Viewport,
};
use matview::types::{Axis, LogicalExtent};
use matview::{MatviewError, MonospaceMeasure};
use test_case::test_case;

// =============================================================================
// Page size
// =============================================================================

#[test]
fn page_size_is_capped_at_extent() {
    // 10x10 grid, 20 px cells, 30 px row headings, 250x250 viewport:
    // 11 whole columns would fit, only 10 exist.
    let page = compute_page_size(
        &Viewport::new(250, 250),
        &common::metrics(),
        LogicalExtent::new(10, 10),
    );
    assert_eq!(page, PageSize { columns: 10, rows: 10 });
    assert_eq!(scrollbar_fraction(0, page.columns, 10), ScrollbarPosition::FULL);
    assert_eq!(scrollbar_fraction(0, page.rows, 10), ScrollbarPosition::FULL);
}

#[test_case(0, 0 => PageSize { columns: 0, rows: 0 } ; "empty viewport")]
#[test_case(30, 20 => PageSize { columns: 0, rows: 0 } ; "headings only")]
#[test_case(49, 39 => PageSize { columns: 0, rows: 0 } ; "one pixel short of a cell")]
#[test_case(50, 40 => PageSize { columns: 1, rows: 1 } ; "exactly one cell")]
#[test_case(1030, 2020 => PageSize { columns: 50, rows: 100 } ; "large viewport")]
fn page_size_counts_whole_cells(width: u32, height: u32) -> PageSize {
    compute_page_size(
        &Viewport::new(width, height),
        &common::metrics(),
        LogicalExtent::new(1000, 1000),
    )
}

#[test]
fn page_size_of_empty_grid_is_zero() {
    let page = compute_page_size(
        &Viewport::new(500, 500),
        &common::metrics(),
        LogicalExtent::new(0, 0),
    );
    assert_eq!(page, PageSize::default());
}

// =============================================================================
// Offset clamping
// =============================================================================

#[test_case(-1_000_000, 100, 10 ; "far negative")]
#[test_case(-1, 100, 10 ; "just negative")]
#[test_case(0, 100, 10 ; "zero")]
#[test_case(90, 100, 10 ; "at maximum")]
#[test_case(91, 100, 10 ; "just past maximum")]
#[test_case(i64::MAX, 100, 10 ; "huge")]
#[test_case(5, 3, 10 ; "page larger than extent")]
#[test_case(5, 0, 0 ; "empty")]
fn clamped_offset_stays_in_range(offset: i64, extent: u32, page: u32) {
    let clamped = clamp_offset(offset, extent, page);
    assert!(clamped <= max_offset(extent, page));
    assert!(clamped <= extent.saturating_sub(page));
}

#[test]
fn clamp_keeps_valid_offsets() {
    for offset in 0..=90 {
        assert_eq!(clamp_offset(offset, 100, 10), u32::try_from(offset).unwrap());
    }
}

// =============================================================================
// Scrollbar fractions
// =============================================================================

#[test_case(0, 10, 100 => (0.0, 0.1) ; "top")]
#[test_case(90, 10, 100 => (0.9, 1.0) ; "bottom")]
#[test_case(45, 10, 100 => (0.45, 0.55) ; "middle")]
#[test_case(0, 100, 100 => (0.0, 1.0) ; "everything visible")]
#[test_case(0, 0, 0 => (0.0, 1.0) ; "empty grid")]
fn scrollbar_fraction_tracks_offset(offset: u32, page: u32, extent: u32) -> (f64, f64) {
    let pos = scrollbar_fraction(offset, page, extent);
    ((pos.start * 100.0).round() / 100.0, (pos.end * 100.0).round() / 100.0)
}

// =============================================================================
// Cell metrics
// =============================================================================

#[test]
fn zero_metrics_are_rejected() {
    assert!(matches!(
        CellMetrics::new(20, 0, 30),
        Err(MatviewError::InvalidMetrics(_))
    ));
    assert!(CellMetrics::new(0, 20, 30).is_err());
    assert!(CellMetrics::new(20, 20, 0).is_err());
}

#[test]
fn measured_metrics_add_padding() {
    // Widest text "-20.250000" is 10 chars, the widest row label "1" is 1 char.
    let matrix = matview::Matrix::from_f64(2, 2, vec![1.5, -20.25, 3.0, 4.0]).unwrap();
    let source = matview::Source::from(matrix);
    let metrics = CellMetrics::measure(
        &source,
        &MonospaceMeasure::default(),
        &matview::GridStyle::default(),
    )
    .unwrap();
    assert_eq!(metrics.cell_width, 10 * 7 + 10);
    assert_eq!(metrics.cell_height, 12 + 10);
    assert_eq!(metrics.row_heading_width, 7 + 10);
    assert_eq!(metrics.cell_size(Axis::Horizontal), metrics.cell_width);
    assert_eq!(metrics.data_origin(Axis::Vertical), metrics.cell_height);
}

// =============================================================================
// Resize through the grid view
// =============================================================================

#[test]
fn shrinking_viewport_keeps_offsets_valid() {
    let mut view = common::matrix_view(50, 50, 250, 250);
    view.on_scroll(Axis::Vertical, matview::viewer::ScrollGesture::MoveTo(1.0));
    assert_eq!(view.scroll().row_offset, 50 - view.page_size().rows);

    // Growing the viewport shrinks the maximum offset; the offset follows.
    view.on_resize(250, 2000);
    assert_eq!(view.page_size().rows, 50);
    assert_eq!(view.scroll().row_offset, 0);
}
