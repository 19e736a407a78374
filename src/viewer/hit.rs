//! Pixel to cell mapping.

use crate::layout::{CellMetrics, ScrollState};
use crate::types::{CellPos, LogicalExtent};

/// What a pixel coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A regular cell
    Cell(CellPos),
    /// A row heading at the given row index
    RowHeading(u32),
    /// A column heading at the given column index
    ColumnHeading(u32),
    /// The corner heading (select all)
    Corner,
    /// Outside the logical extent
    None,
}

/// Logical index under a pixel along one axis, before range checks.
///
/// Uses floor division so pixels left of or above the data origin map to
/// negative indices.
pub(crate) fn axis_index(px: i32, origin: u32, cell_size: u32, offset: u32) -> i64 {
    (i64::from(px) - i64::from(origin)).div_euclid(i64::from(cell_size.max(1))) + i64::from(offset)
}

fn within(index: i64, count: u32) -> Option<u32> {
    u32::try_from(index).ok().filter(|i| *i < count)
}

/// Map a viewport pixel to a logical address.
///
/// Pure: the same inputs always give the same target, so stale coordinates
/// delivered after a resize simply resolve against the current layout.
pub fn hit_test(
    x: i32,
    y: i32,
    metrics: &CellMetrics,
    scroll: &ScrollState,
    extent: LogicalExtent,
) -> HitTarget {
    let in_heading_row = y < i32::try_from(metrics.cell_height).unwrap_or(i32::MAX);
    let in_heading_column = x < i32::try_from(metrics.row_heading_width).unwrap_or(i32::MAX);

    let row = || {
        within(
            axis_index(y, metrics.cell_height, metrics.cell_height, scroll.row_offset),
            extent.rows,
        )
    };
    let column = || {
        within(
            axis_index(
                x,
                metrics.row_heading_width,
                metrics.cell_width,
                scroll.column_offset,
            ),
            extent.columns,
        )
    };

    match (in_heading_column, in_heading_row) {
        (true, true) => HitTarget::Corner,
        (true, false) => row().map_or(HitTarget::None, HitTarget::RowHeading),
        (false, true) => column().map_or(HitTarget::None, HitTarget::ColumnHeading),
        (false, false) => match (column(), row()) {
            (Some(c), Some(r)) => HitTarget::Cell(CellPos::new(c, r)),
            _ => HitTarget::None,
        },
    }
}
