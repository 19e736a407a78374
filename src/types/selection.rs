use serde::Serialize;

use super::{CellPos, LogicalExtent};

/// Half-open rectangular selection in logical cell coordinates.
///
/// `x1` and `y1` are exclusive, so a single cell at (c, r) is `{c, r, c+1, r+1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl SelectionRect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A single cell
    pub const fn cell(cell: CellPos) -> Self {
        Self::new(
            cell.column,
            cell.row,
            cell.column.saturating_add(1),
            cell.row.saturating_add(1),
        )
    }

    /// Every cell of a full row
    pub const fn row(row: u32, extent: LogicalExtent) -> Self {
        Self::new(0, row, extent.columns, row.saturating_add(1))
    }

    /// Every cell of a full column
    pub const fn column(column: u32, extent: LogicalExtent) -> Self {
        Self::new(column, 0, column.saturating_add(1), extent.rows)
    }

    /// The whole grid (corner click)
    pub const fn all(extent: LogicalExtent) -> Self {
        Self::new(0, 0, extent.columns, extent.rows)
    }

    /// The smallest rectangle covering both cells.
    pub fn spanning(a: CellPos, b: CellPos) -> Self {
        Self::new(
            a.column.min(b.column),
            a.row.min(b.row),
            a.column.max(b.column).saturating_add(1),
            a.row.max(b.row).saturating_add(1),
        )
    }

    pub const fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub const fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    pub const fn contains(&self, cell: CellPos) -> bool {
        cell.column >= self.x0 && cell.column < self.x1 && cell.row >= self.y0 && cell.row < self.y1
    }

    pub const fn is_single_cell(&self) -> bool {
        self.width() == 1 && self.height() == 1
    }
}

/// Where a drag started.
///
/// Row and column anchors come from presses on a heading and constrain the
/// drag to whole rows or whole columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAnchor {
    /// Press on an ordinary cell
    Cell(CellPos),
    /// Press on a row heading
    Row(u32),
    /// Press on a column heading
    Column(u32),
}

impl DragAnchor {
    /// Whether dragging may scroll horizontally.
    pub const fn scrolls_columns(self) -> bool {
        !matches!(self, Self::Row(_))
    }

    /// Whether dragging may scroll vertically.
    pub const fn scrolls_rows(self) -> bool {
        !matches!(self, Self::Column(_))
    }
}

/// Visual configuration for a grid view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    /// Horizontal text padding inside a cell, in pixels
    pub cell_hpadding: u32,
    /// Vertical text padding inside a cell, in pixels
    pub cell_vpadding: u32,
    pub background_color: String,
    pub heading_color: String,
    pub cell_outline_color: String,
    pub text_color: String,
    /// Text color of cells that open a nested view
    pub actionable_text_color: String,
    /// Text color of an actionable cell under the pointer
    pub actionable_hover_color: String,
    pub selection_color: String,
    pub selection_heading_color: String,
    pub selection_border_color: String,
    pub selection_border_width: u32,
    /// Minimum time between two autoscroll steps while dragging
    pub autoscroll_delay_ms: f64,
    /// Unit steps per wheel notch
    pub wheel_step: i32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            cell_hpadding: 5,
            cell_vpadding: 5,
            background_color: "#ffffff".to_string(),
            heading_color: "#dddddd".to_string(),
            cell_outline_color: "#bbbbbb".to_string(),
            text_color: "#000000".to_string(),
            actionable_text_color: "#000077".to_string(),
            actionable_hover_color: "#0000ff".to_string(),
            selection_color: "#bbbbff".to_string(),
            selection_heading_color: "#aaaaaa".to_string(),
            selection_border_color: "#000000".to_string(),
            selection_border_width: 2,
            autoscroll_delay_ms: 100.0,
            wheel_step: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_normalizes_corners() {
        let rect = SelectionRect::spanning(CellPos::new(4, 5), CellPos::new(2, 2));
        assert_eq!(rect, SelectionRect::new(2, 2, 5, 6));
        assert_eq!((rect.width(), rect.height()), (3, 4));
        assert!(rect.contains(CellPos::new(4, 5)));
        assert!(!rect.contains(CellPos::new(5, 5)));
    }

    #[test]
    fn heading_rects_cover_the_extent() {
        let extent = LogicalExtent::new(10, 8);
        assert_eq!(SelectionRect::row(3, extent), SelectionRect::new(0, 3, 10, 4));
        assert_eq!(SelectionRect::column(2, extent), SelectionRect::new(2, 0, 3, 8));
        assert_eq!(SelectionRect::all(extent), SelectionRect::new(0, 0, 10, 8));
    }

    #[test]
    fn anchors_constrain_autoscroll_axes() {
        assert!(!DragAnchor::Row(1).scrolls_columns());
        assert!(DragAnchor::Row(1).scrolls_rows());
        assert!(!DragAnchor::Column(1).scrolls_rows());
        assert!(DragAnchor::Cell(CellPos::new(0, 0)).scrolls_columns());
    }
}
