//! Logical grid coordinates.

use serde::Serialize;

use crate::error::{MatviewError, Result};

/// Scroll/layout axis. Horizontal moves through columns, vertical through rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Total addressable cells of a view, fixed once the view is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LogicalExtent {
    pub columns: u32,
    pub rows: u32,
}

impl LogicalExtent {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Build an extent from signed counts reported by a data source.
    ///
    /// # Errors
    /// Returns [`MatviewError::InvalidExtent`] for negative or oversized counts.
    pub fn from_signed(columns: i64, rows: i64) -> Result<Self> {
        match (u32::try_from(columns), u32::try_from(rows)) {
            (Ok(columns), Ok(rows)) => Ok(Self { columns, rows }),
            _ => Err(MatviewError::InvalidExtent { rows, columns }),
        }
    }

    /// Number of cells along an axis.
    pub const fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.columns,
            Axis::Vertical => self.rows,
        }
    }

    /// True when the grid has no cells at all.
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    pub const fn contains(&self, cell: CellPos) -> bool {
        cell.column < self.columns && cell.row < self.rows
    }
}

/// A single logical cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellPos {
    pub column: u32,
    pub row: u32,
}

impl CellPos {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}
