//! Cell sources: the data side of a grid view.
//!
//! A [`CellSource`] answers everything the grid view needs to know about its
//! data: how many rows and columns exist, what each visible cell and heading
//! says, and which cells open a nested view. The set of adapters is closed
//! ([`Source`]); new kinds of data are added by implementing the trait.

mod matrix;
mod structured;

pub use matrix::MatrixSource;
pub use structured::StructSource;

use serde::Serialize;

use crate::types::{LogicalExtent, Matrix, ViewValue};

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font metric service provided by the host.
pub trait TextMeasure {
    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Font size (line height) in pixels.
    fn font_size(&self) -> u32;

    /// Rendered width of a heading label, for hosts that draw headings in a
    /// different font than cells.
    fn heading_text_width(&self, text: &str) -> u32 {
        self.text_width(text)
    }
}

/// Fixed-pitch measurement for headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasure {
    pub char_width: u32,
    pub font_size: u32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            char_width: 7,
            font_size: 12,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> u32 {
        u32::try_from(text.chars().count())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.char_width)
    }

    fn font_size(&self) -> u32 {
        self.font_size
    }
}

/// Widest rendering among `texts`, 0 when empty.
pub(crate) fn max_width<'a>(
    measure: &dyn TextMeasure,
    texts: impl IntoIterator<Item = &'a str>,
) -> u32 {
    texts
        .into_iter()
        .map(|t| measure.text_width(t))
        .max()
        .unwrap_or(0)
}

/// Widest heading rendering among `labels`, 0 when empty.
pub(crate) fn max_heading_width<'a>(
    measure: &dyn TextMeasure,
    labels: impl IntoIterator<Item = &'a str>,
) -> u32 {
    labels
        .into_iter()
        .map(|t| measure.heading_text_width(t))
        .max()
        .unwrap_or(0)
}

/// Data adapter consumed by the grid view.
///
/// Width queries are made once, when the view is built.
pub trait CellSource {
    fn extent(&self) -> LogicalExtent;

    /// Default tab title for a view over this source.
    fn title(&self) -> String;

    /// Label drawn in the top-left corner.
    fn corner_label(&self) -> &str {
        ""
    }

    fn row_heading_label(&self, row: u32) -> String;

    fn column_heading_label(&self, column: u32) -> String;

    fn cell_text(&self, column: u32, row: u32) -> String;

    /// Whether the cell holds a value that can be opened in its own view.
    fn cell_is_actionable(&self, column: u32, row: u32) -> bool;

    /// The value behind an actionable cell.
    fn cell_value(&self, _column: u32, _row: u32) -> Option<ViewValue> {
        None
    }

    /// Alignment of cell texts and row headings.
    fn text_align(&self) -> TextAlign {
        TextAlign::Left
    }

    fn max_cell_text_width(&self, measure: &dyn TextMeasure) -> u32;

    fn max_row_heading_width(&self, measure: &dyn TextMeasure) -> u32;
}

/// The closed set of adapters a container can open.
#[derive(Debug, Clone)]
pub enum Source {
    Matrix(MatrixSource),
    Struct(StructSource),
}

impl Source {
    /// Pick the adapter for a value: matrices get a cell grid, everything
    /// else one row per entry.
    pub fn for_value(value: ViewValue) -> Self {
        match value {
            ViewValue::Matrix(matrix) => Self::Matrix(MatrixSource::new(matrix)),
            other => Self::Struct(StructSource::new(other)),
        }
    }

    fn inner(&self) -> &dyn CellSource {
        match self {
            Self::Matrix(s) => s,
            Self::Struct(s) => s,
        }
    }
}

impl From<Matrix> for Source {
    fn from(matrix: Matrix) -> Self {
        Self::Matrix(MatrixSource::new(matrix))
    }
}

impl CellSource for Source {
    fn extent(&self) -> LogicalExtent {
        self.inner().extent()
    }

    fn title(&self) -> String {
        self.inner().title()
    }

    fn corner_label(&self) -> &str {
        self.inner().corner_label()
    }

    fn row_heading_label(&self, row: u32) -> String {
        self.inner().row_heading_label(row)
    }

    fn column_heading_label(&self, column: u32) -> String {
        self.inner().column_heading_label(column)
    }

    fn cell_text(&self, column: u32, row: u32) -> String {
        self.inner().cell_text(column, row)
    }

    fn cell_is_actionable(&self, column: u32, row: u32) -> bool {
        self.inner().cell_is_actionable(column, row)
    }

    fn cell_value(&self, column: u32, row: u32) -> Option<ViewValue> {
        self.inner().cell_value(column, row)
    }

    fn text_align(&self) -> TextAlign {
        self.inner().text_align()
    }

    fn max_cell_text_width(&self, measure: &dyn TextMeasure) -> u32 {
        self.inner().max_cell_text_width(measure)
    }

    fn max_row_heading_width(&self, measure: &dyn TextMeasure) -> u32 {
        self.inner().max_row_heading_width(measure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_width_counts_chars() {
        let m = MonospaceMeasure::default();
        assert_eq!(m.text_width("abc"), 21);
        assert_eq!(m.text_width("ü"), 7);
        assert_eq!(max_width(&m, ["a", "abcd", ""]), 28);
        assert_eq!(max_width(&m, []), 0);
    }

    #[test]
    fn for_value_picks_adapter() {
        let Ok(matrix) = Matrix::from_i64(1, 1, vec![7]) else {
            return;
        };
        assert!(matches!(
            Source::for_value(ViewValue::Matrix(matrix)),
            Source::Matrix(_)
        ));
        assert!(matches!(
            Source::for_value(ViewValue::List(vec![])),
            Source::Struct(_)
        ));
    }
}
