use super::{max_width, CellSource, TextAlign, TextMeasure};
use crate::types::{LogicalExtent, Matrix};

/// Shows a 2-D matrix one element per cell, headed by row and column indices.
#[derive(Debug, Clone)]
pub struct MatrixSource {
    matrix: Matrix,
    title: Option<String>,
}

impl MatrixSource {
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl CellSource for MatrixSource {
    fn extent(&self) -> LogicalExtent {
        LogicalExtent::new(self.matrix.columns(), self.matrix.rows())
    }

    fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            format!(
                "{} x {} {}",
                self.matrix.rows(),
                self.matrix.columns(),
                self.matrix.dtype()
            )
        })
    }

    fn row_heading_label(&self, row: u32) -> String {
        row.to_string()
    }

    fn column_heading_label(&self, column: u32) -> String {
        column.to_string()
    }

    fn cell_text(&self, column: u32, row: u32) -> String {
        self.matrix.cell_text(row, column).unwrap_or_default()
    }

    fn cell_is_actionable(&self, _column: u32, _row: u32) -> bool {
        false
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Right
    }

    fn max_cell_text_width(&self, measure: &dyn TextMeasure) -> u32 {
        let last_column = self.matrix.columns().saturating_sub(1).to_string();
        let extremes = self.matrix.extreme_texts();
        max_width(measure, extremes.iter().map(String::as_str))
            .max(measure.heading_text_width(&last_column))
    }

    fn max_row_heading_width(&self, measure: &dyn TextMeasure) -> u32 {
        let last_row = self.matrix.rows().saturating_sub(1).to_string();
        measure.heading_text_width(&last_row)
    }
}
