//! Values that can be opened in a view.
//!
//! A [`ViewValue`] is either a 2-D [`Matrix`] (shown cell by cell) or a
//! structured value (shown as one row per entry). Nested containers, matrices
//! and records are actionable: activating them opens another view.

use serde::{Deserialize, Serialize};

use crate::error::{MatviewError, Result};

/// Element storage of a matrix, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "lowercase")]
pub enum MatrixData {
    Float64(Vec<f64>),
    Int64(Vec<i64>),
}

impl MatrixData {
    pub fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::Int64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wire shape of a matrix before its dimensions are validated.
#[derive(Deserialize)]
struct MatrixRepr {
    rows: i64,
    columns: i64,
    data: MatrixData,
}

/// A dense 2-D numeric matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct Matrix {
    rows: u32,
    columns: u32,
    data: MatrixData,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatviewError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Self::with_signed_shape(repr.rows, repr.columns, repr.data)
    }
}

impl Matrix {
    /// # Errors
    /// Returns [`MatviewError::ShapeMismatch`] when `data` does not hold `rows * columns` values.
    pub fn new(rows: u32, columns: u32, data: MatrixData) -> Result<Self> {
        let expected = (rows as usize).checked_mul(columns as usize);
        if expected != Some(data.len()) {
            return Err(MatviewError::ShapeMismatch {
                rows,
                columns,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Build a matrix from a shape reported by an untyped host.
    ///
    /// # Errors
    /// Rejects negative dimensions before checking the data length.
    pub fn with_signed_shape(rows: i64, columns: i64, data: MatrixData) -> Result<Self> {
        let extent = crate::types::LogicalExtent::from_signed(columns, rows)?;
        Self::new(extent.rows, extent.columns, data)
    }

    /// # Errors
    /// See [`Matrix::new`].
    pub fn from_f64(rows: u32, columns: u32, values: Vec<f64>) -> Result<Self> {
        Self::new(rows, columns, MatrixData::Float64(values))
    }

    /// # Errors
    /// See [`Matrix::new`].
    pub fn from_i64(rows: u32, columns: u32, values: Vec<i64>) -> Result<Self> {
        Self::new(rows, columns, MatrixData::Int64(values))
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn data(&self) -> &MatrixData {
        &self.data
    }

    pub fn dtype(&self) -> &'static str {
        match self.data {
            MatrixData::Float64(_) => "float64",
            MatrixData::Int64(_) => "int64",
        }
    }

    fn index(&self, row: u32, column: u32) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    /// Display text of one element: six decimals for floats, plain integers otherwise.
    pub fn cell_text(&self, row: u32, column: u32) -> Option<String> {
        let idx = self.index(row, column)?;
        match &self.data {
            MatrixData::Float64(v) => v.get(idx).map(|x| format_float(*x)),
            MatrixData::Int64(v) => v.get(idx).map(ToString::to_string),
        }
    }

    /// Display texts of the smallest and largest elements.
    ///
    /// With fixed-precision formatting the widest text is always one of the
    /// extremes, so measuring these avoids formatting every element.
    pub fn extreme_texts(&self) -> Vec<String> {
        match &self.data {
            MatrixData::Float64(v) if !v.is_empty() => {
                let min = v.iter().copied().fold(f64::INFINITY, f64::min);
                let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let mut texts = vec![format_float(min), format_float(max)];
                if v.iter().any(|x| x.is_nan()) {
                    texts.push(format_float(f64::NAN));
                }
                texts
            }
            MatrixData::Int64(v) => match (v.iter().min(), v.iter().max()) {
                (Some(min), Some(max)) => vec![min.to_string(), max.to_string()],
                _ => Vec::new(),
            },
            MatrixData::Float64(_) => Vec::new(),
        }
    }

    /// Short description used by struct views and tab titles.
    pub fn summary(&self) -> String {
        format!("({}, {}) {} matrix", self.rows, self.columns, self.dtype())
    }
}

fn format_float(x: f64) -> String {
    format!("{x:.6}")
}

/// A named record with ordered fields (the generic "object" case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub type_name: String,
    pub fields: Vec<(String, ViewValue)>,
}

/// Any value that can be shown in a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ViewValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Matrix(Matrix),
    List(Vec<ViewValue>),
    Tuple(Vec<ViewValue>),
    Set(Vec<ViewValue>),
    Map(Vec<(ViewValue, ViewValue)>),
    Record(Record),
}

impl ViewValue {
    /// Name of the value's kind as shown in summaries and titles.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Matrix(_) => "matrix",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Record(r) => &r.type_name,
        }
    }

    /// Whether the value can be opened in a nested view.
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            Self::Matrix(_)
                | Self::List(_)
                | Self::Tuple(_)
                | Self::Set(_)
                | Self::Map(_)
                | Self::Record(_)
        )
    }

    /// One-line description shown in a struct view's value column.
    pub fn summary(&self) -> String {
        match self {
            Self::None => "None".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) if s.contains('\n') => {
                format!("multiline string with {} characters", s.chars().count())
            }
            Self::Text(s) => s.clone(),
            Self::Bytes(b) => format!("b\"{}\"", b.escape_ascii()),
            Self::Matrix(m) => m.summary(),
            Self::List(items) | Self::Tuple(items) | Self::Set(items) => {
                format!("{} with {} elements", self.kind_name(), items.len())
            }
            Self::Map(entries) => format!("map with {} elements", entries.len()),
            Self::Record(r) => r.type_name.clone(),
        }
    }

    /// Text used when the value labels a row (map keys).
    pub fn label(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            other => other.summary(),
        }
    }

    /// Convert a JSON document.
    ///
    /// Arrays whose elements are equally long, non-empty arrays of numbers
    /// become matrices; other arrays become lists and objects become maps.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::None,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => match json_matrix(&items) {
                Some(matrix) => Self::Matrix(matrix),
                None => Self::List(items.into_iter().map(Self::from_json).collect()),
            },
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (Self::Text(k), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Parse a JSON string with [`ViewValue::from_json`].
    ///
    /// # Errors
    /// Returns [`MatviewError::Json`] when the text is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_json(value))
    }
}

fn json_matrix(rows: &[serde_json::Value]) -> Option<Matrix> {
    let first = rows.first()?.as_array()?;
    let columns = first.len();
    if columns == 0 {
        return None;
    }
    let mut numbers = Vec::with_capacity(rows.len() * columns);
    for row in rows {
        let row = row.as_array()?;
        if row.len() != columns {
            return None;
        }
        for cell in row {
            let serde_json::Value::Number(n) = cell else {
                return None;
            };
            numbers.push(n.clone());
        }
    }

    let rows_u32 = u32::try_from(rows.len()).ok()?;
    let columns_u32 = u32::try_from(columns).ok()?;
    let ints: Option<Vec<i64>> = numbers.iter().map(serde_json::Number::as_i64).collect();
    let data = match ints {
        Some(ints) => MatrixData::Int64(ints),
        None => MatrixData::Float64(
            numbers
                .iter()
                .map(|n| n.as_f64().unwrap_or(f64::NAN))
                .collect(),
        ),
    };
    Matrix::new(rows_u32, columns_u32, data).ok()
}
